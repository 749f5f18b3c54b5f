use std::fmt;

/// Line break placed between output rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// A single `\n`.
    #[default]
    Unix,
    /// `\n\r`, the sequence popdist users have always received from the
    /// `--windows` switch.
    Windows,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Unix => "\n",
            LineEnding::Windows => "\n\r",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Unix => write!(f, "unix"),
            LineEnding::Windows => write!(f, "windows"),
        }
    }
}

/// Formatting applied when a merged table is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub line_ending: LineEnding,
    pub separator: String,
    /// Wraps every cell on both sides when set.
    pub quote: Option<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Unix,
            separator: "\t".to_string(),
            quote: None,
        }
    }
}

impl MergeOptions {
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }
}

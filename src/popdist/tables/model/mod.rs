/// A single line of a report segment: the row label left of the pipe and
/// the whitespace separated values to its right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(label: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            label: label.into(),
            fields,
        }
    }
}

/// One horizontal slice of the report, printed below its own header and
/// dashed rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub rows: Vec<Row>,
}

impl Segment {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.label.as_str())
    }
}

/// A parsed report: the title token from the first header and every segment
/// in the order it appears in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub segments: Vec<Segment>,
}

/// The merged, rectangular table.
///
/// `labels` doubles as the header row (after the `title` corner cell) and as
/// the first cell of each row in `rows`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub title: String,
    pub labels: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// The header line: corner title followed by every label.
    pub fn header(&self) -> Vec<&str> {
        let mut header = Vec::with_capacity(self.labels.len() + 1);
        header.push(self.title.as_str());
        header.extend(self.labels.iter().map(String::as_str));
        header
    }

    /// Every output line, header included, as borrowed cells.
    pub fn lines(&self) -> Vec<Vec<&str>> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.header());
        for (label, fields) in self.labels.iter().zip(&self.rows) {
            let mut cells = Vec::with_capacity(fields.len() + 1);
            cells.push(label.as_str());
            cells.extend(fields.iter().map(String::as_str));
            lines.push(cells);
        }
        lines
    }
}

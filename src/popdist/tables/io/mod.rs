pub mod delimited_write;
pub mod report_read;

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where a report is read from or a merged table is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Standard input when reading, standard output when writing.
    Stdio,
    Path(PathBuf),
}

impl FromStr for Endpoint {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "-" {
            Ok(Endpoint::Stdio)
        } else {
            Ok(Endpoint::Path(PathBuf::from(value)))
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Stdio => write!(f, "-"),
            Endpoint::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

pub mod convert;
pub mod error;
pub mod io;
pub mod merge;
pub mod model;
pub mod options;

pub use error::{Result, ToolError};

pub mod collapse;
pub mod config;
pub mod error;
pub mod format;
pub mod parse;

pub use collapse::{collapse, collapse_counted, runs, Run, Runs};
pub use error::{CollapseError, ParseError};
pub use format::OutputFormat;

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

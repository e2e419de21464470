//! Output sinks for check outcomes
//!
//! # Modules
//!
//! - [`formatter`]: `Formatter` trait shared by all sinks
//! - [`console`]: Fixed-width lines written as outcomes arrive
//! - [`report`]: HTML report written on close when anything needs attention

pub mod console;
pub mod formatter;
pub mod report;

pub use console::ConsoleFormatter;
pub use formatter::Formatter;
pub use report::ReportFormatter;

//! Version checking layer
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│   Checker   │────▶│ Formatters  │
//! │  (content)  │     │ (classify)  │     │  (output)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`outcome`]: `CheckOutcome` and its four kinds
//! - [`layout`]: Fixed column widths shared by all output lines of a run
//! - [`checker`]: Fetch, match and classify a single tool

pub mod checker;
pub mod layout;
pub mod outcome;

pub use checker::Checker;
pub use layout::Layout;
pub use outcome::{CheckOutcome, OutcomeKind};

//! Shared helpers for integration tests

pub mod documents;
pub mod output;

pub use documents::{Documents, tool_entry};
pub use output::SharedBuffer;

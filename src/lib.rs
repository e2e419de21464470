//! Checks the download pages of manually installed tools for new versions
//!
//! ```text
//! installed versions ─┐
//!                     ├─▶ UpdateNotifier ─▶ Checker (one per tool) ─▶ Formatters
//! tools catalog ──────┘                        │
//!                                              ▼
//!                                           Fetcher
//! ```

pub mod catalog;
pub mod check;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod notifier;

//! Tools catalog and installed-versions documents
//!
//! # Modules
//!
//! - [`types`]: `ToolDefinition`, `Catalog`, `InstalledVersions` and their JSON parsing
//! - [`source`]: `CatalogSource` trait and resource type selection
//! - [`sources`]: Concrete sources (local file, web URL, gist)

pub mod source;
pub mod sources;
pub mod types;

pub use source::{CatalogSource, ResourceType, create_source};
pub use types::{Catalog, InstalledVersions, ToolDefinition};

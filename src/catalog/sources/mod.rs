//! Catalog source implementations

pub mod gist;
pub mod local;
pub mod web;

pub use gist::GistSource;
pub use local::LocalSource;
pub use web::WebSource;

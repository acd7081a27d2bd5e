//! Folio Core - text file loading and viewer state
//!
//! This crate provides the file loader, the document model and the
//! platform-agnostic state behind the Folio terminal viewer. Rendering lives
//! in folio-cli.

pub mod app;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;

pub use app::{App, Layout, Mode};
pub use error::{LoadError, Result};
pub use export::{to_json, ExportDocument};
pub use loader::{load, load_normalized_lines, load_or_exit, load_raw, LoadStrategy};
pub use model::Document;

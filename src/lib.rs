//! colordinate - edit a Vim colorscheme as a YAML document
//!
//! This crate converts between the live highlight table of an editor, a
//! YAML document the user edits, and the `:highlight` commands that apply
//! the document back.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod scheme;
pub mod session;
pub mod tracing;

// Re-export commonly used types
pub use config::ColordinateConfig;
pub use host::{extract_current, HighlightHost, HighlightTable};
pub use scheme::{parse, to_document, to_script, ConfigModel, GroupConfig, ValidationError};
pub use session::Session;

//! Interfaces to the editor that owns the live highlight table
//!
//! The engine only reads through [`HighlightHost`] and only writes through
//! [`CommandSink`]; documents move in and out through [`DocumentBuffer`].
//! [`HighlightTable`] implements the first two in memory.

mod extract;
mod table;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scheme::Attribute;

pub use extract::{extract_current, Extractor};
pub use table::{HighlightEntry, HighlightTable};

/// Highlight group id as numbered by the host, starting at 1
pub type GroupId = u32;

/// Which rendering of a group's attributes to read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Gui,
    Cterm,
    Term,
}

impl RenderMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            RenderMode::Gui => "gui",
            RenderMode::Cterm => "cterm",
            RenderMode::Term => "term",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property of a group that can be queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Name,
    Fg,
    Bg,
    Attr(Attribute),
}

impl QueryKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            QueryKey::Name => "name",
            QueryKey::Fg => "fg",
            QueryKey::Bg => "bg",
            QueryKey::Attr(attr) => attr.as_str(),
        }
    }
}

/// Failures reported by the editor side
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("highlight query failed: {0}")]
    Query(String),
    #[error("highlight command failed: {0}")]
    Command(String),
    #[error("buffer access failed: {0}")]
    Buffer(String),
}

/// Read access to the host's highlight-group table
///
/// Mirrors `synIDtrans()` and `synIDattr()`.
pub trait HighlightHost {
    /// Canonical id `id` resolves to through links, `None` if there is no group `id`
    fn translate(&mut self, id: GroupId) -> Result<Option<GroupId>, HostError>;

    /// Attribute value as the host reports it: a name or color string, `"1"`
    /// for a set style toggle, and `""` when absent
    fn attribute(&mut self, id: GroupId, key: QueryKey, mode: RenderMode)
        -> Result<String, HostError>;
}

/// Executes highlight scripts in the host
pub trait CommandSink {
    fn execute(&mut self, script: &str) -> Result<(), HostError>;
}

/// The editable buffer a document is shown in
pub trait DocumentBuffer {
    fn read_text(&self) -> Result<String, HostError>;
    fn replace_text(&mut self, text: &str) -> Result<(), HostError>;
}

impl DocumentBuffer for String {
    fn read_text(&self) -> Result<String, HostError> {
        Ok(self.clone())
    }

    fn replace_text(&mut self, text: &str) -> Result<(), HostError> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

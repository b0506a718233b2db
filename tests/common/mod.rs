//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use colordinate::host::{GroupId, HighlightHost, HostError, QueryKey, RenderMode};
use colordinate::scheme::{Attribute, ConfigModel, GroupConfig};

/// The Normal/Comment model used across the suites
pub fn sample_model() -> ConfigModel {
    [
        (
            "Normal",
            GroupConfig::default().with_color(Some("#ffffff"), Some("#000000")),
        ),
        (
            "Comment",
            GroupConfig::default()
                .with_color(Some("#888888"), None)
                .with_style([Attribute::Italic])
                .with_links(["SpecialComment"]),
        ),
    ]
    .into_iter()
    .collect()
}

/// A richer model with aliases on several groups and attribute mixes
pub fn palette_model() -> ConfigModel {
    [
        (
            "Normal",
            GroupConfig::default()
                .with_color(Some("#d0d0d0"), Some("#1c1c1c"))
                .with_links(["NormalNC", "NormalFloat"]),
        ),
        (
            "Visual",
            GroupConfig::default()
                .with_color(None, Some("#3a3a3a"))
                .with_style([Attribute::Reverse]),
        ),
        (
            "Error",
            GroupConfig::default()
                .with_color(Some("#ff5f5f"), None)
                .with_style([Attribute::Bold, Attribute::Undercurl])
                .with_links(["ErrorMsg", "SpellBad"]),
        ),
        (
            "Title",
            GroupConfig::default().with_style([Attribute::Bold, Attribute::Underline]),
        ),
        ("Ignore", GroupConfig::default().with_links(["Conceal"])),
    ]
    .into_iter()
    .collect()
}

/// Wraps a host and records every query it forwards
pub struct CountingHost<H> {
    pub inner: H,
    pub queries: Vec<(GroupId, Option<QueryKey>)>,
}

impl<H> CountingHost<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            queries: Vec::new(),
        }
    }

    /// Ids that received any attribute query
    pub fn detail_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<_> = self
            .queries
            .iter()
            .filter(|(_, key)| key.is_some())
            .map(|(id, _)| *id)
            .collect();
        ids.dedup();
        ids
    }
}

impl<H: HighlightHost> HighlightHost for CountingHost<H> {
    fn translate(&mut self, id: GroupId) -> Result<Option<GroupId>, HostError> {
        self.queries.push((id, None));
        self.inner.translate(id)
    }

    fn attribute(
        &mut self,
        id: GroupId,
        key: QueryKey,
        mode: RenderMode,
    ) -> Result<String, HostError> {
        self.queries.push((id, Some(key)));
        self.inner.attribute(id, key, mode)
    }
}

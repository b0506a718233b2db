//! In-memory colorscheme model
//!
//! A [`ConfigModel`] is built in one go, either by [`parse`](super::parse)
//! or by live extraction, and replaced wholesale when the document changes.

use std::collections::HashMap;

use serde_yaml::Value;

use super::attribute::AttributeSet;

/// Foreground/background pair; color strings are passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Color {
    pub fg: Option<String>,
    pub bg: Option<String>,
}

impl Color {
    pub fn new(fg: Option<&str>, bg: Option<&str>) -> Self {
        Self {
            fg: fg.map(str::to_string),
            bg: bg.map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}

/// One highlight group record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupConfig {
    pub color: Option<Color>,
    /// Empty when the group has no `style` field
    pub style: AttributeSet,
    /// Groups that link to this one
    pub links: Vec<String>,
    /// Unrecognized fields, kept in document order
    pub extra: Vec<(String, Value)>,
}

impl GroupConfig {
    pub fn with_color(mut self, fg: Option<&str>, bg: Option<&str>) -> Self {
        self.color = Some(Color::new(fg, bg));
        self
    }

    pub fn with_style(mut self, style: impl IntoIterator<Item = super::Attribute>) -> Self {
        self.style = style.into_iter().collect();
        self
    }

    pub fn with_links<S: Into<String>>(mut self, links: impl IntoIterator<Item = S>) -> Self {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.style.is_empty() && self.links.is_empty() && self.extra.is_empty()
    }
}

/// Ordered mapping from group name to its record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigModel {
    groups: Vec<(String, GroupConfig)>,
    index: HashMap<String, usize>,
}

impl ConfigModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&GroupConfig> {
        self.index.get(name).map(|&idx| &self.groups[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Groups in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupConfig)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Add a group, replacing the record in place if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, group: GroupConfig) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&idx) => self.groups[idx].1 = group,
            None => {
                self.index.insert(name.clone(), self.groups.len());
                self.groups.push((name, group));
            }
        }
    }

    /// Record for `name`, appended empty on first use
    pub(crate) fn record_mut(&mut self, name: &str) -> &mut GroupConfig {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.index.insert(name.to_string(), idx);
                self.groups.push((name.to_string(), GroupConfig::default()));
                idx
            }
        };
        &mut self.groups[idx].1
    }
}

impl<S: Into<String>> FromIterator<(S, GroupConfig)> for ConfigModel {
    fn from_iter<I: IntoIterator<Item = (S, GroupConfig)>>(iter: I) -> Self {
        let mut model = ConfigModel::new();
        for (name, group) in iter {
            model.insert(name, group);
        }
        model
    }
}

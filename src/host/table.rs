//! In-memory highlight table
//!
//! Behaves like an editor's highlight-group table: ids are assigned in order
//! of first mention, `hi! link` chains resolve to the last group in the chain,
//! and `syntax reset` clears attributes while keeping ids. Loadable from a
//! JSON snapshot:
//!
//! ```text
//! [
//!   {"name": "Normal", "fg": "#ffffff", "bg": "#000000"},
//!   {"name": "Comment", "fg": "#888888", "style": ["italic"]},
//!   {"name": "SpecialComment", "link": "Comment"},
//!   {"name": ""}
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::scheme::{AttributeSet, Directive};

use super::{CommandSink, GroupId, HighlightHost, HostError, QueryKey, RenderMode};

/// One slot of the table; an empty name marks an unused slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "AttributeSet::is_empty")]
    pub style: AttributeSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl HighlightEntry {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn clear(&mut self) {
        self.fg = None;
        self.bg = None;
        self.style = AttributeSet::EMPTY;
        self.link = None;
    }
}

/// Highlight groups indexed by id (`id - 1` into `entries`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightTable {
    entries: Vec<HighlightEntry>,
    colors_name: Option<String>,
}

impl HighlightTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<HighlightEntry>) -> Self {
        Self {
            entries,
            colors_name: None,
        }
    }

    pub fn from_snapshot_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HighlightEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn to_snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HighlightEntry] {
        &self.entries
    }

    /// Value of the last `let g:colors_name = ...` executed
    pub fn colors_name(&self) -> Option<&str> {
        self.colors_name.as_deref()
    }

    pub fn get(&self, id: GroupId) -> Option<&HighlightEntry> {
        let idx = (id as usize).checked_sub(1)?;
        self.entries.get(idx)
    }

    pub fn id_of(&self, name: &str) -> Option<GroupId> {
        if name.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .map(|idx| idx as GroupId + 1)
    }

    /// Id of `name`, appending a new group if needed
    pub fn ensure(&mut self, name: &str) -> GroupId {
        match self.id_of(name) {
            Some(id) => id,
            None => {
                self.entries.push(HighlightEntry::named(name));
                self.entries.len() as GroupId
            }
        }
    }

    /// Apply one directive: a define clears any link, a link replaces it
    pub fn apply(&mut self, directive: &Directive) {
        match directive {
            Directive::Define {
                group,
                fg,
                bg,
                style,
            } => {
                let id = self.ensure(group);
                if let Some(entry) = self.entry_mut(id) {
                    entry.fg = fg.clone();
                    entry.bg = bg.clone();
                    entry.style = *style;
                    entry.link = None;
                }
            }
            Directive::Link { alias, target } => {
                let id = self.ensure(alias);
                self.ensure(target);
                if let Some(entry) = self.entry_mut(id) {
                    entry.link = Some(target.clone());
                }
            }
        }
    }

    /// Clear every group's attributes and links, keeping ids
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.clear();
        }
    }

    fn entry_mut(&mut self, id: GroupId) -> Option<&mut HighlightEntry> {
        let idx = (id as usize).checked_sub(1)?;
        self.entries.get_mut(idx)
    }

    fn entry(&self, id: GroupId) -> Result<&HighlightEntry, HostError> {
        self.get(id)
            .ok_or_else(|| HostError::Query(format!("no highlight group with id {}", id)))
    }

    /// Follow links to the end of the chain, stopping on a cycle
    fn resolve(&self, id: GroupId) -> GroupId {
        let mut current = id;
        for _ in 0..self.entries.len() {
            let next = self
                .get(current)
                .and_then(|entry| entry.link.as_deref())
                .and_then(|target| self.id_of(target));
            match next {
                Some(next) if next != id => current = next,
                _ => break,
            }
        }
        current
    }

    fn execute_line(&mut self, line: &str) -> Result<(), HostError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('"') || line.starts_with("if ") || line == "endif" {
            return Ok(());
        }
        if line == "syntax reset" {
            self.reset();
            return Ok(());
        }
        if let Some(value) = line.strip_prefix("let g:colors_name") {
            let name = value
                .trim_start()
                .strip_prefix('=')
                .map(|v| v.trim().trim_matches('\'').trim_matches('"'))
                .ok_or_else(|| HostError::Command(format!("malformed assignment: {}", line)))?;
            self.colors_name = Some(name.to_string());
            return Ok(());
        }

        let directive: Directive = line
            .parse()
            .map_err(|e: crate::scheme::DirectiveParseError| HostError::Command(e.to_string()))?;
        self.apply(&directive);
        Ok(())
    }
}

impl HighlightHost for HighlightTable {
    fn translate(&mut self, id: GroupId) -> Result<Option<GroupId>, HostError> {
        if self.get(id).is_none() {
            return Ok(None);
        }
        Ok(Some(self.resolve(id)))
    }

    /// Every render mode reads the same stored attributes
    fn attribute(
        &mut self,
        id: GroupId,
        key: QueryKey,
        _mode: RenderMode,
    ) -> Result<String, HostError> {
        let entry = self.entry(id)?;
        Ok(match key {
            QueryKey::Name => entry.name.clone(),
            QueryKey::Fg => entry.fg.clone().unwrap_or_default(),
            QueryKey::Bg => entry.bg.clone().unwrap_or_default(),
            QueryKey::Attr(attr) => {
                if entry.style.contains(attr) {
                    "1".to_string()
                } else {
                    String::new()
                }
            }
        })
    }
}

impl CommandSink for HighlightTable {
    /// Runs the subset of Vim script that colorschemes use
    fn execute(&mut self, script: &str) -> Result<(), HostError> {
        for line in script.lines() {
            self.execute_line(line)?;
        }
        Ok(())
    }
}

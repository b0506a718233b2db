//! Rebuilding a model from the live highlight table
//!
//! Walks group ids upward from 1 until the host reports there is no such
//! group. Canonical groups contribute colors and attributes; alias groups are
//! appended to the `links` of the group they translate to.

use crate::scheme::{Attribute, AttributeSet, Color, ConfigModel};

use super::{GroupId, HighlightHost, HostError, QueryKey, RenderMode};

/// Reads the host highlight table into a [`ConfigModel`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    mode: RenderMode,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: RenderMode) -> Self {
        Self { mode }
    }

    /// Query every group id and assemble the model
    ///
    /// Any host failure aborts the walk; nothing partial is returned.
    pub fn extract<H: HighlightHost + ?Sized>(&self, host: &mut H) -> Result<ConfigModel, HostError> {
        self.extract_from(host, 1)
    }

    fn extract_from<H: HighlightHost + ?Sized>(
        &self,
        host: &mut H,
        first: GroupId,
    ) -> Result<ConfigModel, HostError> {
        let mut model = ConfigModel::new();
        let mut visited = 0usize;
        let mut id = first;

        while let Some(trans_id) = host.translate(id)? {
            visited += 1;
            let name = host.attribute(id, QueryKey::Name, self.mode)?;
            if !name.is_empty() {
                if id == trans_id {
                    self.read_canonical(host, id, &name, &mut model)?;
                } else {
                    let target = host.attribute(trans_id, QueryKey::Name, self.mode)?;
                    model.record_mut(&target).links.push(name);
                }
            }
            id = match id.checked_add(1) {
                Some(next) => next,
                None => {
                    tracing::warn!("Highlight ids exhausted at {}, stopping", id);
                    break;
                }
            };
        }

        tracing::debug!(
            "Extracted {} groups from {} highlight ids ({} mode)",
            model.len(),
            visited,
            self.mode
        );
        Ok(model)
    }

    fn read_canonical<H: HighlightHost + ?Sized>(
        &self,
        host: &mut H,
        id: GroupId,
        name: &str,
        model: &mut ConfigModel,
    ) -> Result<(), HostError> {
        let fg = non_empty(host.attribute(id, QueryKey::Fg, self.mode)?);
        let bg = non_empty(host.attribute(id, QueryKey::Bg, self.mode)?);

        let mut style = AttributeSet::EMPTY;
        for attr in Attribute::ALL {
            if host.attribute(id, QueryKey::Attr(attr), self.mode)? == "1" {
                style.insert(attr);
            }
        }

        let record = model.record_mut(name);
        let color = Color { fg, bg };
        if !color.is_empty() {
            record.color = Some(color);
        }
        record.style = style;
        Ok(())
    }
}

/// [`Extractor::extract`] in the default (`gui`) mode
pub fn extract_current<H: HighlightHost + ?Sized>(host: &mut H) -> Result<ConfigModel, HostError> {
    Extractor::new().extract(host)
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

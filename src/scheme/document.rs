//! YAML document rendering
//!
//! Every record is written as `color`, `style`, `links`, then any fields the
//! document carried that this crate does not interpret. Rendering never
//! fails: a field the emitter cannot represent is left out on its own.

use serde_yaml::{Mapping, Value};

use super::model::{Color, ConfigModel, GroupConfig};
use super::parse::{COLOR_FIELD, LINKS_FIELD, STYLE_FIELD};

/// Render a model as a YAML document
pub fn to_document(model: &ConfigModel) -> String {
    if model.is_empty() {
        return String::new();
    }

    let mut root = Mapping::with_capacity(model.len());
    for (name, group) in model.iter() {
        root.insert(Value::String(name.to_string()), Value::Mapping(record(name, group)));
    }

    match serde_yaml::to_string(&Value::Mapping(root)) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to render document: {}", e);
            String::new()
        }
    }
}

fn record(name: &str, group: &GroupConfig) -> Mapping {
    let mut fields = Mapping::new();

    if let Some(color) = &group.color {
        fields.insert(COLOR_FIELD.into(), Value::Mapping(color_mapping(color)));
    }
    if !group.style.is_empty() {
        let style = group
            .style
            .iter()
            .map(|attr| Value::String(attr.as_str().to_string()))
            .collect();
        fields.insert(STYLE_FIELD.into(), Value::Sequence(style));
    }
    if !group.links.is_empty() {
        let links = group.links.iter().cloned().map(Value::String).collect();
        fields.insert(LINKS_FIELD.into(), Value::Sequence(links));
    }

    for (key, value) in &group.extra {
        let reserved = matches!(key.as_str(), COLOR_FIELD | STYLE_FIELD | LINKS_FIELD);
        if reserved || serde_yaml::to_string(value).is_err() {
            tracing::debug!("Dropping field `{}` of group `{}`", key, name);
            continue;
        }
        fields.insert(Value::String(key.clone()), value.clone());
    }

    fields
}

fn color_mapping(color: &Color) -> Mapping {
    let mut sides = Mapping::new();
    if let Some(fg) = &color.fg {
        sides.insert("fg".into(), Value::String(fg.clone()));
    }
    if let Some(bg) = &color.bg {
        sides.insert("bg".into(), Value::String(bg.clone()));
    }
    sides
}

/// Zero-based line of the top-level key for `group`
pub fn locate_group(document: &str, group: &str) -> Option<usize> {
    document.lines().position(|line| {
        !line.starts_with(char::is_whitespace) && top_level_key(line) == Some(group)
    })
}

/// Key of a `key: value` or `key:` line; the key itself may contain `:`
fn top_level_key(line: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if let Some(rest) = line.strip_prefix(quote) {
            let end = rest.find(quote)?;
            return Some(&rest[..end]);
        }
    }
    match line.find(": ") {
        Some(end) => Some(line[..end].trim_end()),
        None => line.trim_end().strip_suffix(':').map(str::trim_end),
    }
}

/// Whole-word search pattern the host uses to mark a group name
pub fn match_pattern(group: &str) -> String {
    format!("\\<{}\\>", group)
}

//! Document validation
//!
//! Turns YAML text into a [`ConfigModel`]. Validation stops at the first
//! problem found in document order and never hands back a partial model.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

use super::attribute::{Attribute, AttributeSet};
use super::model::{Color, ConfigModel, GroupConfig};

pub const COLOR_FIELD: &str = "color";
pub const STYLE_FIELD: &str = "style";
pub const LINKS_FIELD: &str = "links";

/// Keys accepted inside a `color` mapping
pub const COLOR_KEYS: &[&str] = &["fg", "bg"];

/// Reasons a document is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("YAML parse error: {0}")]
    Syntax(String),

    #[error("the document must be a mapping from group names to group records, found {found}")]
    NotAMapping { found: String },

    #[error("group names must be non-empty strings of letters, digits, `_`, `.`, `@` or `-`, found {found}")]
    InvalidGroupName { found: String },

    #[error("group `{group}`: the record must be a mapping with optional `color`, `style` and `links` fields, found {found}")]
    InvalidGroup { group: String, found: String },

    #[error("group `{group}`: `{field}` must be {expected}, found {found}")]
    InvalidField {
        group: String,
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("group `{group}`: unknown key `{field}`; possible keys: [{keys}]", keys = COLOR_KEYS.join(", "))]
    UnknownColorKey { group: String, field: String },

    #[error("group `{group}`: unknown attribute `{token}` in `style`; possible attributes: [{allowed}]", allowed = Attribute::allowed_names())]
    UnknownAttribute { group: String, token: String },

    #[error("group `{group}`: `links` must be a list of group names, found {found}")]
    InvalidLink { group: String, found: String },

    #[error("group `{group}`: `{alias}` is listed twice in `links`")]
    RepeatedLink { group: String, alias: String },

    #[error("`{alias}` is linked from both `{first}` and `{second}`; a group can link to only one target")]
    DuplicateLink {
        alias: String,
        first: String,
        second: String,
    },

    #[error("`{alias}` is defined as a group and also linked from `{owner}`; its definition would replace the link")]
    AliasDefined { alias: String, owner: String },
}

impl ValidationError {
    /// The document key the error points at, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            ValidationError::Syntax(_)
            | ValidationError::NotAMapping { .. }
            | ValidationError::InvalidGroupName { .. } => None,
            ValidationError::InvalidGroup { group, .. }
            | ValidationError::InvalidLink { group, .. } => Some(group.as_str()),
            ValidationError::InvalidField { field, .. }
            | ValidationError::UnknownColorKey { field, .. } => Some(field.as_str()),
            ValidationError::UnknownAttribute { token, .. } => Some(token.as_str()),
            ValidationError::RepeatedLink { alias, .. }
            | ValidationError::DuplicateLink { alias, .. }
            | ValidationError::AliasDefined { alias, .. } => Some(alias.as_str()),
        }
    }
}

/// Parse and validate a colorscheme document
///
/// An empty document yields an empty model.
pub fn parse(text: &str) -> Result<ConfigModel, ValidationError> {
    if text.trim().is_empty() {
        return Ok(ConfigModel::new());
    }

    let root: Value =
        serde_yaml::from_str(text).map_err(|e| ValidationError::Syntax(e.to_string()))?;

    let entries = match root {
        Value::Null => return Ok(ConfigModel::new()),
        Value::Mapping(entries) => entries,
        other => {
            return Err(ValidationError::NotAMapping {
                found: describe(&other),
            })
        }
    };

    let mut model = ConfigModel::new();
    let mut link_owner: HashMap<String, String> = HashMap::new();

    for (key, value) in entries {
        let name = match key {
            Value::String(name) if is_group_name(&name) => name,
            other => {
                return Err(ValidationError::InvalidGroupName {
                    found: describe(&other),
                })
            }
        };

        let group = parse_group(&name, value)?;

        for alias in &group.links {
            if let Some(first) = link_owner.insert(alias.clone(), name.clone()) {
                if first == name {
                    return Err(ValidationError::RepeatedLink {
                        group: name,
                        alias: alias.clone(),
                    });
                }
                return Err(ValidationError::DuplicateLink {
                    alias: alias.clone(),
                    first,
                    second: name,
                });
            }
        }

        model.insert(name, group);
    }

    // A define clears any link on the same group, so an alias cannot also be defined
    for (owner, group) in model.iter() {
        if let Some(alias) = group.links.iter().find(|alias| model.contains(alias.as_str())) {
            return Err(ValidationError::AliasDefined {
                alias: alias.clone(),
                owner: owner.to_string(),
            });
        }
    }

    tracing::debug!("Parsed document with {} groups", model.len());
    Ok(model)
}

fn parse_group(name: &str, value: Value) -> Result<GroupConfig, ValidationError> {
    let fields = match value {
        Value::Mapping(fields) => fields,
        other => {
            return Err(ValidationError::InvalidGroup {
                group: name.to_string(),
                found: describe(&other),
            })
        }
    };

    let mut group = GroupConfig::default();
    for (key, value) in fields {
        let field = match key {
            Value::String(field) => field,
            other => {
                return Err(ValidationError::InvalidField {
                    group: name.to_string(),
                    field: describe(&other),
                    expected: "keyed by a string",
                    found: describe(&value),
                })
            }
        };

        match field.as_str() {
            COLOR_FIELD => group.color = Some(parse_color(name, value)?),
            STYLE_FIELD => group.style = parse_style(name, value)?,
            LINKS_FIELD => group.links = parse_links(name, value)?,
            _ => group.extra.push((field, value)),
        }
    }
    Ok(group)
}

fn parse_color(group: &str, value: Value) -> Result<Color, ValidationError> {
    let sides = match value {
        Value::Mapping(sides) => sides,
        other => {
            return Err(ValidationError::InvalidField {
                group: group.to_string(),
                field: COLOR_FIELD.to_string(),
                expected: "a mapping with `fg` and `bg` keys",
                found: describe(&other),
            })
        }
    };

    let mut color = Color::default();
    for (key, value) in sides {
        let key = match key {
            Value::String(key) => key,
            other => {
                return Err(ValidationError::UnknownColorKey {
                    group: group.to_string(),
                    field: format!("{}.{}", COLOR_FIELD, describe(&other)),
                })
            }
        };
        let slot = match key.as_str() {
            "fg" => &mut color.fg,
            "bg" => &mut color.bg,
            _ => {
                return Err(ValidationError::UnknownColorKey {
                    group: group.to_string(),
                    field: format!("{}.{}", COLOR_FIELD, key),
                })
            }
        };
        *slot = color_value(group, &key, value)?;
    }
    Ok(color)
}

fn color_value(group: &str, side: &str, value: Value) -> Result<Option<String>, ValidationError> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s,
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => {
            return Err(ValidationError::InvalidField {
                group: group.to_string(),
                field: format!("{}.{}", COLOR_FIELD, side),
                expected: "a color string or a color number",
                found: describe(&other),
            })
        }
    };
    Ok((!text.is_empty()).then_some(text))
}

fn parse_style(group: &str, value: Value) -> Result<AttributeSet, ValidationError> {
    let tokens = match value {
        Value::Sequence(tokens) => tokens,
        other => {
            return Err(ValidationError::InvalidField {
                group: group.to_string(),
                field: STYLE_FIELD.to_string(),
                expected: "a list of attributes",
                found: describe(&other),
            })
        }
    };

    let mut style = AttributeSet::EMPTY;
    for token in tokens {
        let attr = match &token {
            Value::String(s) => s.parse::<Attribute>().ok(),
            _ => None,
        };
        match attr {
            Some(attr) => style.insert(attr),
            None => {
                return Err(ValidationError::UnknownAttribute {
                    group: group.to_string(),
                    token: token_text(&token),
                })
            }
        }
    }
    Ok(style)
}

fn parse_links(group: &str, value: Value) -> Result<Vec<String>, ValidationError> {
    let names = match value {
        Value::Sequence(names) => names,
        other => {
            return Err(ValidationError::InvalidLink {
                group: group.to_string(),
                found: describe(&other),
            })
        }
    };

    names
        .into_iter()
        .map(|name| match name {
            Value::String(s) if is_group_name(&s) => Ok(s),
            other => Err(ValidationError::InvalidLink {
                group: group.to_string(),
                found: describe(&other),
            }),
        })
        .collect()
}

/// Names a highlight command can carry as a single word
fn is_group_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@' | '-'))
}

/// Short human description of a YAML value for diagnostics
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{}`", b),
        Value::Number(n) => format!("number `{}`", n),
        Value::String(s) if s.is_empty() => "an empty string".to_string(),
        Value::String(s) => format!("string `{}`", s),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(m) => describe_mapping(m),
        Value::Tagged(tagged) => format!("a value tagged `{}`", tagged.tag),
    }
}

fn describe_mapping(mapping: &Mapping) -> String {
    if mapping.is_empty() {
        "an empty mapping".to_string()
    } else {
        "a mapping".to_string()
    }
}

/// Attribute token as it appeared in the document
fn token_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => describe(other),
    }
}

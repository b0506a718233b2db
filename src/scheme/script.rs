//! Highlight command generation
//!
//! Projects a [`ConfigModel`] onto `:highlight` directives:
//!
//! ```text
//! hi! Comment guifg=#888888 guibg=None gui=italic
//! hi! link SpecialComment Comment
//! ```

use std::fmt;
use std::str::FromStr;

use super::attribute::{Attribute, AttributeSet};
use super::model::ConfigModel;

/// Written for an absent foreground or background
pub const UNSET_COLOR: &str = "None";
/// Written for an empty attribute list
pub const NO_STYLE: &str = "NONE";

/// A single highlight command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Define {
        group: String,
        fg: Option<String>,
        bg: Option<String>,
        style: AttributeSet,
    },
    Link {
        alias: String,
        target: String,
    },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Define {
                group,
                fg,
                bg,
                style,
            } => {
                let style = if style.is_empty() {
                    NO_STYLE.to_string()
                } else {
                    style.join(",")
                };
                write!(
                    f,
                    "hi! {} guifg={} guibg={} gui={}",
                    group,
                    fg.as_deref().unwrap_or(UNSET_COLOR),
                    bg.as_deref().unwrap_or(UNSET_COLOR),
                    style
                )
            }
            Directive::Link { alias, target } => write!(f, "hi! link {} {}", alias, target),
        }
    }
}

/// Error reading a directive back from script text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid highlight directive `{line}`: {reason}")]
pub struct DirectiveParseError {
    pub line: String,
    pub reason: String,
}

impl FromStr for Directive {
    type Err = DirectiveParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| DirectiveParseError {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let mut words = line.split_whitespace();
        match words.next() {
            Some("hi" | "hi!" | "highlight" | "highlight!") => {}
            _ => return Err(fail("expected `hi!`")),
        }

        let group = words.next().ok_or_else(|| fail("missing group name"))?;
        if group == "link" {
            let alias = words.next().ok_or_else(|| fail("missing link source"))?;
            let target = words.next().ok_or_else(|| fail("missing link target"))?;
            if words.next().is_some() {
                return Err(fail("trailing arguments after link target"));
            }
            return Ok(Directive::Link {
                alias: alias.to_string(),
                target: target.to_string(),
            });
        }

        let mut fg = None;
        let mut bg = None;
        let mut style = AttributeSet::EMPTY;
        for word in words {
            let (key, value) = word
                .split_once('=')
                .ok_or_else(|| fail("expected key=value"))?;
            match key {
                "guifg" => fg = color_arg(value),
                "guibg" => bg = color_arg(value),
                "gui" => style = style_arg(value).ok_or_else(|| fail("unknown attribute"))?,
                _ => return Err(fail("unsupported key")),
            }
        }

        Ok(Directive::Define {
            group: group.to_string(),
            fg,
            bg,
            style,
        })
    }
}

fn color_arg(value: &str) -> Option<String> {
    (!value.eq_ignore_ascii_case(UNSET_COLOR)).then(|| value.to_string())
}

fn style_arg(value: &str) -> Option<AttributeSet> {
    if value.eq_ignore_ascii_case(NO_STYLE) {
        return Some(AttributeSet::EMPTY);
    }
    value
        .split(',')
        .map(|token| token.parse::<Attribute>().ok())
        .collect()
}

/// Directives for every group in model order, each define followed by its links
pub fn directives(model: &ConfigModel) -> Vec<Directive> {
    let mut out = Vec::with_capacity(model.len());
    for (name, group) in model.iter() {
        let color = group.color.clone().unwrap_or_default();
        out.push(Directive::Define {
            group: name.to_string(),
            fg: color.fg,
            bg: color.bg,
            style: group.style,
        });
        out.extend(group.links.iter().map(|alias| Directive::Link {
            alias: alias.clone(),
            target: name.to_string(),
        }));
    }
    out
}

/// Newline-joined directive script
pub fn to_script(model: &ConfigModel) -> String {
    directives(model)
        .iter()
        .map(Directive::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reset guard run before applying a script live
pub fn preview_preamble(colors_name: &str) -> String {
    [
        "if exists('syntax_on')".to_string(),
        "  syntax reset".to_string(),
        "endif".to_string(),
        format!("let g:colors_name = '{}'", colors_name),
    ]
    .join("\n")
}

/// Complete colorscheme file contents
pub fn colorscheme(colors_name: &str, model: &ConfigModel) -> String {
    let mut content = format!(
        "\" Generated by colordinate\n{}\n\n\n",
        preview_preamble(colors_name)
    );
    content.push_str(&to_script(model));
    content.push('\n');
    content
}

//! Colorscheme translation engine
//!
//! Converts between three forms of the same highlight configuration:
//!
//! ```text
//! YAML document ──parse()──▶ ConfigModel ──to_script()──▶ hi! directives
//!       ▲                         │
//!       └──────to_document()──────┘
//! ```
//!
//! All functions here are pure; reading the live state of an editor lives in
//! [`crate::host`].

mod attribute;
mod document;
mod model;
mod parse;
mod script;

pub use attribute::{Attribute, AttributeSet};
pub use document::{locate_group, match_pattern, to_document};
pub use model::{Color, ConfigModel, GroupConfig};
pub use parse::{parse, ValidationError, COLOR_FIELD, COLOR_KEYS, LINKS_FIELD, STYLE_FIELD};
pub use script::{
    colorscheme, directives, preview_preamble, to_script, Directive, DirectiveParseError,
    NO_STYLE, UNSET_COLOR,
};

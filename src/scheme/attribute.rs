//! Style toggles recognized in the `style` field and by `gui=`
//!
//! The set is closed and ordered. Every list of attributes this crate
//! produces (documents, scripts, extracted models) follows this order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A boolean style toggle of a highlight group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Bold,
    Italic,
    Reverse,
    Standout,
    Underline,
    Undercurl,
    Strikethrough,
}

impl Attribute {
    /// All attributes in canonical order
    pub const ALL: [Attribute; 7] = [
        Attribute::Bold,
        Attribute::Italic,
        Attribute::Reverse,
        Attribute::Standout,
        Attribute::Underline,
        Attribute::Undercurl,
        Attribute::Strikethrough,
    ];

    /// Name used in documents and in `gui=` / `synIDattr()` keys
    pub const fn as_str(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Italic => "italic",
            Attribute::Reverse => "reverse",
            Attribute::Standout => "standout",
            Attribute::Underline => "underline",
            Attribute::Undercurl => "undercurl",
            Attribute::Strikethrough => "strikethrough",
        }
    }

    /// Comma-separated list of every attribute name, for diagnostics
    pub fn allowed_names() -> String {
        Attribute::ALL
            .iter()
            .map(|attr| attr.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or(())
    }
}

/// A set of attributes that always iterates in canonical order
///
/// An empty set stands for "no `style` field".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Attribute>", into = "Vec<Attribute>")]
pub struct AttributeSet(u8);

impl AttributeSet {
    pub const EMPTY: AttributeSet = AttributeSet(0);

    pub fn insert(&mut self, attr: Attribute) {
        self.0 |= attr.bit();
    }

    pub fn contains(&self, attr: Attribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL
            .into_iter()
            .filter(move |attr| self.contains(*attr))
    }

    /// Attribute names joined by `sep`, in canonical order
    pub fn join(&self, sep: &str) -> String {
        self.iter()
            .map(|attr| attr.as_str())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = AttributeSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Attribute> for AttributeSet {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attr in iter {
            self.insert(attr);
        }
    }
}

impl From<Vec<Attribute>> for AttributeSet {
    fn from(attrs: Vec<Attribute>) -> Self {
        attrs.into_iter().collect()
    }
}

impl From<AttributeSet> for Vec<Attribute> {
    fn from(set: AttributeSet) -> Self {
        set.iter().collect()
    }
}

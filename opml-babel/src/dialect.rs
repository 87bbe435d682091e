//! Source dialect selection
//!
//! The two supported source tools differ in exactly two places: how an item's
//! raw `text` attribute becomes a fragment, and what the completion flag is
//! called. That is a flat two-way choice, so it is a tagged enum rather than a
//! trait hierarchy; everything downstream of normalization is shared code.

use std::fmt;

use crate::markdown;
use crate::markup::{parser, Fragment};

/// A source tool's encoding conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Rich text as inline Markdown, completion flag `complete`.
    Dynalist,
    /// Rich text as sanitized inline HTML, completion flag `_complete`.
    Workflowy,
}

impl Dialect {
    pub const ALL: &'static [Dialect] = &[Dialect::Dynalist, Dialect::Workflowy];

    /// Look up a dialect by its CLI name.
    pub fn from_name(name: &str) -> Option<Dialect> {
        match name.to_ascii_lowercase().as_str() {
            "dynalist" => Some(Dialect::Dynalist),
            "workflowy" => Some(Dialect::Workflowy),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Dynalist => "dynalist",
            Dialect::Workflowy => "workflowy",
        }
    }

    /// Name of the source attribute that marks an item completed.
    pub fn complete_attribute(&self) -> &'static str {
        match self {
            Dialect::Dynalist => "complete",
            Dialect::Workflowy => "_complete",
        }
    }

    /// Normalize an item's raw rich text into the canonical fragment.
    pub fn normalize(&self, raw: &str) -> Fragment {
        match self {
            Dialect::Dynalist => markdown::parse_inline(raw),
            Dialect::Workflowy => parser::parse_fragment(raw),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! The OPML host tree
//!
//! A deliberately small, owned representation of an OPML document: the root
//! element's attributes, the simple text children of `<head>`, and the nested
//! `<outline>` items of `<body>`. Outline attributes are kept as an ordered
//! list so everything the converter does not touch passes through to the
//! output byte-for-byte in its original order.

pub mod parser;
pub mod serializer;

use serde::Serialize;

/// A parsed OPML document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutlineDocument {
    /// Attributes of the `<opml>` root element (usually just `version`).
    pub root_attributes: Vec<(String, String)>,
    /// Simple `<head>` children as (tag, text) pairs: title, dates, owner,
    /// expansion state and whatever else the exporting tool wrote.
    pub head: Vec<(String, String)>,
    /// Top-level outline items of `<body>`.
    pub outlines: Vec<OutlineNode>,
}

/// One `<outline>` item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OutlineNode {
    attributes: Vec<(String, String)>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing one in place so its position
    /// among the other attributes is preserved.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attributes.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(index).1)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn prepend_child(&mut self, child: OutlineNode) {
        self.children.insert(0, child);
    }

    pub fn append_child(&mut self, child: OutlineNode) {
        self.children.push(child);
    }
}

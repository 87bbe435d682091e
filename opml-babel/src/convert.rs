//! Per-node conversion and the document walker
//!
//! One linear pass over the outline tree, top to bottom. No node's outcome
//! depends on another node's, so the walker is a plain pre-order recursion;
//! children synthesized while converting a node (link children, note
//! children) belong to the target dialect already and are skipped.

use crate::dialect::Dialect;
use crate::error::ConvertError;
use crate::markup::classify::{classify, Classification, LinkGeometry};
use crate::markup::flatten::flatten_media;
use crate::markup::sanitize::sanitize;
use crate::markup::serializer::to_html;
use crate::markup::{parser, Fragment};
use crate::opml::{self, OutlineDocument, OutlineNode};

/// Both dialects store an item's note under this attribute.
const NOTE_ATTRIBUTE: &str = "_note";
/// Treeify's completion marker.
const COMPLETED_CLASS: &str = "completed";

/// Convert an OPML export into Treeify OPML.
///
/// Empty input converts to empty output without error; input that does not
/// parse as OPML is a [`ConvertError::Parse`]. Any per-node contract
/// violation aborts the whole document so a half-converted tree is never
/// emitted.
pub fn convert(dialect: Dialect, source: &str) -> Result<String, ConvertError> {
    if source.is_empty() {
        return Ok(String::new());
    }
    let mut document = opml::parser::parse(source)?;
    convert_document(dialect, &mut document)?;
    Ok(opml::serializer::serialize(&document))
}

/// Convert an already-parsed document in place.
pub fn convert_document(
    dialect: Dialect,
    document: &mut OutlineDocument,
) -> Result<(), ConvertError> {
    for outline in &mut document.outlines {
        convert_subtree(dialect, outline)?;
    }
    Ok(())
}

fn convert_subtree(dialect: Dialect, node: &mut OutlineNode) -> Result<(), ConvertError> {
    let prepended = convert_node(dialect, node)?;
    for child in node.children.iter_mut().skip(prepended) {
        convert_subtree(dialect, child)?;
    }
    Ok(())
}

/// Convert one outline node in place. Returns how many children were
/// prepended so the walker can skip the synthesized nodes.
fn convert_node(dialect: Dialect, node: &mut OutlineNode) -> Result<usize, ConvertError> {
    let raw = node
        .attribute("text")
        .ok_or(ConvertError::MissingField { attribute: "text" })?
        .to_string();

    let fragment = dialect.normalize(&raw);
    let mut prepended = 0;

    match classify(&fragment) {
        Classification::Single(link) => match link.geometry {
            LinkGeometry::Sole => {
                become_link(node, &link.text, &link.href);
            }
            LinkGeometry::Trailing => {
                // "text <a>" splits into a text node with the link as its
                // first child, keeping the link associated with its source.
                let rest = remainder_html(&fragment, link.index);
                node.set_attribute("text", &rest);
                node.set_attribute("html", &rest);
                node.prepend_child(link_node(&link.text, &link.href));
                prepended += 1;
            }
            LinkGeometry::Leading => {
                // "<a> text" makes the node itself the link, with the
                // remaining text as a child.
                let rest = remainder_html(&fragment, link.index);
                become_link(node, &link.text, &link.href);
                let mut child = OutlineNode::new();
                child.set_attribute("text", &rest);
                child.set_attribute("html", &rest);
                node.prepend_child(child);
                prepended += 1;
            }
            // Text on both sides, or an anchor nested inside other markup:
            // restructuring would guess at intent, so emit the plain form.
            LinkGeometry::Interior => {
                node.set_attribute("html", &canonical_html(&fragment));
            }
        },
        Classification::NoLink | Classification::MultipleLinks => {
            node.set_attribute("html", &canonical_html(&fragment));
        }
    }

    if node.attribute(dialect.complete_attribute()) == Some("true") {
        node.set_attribute("cssClass", COMPLETED_CLASS);
    }

    if let Some(note) = node.remove_attribute(NOTE_ATTRIBUTE) {
        prepended += prepend_note_children(node, &note);
    }

    Ok(prepended)
}

/// The sanitized, flattened rendering of a fragment.
fn canonical_html(fragment: &Fragment) -> String {
    to_html(&sanitize(&flatten_media(fragment)))
}

/// Canonical html of the fragment with the classified anchor removed.
fn remainder_html(fragment: &Fragment, anchor_index: Option<usize>) -> String {
    let mut rest = fragment.clone();
    if let Some(index) = anchor_index {
        rest.children.remove(index);
    }
    canonical_html(&rest).trim().to_string()
}

fn become_link(node: &mut OutlineNode, text: &str, href: &str) {
    node.set_attribute("type", "link");
    node.set_attribute("text", text);
    node.set_attribute("url", href);
    // A link node carries no rich text of its own.
    node.remove_attribute("html");
}

fn link_node(text: &str, href: &str) -> OutlineNode {
    let mut node = OutlineNode::new();
    node.set_attribute("type", "link");
    node.set_attribute("text", text);
    node.set_attribute("url", href);
    node
}

/// Turn a note into child nodes, one per line, prepended in reverse so the
/// final child order matches the note's top-to-bottom line order. Note lines
/// are plain text or HTML links in both dialects; no Markdown layer applies
/// here.
fn prepend_note_children(node: &mut OutlineNode, note: &str) -> usize {
    let normalized = note.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    for line in lines.iter().rev() {
        let fragment = parser::parse_fragment(line);
        let anchors = fragment.anchors();
        let mut child = OutlineNode::new();
        match anchors.len() {
            0 => {
                child.set_attribute("text", line);
                child.set_attribute("html", line);
            }
            1 => {
                let (text, href) = &anchors[0];
                child = link_node(text, href);
            }
            _ => {
                child.set_attribute("text", line);
            }
        }
        node.prepend_child(child);
    }

    lines.len()
}

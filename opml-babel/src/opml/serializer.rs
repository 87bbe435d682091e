//! OPML serialization (outline tree → output text)
//!
//! Hand-written writer: the tree is small and regular, and writing it
//! ourselves guarantees the XML declaration line Treeify expects as the first
//! line of its import. Output is indented two spaces per level. Attribute
//! values escape newlines and tabs numerically so a round-trip through an XML
//! parser does not collapse them into spaces.

use super::{OutlineDocument, OutlineNode};

/// Serialize a document, declaration line included.
pub fn serialize(document: &OutlineDocument) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n");

    out.push_str("<opml");
    for (name, value) in &document.root_attributes {
        push_attribute(&mut out, name, value);
    }
    out.push_str(">\n");

    if !document.head.is_empty() {
        out.push_str("  <head>\n");
        for (tag, text) in &document.head {
            out.push_str("    <");
            out.push_str(tag);
            out.push('>');
            out.push_str(&escape_text(text));
            out.push_str("</");
            out.push_str(tag);
            out.push_str(">\n");
        }
        out.push_str("  </head>\n");
    }

    out.push_str("  <body>\n");
    for outline in &document.outlines {
        write_outline(&mut out, outline, 2);
    }
    out.push_str("  </body>\n");
    out.push_str("</opml>\n");
    out
}

fn write_outline(out: &mut String, node: &OutlineNode, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str("<outline");
    for (name, value) in node.attributes() {
        push_attribute(out, name, value);
    }

    if node.children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    out.push_str(">\n");
    for child in &node.children {
        write_outline(out, child, depth + 1);
    }
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str("</outline>\n");
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(ch),
        }
    }
    out
}

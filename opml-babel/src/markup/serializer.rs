//! Fragment serialization (Fragment → HTML string)
//!
//! Renders a fragment back to the inline HTML that ends up in Treeify's `html`
//! attribute. The whitelisted kinds render as `<b>`, `<i>`, `<strike>` and
//! `<u>`; the transient kinds also render (anchors, images and unknown tags
//! round-trip) so the serializer can be used on unsanitized fragments in tests
//! and diagnostics, but the canonical conversion path only ever serializes
//! sanitized output.

use super::{Fragment, Inline};

/// Serialize a fragment to an HTML string.
pub fn to_html(fragment: &Fragment) -> String {
    let mut out = String::new();
    write_children(&fragment.children, &mut out);
    out
}

fn write_children(children: &[Inline], out: &mut String) {
    for child in children {
        write_inline(child, out);
    }
}

fn write_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(&escape_text(text)),
        Inline::Bold(children) => write_element("b", children, out),
        Inline::Italic(children) => write_element("i", children, out),
        Inline::Strike(children) => write_element("strike", children, out),
        Inline::Underline(children) => write_element("u", children, out),
        Inline::Anchor { href, children } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_attribute(href));
            out.push_str("\">");
            write_children(children, out);
            out.push_str("</a>");
        }
        Inline::Image { src, alt } => {
            out.push_str("<img src=\"");
            out.push_str(&escape_attribute(src));
            out.push_str("\" alt=\"");
            out.push_str(&escape_attribute(alt));
            out.push_str("\">");
        }
        Inline::Other { tag, children } => write_element(tag, children, out),
    }
}

fn write_element(tag: &str, children: &[Inline], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    write_children(children, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

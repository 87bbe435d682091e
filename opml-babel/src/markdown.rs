//! Dynalist inline Markdown parsing (Dynalist → canonical fragment)
//!
//! Dynalist exports each item's rich text as inline Markdown. We parse it with
//! comrak and adapt the comrak AST to the fragment type.
//!
//! One quirk is mandatory: Dynalist writes italics as `__text__`, which a
//! stock CommonMark parser reads as strong emphasis. Comrak's underline
//! extension gives double-underscore spans their own node kind before the
//! strong/emphasis rules see them, and that kind is mapped to italic here.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

use crate::markup::{Fragment, Inline};

/// Parse a Dynalist rich-text string into a fragment.
pub fn parse_inline(source: &str) -> Fragment {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &comrak_options());
    let mut children = Vec::new();
    collect_blocks(root, &mut children);
    Fragment::new(children)
}

fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    // __text__ parses as Underline instead of Strong; see module doc.
    options.extension.underline = true;
    options
}

/// Collect the inline content of every block, joining blocks with a space.
/// Item text is a single line in practice, so this normally visits exactly
/// one paragraph.
fn collect_blocks<'a>(node: &'a AstNode<'a>, out: &mut Vec<Inline>) {
    for child in node.children() {
        let data = child.data.borrow();
        match &data.value {
            NodeValue::Paragraph | NodeValue::Heading(_) => {
                if !out.is_empty() {
                    out.push(Inline::Text(" ".to_string()));
                }
                collect_inlines(child, out);
            }
            _ => collect_blocks(child, out),
        }
    }
}

fn collect_inlines<'a>(node: &'a AstNode<'a>, out: &mut Vec<Inline>) {
    for child in node.children() {
        let data = child.data.borrow();
        match &data.value {
            NodeValue::Text(text) => out.push(Inline::Text(text.clone())),
            NodeValue::Strong => out.push(Inline::Bold(collect_children(child))),
            // Emph covers *x* and _x_; Underline is the reinterpreted __x__.
            NodeValue::Emph | NodeValue::Underline => {
                out.push(Inline::Italic(collect_children(child)))
            }
            NodeValue::Strikethrough => out.push(Inline::Strike(collect_children(child))),
            NodeValue::Link(link) => out.push(Inline::Anchor {
                href: link.url.clone(),
                children: collect_children(child),
            }),
            NodeValue::Image(link) => {
                let mut alt = String::new();
                collect_plain_text(child, &mut alt);
                out.push(Inline::Image {
                    src: link.url.clone(),
                    alt,
                });
            }
            // Code spans carry no Treeify rendering; keep them as a transient
            // element so the sanitizer unwraps them to plain text.
            NodeValue::Code(code) => out.push(Inline::Other {
                tag: "code".to_string(),
                children: vec![Inline::Text(code.literal.clone())],
            }),
            NodeValue::SoftBreak | NodeValue::LineBreak => {
                out.push(Inline::Text(" ".to_string()))
            }
            // Raw inline HTML is rare in Dynalist text; keep it visible as
            // literal text rather than guessing at tag pairing.
            NodeValue::HtmlInline(raw) => out.push(Inline::Text(raw.clone())),
            _ => collect_inlines(child, out),
        }
    }
}

fn collect_children<'a>(node: &'a AstNode<'a>) -> Vec<Inline> {
    let mut children = Vec::new();
    collect_inlines(node, &mut children);
    children
}

fn collect_plain_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        _ => {
            for child in node.children() {
                collect_plain_text(child, out);
            }
        }
    }
}

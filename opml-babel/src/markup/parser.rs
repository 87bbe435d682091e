//! Inline HTML parsing (rich text → Fragment)
//!
//! WorkFlowy stores each item's rich text as a sanitized inline-HTML string,
//! and note lines are parsed the same way for both dialects. We lean on
//! html5ever for the actual parsing (it handles malformed input gracefully)
//! and only adapt the resulting rcdom tree to the fragment type. The parser
//! wraps stray inline content in an html/body skeleton, so the fragment's
//! children are simply the children of `<body>`.

use std::cell::RefCell;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::{Fragment, Inline};

/// Parse an inline HTML string into a fragment.
pub fn parse_fragment(html: &str) -> Fragment {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes());

    let children = match body_handle(&dom.document) {
        Some(body) => convert_children(&body),
        None => Vec::new(),
    };
    Fragment::new(children)
}

fn body_handle(document: &Handle) -> Option<Handle> {
    let html = find_element(document, "html")?;
    find_element(&html, "body")
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .find(|child| element_name(child).as_deref() == Some(tag))
        .cloned()
}

fn element_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

fn convert_children(handle: &Handle) -> Vec<Inline> {
    let mut out = Vec::new();
    for child in handle.children.borrow().iter() {
        convert_node(child, &mut out);
    }
    out
}

fn convert_node(handle: &Handle, out: &mut Vec<Inline>) {
    match &handle.data {
        NodeData::Text { contents } => {
            out.push(Inline::Text(contents.borrow().to_string()));
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.as_ref();
            match tag {
                "b" => out.push(Inline::Bold(convert_children(handle))),
                "i" => out.push(Inline::Italic(convert_children(handle))),
                "u" => out.push(Inline::Underline(convert_children(handle))),
                // Both spellings of strikethrough map to the same kind.
                "strike" | "s" => out.push(Inline::Strike(convert_children(handle))),
                "a" => out.push(Inline::Anchor {
                    href: attribute(attrs, "href").unwrap_or_default(),
                    children: convert_children(handle),
                }),
                "img" => out.push(Inline::Image {
                    src: attribute(attrs, "src").unwrap_or_default(),
                    alt: attribute(attrs, "alt").unwrap_or_default(),
                }),
                _ => out.push(Inline::Other {
                    tag: tag.to_string(),
                    children: convert_children(handle),
                }),
            }
        }
        // Comments, doctypes and processing instructions carry no content.
        _ => {}
    }
}

fn attribute(attrs: &RefCell<Vec<Attribute>>, name: &str) -> Option<String> {
    attrs
        .borrow()
        .iter()
        .find(|attr| attr.name.local.as_ref() == name)
        .map(|attr| attr.value.to_string())
}

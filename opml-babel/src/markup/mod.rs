//! The canonical rich-text fragment.
//!
//! Both dialects normalize a node's rich text into this one tree type, and the
//! sanitize/flatten/classify passes all operate on it. It is a plain value tree
//! rather than a live DOM handle: classification reads one clone of a node's
//! fragment while the sanitized fallback is computed from another, and value
//! semantics keep those two views from aliasing.

pub mod classify;
pub mod flatten;
pub mod parser;
pub mod sanitize;
pub mod serializer;

/// An ordered forest of inline markup, scoped to one outline node's content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    pub children: Vec<Inline>,
}

/// One inline node.
///
/// `Bold`/`Italic`/`Strike`/`Underline` are the whitelisted kinds that survive
/// sanitization. `Anchor`, `Image` and `Other` are transient: flattening
/// rewrites anchors and images to text, and sanitization unwraps whatever else
/// remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Strike(Vec<Inline>),
    Underline(Vec<Inline>),
    Anchor { href: String, children: Vec<Inline> },
    Image { src: String, alt: String },
    Other { tag: String, children: Vec<Inline> },
}

impl Fragment {
    pub fn new(children: Vec<Inline>) -> Self {
        Fragment { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total visible text, ignoring all markup. Images contribute nothing,
    /// matching how a DOM reports the text of an element.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// All anchors in document order, each as (visible label, href), searched
    /// through the whole subtree.
    pub fn anchors(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        collect_anchors(&self.children, &mut out);
        out
    }
}

impl Inline {
    /// The node's ordered children; empty for text and images.
    pub fn children(&self) -> &[Inline] {
        match self {
            Inline::Text(_) | Inline::Image { .. } => &[],
            Inline::Bold(children)
            | Inline::Italic(children)
            | Inline::Strike(children)
            | Inline::Underline(children) => children,
            Inline::Anchor { children, .. } | Inline::Other { children, .. } => children,
        }
    }
}

pub(crate) fn collect_text(children: &[Inline], out: &mut String) {
    for child in children {
        match child {
            Inline::Text(text) => out.push_str(text),
            Inline::Image { .. } => {}
            other => collect_text(other.children(), out),
        }
    }
}

fn collect_anchors(children: &[Inline], out: &mut Vec<(String, String)>) {
    for child in children {
        if let Inline::Anchor { href, children } = child {
            let mut label = String::new();
            collect_text(children, &mut label);
            out.push((label, href.clone()));
        }
        collect_anchors(child.children(), out);
    }
}

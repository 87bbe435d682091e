//! Link/image flattening (media → plain text that keeps the URL)
//!
//! Treeify cannot render anchors or images inside an item's rich text, so both
//! are rewritten to plain text that preserves the referenced URL:
//!
//! - `<a href="https://x.test">label</a>` becomes `label https://x.test `
//!   (label, then the URL wrapped in single spaces). When the visible label
//!   already is the URL the trailing copy is suppressed.
//! - `<img src="pic.png" alt="cat">` becomes `cat pic.png`; without alt text
//!   just the source URL.
//!
//! Runs on every node's fragment before sanitization; the link-pattern
//! classifier inspects a separate, unflattened view of the same text.

use url::Url;

use super::{collect_text, Fragment, Inline};

/// Rewrite all anchors and images in the fragment to plain text.
pub fn flatten_media(fragment: &Fragment) -> Fragment {
    Fragment::new(flatten_children(&fragment.children))
}

fn flatten_children(children: &[Inline]) -> Vec<Inline> {
    let mut out = Vec::new();
    for child in children {
        match child {
            Inline::Text(text) => out.push(Inline::Text(text.clone())),
            Inline::Bold(children) => out.push(Inline::Bold(flatten_children(children))),
            Inline::Italic(children) => out.push(Inline::Italic(flatten_children(children))),
            Inline::Strike(children) => out.push(Inline::Strike(flatten_children(children))),
            Inline::Underline(children) => {
                out.push(Inline::Underline(flatten_children(children)))
            }
            Inline::Other { tag, children } => out.push(Inline::Other {
                tag: tag.clone(),
                children: flatten_children(children),
            }),
            Inline::Anchor { href, children } => {
                // The label is the anchor's visible text before flattening,
                // the way a DOM reports it (nested images contribute nothing).
                let mut label = String::new();
                collect_text(children, &mut label);

                out.extend(flatten_children(children));
                if !urls_match(&label, href) {
                    out.push(Inline::Text(format!(" {href} ")));
                }
            }
            Inline::Image { src, alt } => {
                let text = if alt.is_empty() {
                    src.clone()
                } else {
                    format!("{alt} {src}")
                };
                out.push(Inline::Text(text));
            }
        }
    }
    out
}

/// Whether the visible label already names the URL. Straight string equality,
/// with a parsed-URL comparison as fallback so that serialization differences
/// like a trailing slash don't duplicate the link.
fn urls_match(label: &str, href: &str) -> bool {
    if label == href {
        return true;
    }
    match (Url::parse(label.trim()), Url::parse(href)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

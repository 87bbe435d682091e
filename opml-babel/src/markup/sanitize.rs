//! Markup sanitization (tag-whitelist unwrapping)
//!
//! Treeify renders only `<b>`, `<i>`, `<strike>` and `<u>`. Every other
//! element is replaced by its own children, recursively, so its text content
//! is preserved in document order even though the wrapping is lost. The pass
//! is a pure tree transformation and idempotent.
//!
//! Sanitization runs after flattening in the conversion path: anchors and
//! images must be rewritten to text first, otherwise unwrapping an anchor
//! here would silently drop its URL.

use super::{Fragment, Inline};

/// Reduce a fragment to the whitelisted inline kinds.
pub fn sanitize(fragment: &Fragment) -> Fragment {
    Fragment::new(sanitize_children(&fragment.children))
}

fn sanitize_children(children: &[Inline]) -> Vec<Inline> {
    let mut out = Vec::new();
    for child in children {
        match child {
            Inline::Text(text) => out.push(Inline::Text(text.clone())),
            Inline::Bold(children) => out.push(Inline::Bold(sanitize_children(children))),
            Inline::Italic(children) => out.push(Inline::Italic(sanitize_children(children))),
            Inline::Strike(children) => out.push(Inline::Strike(sanitize_children(children))),
            Inline::Underline(children) => {
                out.push(Inline::Underline(sanitize_children(children)))
            }
            // Unwrap: the element disappears, its children stay in place.
            Inline::Anchor { children, .. } | Inline::Other { children, .. } => {
                out.extend(sanitize_children(children));
            }
            // An image has no children to keep; the flatten pass has already
            // turned any image worth keeping into text.
            Inline::Image { .. } => {}
        }
    }
    out
}

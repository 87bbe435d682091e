//! Link-pattern classification
//!
//! Inspects a node's fragment (as parsed, before flattening) for the
//! single-hyperlink pattern that Treeify models as a dedicated link item.
//! Geometry is decided by the anchor's index among the fragment's *immediate*
//! children; an anchor nested inside other markup counts as Interior, which
//! the converter treats the same as the no-restructure fallback.
//!
//! Two or more anchors are deliberately not restructured: picking one of them
//! would guess at the author's intent, and a silent wrong guess is worse than
//! emitting the plain sanitized text with both URLs kept.

use super::{Fragment, Inline};

/// Position of a lone anchor among a fragment's immediate children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkGeometry {
    /// The anchor is the only immediate child.
    Sole,
    /// The anchor is the first immediate child, with content after it.
    Leading,
    /// The anchor is the last immediate child, with content before it.
    Trailing,
    /// Content on both sides, or the anchor is nested below the top level.
    Interior,
}

/// A fragment's lone anchor with its geometry and extracted link data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleLink {
    pub geometry: LinkGeometry,
    /// Index among the immediate children; `None` when the anchor is nested.
    pub index: Option<usize>,
    /// Visible label of the anchor.
    pub text: String,
    pub href: String,
}

/// Outcome of inspecting one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No anchors at all.
    NoLink,
    /// Exactly one anchor in the whole subtree.
    Single(SingleLink),
    /// Two or more anchors; left alone by design.
    MultipleLinks,
}

/// Classify a fragment by its anchor count and geometry.
pub fn classify(fragment: &Fragment) -> Classification {
    let mut anchors = fragment.anchors();
    match anchors.len() {
        0 => Classification::NoLink,
        1 => {
            let (text, href) = anchors.remove(0);
            let index = fragment
                .children
                .iter()
                .position(|child| matches!(child, Inline::Anchor { .. }));
            let geometry = match index {
                Some(_) if fragment.children.len() == 1 => LinkGeometry::Sole,
                Some(i) if i == fragment.children.len() - 1 => LinkGeometry::Trailing,
                Some(0) => LinkGeometry::Leading,
                _ => LinkGeometry::Interior,
            };
            Classification::Single(SingleLink {
                geometry,
                index,
                text,
                href,
            })
        }
        _ => Classification::MultipleLinks,
    }
}

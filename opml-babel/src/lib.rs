//! Dialect conversion for outliner OPML exports
//!
//!     This crate converts OPML exports from Dynalist and WorkFlowy into OPML that Treeify
//!     can import. Each source tool encodes the rich text of an outline item differently
//!     (inline Markdown for Dynalist, sanitized inline HTML for WorkFlowy), and Treeify
//!     expects a restricted HTML subset, a `cssClass="completed"` completion marker, link
//!     items as dedicated `type="link"` nodes, and notes as ordinary child items instead of
//!     a `_note` attribute.
//!
//!     This is a pure lib, that is, it powers the opml-cli binary but is shell agnostic:
//!     no code here supposes a shell environment, be it to std print, env vars etc.
//!
//! Architecture
//!
//!     Every node's rich text is normalized into one canonical fragment type
//!     (markup::Fragment), and all interesting work happens on that type. The dialects only
//!     differ in how raw text becomes a fragment and in the name of the completion flag;
//!     everything downstream of normalization is shared.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── dialect.rs              # Dialect enum: normalization dispatch + attribute names
//!     ├── markdown.rs             # Dynalist inline Markdown -> Fragment (comrak)
//!     ├── markup
//!     │   ├── mod.rs              # Fragment / Inline tree
//!     │   ├── parser.rs           # inline HTML -> Fragment (html5ever)
//!     │   ├── serializer.rs       # Fragment -> HTML string
//!     │   ├── sanitize.rs         # tag-whitelist unwrapping
//!     │   ├── flatten.rs          # anchor/image -> plain text + URL
//!     │   └── classify.rs         # single-link geometry classification
//!     ├── opml
//!     │   ├── mod.rs              # OutlineDocument / OutlineNode
//!     │   ├── parser.rs           # OPML -> tree (roxmltree)
//!     │   └── serializer.rs       # tree -> OPML text
//!     ├── convert.rs              # per-node converter + document walker
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The hardest part is the link-pattern restructuring: a node whose rich text contains
//!     exactly one hyperlink is reshaped depending on where the anchor sits among the
//!     fragment's immediate children (alone, leading, trailing, or interior). The sole and
//!     leading cases turn the node itself into a link item; the trailing case splits the
//!     node into a text item with a prepended link child; the interior case (and anything
//!     with two or more anchors, or an anchor nested inside other markup) deliberately
//!     falls back to plain sanitized output, because guessing the author's intent there
//!     converts worse than doing nothing.
//!
//!     The classification runs against the fragment as parsed, while the plain fallback is
//!     computed from the same fragment flattened (anchors and images rewritten to text that
//!     keeps the URL) and then sanitized (every element outside the b/i/strike/u whitelist
//!     replaced by its own children). Only one of the two outputs is kept per node.
//!
//! Library Choices
//!
//!     This crate offloads all format parsing to specialized crates and only adapts their
//!     ASTs to the fragment type: comrak for Markdown, html5ever + rcdom for inline HTML,
//!     roxmltree for the OPML envelope. Serializing OPML back out is trivial enough to do
//!     by hand, which also guarantees the XML declaration line Treeify expects.

pub mod convert;
pub mod dialect;
pub mod error;
pub mod markdown;
pub mod markup;
pub mod opml;

pub use convert::{convert, convert_document};
pub use dialect::Dialect;
pub use error::ConvertError;

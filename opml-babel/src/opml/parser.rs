//! OPML parsing (input text → outline tree)

use roxmltree::Node;

use super::{OutlineDocument, OutlineNode};
use crate::error::ConvertError;

/// Parse an OPML document. Anything that is not well-formed XML with an
/// `<opml>` root is a [`ConvertError::Parse`].
pub fn parse(source: &str) -> Result<OutlineDocument, ConvertError> {
    let xml = roxmltree::Document::parse(source)
        .map_err(|e| ConvertError::Parse(e.to_string()))?;

    let root = xml.root_element();
    if root.tag_name().name() != "opml" {
        return Err(ConvertError::Parse(format!(
            "root element is <{}>, expected <opml>",
            root.tag_name().name()
        )));
    }

    let mut document = OutlineDocument {
        root_attributes: root
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect(),
        ..Default::default()
    };

    if let Some(head) = child_element(root, "head") {
        for child in head.children().filter(Node::is_element) {
            document.head.push((
                child.tag_name().name().to_string(),
                child.text().unwrap_or_default().to_string(),
            ));
        }
    }

    if let Some(body) = child_element(root, "body") {
        for child in body.children() {
            if child.is_element() && child.tag_name().name() == "outline" {
                document.outlines.push(parse_outline(child));
            }
        }
    }

    Ok(document)
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

fn parse_outline(node: Node) -> OutlineNode {
    let mut outline = OutlineNode::new();
    for attr in node.attributes() {
        outline.set_attribute(attr.name(), attr.value());
    }
    for child in node.children() {
        if child.is_element() && child.tag_name().name() == "outline" {
            outline.append_child(parse_outline(child));
        }
    }
    outline
}

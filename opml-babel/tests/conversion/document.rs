//! Document-level tests: parsing, passthrough, errors and serialization.

use insta::assert_snapshot;
use opml_babel::{convert, ConvertError, Dialect};

use crate::common::{convert_and_parse, opml_with_body};

#[test]
fn empty_input_converts_to_empty_output() {
    assert_eq!(convert(Dialect::Dynalist, ""), Ok(String::new()));
    assert_eq!(convert(Dialect::Workflowy, ""), Ok(String::new()));
}

#[test]
fn malformed_input_is_a_parse_error() {
    let err = convert(Dialect::Dynalist, "<opml><body>").unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
    assert!(err
        .to_string()
        .starts_with("input cannot be recognized as OPML:"));
}

#[test]
fn non_opml_root_is_a_parse_error() {
    let err = convert(Dialect::Workflowy, "<html></html>").unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
}

#[test]
fn missing_text_attribute_aborts_the_document() {
    let source = opml_with_body("    <outline text=\"fine\"/>\n    <outline/>");
    assert_eq!(
        convert(Dialect::Workflowy, &source),
        Err(ConvertError::MissingField { attribute: "text" })
    );
}

#[test]
fn output_starts_with_the_xml_declaration() {
    let source = opml_with_body("    <outline text=\"x\"/>");
    let output = convert(Dialect::Dynalist, &source).unwrap();
    assert!(output.starts_with("<?xml version=\"1.0\"?>\n"));
}

#[test]
fn head_and_version_pass_through() {
    let source = "<?xml version=\"1.0\"?>\n<opml version=\"2.0\">\n  <head>\n    <title>inbox</title>\n    <ownerName>someone</ownerName>\n  </head>\n  <body>\n    <outline text=\"x\"/>\n  </body>\n</opml>\n";
    let document = convert_and_parse(Dialect::Dynalist, source);

    assert_eq!(
        document.root_attributes,
        vec![("version".to_string(), "2.0".to_string())]
    );
    assert_eq!(
        document.head,
        vec![
            ("title".to_string(), "inbox".to_string()),
            ("ownerName".to_string(), "someone".to_string()),
        ]
    );
}

#[test]
fn unknown_attributes_pass_through_in_order() {
    let source = opml_with_body("    <outline text=\"x\" created=\"2024-01-01\" custom=\"kept\"/>");
    let document = convert_and_parse(Dialect::Workflowy, &source);

    let node = &document.outlines[0];
    assert_eq!(node.attribute("created"), Some("2024-01-01"));
    assert_eq!(node.attribute("custom"), Some("kept"));
    // text stays first; converted attributes are appended after the originals.
    assert_eq!(node.attributes()[0].0, "text");
}

#[test]
fn nested_outlines_are_converted_at_every_depth() {
    let source = opml_with_body(
        "    <outline text=\"**top**\">\n      <outline text=\"[docs](https://x.test/docs)\">\n        <outline text=\"~~deep~~\"/>\n      </outline>\n    </outline>",
    );
    let document = convert_and_parse(Dialect::Dynalist, &source);

    let top = &document.outlines[0];
    assert_eq!(top.attribute("html"), Some("<b>top</b>"));

    let middle = &top.children[0];
    assert_eq!(middle.attribute("type"), Some("link"));
    assert_eq!(middle.attribute("url"), Some("https://x.test/docs"));

    let deep = &middle.children[0];
    assert_eq!(deep.attribute("html"), Some("<strike>deep</strike>"));
}

#[test]
fn children_of_a_split_node_are_still_converted() {
    // The synthesized link child is skipped, the original child is not.
    let source = opml_with_body(
        "    <outline text=\"see [docs](https://x.test/docs)\">\n      <outline text=\"**child**\"/>\n    </outline>",
    );
    let document = convert_and_parse(Dialect::Dynalist, &source);

    let parent = &document.outlines[0];
    assert_eq!(parent.attribute("text"), Some("see"));
    assert_eq!(parent.children.len(), 2);
    assert_eq!(parent.children[0].attribute("type"), Some("link"));
    assert_eq!(parent.children[1].attribute("html"), Some("<b>child</b>"));
}

#[test]
fn full_dynalist_document_snapshot() {
    let source = "<?xml version=\"1.0\"?>\n<opml version=\"2.0\">\n  <head>\n    <title>demo</title>\n  </head>\n  <body>\n    <outline text=\"**plan** for the week\" complete=\"true\" _note=\"kickoff notes\">\n      <outline text=\"[docs](https://example.com/docs)\"/>\n    </outline>\n  </body>\n</opml>\n";

    let output = convert(Dialect::Dynalist, source).unwrap();
    assert_snapshot!(output.trim_end(), @r#"
    <?xml version="1.0"?>
    <opml version="2.0">
      <head>
        <title>demo</title>
      </head>
      <body>
        <outline text="**plan** for the week" complete="true" html="&lt;b&gt;plan&lt;/b&gt; for the week" cssClass="completed">
          <outline text="kickoff notes" html="kickoff notes"/>
          <outline text="docs" type="link" url="https://example.com/docs"/>
        </outline>
      </body>
    </opml>
    "#);
}

//! WorkFlowy dialect tests
//!
//! WorkFlowy exports rich text as sanitized inline HTML and prefixes its
//! extension attributes with an underscore.

use crate::common::{assert_link, attr, convert_item, convert_text};
use opml_babel::Dialect;

fn convert(text: &str) -> opml_babel::opml::OutlineNode {
    convert_text(Dialect::Workflowy, text)
}

#[test]
fn plain_text_gets_an_html_attribute() {
    let node = convert("just words");
    assert_eq!(node.attribute("text"), Some("just words"));
    assert_eq!(node.attribute("html"), Some("just words"));
    assert_eq!(node.attribute("type"), None);
}

#[test]
fn sole_link_becomes_a_link_node() {
    let node = convert(r#"<a href="https://x.test/page">the page</a>"#);
    assert_link(&node, "the page", "https://x.test/page");
    assert!(node.children.is_empty());
}

#[test]
fn leading_link_becomes_a_link_node_with_text_child() {
    let node = convert(r#"<a href="https://x.test/">home</a> is where we start"#);
    assert_link(&node, "home", "https://x.test/");

    assert_eq!(node.children.len(), 1);
    let child = &node.children[0];
    assert_eq!(child.attribute("text"), Some("is where we start"));
    assert_eq!(child.attribute("html"), Some("is where we start"));
}

#[test]
fn trailing_link_becomes_a_link_child() {
    let node = convert(r#"see also <a href="https://x.test/docs">the docs</a>"#);
    assert_eq!(node.attribute("text"), Some("see also"));
    assert_eq!(node.attribute("html"), Some("see also"));
    assert_eq!(node.attribute("type"), None);

    assert_eq!(node.children.len(), 1);
    assert_link(&node.children[0], "the docs", "https://x.test/docs");
}

#[test]
fn interior_link_is_flattened_into_the_text() {
    let node = convert(r#"a <a href="https://x.test/p">x</a> b"#);
    assert_eq!(node.attribute("type"), None);
    assert!(node.children.is_empty());
    assert_eq!(node.attribute("html"), Some("a x https://x.test/p  b"));
}

#[test]
fn link_nested_in_markup_is_flattened() {
    let node = convert(r#"<b>see <a href="https://x.test/p">x</a></b>"#);
    assert_eq!(node.attribute("type"), None);
    assert_eq!(node.attribute("html"), Some("<b>see x https://x.test/p </b>"));
}

#[test]
fn multiple_links_are_flattened() {
    let node =
        convert(r#"<a href="https://a.test/">a</a> and <a href="https://b.test/">b</a>"#);
    assert_eq!(node.attribute("type"), None);
    assert_eq!(
        node.attribute("html"),
        Some("a https://a.test/  and b https://b.test/ ")
    );
}

#[test]
fn link_label_matching_url_is_not_duplicated() {
    let node = convert(r#"a <a href="https://x.test/">https://x.test/</a> b"#);
    assert_eq!(node.attribute("html"), Some("a https://x.test/ b"));
}

#[test]
fn completion_flag_maps_to_css_class() {
    let node = convert_item(
        Dialect::Workflowy,
        r#"text="done thing" _complete="true""#,
    );
    assert_eq!(node.attribute("cssClass"), Some("completed"));
    assert_eq!(node.attribute("_complete"), Some("true"));
}

#[test]
fn completion_flag_false_is_ignored() {
    let node = convert_item(
        Dialect::Workflowy,
        r#"text="open thing" _complete="false""#,
    );
    assert_eq!(node.attribute("cssClass"), None);
}

#[test]
fn unknown_markup_is_unwrapped() {
    let node = convert(r#"<span class="colored"><b>hi</b></span> there"#);
    assert_eq!(node.attribute("html"), Some("<b>hi</b> there"));
}

#[test]
fn underline_and_strike_pass_through() {
    let node = convert("<u>under</u> and <s>gone</s>");
    assert_eq!(
        node.attribute("html"),
        Some("<u>under</u> and <strike>gone</strike>")
    );
}

#[test]
fn image_is_flattened_to_alt_and_source() {
    let node = convert(r#"<img src="https://x.test/cat.png" alt="cat"> picture"#);
    assert_eq!(node.attribute("html"), Some("cat https://x.test/cat.png picture"));
}

#[test]
fn note_lines_become_leading_children() {
    let note = "first line\nsecond line";
    let node = convert_item(
        Dialect::Workflowy,
        &format!(r#"text="item" _note="{}""#, attr(note)),
    );

    assert_eq!(node.attribute("_note"), None);
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].attribute("text"), Some("first line"));
    assert_eq!(node.children[0].attribute("html"), Some("first line"));
    assert_eq!(node.children[1].attribute("text"), Some("second line"));
}

#[test]
fn note_line_with_one_link_becomes_a_link_child() {
    let note = r#"<a href="https://x.test/ref">reference</a>"#;
    let node = convert_item(
        Dialect::Workflowy,
        &format!(r#"text="item" _note="{}""#, attr(note)),
    );

    assert_eq!(node.children.len(), 1);
    assert_link(&node.children[0], "reference", "https://x.test/ref");
}

#[test]
fn note_line_with_many_links_keeps_the_raw_text() {
    let note = r#"<a href="https://a.test/">a</a> <a href="https://b.test/">b</a>"#;
    let node = convert_item(
        Dialect::Workflowy,
        &format!(r#"text="item" _note="{}""#, attr(note)),
    );

    assert_eq!(node.children.len(), 1);
    let child = &node.children[0];
    assert_eq!(child.attribute("text"), Some(note));
    assert_eq!(child.attribute("html"), None);
    assert_eq!(child.attribute("type"), None);
}

#[test]
fn note_children_come_before_existing_children() {
    let source = crate::common::opml_with_body(&format!(
        "    <outline text=\"parent\" _note=\"{}\">\n      <outline text=\"existing\"/>\n    </outline>",
        attr("a note")
    ));
    let document = crate::common::convert_and_parse(Dialect::Workflowy, &source);

    let parent = &document.outlines[0];
    assert_eq!(parent.children.len(), 2);
    assert_eq!(parent.children[0].attribute("text"), Some("a note"));
    assert_eq!(parent.children[1].attribute("text"), Some("existing"));
}

#[test]
fn crlf_note_lines_are_split_like_lf() {
    let node = convert_item(
        Dialect::Workflowy,
        &format!(r#"text="item" _note="{}""#, attr("one\r\ntwo")),
    );

    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].attribute("text"), Some("one"));
    assert_eq!(node.children[1].attribute("text"), Some("two"));
}

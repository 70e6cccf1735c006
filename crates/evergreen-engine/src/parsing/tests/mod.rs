//! Outline snapshot tests for the parsing module.
//!
//! Documents are parsed, checked against the tree invariants and rendered as
//! an indented outline with placeholder tokens numbered `{n}`.

mod invariants;

use crate::{element::Element, options::ParseOptions, parsing::parse_lines};

fn parse(lines: &[&str]) -> Vec<Element> {
    let elements = parse_lines(lines, &ParseOptions::default()).unwrap();
    invariants::check(&elements);
    elements
}

fn outline(lines: &[&str]) -> Vec<String> {
    normalize::outline(&parse(lines))
}

#[test]
fn nested_list_attributes() {
    insta::assert_debug_snapshot!(outline(&[
        "1. Hello {#subID .subClass} {{#id .class}}",
        "2. World {{#no .class}}",
        "  * Goodnight *Moon* {#subs .sub} {{#sid .sclass}}",
    ]), @r##"
    [
        "ol#id.class",
        "  li#subID.subClass Hello",
        "  li World {{#no .class}}",
        "    ul#sid.sclass",
        "      li#subs.sub Goodnight {0}",
        "        i{0} Moon",
    ]
    "##);
}

#[test]
fn lists_return_to_parent_levels() {
    insta::assert_debug_snapshot!(outline(&[
        "1. Hello",
        "2. There",
        "  1. Sub",
        "    1. List",
        "  3. Of subs",
        "    - Unordered",
        "3. Done",
    ]), @r##"
    [
        "ol",
        "  li Hello",
        "  li There",
        "    ol",
        "      li Sub",
        "        ol",
        "          li List",
        "      li Of subs",
        "        ul",
        "          li Unordered",
        "  li Done",
    ]
    "##);
}

#[test]
fn nested_blockquotes() {
    insta::assert_debug_snapshot!(outline(&[
        "> Quote me {#subID .subClass} {{#id .class}}",
        ">> Sub me {#subbed .subClass} {{#sub .sub}}",
        ">>>>>> deeper **still**",
        "> back out",
    ]), @r##"
    [
        "blockquote#id.class",
        "  p#subID.subClass Quote me",
        "  blockquote#sub.sub",
        "    p#subbed.subClass Sub me",
        "    blockquote",
        "      p deeper {0}",
        "        b{0} still",
        "  p back out",
    ]
    "##);
}

#[test]
fn table_with_inline_cells() {
    insta::assert_debug_snapshot!(outline(&[
        "|Name|*Role*|{#people} {{#staff .wide}}",
        "|:---|---:|",
        "|Ada|[Engineer](ada.html)|",
        "|Grace|Admiral|extra|",
    ]), @r##"
    [
        "table#staff.wide cols=3",
        "  tr#people",
        "    th:Left Name",
        "    th:Right {0}",
        "      i{0} Role",
        "  tr",
        "    td Ada",
        "    td {1}",
        "      a{1} (ada.html) Engineer",
        "  tr",
        "    td Grace",
        "    td Admiral",
        "    td extra",
    ]
    "##);
}

#[test]
fn divs_collect_blocks() {
    insta::assert_debug_snapshot!(outline(&[
        "<<-DIV{#outer .frame}",
        "Intro with a [link](https://x.test Home page)  ",
        "<<-TWO{#inner} {{.framed}}",
        "```rust",
        "if a < b && c > d {",
        "```",
        "<<-TWO",
        "---",
        "<<-DIV",
        "# Done {.end}",
    ]), @r##"
    [
        "div<DIV>#outer.framed",
        "  p Intro with a {0}",
        "    a{0} (https://x.test Home page) link",
        "  br",
        "  div<TWO>#inner",
        "    pre",
        "      code if a &lt; b &amp;&amp; c &gt; d {",
        "  hr",
        "h1.end Done",
    ]
    "##);
}

#[test]
fn emphasis_and_images_in_one_paragraph() {
    insta::assert_debug_snapshot!(outline(&[
        "A ![logo](logo.png Our logo) and ***loud*** **bold** *soft*",
        "continues here {.lead}",
    ]), @r##"
    [
        "p.lead A {0} and {1} {2} {3} continues here",
        "  img{0} (logo.png Our logo) logo",
        "  b{1} {4}",
        "    i{4} loud",
        "  b{2} bold",
        "  i{3} soft",
    ]
    "##);
}

#[test]
fn empty_document() {
    assert!(parse(&[]).is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse(&["", "   ", "\t"]).is_empty());
}

#[test]
fn windows_line_endings_are_ignored() {
    let elements = parse(&["# Title\r\n", "body\r\n"]);
    assert_eq!(elements[0].text, "Title");
    assert_eq!(elements[1].text, "body");
}

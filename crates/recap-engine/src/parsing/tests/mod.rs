//! Behavioural tests for the report parser.
//!
//! Every case also runs the invariant checker against the spanned output.

use insta::assert_debug_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{Block, HeadingLevel, ListSections},
    invariants, parse, parse_document, parse_with_sections,
    source::Span,
};

fn h(level: u8, text: &str) -> Block {
    let level = match level {
        1 => HeadingLevel::H1,
        2 => HeadingLevel::H2,
        _ => HeadingLevel::H3,
    };
    Block::Heading {
        level,
        text: text.into(),
    }
}

fn li(text: &str) -> Block {
    Block::BulletItem { text: text.into() }
}

fn p(text: &str) -> Block {
    Block::Paragraph { text: text.into() }
}

fn parse_checked(source: &str) -> Vec<Block> {
    let doc = parse_document(source, ListSections::builtin());
    invariants::check(source, &doc.blocks);
    doc.into_blocks()
}

#[rstest]
#[case::empty("", vec![])]
#[case::whitespace_only("   \n\t\n  ", vec![])]
#[case::atx_h1("# Title", vec![h(1, "Title")])]
#[case::atx_h3("### Detail", vec![h(3, "Detail")])]
#[case::setext_h1("Title\n=====", vec![h(1, "Title")])]
#[case::setext_h2("Title\n-----", vec![h(2, "Title")])]
#[case::implicit_list(
    "## Decisions\nApprove budget\nHire contractor",
    vec![h(2, "Decisions"), li("Approve budget"), li("Hire contractor")]
)]
#[case::unknown_section("## Notes\nJust text", vec![h(2, "Notes"), p("Just text")])]
#[case::blank_flushes_list("- a\n- b\n\nPara", vec![li("a"), li("b"), p("Para")])]
#[case::heading_flushes_list("- a\n# Next", vec![li("a"), h(1, "Next")])]
#[case::crlf("# Title\r\n- a\r\n- b\r\n", vec![h(1, "Title"), li("a"), li("b")])]
#[case::unmatched_marker("#Title\n####  Deep", vec![p("#Title"), p("####  Deep")])]
#[case::paragraph_keeps_indent("   indented line", vec![p("   indented line")])]
#[case::lone_dash_without_paragraph("-", vec![p("-")])]
#[case::next_line_only("\u{85}", vec![p("\u{85}")])]
#[case::next_line_around_underline(
    "Title\n\u{85}=====\u{85}",
    vec![p("Title"), p("\u{85}=====\u{85}")]
)]
fn parses_report(#[case] source: &str, #[case] expected: Vec<Block>) {
    assert_eq!(parse_checked(source), expected);
}

#[test]
fn full_report_snapshot() {
    let source = "# Meeting Summary\n\n## Decisions\nApprove budget\n- Hire contractor\n\nWrap-up\n-------\nThanks all";
    assert_debug_snapshot!(parse_checked(source), @r#"
    [
        Heading {
            level: H1,
            text: "Meeting Summary",
        },
        Heading {
            level: H2,
            text: "Decisions",
        },
        BulletItem {
            text: "Approve budget",
        },
        BulletItem {
            text: "Hire contractor",
        },
        Heading {
            level: H2,
            text: "Wrap-up",
        },
        Paragraph {
            text: "Thanks all",
        },
    ]
    "#);
}

#[test]
fn setext_heading_spans_both_lines() {
    let source = "Title\n=====\nafter";
    let doc = parse_document(source, ListSections::builtin());
    assert_eq!(doc.blocks[0].span, Span { start: 0, end: 11 });
    assert_eq!(doc.blocks[1].span, Span { start: 12, end: 17 });
}

#[test]
fn trailing_list_flushed_exactly_once() {
    let blocks = parse_checked("## Action Items\n- one\ntwo\n- three");
    let items: Vec<&str> = blocks
        .iter()
        .filter(|b| b.is_bullet())
        .map(Block::text)
        .collect();
    assert_eq!(items, vec!["one", "two", "three"]);
}

#[test]
fn repeated_parses_are_identical() {
    let source = "Summary\n=======\n## Risks\nScope creep\n\nClosing words";
    let first = parse(source);
    let second = parse(source);
    assert_eq!(first, second);

    // A list section left open by one call does not leak into the next.
    let _ = parse("## Decisions");
    assert_eq!(parse("Just text"), vec![p("Just text")]);
}

#[test]
fn custom_vocabulary_is_honoured() {
    let sections = ListSections::new(["Follow-ups"]);
    assert_eq!(
        parse_with_sections("## Follow-ups\nCall vendor", &sections),
        vec![h(2, "Follow-ups"), li("Call vendor")]
    );
    assert_eq!(
        parse_with_sections("## Follow-ups\nCall vendor", &ListSections::none()),
        vec![h(2, "Follow-ups"), p("Call vendor")]
    );
}

#[test]
fn adversarial_input_never_panics() {
    let inputs = [
        "\u{feff}",
        "\r\r\r",
        "=\n=\n=\n",
        "-\n-\n-",
        "# \n## \n### ",
        "\u{0}\u{1}\u{7f}",
        "多字节\n===\n- 項目",
        "- \n-  \n- - -",
    ];
    for input in inputs {
        let doc = parse_document(input, ListSections::builtin());
        invariants::check(input, &doc.blocks);
    }
}

#[test]
fn runs_of_bullets_only_break_at_boundaries() {
    let blocks = parse_checked("## Key Topics\nBudget\n- Hiring\nRoadmap\n## Risks\nDelay");
    assert_eq!(
        blocks,
        vec![
            h(2, "Key Topics"),
            li("Budget"),
            li("Hiring"),
            li("Roadmap"),
            h(2, "Risks"),
            li("Delay"),
        ]
    );
}

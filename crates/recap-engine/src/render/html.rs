use html_escape::encode_text;

use super::group::{ContentGroup, group_blocks};
use crate::parsing::blocks::Block;

/// Renders blocks as an HTML fragment, one element per line.
///
/// Report text comes from a model and is escaped throughout.
pub fn to_html(blocks: &[Block]) -> String {
    group_blocks(blocks)
        .iter()
        .map(render_group)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_group(group: &ContentGroup) -> String {
    match group {
        ContentGroup::Single { block } => render_block(block),
        ContentGroup::BulletList { items } => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", encode_text(item)))
                .collect();
            format!("<ul>{items}</ul>")
        }
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            let n = level.as_u8();
            format!("<h{n}>{}</h{n}>", encode_text(text))
        }
        Block::Paragraph { text } => format!("<p>{}</p>", encode_text(text)),
        Block::BulletItem { text } => format!("<ul><li>{}</li></ul>", encode_text(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_report_structure() {
        let html = to_html(&parse("# Summary\n\n## Decisions\nApprove\nHire\n\nThanks"));
        assert_eq!(
            html,
            "<h1>Summary</h1>\n<h2>Decisions</h2>\n<ul><li>Approve</li><li>Hire</li></ul>\n<p>Thanks</p>"
        );
    }

    #[test]
    fn escapes_model_output() {
        let html = to_html(&parse("<script>alert(1)</script> & more"));
        assert_eq!(html, "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</p>");
    }

    #[test]
    fn bullets_split_by_blank_line_render_as_one_list() {
        assert_eq!(to_html(&parse("- a\n\n- b")), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn empty_report_renders_nothing() {
        assert_eq!(to_html(&[]), "");
    }
}

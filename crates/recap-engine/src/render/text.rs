use super::group::{ContentGroup, group_blocks};
use crate::parsing::blocks::Block;

/// Bullet glyph used for list items in terminal output.
pub const BULLET: &str = "•";

/// Renders blocks as terminal lines.
///
/// Headings keep a `#` prefix per level so structure survives without
/// styling. Each heading, paragraph and list is followed by an empty line.
pub fn to_plain_text(blocks: &[Block]) -> Vec<String> {
    let mut lines = Vec::new();

    for group in group_blocks(blocks) {
        match group {
            ContentGroup::Single {
                block: Block::Heading { level, text },
            } => {
                let prefix = "#".repeat(usize::from(level.as_u8()));
                lines.push(format!("{prefix} {text}"));
            }
            ContentGroup::Single {
                block: Block::Paragraph { text } | Block::BulletItem { text },
            } => {
                lines.push(text);
            }
            ContentGroup::BulletList { items } => {
                lines.extend(items.iter().map(|item| format!("{BULLET} {item}")));
            }
        }
        lines.push(String::new());
    }

    lines
}

use serde::Serialize;

use crate::parsing::blocks::Block;

/// Render-ready grouping of the flat block sequence.
///
/// The parser emits bullets one by one; renderers that need a list element
/// (`<ul>`, a terminal list widget) consume these groups instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentGroup {
    /// A heading or paragraph.
    Single { block: Block },
    /// A maximal run of adjacent bullet items.
    BulletList { items: Vec<String> },
}

/// Groups consecutive bullet items into one list each.
///
/// Every other block passes through as its own group, in order.
pub fn group_blocks(blocks: &[Block]) -> Vec<ContentGroup> {
    let mut groups = Vec::new();
    let mut iter = blocks.iter().peekable();

    while let Some(block) = iter.next() {
        match block {
            Block::BulletItem { text } => {
                let mut items = vec![text.clone()];
                while let Some(Block::BulletItem { text }) = iter.next_if(|b| b.is_bullet()) {
                    items.push(text.clone());
                }
                groups.push(ContentGroup::BulletList { items });
            }
            Block::Heading { .. } | Block::Paragraph { .. } => {
                groups.push(ContentGroup::Single {
                    block: block.clone(),
                });
            }
        }
    }

    groups
}

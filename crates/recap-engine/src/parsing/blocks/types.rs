use serde::Serialize;

use crate::parsing::source::Span;

/// Heading depth. Reports only ever use three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric level, 1 to 3.
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Whether a heading at this level opens a section that can carry
    /// implicit list items.
    #[must_use]
    pub fn opens_section(self) -> bool {
        matches!(self, HeadingLevel::H1 | HeadingLevel::H2)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// One classified unit of the output document.
///
/// The output is always flat: a block never contains another block.
/// Adjacent `BulletItem`s form one logical list; grouping them is left to
/// the renderer (see [`crate::render::group_blocks`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading, from a `#` marker or a Setext underline.
    Heading { level: HeadingLevel, text: String },
    /// One list item, explicit (`- `) or implied by a list section.
    BulletItem { text: String },
    /// Any line no other rule claimed, kept exactly as written.
    Paragraph { text: String },
}

impl Block {
    /// The block's text content.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. } | Block::BulletItem { text } | Block::Paragraph { text } => {
                text
            }
        }
    }

    #[must_use]
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph { .. })
    }

    #[must_use]
    pub fn is_bullet(&self) -> bool {
        matches!(self, Block::BulletItem { .. })
    }
}

/// A parsed block together with the source bytes it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    /// The classified block.
    pub block: Block,
    /// Span of the source lines consumed. A Setext heading covers both its
    /// text line and its underline.
    pub span: Span,
}

use crate::parsing::source::Span;

use super::{
    classify::{LineClass, LineKind},
    sections::ListSections,
    sink::BlockSink,
    types::{Block, BlockNode, HeadingLevel},
};

/// Kind of the most recently emitted block, as seen by Setext look-behind.
///
/// Only updated on emission or at a boundary, never while list items are
/// being buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastEmitted {
    None,
    Paragraph,
    Heading(HeadingLevel),
}

/// List items waiting for a flush boundary.
#[derive(Debug, Default)]
struct PendingList {
    items: Vec<(String, Span)>,
}

impl PendingList {
    fn push(&mut self, text: &str, span: Span) {
        self.items.push((text.to_string(), span));
    }

    /// Emits every buffered item as a `BulletItem` in arrival order and
    /// leaves the buffer empty.
    fn flush_into(&mut self, out: &mut BlockSink) {
        if self.items.is_empty() {
            return;
        }
        log::trace!("flushing {} list items", self.items.len());
        for (text, span) in self.items.drain(..) {
            out.push(BlockNode {
                block: Block::BulletItem { text },
                span,
            });
        }
    }
}

/// Line-at-a-time state machine turning classified lines into blocks.
///
/// All state lives in the builder and dies with it; one builder serves one
/// report.
pub struct BlockBuilder<'s> {
    sections: &'s ListSections,
    pending: PendingList,
    last: LastEmitted,
    active_section: Option<String>,
    out: BlockSink,
}

impl<'s> BlockBuilder<'s> {
    pub fn new(sections: &'s ListSections) -> Self {
        Self {
            sections,
            pending: PendingList::default(),
            last: LastEmitted::None,
            active_section: None,
            out: BlockSink::new(),
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match c.kind {
            LineKind::Blank => {
                self.flush_list();
                self.active_section = None;
                self.last = LastEmitted::None;
            }
            LineKind::Underline(level) if self.last == LastEmitted::Paragraph => {
                if !self.promote_setext(level, c.line) {
                    self.push_plain(c);
                }
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.emit(
                    Block::Heading {
                        level,
                        text: text.to_string(),
                    },
                    c.line,
                );
                self.active_section = level.opens_section().then(|| text.to_string());
                self.last = LastEmitted::Heading(level);
            }
            LineKind::Bullet { text } => {
                self.pending.push(text, c.line);
                self.last = LastEmitted::None;
            }
            LineKind::Underline(_) | LineKind::Text => self.push_plain(c),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_list();
        self.out.into_nodes()
    }

    /// A line with no marker of its own: a list item inside a list section,
    /// a paragraph anywhere else.
    fn push_plain(&mut self, c: &LineClass<'_>) {
        if self.in_list_section() {
            self.pending.push(c.raw, c.line);
            self.last = LastEmitted::None;
            return;
        }

        self.flush_list();
        self.emit(
            Block::Paragraph {
                text: c.raw.to_string(),
            },
            c.line,
        );
        self.last = LastEmitted::Paragraph;
    }

    /// Turns the paragraph just emitted into a heading of `level`.
    ///
    /// Returns false and changes nothing if the last block is not a
    /// paragraph.
    fn promote_setext(&mut self, level: HeadingLevel, underline: Span) -> bool {
        let Some((text, span)) = self.out.retract_last_paragraph() else {
            return false;
        };

        self.flush_list();
        log::trace!("setext underline promotes paragraph to {level:?}");
        self.emit(Block::Heading { level, text }, span.cover(underline));
        self.last = LastEmitted::Heading(level);
        true
    }

    fn in_list_section(&self) -> bool {
        self.active_section
            .as_deref()
            .is_some_and(|title| self.sections.contains(title))
    }

    fn emit(&mut self, block: Block, span: Span) {
        self.out.push(BlockNode { block, span });
    }

    fn flush_list(&mut self) {
        self.pending.flush_into(&mut self.out);
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        !self.pending.items.is_empty()
    }
}

use crate::parsing::source::Span;

use super::types::{Block, BlockNode};

/// Append-only output buffer for one parse.
///
/// The only way to take something back is
/// [`BlockSink::retract_last_paragraph`], which looks at the last block and
/// nothing earlier. Setext promotion is the
/// single caller; no other rewrite of emitted output exists.
#[derive(Debug, Default)]
pub struct BlockSink {
    nodes: Vec<BlockNode>,
}

impl BlockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: BlockNode) {
        self.nodes.push(node);
    }

    /// Removes the last block if it is a paragraph, returning its text and
    /// span.
    ///
    /// Leaves the buffer untouched when it is empty or ends in anything else.
    pub fn retract_last_paragraph(&mut self) -> Option<(String, Span)> {
        let Some(BlockNode {
            block: Block::Paragraph { text },
            span,
        }) = self.nodes.last_mut()
        else {
            return None;
        };
        let taken = (std::mem::take(text), *span);
        self.nodes.pop();
        Some(taken)
    }

    pub fn last(&self) -> Option<&BlockNode> {
        self.nodes.last()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<BlockNode> {
        self.nodes
    }
}

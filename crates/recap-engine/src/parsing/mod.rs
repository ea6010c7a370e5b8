pub mod blocks;
pub mod invariants;
pub mod source;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, BlockNode, ListSections, ReportLineClassifier};
use source::lines_with_spans;

/// Result of parsing one report: blocks in source order, each with its span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub blocks: Vec<BlockNode>,
}

impl ParsedReport {
    /// Drops spans, keeping only the block sequence.
    #[must_use]
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks.into_iter().map(|node| node.block).collect()
    }
}

/// Parses a report with the built-in list-section vocabulary.
///
/// Total over all inputs: anything unrecognised becomes a paragraph.
pub fn parse(source: &str) -> Vec<Block> {
    parse_with_sections(source, ListSections::builtin())
}

/// Parses a report, coercing plain lines into list items under the
/// headings named in `sections`.
pub fn parse_with_sections(source: &str, sections: &ListSections) -> Vec<Block> {
    parse_document(source, sections).into_blocks()
}

/// Parses a report and keeps the source span of every block.
pub fn parse_document(source: &str, sections: &ListSections) -> ParsedReport {
    let classifier = ReportLineClassifier;
    let mut builder = BlockBuilder::new(sections);

    for lr in lines_with_spans(source) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::debug!(
        "parsed report of {} bytes into {} blocks",
        source.len(),
        blocks.len()
    );

    ParsedReport { blocks }
}

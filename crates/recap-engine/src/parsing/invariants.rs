use crate::parsing::blocks::{Block, BlockNode};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are within source bounds and on char boundaries
/// - Spans are strictly increasing and never overlap, so no source line
///   feeds two blocks
/// - Paragraph and implicit list text is a verbatim slice of the source
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, blocks: &[BlockNode]) {
    let n = source.len();
    let mut prev_end: Option<usize> = None;

    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (source len: {})",
            b.span,
            n
        );
        let slice = b.span.slice(source);
        assert!(
            slice.is_some(),
            "block span not on char boundaries: {:?}",
            b.span
        );
        if let Some(end) = prev_end {
            assert!(
                b.span.start > end,
                "block spans overlap or go backwards: {:?} after end {}",
                b.span,
                end
            );
        }
        prev_end = Some(b.span.end);

        if let (Block::Paragraph { text }, Some(slice)) = (&b.block, slice) {
            assert_eq!(
                text, slice,
                "paragraph text differs from its source line at {:?}",
                b.span
            );
        }
        if let (Block::BulletItem { text }, Some(slice)) = (&b.block, slice) {
            assert!(
                slice.contains(text.as_str()),
                "list item text {text:?} not found in its source line {slice:?}"
            );
        }
    }
}

pub mod io;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::blocks::{Block, BlockNode, DEFAULT_LIST_SECTIONS, HeadingLevel, ListSections};
pub use parsing::source::Span;
pub use parsing::{ParsedReport, parse, parse_document, parse_with_sections};
pub use render::{ContentGroup, group_blocks, to_html, to_plain_text};

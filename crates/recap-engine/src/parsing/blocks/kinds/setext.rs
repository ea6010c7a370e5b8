use crate::parsing::blocks::types::HeadingLevel;

/// Setext underline (`=====` or `-----`) with owned delimiter constants.
///
/// An underline only means something when it directly follows a paragraph;
/// that decision belongs to the builder. This type only recognises the line.
pub struct SetextUnderline;

impl SetextUnderline {
    pub const LEVEL_1: char = '=';
    pub const LEVEL_2: char = '-';

    /// Returns the heading level an underline would produce, if the trimmed
    /// line consists of one or more `=` or one or more `-` and nothing else.
    pub fn level(trimmed: &str) -> Option<HeadingLevel> {
        let first = trimmed.chars().next()?;
        let level = match first {
            Self::LEVEL_1 => HeadingLevel::H1,
            Self::LEVEL_2 => HeadingLevel::H2,
            _ => return None,
        };
        trimmed.chars().all(|c| c == first).then_some(level)
    }
}

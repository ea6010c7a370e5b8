use crate::parsing::source::{LineRef, Span};

use super::{
    kinds::{AtxHeading, Bullet, Paragraph, SetextUnderline},
    types::HeadingLevel,
};

/// What a line looks like on its own, before any context is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only.
    Blank,
    /// A run of `=` or `-`. Only a heading if it follows a paragraph.
    Underline(HeadingLevel),
    /// `#`, `##` or `###` marker followed by a space.
    Heading { level: HeadingLevel, text: &'a str },
    /// `- ` marker.
    Bullet { text: &'a str },
    /// Anything else.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Byte span of this line in the source.
    pub line: Span,
    /// The line as originally written.
    pub raw: &'a str,
    /// Local classification of the trimmed line.
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct ReportLineClassifier;

impl ReportLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried in priority order on the trimmed line: blank,
    /// underline, heading marker, bullet marker. Anything left is `Text`.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = Paragraph::trim(lr.text);

        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some(level) = SetextUnderline::level(trimmed) {
            LineKind::Underline(level)
        } else if let Some((level, text)) = AtxHeading::strip(trimmed) {
            LineKind::Heading { level, text }
        } else if let Some(text) = Bullet::strip(trimmed) {
            LineKind::Bullet { text }
        } else {
            LineKind::Text
        };

        LineClass {
            line: lr.span,
            raw: lr.text,
            kind,
        }
    }
}

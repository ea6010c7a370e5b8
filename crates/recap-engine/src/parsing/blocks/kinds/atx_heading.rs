use crate::parsing::blocks::types::HeadingLevel;

/// `#`-prefixed heading with owned marker constants.
///
/// All heading marker knowledge lives here rather than in the classifier.
pub struct AtxHeading;

impl AtxHeading {
    /// Markers in match order. Longest first, so `### ` is never read as `# `.
    pub const MARKERS: [(&'static str, HeadingLevel); 3] = [
        ("### ", HeadingLevel::H3),
        ("## ", HeadingLevel::H2),
        ("# ", HeadingLevel::H1),
    ];

    /// Matches a heading marker on an already trimmed line.
    ///
    /// Returns the level and the text after the marker. The text is not
    /// trimmed again, so `##  Decisions` keeps its extra leading space.
    pub fn strip(trimmed: &str) -> Option<(HeadingLevel, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|&(marker, level)| trimmed.strip_prefix(marker).map(|text| (level, text)))
    }
}

/// Explicit bullet marker.
///
/// Only `- ` is recognised. `*`, `+` and numbered markers stay paragraphs.
pub struct Bullet;

impl Bullet {
    pub const MARKER: &'static str = "- ";

    /// Strips the marker from an already trimmed line.
    pub fn strip(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::MARKER)
    }
}

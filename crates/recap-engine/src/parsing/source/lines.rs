use super::span::Span;

/// A reference to a single source line with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of this line, excluding the `\n` / `\r\n` terminator.
    pub span: Span,
    /// The line text exactly as written, minus the terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `source` with their byte spans.
///
/// Lines are split on `\n`; one trailing `\r` is stripped so CRLF and LF
/// input produce the same lines. A lone `\r` is not a separator. The empty
/// string yields a single empty line, and a trailing newline yields a final
/// empty line.
pub fn lines_with_spans(source: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    source.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        LineRef {
            span: Span {
                start,
                end: start + text.len(),
            },
            text,
        }
    })
}

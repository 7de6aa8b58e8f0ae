//! Lyric text encoding and decoding.
//!
//! Lyrics are flattened into a single stream of space-separated tokens. A
//! physical line ending is carried as a trailing `'\n'` on the last token of
//! the line, so the Markov chain learns where lines tend to break without
//! ever emitting a bare line break as a token of its own.

use crate::constants::lyrics::{LICENSE_FOOTER_LINES, LICENSE_SENTINEL};

/// Separator placed between physical lines before splitting on spaces.
const LINE_SEPARATOR: &str = "\n ";

/// Encode one raw lyric text into its token sequence.
///
/// Doubled line breaks collapse to one, a trailing Musixmatch license
/// footer is removed, and the remaining lines are split on `' '`.
/// Malformed input is never rejected; it simply produces odd tokens.
pub fn encode(raw: &str) -> Vec<String> {
    let collapsed = raw.replace("\n\n", "\n");
    let lines: Vec<&str> = collapsed.split('\n').collect();
    let lines = strip_license(&lines);

    lines
        .join(LINE_SEPARATOR)
        .split(' ')
        .map(String::from)
        .collect()
}

/// Drop the license footer when the final line is the footer sentinel.
///
/// The footer occupies the last [`LICENSE_FOOTER_LINES`] lines. Texts shorter
/// than that are dropped entirely.
pub fn strip_license<'a, 'b>(lines: &'a [&'b str]) -> &'a [&'b str] {
    match lines.last() {
        Some(&last) if last == LICENSE_SENTINEL => {
            &lines[..lines.len().saturating_sub(LICENSE_FOOTER_LINES)]
        }
        _ => lines,
    }
}

/// Reassemble tokens into text, restoring the line breaks encoded by [`encode`].
pub fn decode<S: AsRef<str>>(tokens: &[S]) -> String {
    let joined = tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    joined.replace(LINE_SEPARATOR, "\n")
}

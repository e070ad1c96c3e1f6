//! # Transposer
//!
//! Moves every chord on the chord lines of a song sheet by a signed number of
//! semitones. Lyrics, headers and blank lines are copied through untouched,
//! and on chord lines only the chord-shaped runs change: the whitespace between
//! them is kept as written, which is what keeps chords sitting over the right
//! syllable.
//!
//! A zero offset is the identity for any input, byte for byte.
//!
//! ## Example
//! ```rust
//! use cifra::transpose::transpose_song;
//!
//! let sheet = "[Verso]\nG       D/F#\nSanto, Santo";
//! assert_eq!(
//!     transpose_song(sheet, 2),
//!     "[Verso]\nA       E/G#\nSanto, Santo"
//! );
//! ```

use crate::chord::{transpose_chord, CHORD_IN_LINE_RE};
use crate::classify::{classify, split_lines, LineKind, ParsedLine};
use regex::Captures;

/// Replace every chord-shaped run in `line`, leaving the text between runs alone
fn transpose_chords_in(line: &str, semitones: i32) -> String {
    CHORD_IN_LINE_RE
        .replace_all(line, |caps: &Captures| transpose_chord(&caps[0], semitones))
        .into_owned()
}

/// Transpose a single line.
///
/// The line is classified first; anything but a chord line comes back as is.
///
/// # Examples
/// ```
/// use cifra::transpose::transpose_line;
///
/// assert_eq!(transpose_line("C    G/B   Am7", 2), "D    A/C#   Bm7");
/// assert_eq!(transpose_line("Deus é tão bom", 2), "Deus é tão bom");
/// ```
pub fn transpose_line(line: &str, semitones: i32) -> String {
    if semitones == 0 || classify(line) != LineKind::Chords {
        return line.to_string();
    }
    transpose_chords_in(line, semitones)
}

/// Transpose lines that were already classified, trusting their `kind`
pub fn transpose_parsed(lines: &[ParsedLine], semitones: i32) -> Vec<ParsedLine> {
    lines
        .iter()
        .map(|line| match line.kind {
            LineKind::Chords if semitones != 0 => ParsedLine {
                kind: LineKind::Chords,
                content: transpose_chords_in(&line.content, semitones),
            },
            _ => line.clone(),
        })
        .collect()
}

/// Transpose a whole song sheet.
///
/// Lines are split on `\n` or `\r\n`, classified and transposed one at a time,
/// and joined back with `\n`. The output has as many lines as the input.
pub fn transpose_song(content: &str, semitones: i32) -> String {
    if semitones == 0 {
        return content.to_string();
    }
    if content.is_empty() {
        return String::new();
    }

    split_lines(content)
        .into_iter()
        .map(|line| transpose_line(line, semitones))
        .collect::<Vec<_>>()
        .join("\n")
}

//! # Line Classifier
//!
//! Sorts each line of a song sheet into one of four kinds:
//!
//! | Kind      | Rule                                                        |
//! |-----------|-------------------------------------------------------------|
//! | `empty`   | nothing but whitespace                                      |
//! | `header`  | trimmed text starts with `[` and ends with `]`              |
//! | `chords`  | at least half of the whitespace-separated tokens are chords |
//! | `lyrics`  | anything else                                               |
//!
//! The rules are checked in that order and only look at the line itself.
//!
//! The chord test is a heuristic. A short lyric line made of words that happen
//! to be chord names (a lone "A", "E a") is classified as chords, and that is
//! the expected result.
//!
//! ## Example
//! ```rust
//! use cifra::classify::{classify, LineKind};
//!
//! assert_eq!(classify("[Chorus]"), LineKind::Header);
//! assert_eq!(classify("D        A"), LineKind::Chords);
//! assert_eq!(classify("Deus é tão bom"), LineKind::Lyrics);
//! assert_eq!(classify("   "), LineKind::Empty);
//! ```

use crate::chord::is_chord_token;
use serde::{Deserialize, Serialize};

/// What a single line of a song sheet holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Empty,
    Header,
    Chords,
    Lyrics,
}

/// A line together with its classification. `content` is always the original,
/// untrimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub content: String,
}

/// True if the trimmed line is wrapped in square brackets
pub fn is_header_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// True if at least half of the line's tokens look like chord symbols.
/// Blank lines and headers are never chord lines.
pub fn is_chord_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_header_line(trimmed) {
        return false;
    }

    let mut total = 0usize;
    let mut chords = 0usize;
    for token in trimmed.split_whitespace() {
        total += 1;
        if is_chord_token(token) {
            chords += 1;
        }
    }

    // chords / total >= 0.5
    chords * 2 >= total
}

/// Classify one line
pub fn classify(line: &str) -> LineKind {
    let kind = if line.trim().is_empty() {
        LineKind::Empty
    } else if is_header_line(line) {
        LineKind::Header
    } else if is_chord_line(line) {
        LineKind::Chords
    } else {
        LineKind::Lyrics
    };
    log::trace!("classified {:?} as {:?}", line, kind);
    kind
}

/// Split song text into lines on `\n` or `\r\n`.
///
/// A `\r` that is not followed by `\n` stays part of its line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        *line = line.strip_suffix('\r').unwrap_or(line);
    }
    lines
}

/// Classify every line of a song sheet. Empty input yields no lines.
pub fn parse_song(content: &str) -> Vec<ParsedLine> {
    if content.is_empty() {
        return Vec::new();
    }

    split_lines(content)
        .into_iter()
        .map(|line| ParsedLine {
            kind: classify(line),
            content: line.to_string(),
        })
        .collect()
}

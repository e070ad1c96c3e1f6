//! Chord symbol recognition and transposition
//!
//! A chord symbol is a root note (`A`-`G` with an optional `#` or `b`), a
//! free-form quality suffix (`m`, `7`, `maj7`, `sus4`, ...), and an optional bass
//! note after a slash (`D/F#`). Transposition moves the root and the bass; the
//! suffix is carried over byte for byte.

use crate::keys::transpose_note;
use regex::Regex;
use std::sync::LazyLock;

// Quality markers accepted by the line heuristic, in any order and repetition.
// Digits are spelled [0-9] so only ASCII digits count.
const CHORD_BODY: &str = r"[A-G][b#]?(?:m|M|maj|min|dim|aug|sus|add|[0-9])*(?:/[A-G][b#]?)?";

/// A whole token that looks like a chord symbol
static CHORD_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{CHORD_BODY})$")).expect("chord token pattern"));

/// Chord-shaped runs anywhere inside a line
pub(crate) static CHORD_IN_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CHORD_BODY).expect("chord line pattern"));

/// True if the whole token matches the chord-symbol pattern.
///
/// # Examples
/// ```
/// use cifra::chord::is_chord_token;
///
/// assert!(is_chord_token("C#m7"));
/// assert!(is_chord_token("D/F#"));
/// assert!(is_chord_token("Gsus4"));
/// assert!(!is_chord_token("Deus"));
/// ```
pub fn is_chord_token(token: &str) -> bool {
    CHORD_TOKEN_RE.is_match(token)
}

/// A chord symbol split into its parts, borrowing from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordSymbol<'a> {
    /// Leading note as written ("C#", "Bb")
    pub root: &'a str,
    /// Everything between the root and the slash, untouched by transposition
    pub suffix: &'a str,
    /// Text between the first and second `/`, if not empty
    pub bass: Option<&'a str>,
}

impl<'a> ChordSymbol<'a> {
    /// Split a chord symbol. Returns `None` when it does not start with a note.
    pub fn parse(chord: &'a str) -> Option<Self> {
        let mut parts = chord.split('/');
        let head = parts.next()?;
        let bass = parts.next().filter(|bass| !bass.is_empty());

        let mut chars = head.char_indices();
        match chars.next() {
            Some((_, 'A'..='G')) => {}
            _ => return None,
        }
        let root_end = match chars.next() {
            Some((i, '#' | 'b')) => i + 1,
            _ => 1,
        };

        Some(Self {
            root: &head[..root_end],
            suffix: &head[root_end..],
            bass,
        })
    }

    /// Render the symbol moved by `semitones`. Roots and basses come back
    /// sharp-spelled; a bass that is not a note is kept as written.
    pub fn transpose(&self, semitones: i32) -> String {
        let mut out = transpose_note(self.root, semitones);
        out.push_str(self.suffix);
        if let Some(bass) = self.bass {
            out.push('/');
            out.push_str(&transpose_note(bass, semitones));
        }
        out
    }
}

/// Transpose a single chord symbol.
///
/// Anything that does not start with a note name is returned unchanged.
///
/// # Examples
/// ```
/// use cifra::chord::transpose_chord;
///
/// assert_eq!(transpose_chord("D/F#", 2), "E/G#");
/// assert_eq!(transpose_chord("C#m7", 1), "Dm7");
/// assert_eq!(transpose_chord("N.C.", 3), "N.C.");
/// ```
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    match ChordSymbol::parse(chord) {
        Some(symbol) => symbol.transpose(semitones),
        None => chord.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_tokens() {
        for token in ["C", "Am", "C#m", "Bb", "G7M", "Cmaj7", "Dsus4", "Eadd9", "F#dim", "Caug", "C/E", "Bbm7/Ab", "A7M9"] {
            assert!(is_chord_token(token), "{} should be a chord", token);
        }
        for token in ["", "H", "c", "Am7(9)", "Deus", "Ebo", "C/", "C/H", "é"] {
            assert!(!is_chord_token(token), "{} should not be a chord", token);
        }
    }

    #[test]
    fn test_unicode_digits_are_not_qualities() {
        assert!(!is_chord_token("C٣"));
    }

    #[test]
    fn test_parse_chord_symbol() {
        let symbol = ChordSymbol::parse("Bbm7/Ab").unwrap();
        assert_eq!(symbol.root, "Bb");
        assert_eq!(symbol.suffix, "m7");
        assert_eq!(symbol.bass, Some("Ab"));

        let symbol = ChordSymbol::parse("E").unwrap();
        assert_eq!(symbol.root, "E");
        assert_eq!(symbol.suffix, "");
        assert_eq!(symbol.bass, None);

        assert!(ChordSymbol::parse("x7").is_none());
        assert!(ChordSymbol::parse("").is_none());
    }

    #[test]
    fn test_transpose_chord_with_bass() {
        assert_eq!(transpose_chord("D/F#", 2), "E/G#");
        assert_eq!(transpose_chord("G/B", -2), "F/A");
        assert_eq!(transpose_chord("Am/G", 3), "Cm/A#");
    }

    #[test]
    fn test_suffix_preserved() {
        assert_eq!(transpose_chord("C#m7", 1), "Dm7");
        assert_eq!(transpose_chord("Cmaj7", 2), "Dmaj7");
        assert_eq!(transpose_chord("Gsus4", 5), "Csus4");
        assert_eq!(transpose_chord("Bbadd9", 1), "Badd9");
    }

    #[test]
    fn test_unrecognised_parts_pass_through() {
        assert_eq!(transpose_chord("Intro", 2), "Intro");
        assert_eq!(transpose_chord("C/x", 2), "D/x");
    }

    #[test]
    fn test_extra_slash_parts_and_empty_bass() {
        assert_eq!(transpose_chord("C/E/G", 2), "D/F#");
        assert_eq!(transpose_chord("C/", 2), "D");
        assert_eq!(ChordSymbol::parse("C/").unwrap().bass, None);
    }
}

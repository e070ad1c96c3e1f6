//! # Keys and Pitch Classes
//!
//! Pitch arithmetic for chord transposition.
//!
//! All arithmetic happens on the twelve sharp-spelled pitch classes
//! (`C C# D D# E F F# G G# A A# B`). Flat spellings (`Db Eb Gb Ab Bb`) and the
//! exotic enharmonics (`Cb Fb B# E#`) are normalised through a fixed table
//! before any index lookup, so a transposed note always comes back sharp-spelled.
//! Anything that is not a note name passes through untouched.
//!
//! ## Example
//! ```rust
//! use cifra::keys::{semitones_between, transpose_note};
//!
//! assert_eq!(transpose_note("Bb", 2), "C");
//! assert_eq!(transpose_note("H", 2), "H");
//! assert_eq!(semitones_between("G", "C"), -7);
//! ```

use crate::error::CifraError;
use std::fmt;
use std::str::FromStr;

/// Canonical sharp spelling, indexed by semitone distance from C
pub const NOTES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Map flat and exotic spellings onto the sharp set
fn enharmonic(name: &str) -> &str {
    match name {
        "Db" => "C#",
        "Eb" => "D#",
        "Gb" => "F#",
        "Ab" => "G#",
        "Bb" => "A#",
        "Cb" => "B",
        "Fb" => "E",
        "B#" => "C",
        "E#" => "F",
        other => other,
    }
}

/// One of the twelve pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Note {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Note {
    const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Parse a bare note name in any supported spelling ("C#", "Db", "Cb", ...).
    /// Quality suffixes are not accepted here; "Am" is not a note.
    pub fn parse(name: &str) -> Option<Self> {
        let sharp = enharmonic(name);
        NOTES_SHARP
            .iter()
            .position(|n| *n == sharp)
            .map(Self::from_index)
    }

    /// Note at the given semitone distance from C (wraps past B)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Semitone distance from C, 0 to 11
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sharp-spelled name
    pub fn name(self) -> &'static str {
        NOTES_SHARP[self.index()]
    }

    /// Move by a signed number of semitones, wrapping modulo 12
    pub fn transpose(self, semitones: i32) -> Self {
        // Reduce first so large offsets cannot overflow the addition
        let shift = semitones.rem_euclid(12) as usize;
        Self::from_index(self.index() + shift)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = CifraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s.trim()).ok_or_else(|| CifraError::UnknownKey(s.to_string()))
    }
}

/// Transpose a bare note name.
///
/// The result is always sharp-spelled. A name that is not a note is returned
/// unchanged.
///
/// # Examples
/// ```
/// use cifra::keys::transpose_note;
///
/// assert_eq!(transpose_note("C", 1), "C#");
/// assert_eq!(transpose_note("Eb", 2), "F");
/// assert_eq!(transpose_note("C", -1), "B");
/// assert_eq!(transpose_note("X", 5), "X");
/// ```
pub fn transpose_note(name: &str, semitones: i32) -> String {
    match Note::parse(name) {
        Some(note) => note.transpose(semitones).name().to_string(),
        None => name.to_string(),
    }
}

/// Normalise a key name for distance calculation.
///
/// Trims surrounding whitespace, drops a trailing minor `m` and then a
/// trailing `M` (keys are compared by root only), then applies the enharmonic
/// table. An empty key is `C`.
pub fn normalize_key(key: &str) -> String {
    let key = key.trim();
    if key.is_empty() {
        return "C".to_string();
    }
    let root = key.strip_suffix('m').unwrap_or(key);
    let root = root.strip_suffix('M').unwrap_or(root);
    enharmonic(root).to_string()
}

/// Strict key lookup: the normalised root of `key` as a pitch class.
pub fn parse_key(key: &str) -> Result<Note, CifraError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(CifraError::UnknownKey(key.to_string()));
    }
    Note::parse(&normalize_key(trimmed)).ok_or_else(|| CifraError::UnknownKey(key.to_string()))
}

/// Semitone offset that takes `original_key` to `target_key`.
///
/// This is the raw index difference in the sharp scale, not the shortest path:
/// `G` to `C` is `-7`, not `+5`. Returns 0 if either key is unrecognised.
pub fn semitones_between(original_key: &str, target_key: &str) -> i32 {
    let original = Note::parse(&normalize_key(original_key));
    let target = Note::parse(&normalize_key(target_key));

    match (original, target) {
        (Some(original), Some(target)) => target.index() as i32 - original.index() as i32,
        _ => 0,
    }
}

/// A stored key choice for a song in a service.
///
/// Newer records hold a key name ("D", "G#"); older ones hold a signed
/// semitone offset ("+2", "-3").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySelection {
    Key(String),
    Offset(i32),
}

impl KeySelection {
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('+')
            .or_else(|| trimmed.strip_prefix('-'))
            .unwrap_or(trimmed);

        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(offset) = trimmed.trim_start_matches('+').parse::<i32>() {
                return KeySelection::Offset(offset);
            }
        }
        KeySelection::Key(trimmed.to_string())
    }

    /// Offset to apply to a sheet written in `original_key`
    pub fn semitones_from(&self, original_key: &str) -> i32 {
        match self {
            KeySelection::Key(key) => semitones_between(original_key, key),
            KeySelection::Offset(offset) => *offset,
        }
    }

    /// Key name the selection lands on when starting from `original_key`
    pub fn resolve_key(&self, original_key: &str) -> String {
        match self {
            KeySelection::Key(key) => key.clone(),
            KeySelection::Offset(offset) => transpose_note(&normalize_key(original_key), *offset),
        }
    }
}

//! Stored lyrics content and its display text
//!
//! The song library stores lyrics in one of three forms: a plain sheet
//! string, a grouped hymn record, or a list of sections. [`LyricsContent`]
//! decodes whichever one is stored, once, and [`LyricsContent::to_display_text`]
//! turns it into the sheet text the viewer classifies and transposes.

use crate::classify::{parse_song, LineKind};
use crate::error::CifraError;
use crate::sections::SongSections;
use regex::Regex;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static LINE_BREAK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break tag pattern"));

/// Replace HTML line break tags (imported hymn texts carry them) with newlines
fn br_to_newline(text: &str) -> String {
    LINE_BREAK_TAG_RE.replace_all(text, "\n").into_owned()
}

/// Lyrics content as stored for a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LyricsContent {
    Text(String),
    Sections(SongSections),
}

impl LyricsContent {
    /// Decode stored content.
    ///
    /// Input that is not JSON at all is a plain sheet. JSON must be a string,
    /// a section list or a grouped record; `null` is empty text.
    ///
    /// # Errors
    /// Returns [`CifraError::ContentError`] for JSON of any other shape.
    pub fn from_json(raw: &str) -> Result<Self, CifraError> {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => serde_json::from_value(value).map_err(|e| CifraError::ContentError(e.to_string())),
            Err(_) => {
                log::debug!("stored content is not JSON, reading it as a plain sheet");
                Ok(LyricsContent::Text(raw.to_string()))
            }
        }
    }

    /// Flatten to sheet text.
    ///
    /// Grouped hymns put the chorus first, then each verse under a `[key]`
    /// header; section lists are joined with blank lines.
    ///
    /// # Example
    /// ```
    /// use cifra::display::LyricsContent;
    ///
    /// let stored = r#"{"coro":"Vem<br>Senhor","verses":{"1":"Primeiro","2":"Segundo"}}"#;
    /// let content = LyricsContent::from_json(stored).unwrap();
    /// assert_eq!(
    ///     content.to_display_text(),
    ///     "[Coro]\nVem\nSenhor\n\n[1]\nPrimeiro\n\n[2]\nSegundo"
    /// );
    /// ```
    pub fn to_display_text(&self) -> String {
        match self {
            LyricsContent::Text(text) => text.clone(),
            LyricsContent::Sections(SongSections::Grouped(grouped)) => {
                let mut out = String::new();
                if let Some(coro) = grouped.chorus() {
                    out.push_str(&format!("[Coro]\n{}\n\n", br_to_newline(coro)));
                }
                let verses: Vec<String> = grouped
                    .verses
                    .iter()
                    .map(|(key, text)| format!("[{}]\n{}", key, br_to_newline(text)))
                    .collect();
                out.push_str(&verses.join("\n\n"));
                out
            }
            LyricsContent::Sections(SongSections::Linear(sections)) => sections
                .iter()
                .map(|section| section.content.as_str())
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

impl<'de> Deserialize<'de> for LyricsContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ContentVisitor;

        impl<'de> Visitor<'de> for ContentVisitor {
            type Value = LyricsContent;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("sheet text, a list of sections or a {verses, coro} record")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(LyricsContent::Text(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(LyricsContent::Text(v))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(LyricsContent::Text(String::new()))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(LyricsContent::Text(String::new()))
            }

            fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                SongSections::deserialize(SeqAccessDeserializer::new(seq)).map(LyricsContent::Sections)
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                SongSections::deserialize(MapAccessDeserializer::new(map)).map(LyricsContent::Sections)
            }
        }

        deserializer.deserialize_any(ContentVisitor)
    }
}

/// Drop the chord lines of a sheet, keeping lyrics, headers and blank lines
pub fn lyrics_only(text: &str) -> String {
    parse_song(text)
        .into_iter()
        .filter(|line| line.kind != LineKind::Chords)
        .map(|line| line.content)
        .collect::<Vec<_>>()
        .join("\n")
}

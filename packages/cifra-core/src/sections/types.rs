//! Structured song sections and the category that selects their shape

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Song category as stored by the scheduling app.
///
/// Hymnal songs (Harpa Cristã) are kept as numbered verses plus one chorus;
/// everything else keeps its sections in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SongCategory {
    #[default]
    #[serde(rename = "Louvor", alias = "general")]
    General,
    #[serde(rename = "Harpa Cristã", alias = "hymnal")]
    Hymnal,
}

impl SongCategory {
    /// Parse a category name, case-insensitively. Accepts the stored names
    /// ("Louvor", "Harpa Cristã") and the plain aliases ("general", "hymnal").
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "louvor" | "general" => Some(SongCategory::General),
            "harpa cristã" | "harpa crista" | "harpa" | "hymnal" => Some(SongCategory::Hymnal),
            _ => None,
        }
    }

    /// Name as stored in the song record
    pub fn as_str(&self) -> &'static str {
        match self {
            SongCategory::General => "Louvor",
            SongCategory::Hymnal => "Harpa Cristã",
        }
    }
}

/// Kind of a lyric section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Verse,
    Chorus,
    Bridge,
}

impl SectionKind {
    /// Header text used when a section carries no label of its own
    pub fn default_label(&self) -> &'static str {
        match self {
            SectionKind::Verse => "Verso",
            SectionKind::Chorus => "Coro",
            SectionKind::Bridge => "Ponte",
        }
    }
}

/// One section of a song in the linear shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub content: String,
}

impl Section {
    pub fn new(kind: SectionKind, label: Option<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            label,
            content: content.into(),
        }
    }
}

/// Key of a verse in the grouped shape: a verse number ("1", "2") or a
/// bridge label ("Ponte", "Ponte 2").
///
/// Numeric keys sort by value and come before every other key; the rest
/// sort as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerseKey(String);

impl VerseKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The verse number, if the key is made of ASCII digits only
    pub fn number(&self) -> Option<u64> {
        if !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit()) {
            self.0.parse().ok()
        } else {
            None
        }
    }
}

impl Ord for VerseKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for VerseKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for VerseKey {
    fn from(s: &str) -> Self {
        VerseKey(s.to_string())
    }
}

impl From<String> for VerseKey {
    fn from(s: String) -> Self {
        VerseKey(s)
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hymnal shape: verses keyed by number or bridge label, plus one shared chorus
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupedSections {
    pub verses: BTreeMap<VerseKey, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coro: Option<String>,
}

impl GroupedSections {
    pub fn verse(&self, key: &str) -> Option<&str> {
        self.verses.get(&VerseKey::from(key)).map(String::as_str)
    }

    /// The chorus, unless it is missing or blank
    pub fn chorus(&self) -> Option<&str> {
        self.coro.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Structured lyrics in exactly one of the two shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SongSections {
    /// Sections in sheet order (general repertoire)
    Linear(Vec<Section>),
    /// Numbered verses and one chorus (hymnal)
    Grouped(GroupedSections),
}

impl SongSections {
    pub fn is_empty(&self) -> bool {
        match self {
            SongSections::Linear(sections) => sections.is_empty(),
            SongSections::Grouped(grouped) => grouped.verses.is_empty() && grouped.chorus().is_none(),
        }
    }
}

// A JSON array is the linear shape and a JSON object is the grouped shape.
// Deciding on the container type keeps a malformed list from being read as
// a grouped record.
impl<'de> Deserialize<'de> for SongSections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ShapeVisitor;

        impl<'de> Visitor<'de> for ShapeVisitor {
            type Value = SongSections;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a list of sections or a {verses, coro} record")
            }

            fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                Vec::<Section>::deserialize(SeqAccessDeserializer::new(seq)).map(SongSections::Linear)
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                GroupedSections::deserialize(MapAccessDeserializer::new(map))
                    .map(SongSections::Grouped)
            }
        }

        deserializer.deserialize_any(ShapeVisitor)
    }
}

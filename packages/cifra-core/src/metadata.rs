//! YAML frontmatter for chord sheets
//!
//! A sheet file may start with a metadata block between `---` lines:
//!
//! ```text
//! ---
//! title: Santo
//! artist: Ministério
//! tone: D
//! category: Louvor
//! ---
//! [Verso]
//! D        A
//! Santo, Santo
//! ```
//!
//! The block is only recognised at the top of the file (blank lines before it
//! are allowed), so a `---` rule inside the lyrics stays part of the body.

use crate::error::CifraError;
use crate::sections::SongCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw metadata for YAML (de)serialization
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

/// Song metadata from a sheet's frontmatter
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SongMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    /// Key the sheet is written in
    pub tone: Option<String>,
    pub category: SongCategory,
    /// Any other keys (`capo`, `bpm`, ...), written back unchanged
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl SongMetadata {
    /// Parse the YAML between the `---` markers. An empty block is default metadata.
    pub fn from_yaml(content: &str) -> Result<Self, CifraError> {
        if content.trim().is_empty() {
            return Ok(SongMetadata::default());
        }

        let raw: RawMetadata =
            serde_yaml::from_str(content).map_err(|e| CifraError::MetadataError(e.to_string()))?;

        let category = match &raw.category {
            Some(name) => SongCategory::from_name(name)
                .ok_or_else(|| CifraError::MetadataError(format!("Unknown category: {}", name)))?,
            None => SongCategory::default(),
        };

        Ok(SongMetadata {
            title: raw.title,
            artist: raw.artist,
            tone: raw.tone,
            category,
            extra: raw.extra,
        })
    }

    /// The sheet's key, `C` when none is given
    pub fn tone_or_default(&self) -> &str {
        self.tone.as_deref().unwrap_or("C")
    }

    /// Render as a frontmatter block, `---` lines included
    pub fn to_frontmatter(&self) -> Result<String, CifraError> {
        let raw = RawMetadata {
            title: self.title.clone(),
            artist: self.artist.clone(),
            tone: self.tone.clone(),
            category: Some(self.category.as_str().to_string()),
            extra: self.extra.clone(),
        };
        let yaml = serde_yaml::to_string(&raw).map_err(|e| CifraError::MetadataError(e.to_string()))?;
        Ok(format!("---\n{}---\n", yaml))
    }
}

/// Split a sheet into its frontmatter and body.
///
/// Without a frontmatter block (or with an unterminated one) the metadata is
/// the default and the body is the whole source.
///
/// # Errors
/// Returns [`CifraError::MetadataError`] when the block is not valid metadata.
///
/// # Example
/// ```
/// use cifra::metadata::split_frontmatter;
///
/// let (metadata, body) = split_frontmatter("---\ntone: D\n---\nD A\nSanto").unwrap();
/// assert_eq!(metadata.tone.as_deref(), Some("D"));
/// assert_eq!(body, "D A\nSanto");
/// ```
pub fn split_frontmatter(source: &str) -> Result<(SongMetadata, &str), CifraError> {
    let mut offset = 0;
    let mut yaml_start: Option<usize> = None;

    for line in source.split_inclusive('\n') {
        let end = offset + line.len();
        let trimmed = line.trim();

        match yaml_start {
            None if trimmed.is_empty() => {}
            None if trimmed == "---" => yaml_start = Some(end),
            None => break,
            Some(start) if trimmed == "---" => {
                let metadata = SongMetadata::from_yaml(&source[start..offset])?;
                return Ok((metadata, &source[end..]));
            }
            Some(_) => {}
        }
        offset = end;
    }

    if yaml_start.is_some() {
        log::debug!("frontmatter block is never closed, reading the whole file as the sheet");
    }
    Ok((SongMetadata::default(), source))
}

//! # Public API
//!
//! Whole-sheet entry points that combine frontmatter handling with
//! transposition.
//!
//! - [`retune()`] - Rewrite a sheet into another key, frontmatter included
//! - [`render_sheet()`] - Sheet body as shown to a musician, for a stored key choice
//!
//! ## Typical Usage
//!
//! ```rust
//! use cifra::{render_sheet, KeySelection};
//!
//! let source = "---\ntitle: Santo\ntone: G\n---\nG       D\nSanto, Santo";
//!
//! let shown = render_sheet(source, Some(&KeySelection::parse("A")), false)?;
//! assert_eq!(shown, "A       E\nSanto, Santo");
//!
//! let words = render_sheet(source, None, true)?;
//! assert_eq!(words, "Santo, Santo");
//! # Ok::<(), cifra::CifraError>(())
//! ```

use crate::keys::{parse_key, semitones_between, KeySelection};
use crate::metadata::split_frontmatter;
use crate::transpose::transpose_song;
use crate::CifraError;

/// Rewrite a sheet into `target_key`.
///
/// The body is transposed by the distance from the frontmatter `tone` (or `C`
/// when there is none) to the target, and the frontmatter is rewritten with
/// the new tone. A sheet without frontmatter gets one.
///
/// # Example
/// ```rust
/// use cifra::retune;
///
/// let sheet = retune("---\ntone: G\n---\nG  D\nSanto", "A")?;
/// assert_eq!(sheet, "---\ntone: A\ncategory: Louvor\n---\nA  E\nSanto");
/// # Ok::<(), cifra::CifraError>(())
/// ```
///
/// # Errors
/// Returns [`CifraError::UnknownKey`] if `target_key` or the sheet's `tone`
/// is not a key, or [`CifraError::MetadataError`] if the frontmatter is invalid.
pub fn retune(source: &str, target_key: &str) -> Result<String, CifraError> {
    let target_key = target_key.trim();
    parse_key(target_key)?;
    let (mut metadata, body) = split_frontmatter(source)?;
    parse_key(metadata.tone_or_default())?;

    let semitones = semitones_between(metadata.tone_or_default(), target_key);
    log::debug!(
        "retuning from {} to {} ({:+} semitones)",
        metadata.tone_or_default(),
        target_key,
        semitones
    );

    let body = transpose_song(body, semitones);
    metadata.tone = Some(target_key.to_string());
    Ok(format!("{}{}", metadata.to_frontmatter()?, body))
}

/// Render the body of a sheet for a stored key choice.
///
/// `selection` is a key name or a legacy semitone offset, applied relative to
/// the frontmatter `tone`. With `lyrics_only` the chord lines are dropped
/// after transposition.
///
/// # Errors
/// Returns [`CifraError::MetadataError`] if the frontmatter is invalid.
pub fn render_sheet(
    source: &str,
    selection: Option<&KeySelection>,
    lyrics_only: bool,
) -> Result<String, CifraError> {
    let (metadata, body) = split_frontmatter(source)?;
    let semitones = selection
        .map(|s| s.semitones_from(metadata.tone_or_default()))
        .unwrap_or(0);

    let text = transpose_song(body, semitones);
    Ok(if lyrics_only {
        crate::display::lyrics_only(&text)
    } else {
        text
    })
}

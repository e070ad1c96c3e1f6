//! Subcommand bodies for the `cifra` binary
//!
//! Each command takes the input text and returns the text to write, so the
//! binary only deals with arguments, files and exit codes.

use crate::error::CliError;
use cifra::keys::parse_key;
use cifra::{
    parse_song, render_sheet, split_frontmatter, KeySelection, LyricsContent, SongCategory,
};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// How far to move a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shift {
    Semitones(i32),
    /// To a key, from `from` or the sheet's own tone
    ToKey { to: String, from: Option<String> },
}

/// Read a whole input file, `-` meaning stdin
pub fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write to `output`, or print to stdout when there is none
pub fn write_output(output: Option<&Path>, text: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, text).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Transpose the body of a sheet. The frontmatter, if any, is copied through
/// as written.
pub fn transpose(source: &str, shift: &Shift) -> Result<String, CliError> {
    let (metadata, body) = split_frontmatter(source)?;
    let semitones = match shift {
        Shift::Semitones(n) => *n,
        Shift::ToKey { to, from } => {
            let to = to.trim();
            let from = from.as_deref().unwrap_or_else(|| metadata.tone_or_default()).trim();
            parse_key(to)?;
            parse_key(from)?;
            cifra::semitones_between(from, to)
        }
    };
    log::info!("transposing by {:+} semitones", semitones);

    let frontmatter = &source[..source.len() - body.len()];
    Ok(format!("{}{}", frontmatter, cifra::transpose_song(body, semitones)))
}

/// One `kind<TAB>line` row per line of the sheet body
pub fn classify(source: &str) -> Result<String, CliError> {
    let (_, body) = split_frontmatter(source)?;
    let rows: Vec<String> = parse_song(body)
        .iter()
        .map(|line| {
            let kind = match line.kind {
                cifra::LineKind::Empty => "empty",
                cifra::LineKind::Header => "header",
                cifra::LineKind::Chords => "chords",
                cifra::LineKind::Lyrics => "lyrics",
            };
            format!("{}\t{}", kind, line.content)
        })
        .collect();
    Ok(rows.join("\n"))
}

/// Structured sections of a tagged sheet as pretty JSON (`null` when blank).
///
/// The category comes from the argument, else the frontmatter.
pub fn sections(source: &str, category: Option<SongCategory>) -> Result<String, CliError> {
    let (metadata, body) = split_frontmatter(source)?;
    let category = category.unwrap_or(metadata.category);
    log::debug!("parsing sections as {}", category.as_str());
    let sections = cifra::parse_tagged_text(body, category);
    Ok(serde_json::to_string_pretty(&sections)?)
}

/// Tagged text for stored content. Section lists and `{verses, coro}` records
/// are formatted; plain text is returned as it is.
pub fn format(stored: &str) -> Result<String, CliError> {
    Ok(match LyricsContent::from_json(stored)? {
        LyricsContent::Text(text) => text,
        LyricsContent::Sections(sections) => cifra::format_sections(&sections),
    })
}

/// Display text for stored content (plain sheet or JSON), transposed for
/// `key` and optionally reduced to lyrics
pub fn show(stored: &str, key: Option<&str>, lyrics_only: bool) -> Result<String, CliError> {
    let text = LyricsContent::from_json(stored)?.to_display_text();
    let selection = key.map(KeySelection::parse);
    Ok(render_sheet(&text, selection.as_ref(), lyrics_only)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "---\ntitle: Santo\ntone: D\n---\n[Verso]\nD    A\nSanto\n[Coro]\nG\nAleluia";

    #[test]
    fn test_transpose_keeps_frontmatter() {
        let out = transpose(SHEET, &Shift::Semitones(2)).unwrap();
        assert!(out.starts_with("---\ntitle: Santo\ntone: D\n---\n"));
        assert!(out.contains("E    B\nSanto"));
    }

    #[test]
    fn test_transpose_to_key_uses_tone() {
        let shift = Shift::ToKey {
            to: "E".to_string(),
            from: None,
        };
        assert!(transpose(SHEET, &shift).unwrap().contains("E    B\nSanto"));

        let shift = Shift::ToKey {
            to: "E".to_string(),
            from: Some("C".to_string()),
        };
        assert!(transpose("C G\nLetra", &shift).unwrap().starts_with("E B"));
    }

    #[test]
    fn test_transpose_to_unknown_key() {
        let shift = Shift::ToKey {
            to: "H".to_string(),
            from: None,
        };
        assert!(matches!(
            transpose(SHEET, &shift),
            Err(CliError::Cifra(cifra::CifraError::UnknownKey(_)))
        ));
    }

    #[test]
    fn test_transpose_to_padded_key() {
        let shift = Shift::ToKey {
            to: " E ".to_string(),
            from: Some(" D".to_string()),
        };
        assert!(transpose(SHEET, &shift).unwrap().contains("E    B\nSanto"));
    }

    #[test]
    fn test_transpose_from_unknown_sheet_tone() {
        let shift = Shift::ToKey {
            to: "E".to_string(),
            from: None,
        };
        assert!(matches!(
            transpose("---\ntone: H\n---\nD A", &shift),
            Err(CliError::Cifra(cifra::CifraError::UnknownKey(_)))
        ));
    }

    #[test]
    fn test_classify_rows() {
        let rows = classify("[Verso]\nD  A\nSanto\n").unwrap();
        assert_eq!(rows, "header\t[Verso]\nchords\tD  A\nlyrics\tSanto\nempty\t");
    }

    #[test]
    fn test_sections_category_from_frontmatter() {
        let hymn = "---\ncategory: Harpa Cristã\n---\n[Verso]\nUm\n[Coro]\nC";
        let json = sections(hymn, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verses"]["1"], "Um");
        assert_eq!(value["coro"], "C");

        let json = sections(hymn, Some(SongCategory::General)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["label"], "Verso 1");

        assert_eq!(sections("  ", None).unwrap(), "null");
    }

    #[test]
    fn test_format_json() {
        let text = format(r#"{"verses":{"2":"Dois","1":"Um"}}"#).unwrap();
        assert_eq!(text, "[Verso 1]\nUm\n\n[Verso 2]\nDois");
        assert_eq!(format("[Verso]\nUm").unwrap(), "[Verso]\nUm");
        assert!(matches!(
            format("42"),
            Err(CliError::Cifra(cifra::CifraError::ContentError(_)))
        ));
    }

    #[test]
    fn test_show_stored_hymn() {
        let stored = r#"{"verses":{"1":"G  D<br>Um"},"coro":"C"}"#;
        assert_eq!(show(stored, None, false).unwrap(), "[Coro]\nC\n\n[1]\nG  D\nUm");
        assert_eq!(show(stored, Some("+2"), false).unwrap(), "[Coro]\nD\n\n[1]\nA  E\nUm");
        assert_eq!(show(stored, None, true).unwrap(), "[Coro]\n\n[1]\nUm");
    }
}

//! Integration tests for the cifra library
//!
//! Exercises whole sheets through the public API: classification,
//! transposition, tagged sections and the frontmatter-aware entry points.

use cifra::keys::transpose_note;
use cifra::transpose::transpose_line;
use cifra::{
    classify, format_sections, parse_song, parse_tagged_text, render_sheet, retune,
    split_frontmatter, transpose_song, CifraError, GroupedSections, KeySelection, LineKind,
    LyricsContent, Section, SectionKind, SongCategory, SongSections,
};

const SHEET: &str = "[Intro]
G  D/F#  Em7  C9

[Verso 1]
G                D/F#
Quão grande és tu, Senhor
Em7          C9
Meu coração Te louva

[Refrão]
C#m7    F#sus4   B
Santo, Santo, Santo
";

#[test]
fn test_zero_transpose_is_identity() {
    for text in [SHEET, "", "\n\n", "Só letra\r\ncom CRLF\r\n", "  A   E  \n"] {
        assert_eq!(transpose_song(text, 0), text);
    }
}

#[test]
fn test_round_trip_transpose() {
    for semitones in [-13, -7, -1, 1, 5, 11, 12, 25] {
        let there = transpose_song(SHEET, semitones);
        assert_eq!(transpose_song(&there, -semitones), SHEET, "offset {}", semitones);
    }
}

#[test]
fn test_round_trip_respells_flats_as_sharps() {
    let sheet = "Bb   Eb/G\nGlória";
    let back = transpose_song(&transpose_song(sheet, 3), -3);
    assert_eq!(back, "A#   D#/G\nGlória");
}

#[test]
fn test_modular_closure() {
    for note in ["C", "C#", "Db", "E", "Fb", "B#", "Ab", "B"] {
        for semitones in -15..15 {
            assert_eq!(transpose_note(note, semitones), transpose_note(note, semitones + 12));
        }
    }
}

#[test]
fn test_alignment_is_preserved() {
    let line = "C#m7    F#sus4   B";
    let moved = transpose_line(line, 1);
    assert_eq!(moved, "Dm7    Gsus4   C");

    let gaps = |l: &str| -> Vec<usize> {
        l.split(|c: char| !c.is_whitespace())
            .filter(|gap| !gap.is_empty())
            .map(str::len)
            .collect()
    };
    assert_eq!(gaps(line), gaps(&moved));
}

#[test]
fn test_line_count_is_preserved() {
    let moved = transpose_song(SHEET, 4);
    assert_eq!(moved.split('\n').count(), SHEET.split('\n').count());
    assert!(moved.contains("Quão grande és tu, Senhor"));
    assert!(moved.contains("[Verso 1]"));
}

#[test]
fn test_classifier() {
    assert_eq!(classify("[Chorus]"), LineKind::Header);
    assert_eq!(classify("D        A"), LineKind::Chords);
    assert_eq!(classify("Deus é tão bom"), LineKind::Lyrics);
    assert_eq!(classify(""), LineKind::Empty);
    assert_eq!(classify("   "), LineKind::Empty);

    let kinds: Vec<LineKind> = parse_song(SHEET).into_iter().map(|l| l.kind).collect();
    assert_eq!(&kinds[..4], &[LineKind::Header, LineKind::Chords, LineKind::Empty, LineKind::Header]);
}

#[test]
fn test_chords_with_bass_and_suffix() {
    assert_eq!(cifra::chord::transpose_chord("D/F#", 2), "E/G#");
    assert_eq!(cifra::chord::transpose_chord("C#m7", 1), "Dm7");
}

#[test]
fn test_tagged_parse_without_tags() {
    assert_eq!(
        parse_tagged_text("Hello world", SongCategory::General),
        Some(SongSections::Linear(vec![Section::new(SectionKind::Verse, None, "Hello world")]))
    );

    let mut grouped = GroupedSections::default();
    grouped.verses.insert("1".into(), "Hello world".to_string());
    assert_eq!(
        parse_tagged_text("Hello world", SongCategory::Hymnal),
        Some(SongSections::Grouped(grouped))
    );
}

#[test]
fn test_tagged_parse_with_tags() {
    let parsed = parse_tagged_text("[Verse]\nLine A\n[Chorus]\nLine B\n[Verse]\nLine C", SongCategory::General);
    assert_eq!(
        parsed,
        Some(SongSections::Linear(vec![
            Section::new(SectionKind::Verse, Some("Verso 1".to_string()), "Line A"),
            Section::new(SectionKind::Chorus, None, "Line B"),
            Section::new(SectionKind::Verse, Some("Verso 2".to_string()), "Line C"),
        ]))
    );
}

#[test]
fn test_sections_json_shapes() {
    let linear = parse_tagged_text("[Verse]\nA\n[Chorus]\nB", SongCategory::General).unwrap();
    assert_eq!(
        serde_json::to_string(&linear).unwrap(),
        r#"[{"type":"verse","label":"Verso 1","content":"A"},{"type":"chorus","content":"B"}]"#
    );

    let grouped = parse_tagged_text("[Verso]\nA\n[Coro]\nB", SongCategory::Hymnal).unwrap();
    assert_eq!(serde_json::to_string(&grouped).unwrap(), r#"{"verses":{"1":"A"},"coro":"B"}"#);
}

#[test]
fn test_stored_hymn_to_display_and_back() {
    let stored = r#"{"verses":{"2":"Segundo","1":"Primeiro"},"coro":"Aleluia"}"#;
    let content = LyricsContent::from_json(stored).unwrap();
    assert_eq!(
        content.to_display_text(),
        "[Coro]\nAleluia\n\n[1]\nPrimeiro\n\n[2]\nSegundo"
    );

    let LyricsContent::Sections(sections) = content else {
        panic!("stored hymn must decode as sections");
    };
    let text = format_sections(&sections);
    assert_eq!(text, "[Verso 1]\nPrimeiro\n\n[Verso 2]\nSegundo\n\n[Coro]\nAleluia");
    assert_eq!(parse_tagged_text(&text, SongCategory::Hymnal), Some(sections));
}

#[test]
fn test_retune_rewrites_tone() {
    let source = "---\ntitle: Quão Grande\ntone: G\n---\nG    D/F#\nQuão grande";
    let sheet = retune(source, "Bb").unwrap();
    let (metadata, body) = split_frontmatter(&sheet).unwrap();
    assert_eq!(metadata.title.as_deref(), Some("Quão Grande"));
    assert_eq!(metadata.tone.as_deref(), Some("Bb"));
    assert_eq!(body, "A#    F/A\nQuão grande");
}

#[test]
fn test_retune_without_frontmatter_assumes_c() {
    let sheet = retune("C  G\nLetra", "D").unwrap();
    assert!(sheet.starts_with("---\n"));
    assert!(sheet.ends_with("D  A\nLetra"));
}

#[test]
fn test_retune_unknown_key() {
    match retune("C G", "H") {
        Err(CifraError::UnknownKey(key)) => assert_eq!(key, "H"),
        other => panic!("expected UnknownKey, got {:?}", other),
    }
}

#[test]
fn test_retune_trims_the_target_key() {
    let sheet = retune("---\ntone: G\n---\nG  D\nSanto", " A ").unwrap();
    let (metadata, body) = split_frontmatter(&sheet).unwrap();
    assert_eq!(metadata.tone.as_deref(), Some("A"));
    assert_eq!(body, "A  E\nSanto");
}

#[test]
fn test_retune_rejects_an_unknown_sheet_tone() {
    match retune("---\ntone: H\n---\nG  D\nSanto", "A") {
        Err(CifraError::UnknownKey(key)) => assert_eq!(key, "H"),
        other => panic!("expected UnknownKey, got {:?}", other),
    }
}

#[test]
fn test_retune_keeps_other_frontmatter_keys() {
    let sheet = retune("---\ntitle: Santo\ntone: D\ncapo: 2\n---\nD  A\nSanto", "E").unwrap();
    let (metadata, body) = split_frontmatter(&sheet).unwrap();
    assert_eq!(metadata.tone.as_deref(), Some("E"));
    assert!(metadata.extra.contains_key("capo"));
    assert!(sheet.contains("capo: 2\n"));
    assert_eq!(body, "E  B\nSanto");
}

#[test]
fn test_render_sheet_with_legacy_offset() {
    let source = "---\ntone: D\n---\nD   A\nSanto";
    let shown = render_sheet(source, Some(&KeySelection::parse("+2")), false).unwrap();
    assert_eq!(shown, "E   B\nSanto");

    let shown = render_sheet(source, Some(&KeySelection::parse("C")), true).unwrap();
    assert_eq!(shown, "Santo");
}

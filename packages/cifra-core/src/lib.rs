pub mod chord;
pub mod classify;
pub mod display;
pub mod error;
pub mod keys;
pub mod metadata;
pub mod sections;
pub mod transpose;

mod api;

pub use api::{render_sheet, retune};
pub use classify::{classify, parse_song, LineKind, ParsedLine};
pub use display::{lyrics_only, LyricsContent};
pub use error::*;
pub use keys::{normalize_key, semitones_between, transpose_note, KeySelection, Note};
pub use metadata::{split_frontmatter, SongMetadata};
pub use sections::{
    format_sections, parse_tagged_text, GroupedSections, Section, SectionKind, SongCategory,
    SongSections, VerseKey,
};
pub use transpose::{transpose_line, transpose_song};

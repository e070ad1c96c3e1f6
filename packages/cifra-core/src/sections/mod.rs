//! # Song Sections
//!
//! Converts free-form lyrics with section tags (`[Verse 1]`, `[Chorus]`,
//! `[Ponte]`, ...) into structured sections, and structured sections back into
//! tagged text.
//!
//! ## Shapes
//! The caller's [`SongCategory`] decides which shape a parse produces; the
//! content never does.
//!
//! ```text
//! SongSections
//!   ├── Linear(Vec<Section>)            general songs, sheet order
//!   │     └── Section { type: verse|chorus|bridge, label?, content }
//!   └── Grouped(GroupedSections)        hymnal songs
//!         ├── verses: "1", "2", ..., "Ponte", "Ponte 2" -> text
//!         └── coro?: text               first chorus only
//! ```
//!
//! ## Sub-modules
//! - `types` - section types, category, verse key ordering, JSON shape decoding
//! - `tags` - recognising tag lines
//! - `parser` - [`parse_tagged_text()`]
//! - `format` - [`format_sections()`]

mod format;
mod parser;
mod tags;
mod types;

pub use format::format_sections;
pub use parser::parse_tagged_text;
pub use tags::section_tag;
pub use types::{GroupedSections, Section, SectionKind, SongCategory, SongSections, VerseKey};

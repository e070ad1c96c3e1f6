//! Tagged text to structured sections

use super::tags::section_tag;
use super::types::{GroupedSections, Section, SectionKind, SongCategory, SongSections, VerseKey};
use crate::classify::split_lines;

/// Accumulates flushed sections into the shape picked by the category
struct SectionCollector {
    sections: SongSections,
    verses: usize,
    bridges: usize,
}

impl SectionCollector {
    fn new(category: SongCategory) -> Self {
        let sections = match category {
            SongCategory::General => SongSections::Linear(Vec::new()),
            SongCategory::Hymnal => SongSections::Grouped(GroupedSections::default()),
        };
        Self {
            sections,
            verses: 0,
            bridges: 0,
        }
    }

    /// Close the current buffer as a section of `kind`. Blank buffers are dropped.
    fn flush(&mut self, kind: SectionKind, buffer: &[&str]) {
        let content = buffer.join("\n").trim().to_string();
        if content.is_empty() {
            return;
        }

        match kind {
            SectionKind::Verse => {
                self.verses += 1;
                match &mut self.sections {
                    SongSections::Linear(list) => {
                        let label = format!("Verso {}", self.verses);
                        list.push(Section::new(kind, Some(label), content));
                    }
                    SongSections::Grouped(grouped) => {
                        grouped.verses.insert(VerseKey::from(self.verses.to_string()), content);
                    }
                }
            }
            SectionKind::Chorus => match &mut self.sections {
                SongSections::Linear(list) => list.push(Section::new(kind, None, content)),
                SongSections::Grouped(grouped) => {
                    if grouped.coro.is_none() {
                        grouped.coro = Some(content);
                    } else {
                        log::debug!("grouped sections keep only the first chorus, dropping {:?}", content);
                    }
                }
            },
            SectionKind::Bridge => {
                self.bridges += 1;
                let label = if self.bridges == 1 {
                    "Ponte".to_string()
                } else {
                    format!("Ponte {}", self.bridges)
                };
                match &mut self.sections {
                    SongSections::Linear(list) => list.push(Section::new(kind, Some(label), content)),
                    SongSections::Grouped(grouped) => {
                        grouped.verses.insert(VerseKey::from(label), content);
                    }
                }
            }
        }
    }
}

/// Parse free-form tagged lyrics into structured sections.
///
/// - Input that already is structured JSON (a section list or a
///   `{verses, coro}` record) is returned as it is.
/// - Blank input yields `None`.
/// - Text without any tag line becomes a single verse.
/// - Otherwise lines are collected until the next tag line and flushed as a
///   section of the kind named by the previous tag. Text before the first tag
///   is a verse. Empty sections are skipped.
///
/// The category picks the shape: linear for general songs, grouped for
/// hymnal songs. In the grouped shape only the first chorus is kept.
///
/// # Examples
/// ```
/// use cifra::sections::{parse_tagged_text, Section, SectionKind, SongCategory, SongSections};
///
/// let parsed = parse_tagged_text("[Verse]\nLine A\n[Chorus]\nLine B", SongCategory::General);
/// assert_eq!(
///     parsed,
///     Some(SongSections::Linear(vec![
///         Section::new(SectionKind::Verse, Some("Verso 1".to_string()), "Line A"),
///         Section::new(SectionKind::Chorus, None, "Line B"),
///     ]))
/// );
/// ```
pub fn parse_tagged_text(input: &str, category: SongCategory) -> Option<SongSections> {
    if input.trim().is_empty() {
        return None;
    }

    if let Ok(sections) = serde_json::from_str::<SongSections>(input) {
        log::debug!("input is already structured, keeping it as is");
        return Some(sections);
    }

    let lines = split_lines(input);

    if !lines.iter().any(|line| section_tag(line).is_some()) {
        log::debug!("no section tags, wrapping the text as one verse ({:?})", category);
        let content = input.trim().to_string();
        return Some(match category {
            SongCategory::General => {
                SongSections::Linear(vec![Section::new(SectionKind::Verse, None, content)])
            }
            SongCategory::Hymnal => {
                let mut grouped = GroupedSections::default();
                grouped.verses.insert(VerseKey::from("1"), content);
                SongSections::Grouped(grouped)
            }
        });
    }

    let mut collector = SectionCollector::new(category);
    let mut active = SectionKind::Verse;
    let mut buffer: Vec<&str> = Vec::new();

    for line in lines {
        match section_tag(line) {
            Some(kind) => {
                collector.flush(active, &buffer);
                buffer.clear();
                active = kind;
            }
            None => buffer.push(line),
        }
    }
    collector.flush(active, &buffer);

    log::debug!("parsed tagged text into {:?} sections", category);
    Some(collector.sections)
}

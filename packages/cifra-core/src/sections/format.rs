//! Structured sections back to display text

use super::types::{GroupedSections, Section, SongSections};

fn format_grouped(grouped: &GroupedSections) -> Vec<String> {
    let mut blocks: Vec<String> = grouped
        .verses
        .iter()
        .map(|(key, text)| format!("[Verso {}]\n{}\n", key, text))
        .collect();
    if let Some(coro) = grouped.chorus() {
        blocks.push(format!("[Coro]\n{}\n", coro));
    }
    blocks
}

fn format_linear(sections: &[Section]) -> Vec<String> {
    sections
        .iter()
        .map(|section| {
            let label = section
                .label
                .as_deref()
                .unwrap_or_else(|| section.kind.default_label());
            format!("[{}]\n{}\n", label, section.content)
        })
        .collect()
}

/// Render structured sections as tagged text, one block per section separated
/// by a blank line.
///
/// Grouped verses come out in key order (numbers by value, then labels) with
/// the chorus last. Linear sections keep their order and use their label, or
/// the kind's name when they have none.
///
/// # Examples
/// ```
/// use cifra::sections::{format_sections, parse_tagged_text, SongCategory};
///
/// let hymn = parse_tagged_text("[Coro]\nAleluia\n[Verso]\nUm\n[Verso]\nDois", SongCategory::Hymnal).unwrap();
/// assert_eq!(
///     format_sections(&hymn),
///     "[Verso 1]\nUm\n\n[Verso 2]\nDois\n\n[Coro]\nAleluia"
/// );
/// ```
pub fn format_sections(sections: &SongSections) -> String {
    let blocks = match sections {
        SongSections::Grouped(grouped) => format_grouped(grouped),
        SongSections::Linear(list) => format_linear(list),
    };
    blocks.join("\n").trim_end().to_string()
}

//! Section tag lines
//!
//! A tag line names the section that follows it and nothing else: `[Verse 1]`,
//! `Coro`, `[REFRÃO]`, `ponte`. Brackets and a trailing number are optional,
//! case is ignored. A line with any other text on it is content.

use super::types::SectionKind;
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*\[?\s*
        (?:
            (?P<verse>verse|verso|estrofe)s?
          | (?P<chorus>chorus|coro|refrão|refrao)
          | (?P<bridge>bridge|ponte)
        )
        (?:\s*[0-9]+)?
        \s*\]?\s*$",
    )
    .expect("section tag pattern")
});

/// Section kind named by a tag line, or `None` for a content line
pub fn section_tag(line: &str) -> Option<SectionKind> {
    let caps = TAG_RE.captures(line)?;
    if caps.name("verse").is_some() {
        Some(SectionKind::Verse)
    } else if caps.name("chorus").is_some() {
        Some(SectionKind::Chorus)
    } else {
        Some(SectionKind::Bridge)
    }
}

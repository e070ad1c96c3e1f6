use cifra::{CifraError, KeySelection, LyricsContent, SongCategory, SongSections};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    kind: &'static str,
    message: String,
}

fn error_to_binding_error(e: CifraError) -> BindingError {
    let kind = match &e {
        CifraError::MetadataError(_) => "metadata",
        CifraError::UnknownKey(_) => "unknown-key",
        CifraError::ContentError(_) => "content",
    };
    BindingError {
        kind,
        message: e.to_string(),
    }
}

fn to_js_error(e: CifraError) -> JsValue {
    let error = error_to_binding_error(e);
    match serde_json::to_string(&error) {
        Ok(json) => JsValue::from_str(&json),
        Err(_) => JsValue::from_str(&error.message),
    }
}

fn content_error(message: impl ToString) -> JsValue {
    to_js_error(CifraError::ContentError(message.to_string()))
}

/// Plain JS objects and arrays, never `Map`s, so results can go straight to `JSON.stringify`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(content_error)
}

fn category_from(name: &str) -> Result<SongCategory, JsValue> {
    SongCategory::from_name(name).ok_or_else(|| content_error(format!("Unknown category: {}", name)))
}

/// Classify every line of a sheet, as an array of `{type, content}`
#[wasm_bindgen]
pub fn parse_song(content: &str) -> Result<JsValue, JsValue> {
    to_js(&cifra::parse_song(content))
}

#[wasm_bindgen]
pub fn transpose_line(line: &str, semitones: i32) -> String {
    cifra::transpose_line(line, semitones)
}

#[wasm_bindgen]
pub fn transpose_song(content: &str, semitones: i32) -> String {
    cifra::transpose_song(content, semitones)
}

#[wasm_bindgen]
pub fn semitones_between(original_key: &str, target_key: &str) -> i32 {
    cifra::semitones_between(original_key, target_key)
}

/// Semitones for a stored key choice, which may be a key name or a legacy
/// offset such as "+2"
#[wasm_bindgen]
pub fn selection_semitones(selection: &str, original_key: &str) -> i32 {
    KeySelection::parse(selection).semitones_from(original_key)
}

/// Parse tagged lyrics. `category` is "Louvor"/"general" or "Harpa Cristã"/"hymnal".
/// Returns `null` for blank input.
#[wasm_bindgen]
pub fn parse_tagged_text(input: &str, category: &str) -> Result<JsValue, JsValue> {
    let category = category_from(category)?;
    match cifra::parse_tagged_text(input, category) {
        Some(sections) => to_js(&sections),
        None => Ok(JsValue::NULL),
    }
}

/// Format a section list or a `{verses, coro}` object back to tagged text
#[wasm_bindgen]
pub fn format_sections(sections: JsValue) -> Result<String, JsValue> {
    let sections: SongSections = serde_wasm_bindgen::from_value(sections).map_err(content_error)?;
    Ok(cifra::format_sections(&sections))
}

/// Display text for stored content given as a JSON string or plain text
#[wasm_bindgen]
pub fn display_text(stored: &str) -> Result<String, JsValue> {
    LyricsContent::from_json(stored)
        .map(|content| content.to_display_text())
        .map_err(to_js_error)
}

#[wasm_bindgen]
pub fn lyrics_only(text: &str) -> String {
    cifra::lyrics_only(text)
}

/// Rewrite a sheet with frontmatter into another key
#[wasm_bindgen]
pub fn retune(source: &str, target_key: &str) -> Result<String, JsValue> {
    cifra::retune(source, target_key).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let error = error_to_binding_error(CifraError::UnknownKey("H".to_string()));
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"kind":"unknown-key","message":"Unknown key: H"}"#
        );
    }

    #[test]
    fn test_plain_bindings() {
        assert_eq!(transpose_line("C  G/B", 2), "D  A/C#");
        assert_eq!(transpose_song("Am\nLetra", 0), "Am\nLetra");
        assert_eq!(semitones_between("G", "C"), -7);
        assert_eq!(selection_semitones("+3", "G"), 3);
        assert_eq!(selection_semitones("A", "G"), 2);
        assert_eq!(lyrics_only("G D\nSanto"), "Santo");
    }
}

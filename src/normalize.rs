//! Cleanup of raw model output into a JSON value.
//!
//! Gemini is asked for `application/json`, but replies still show up wrapped
//! in Markdown code fences often enough that we strip them before parsing.

use serde_json::{json, Value};

/// Parse the text returned by the model into JSON.
///
/// Strips a leading ```` ```json ```` marker and a trailing ```` ``` ````
/// marker if present, then attempts a strict parse. On failure the caller
/// gets an `{error, raw}` envelope where `raw` is the original, unstripped
/// text so the response can still be inspected.
pub fn parse_gemini_json(text_response: &str) -> Value {
    let mut clean = text_response.trim();
    if let Some(rest) = clean.strip_prefix("```json") {
        clean = rest;
    }
    if let Some(rest) = clean.strip_suffix("```") {
        clean = rest;
    }
    match serde_json::from_str(clean) {
        Ok(value) => value,
        Err(_) => json!({ "error": "Invalid JSON", "raw": text_response }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fenced_json() {
        assert_eq!(
            parse_gemini_json("```json\n{\"a\":1}\n```"),
            json!({ "a": 1 })
        );
    }

    #[test]
    fn plain_json_passes_through() {
        assert_eq!(parse_gemini_json("{\"a\":1}"), json!({ "a": 1 }));
    }

    #[test]
    fn leading_fence_without_trailing_still_parses() {
        assert_eq!(parse_gemini_json("```json {\"a\":1}"), json!({ "a": 1 }));
    }

    #[test]
    fn whitespace_around_fences_is_tolerated() {
        assert_eq!(
            parse_gemini_json("  ```json\n{\"verdict\":\"reliable\"}\n```  "),
            json!({ "verdict": "reliable" })
        );
    }

    #[test]
    fn invalid_json_yields_envelope_with_original_raw() {
        assert_eq!(
            parse_gemini_json("not json"),
            json!({ "error": "Invalid JSON", "raw": "not json" })
        );
    }

    #[test]
    fn envelope_raw_keeps_fences_and_padding() {
        let raw = " ```json\noops\n``` ";
        let out = parse_gemini_json(raw);
        assert_eq!(out["error"], "Invalid JSON");
        assert_eq!(out["raw"], raw);
    }

    #[test]
    fn empty_input_yields_envelope() {
        assert_eq!(
            parse_gemini_json(""),
            json!({ "error": "Invalid JSON", "raw": "" })
        );
    }

    #[test]
    fn normalizing_an_envelope_is_idempotent() {
        let envelope = parse_gemini_json("not json");
        let again = parse_gemini_json(&envelope.to_string());
        assert_eq!(envelope, again);
    }

    #[test]
    fn arrays_and_scalars_parse_unchanged() {
        assert_eq!(parse_gemini_json("[1,2,3]"), json!([1, 2, 3]));
        assert_eq!(parse_gemini_json("\"ok\""), json!("ok"));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let out = parse_gemini_json("{\"a\":1} trailing");
        assert_eq!(out["error"], "Invalid JSON");
    }
}

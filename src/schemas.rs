//! Structured-output schemas requested from the model, one per endpoint.
//!
//! Field names, required lists, and enum constraints mirror the endpoint
//! contracts exactly. The image schema leaves `category` unconstrained even
//! though the prompt enumerates categories; the prompt is the only thing
//! steering that value.

use crate::gemini::ResponseSchema;

pub fn text_check_schema() -> ResponseSchema {
    ResponseSchema::object(
        [
            (
                "verdict",
                ResponseSchema::string_enum(["misinformation", "misleading", "reliable", "unknown"]),
            ),
            (
                "confidence",
                ResponseSchema::string_enum(["high", "medium", "low"]),
            ),
            ("why", ResponseSchema::string()),
            ("potential_harm", ResponseSchema::string()),
            ("correct_information", ResponseSchema::string()),
            ("what_to_do", ResponseSchema::string()),
        ],
        vec![
            "verdict",
            "confidence",
            "why",
            "potential_harm",
            "correct_information",
            "what_to_do",
        ],
    )
}

pub fn safety_schema() -> ResponseSchema {
    ResponseSchema::object(
        [
            ("short_answer", ResponseSchema::string()),
            ("why", ResponseSchema::string()),
            ("what_to_do", ResponseSchema::string()),
            ("what_not_to_do", ResponseSchema::string()),
            ("when_to_see_doctor", ResponseSchema::string()),
            // Optional: requested from the model but not in the required list.
            ("common_misconception", ResponseSchema::string()),
            (
                "risk_level",
                ResponseSchema::string_enum(["low", "moderate", "high"]),
            ),
        ],
        vec![
            "short_answer",
            "why",
            "what_to_do",
            "what_not_to_do",
            "when_to_see_doctor",
            "risk_level",
        ],
    )
}

pub fn image_check_schema() -> ResponseSchema {
    ResponseSchema::object(
        [
            ("generic_name", ResponseSchema::string()),
            ("category", ResponseSchema::string()),
            ("warnings", ResponseSchema::string()),
            ("advice", ResponseSchema::string()),
        ],
        vec!["generic_name", "category", "warnings", "advice"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_check_schema_constrains_verdict_and_confidence() {
        let value = serde_json::to_value(text_check_schema()).unwrap();
        assert_eq!(
            value["properties"]["verdict"]["enum"],
            json!(["misinformation", "misleading", "reliable", "unknown"])
        );
        assert_eq!(
            value["properties"]["confidence"]["enum"],
            json!(["high", "medium", "low"])
        );
        let required = value["required"].as_array().unwrap();
        assert_eq!(required.len(), 6);
    }

    #[test]
    fn safety_schema_leaves_misconception_optional() {
        let value = serde_json::to_value(safety_schema()).unwrap();
        assert!(value["properties"]["common_misconception"].is_object());
        let required = value["required"].as_array().unwrap();
        assert!(!required.contains(&json!("common_misconception")));
        assert_eq!(
            value["properties"]["risk_level"]["enum"],
            json!(["low", "moderate", "high"])
        );
    }

    #[test]
    fn image_schema_requires_all_four_fields() {
        let value = serde_json::to_value(image_check_schema()).unwrap();
        assert_eq!(
            value["required"],
            json!(["generic_name", "category", "warnings", "advice"])
        );
        assert!(value["properties"]["category"]["enum"].is_null());
    }
}

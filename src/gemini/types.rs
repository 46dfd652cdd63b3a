//! Request and response shapes for the generativelanguage `generateContent`
//! call. Only the slice of the protocol this service uses is modelled.

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of a `generateContent` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One part of a request: prompt text or inline binary data.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64-encoded bytes tagged with their declared media type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Generation options: this service always asks for schema-constrained JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: ResponseSchema,
}

impl GenerationConfig {
    pub fn json(schema: ResponseSchema) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }
    }
}

/// Structured-output schema declaration (the subset the endpoints need:
/// objects of string properties, optionally enum-constrained).
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSchema {
    pub r#type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#enum: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, ResponseSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Object,
}

impl ResponseSchema {
    pub fn string() -> Self {
        Self {
            r#type: SchemaType::String,
            r#enum: None,
            properties: None,
            required: None,
        }
    }

    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            r#enum: Some(values.into_iter().map(Into::into).collect()),
            ..Self::string()
        }
    }

    pub fn object<I, S>(properties: I, required: Vec<S>) -> Self
    where
        I: IntoIterator<Item = (S, ResponseSchema)>,
        S: Into<String>,
    {
        Self {
            r#type: SchemaType::Object,
            r#enum: None,
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.into(), schema))
                    .collect(),
            ),
            required: Some(required.into_iter().map(Into::into).collect()),
        }
    }
}

impl GenerateRequest {
    /// Text-only request with a JSON output schema.
    pub fn text(prompt: impl Into<String>, schema: ResponseSchema) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: prompt.into(),
                }],
            }],
            generation_config: Some(GenerationConfig::json(schema)),
        }
    }

    /// Prompt plus inline image bytes, with a JSON output schema.
    pub fn text_and_image(
        prompt: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
        schema: ResponseSchema,
    ) -> Self {
        let data = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.into(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.into(),
                            data,
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig::json(schema)),
        }
    }
}

/// Body of a `generateContent` response, reduced to the text we relay.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate; empty if the model
    /// returned none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

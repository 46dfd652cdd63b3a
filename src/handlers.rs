//! The three relay endpoints: validate, build the prompt, call the model,
//! normalize the output, respond.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::gemini::GenerateRequest;
use crate::normalize::parse_gemini_json;
use crate::prompts;
use crate::schemas;
use crate::state::AppState;

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct TextCheckRequest {
    pub text: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

#[derive(Debug, Deserialize)]
pub struct SafetyRequest {
    pub question: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

/// POST /check_text — classify a health claim.
pub async fn check_text(
    State(state): State<AppState>,
    Json(req): Json<TextCheckRequest>,
) -> Result<Json<Value>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::validation("text must not be empty"));
    }

    info!(lang = %req.lang, "check_text request");
    let prompt = prompts::text_check_prompt(&req.text, &req.lang);
    let request = GenerateRequest::text(prompt, schemas::text_check_schema());
    let raw = generate(&state, request).await?;
    Ok(Json(parse_gemini_json(&raw)))
}

/// POST /ask_safety — answer a medicine-safety question.
pub async fn ask_safety(
    State(state): State<AppState>,
    Json(req): Json<SafetyRequest>,
) -> Result<Json<Value>, ApiError> {
    if req.question.trim().is_empty() {
        return Err(ApiError::validation("question must not be empty"));
    }

    info!(lang = %req.lang, "ask_safety request");
    let prompt = prompts::safety_prompt(&req.question, &req.lang);
    let request = GenerateRequest::text(prompt, schemas::safety_schema());
    let raw = generate(&state, request).await?;
    Ok(Json(parse_gemini_json(&raw)))
}

/// POST /check_image — identify a medicine from a photo.
///
/// Multipart form: `file` (required, any declared image content type is taken
/// at face value) and `lang` (optional). The whole file is read into memory
/// before dispatch; there is no size limit beyond axum's multipart default.
pub async fn check_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut lang = default_lang();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::validation(format!("could not read file field: {e}")))?;
                file = Some((mime_type, bytes.to_vec()));
            }
            Some("lang") => {
                lang = field
                    .text()
                    .await
                    .map_err(|e| ApiError::validation(format!("could not read lang field: {e}")))?;
            }
            _ => {}
        }
    }

    let (mime_type, bytes) =
        file.ok_or_else(|| ApiError::validation("file field is required"))?;

    info!(%lang, %mime_type, size = bytes.len(), "check_image request");
    let prompt = prompts::image_check_prompt(&lang);
    let request =
        GenerateRequest::text_and_image(prompt, mime_type, &bytes, schemas::image_check_schema());
    let raw = generate(&state, request).await?;
    Ok(Json(parse_gemini_json(&raw)))
}

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn generate(state: &AppState, request: GenerateRequest) -> Result<String, ApiError> {
    match state.model.generate_content(request).await {
        Ok(text) => {
            debug!(chars = text.len(), "model responded");
            Ok(text)
        }
        Err(e) => {
            warn!(error = %e, "upstream generation call failed");
            Err(ApiError::upstream(e, state.config.upstream_error_policy))
        }
    }
}

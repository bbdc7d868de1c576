use serde::Serialize;

use crate::error::ValidationError;

/// Request field carrying the utterance.
pub const UTTERANCE_FIELD: &str = "mensagem";
/// Accepted alternative spelling of [`UTTERANCE_FIELD`].
pub const UTTERANCE_ALIAS: &str = "message";

/// Body of a successful `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub resposta: String,
}

/// Body of a failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Extract the utterance from a `POST /chat` body.
///
/// The body must be a JSON object with a string `mensagem` (or `message`)
/// field that is not blank.
pub fn parse_chat_request(body: &[u8]) -> Result<String, ValidationError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::Malformed("expected a JSON object".into()))?;

    let field = object
        .get(UTTERANCE_FIELD)
        .or_else(|| object.get(UTTERANCE_ALIAS))
        .ok_or(ValidationError::MissingField(UTTERANCE_FIELD))?;

    let utterance = field.as_str().ok_or_else(|| {
        ValidationError::Malformed(format!("`{UTTERANCE_FIELD}` must be a string"))
    })?;

    if utterance.trim().is_empty() {
        return Err(ValidationError::EmptyUtterance);
    }
    Ok(utterance.to_string())
}

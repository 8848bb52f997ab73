//! Form decoding
//!
//! Admin forms and the public site submit url-encoded bodies; typed inputs
//! deserialize straight from them. List-valued fields travel as one
//! comma-separated string and skill items as a JSON string, so every input
//! is a flat map of text fields.

use serde::de::DeserializeOwned;

use super::ActionError;

/// Decode a url-encoded form body into a typed input
pub fn parse_form<T: DeserializeOwned>(body: &str) -> Result<T, ActionError> {
    serde_urlencoded::from_str(body)
        .map_err(|e| ActionError::Validation(format!("Malformed form body: {}", e)))
}

// ABOUTME: Request context passed to every action handler
// ABOUTME: Holds the project scope, query parameters, and the raw body with tolerant JSON decoding

use std::collections::HashMap;

use archstudio_core::{ProjectScope, ValidationError};
use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Decode a JSON body; an absent or blank body reads as `{}`
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    let bytes: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };

    serde_json::from_slice(bytes).map_err(ApiError::InvalidBody)
}

#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub scope: ProjectScope,
    pub params: HashMap<String, String>,
    pub body: Bytes,
}

impl ActionRequest {
    pub fn json_body<T: DeserializeOwned>(&self) -> ApiResult<T> {
        parse_json_body(&self.body)
    }

    /// Integer query parameter; `None` when absent
    pub fn query_id(&self, name: &'static str) -> Result<Option<i64>, ValidationError> {
        match self.params.get(name).map(|raw| raw.trim()) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ValidationError::InvalidField {
                    field: name,
                    reason: "must be an integer".to_string(),
                }),
        }
    }

    pub fn required_query_id(&self, name: &'static str) -> Result<i64, ValidationError> {
        self.query_id(name)?
            .ok_or(ValidationError::MissingField(name))
    }
}

// src/integrations/gym_api/envelope.rs
//
// Response shapes shared by every backend endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// `{ body, message, exceptionMessage }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    pub body: Option<T>,
    pub message: Option<String>,
    pub exception_message: Option<String>,
}

impl ResponseEnvelope<Value> {
    /// Envelope of any response body; non-object bodies yield an empty one.
    pub fn lenient(value: &Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn into_body<T: DeserializeOwned>(self) -> AppResult<T> {
        match self.body {
            None | Some(Value::Null) => Err(AppError::NotFound),
            Some(body) => Ok(serde_json::from_value(body)?),
        }
    }
}

/// Paginated list body: `{ content, totalElements }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_reads_exception_message() {
        let envelope = ResponseEnvelope::lenient(&json!({
            "body": null,
            "exceptionMessage": "Email already exists"
        }));
        assert_eq!(envelope.exception_message.as_deref(), Some("Email already exists"));
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_lenient_tolerates_plain_text() {
        let envelope = ResponseEnvelope::lenient(&json!("Bad Gateway"));
        assert!(envelope.body.is_none());
        assert!(envelope.exception_message.is_none());
    }

    #[test]
    fn test_into_body_missing_is_not_found() {
        let envelope = ResponseEnvelope::lenient(&json!({"message": "ok"}));
        assert!(matches!(
            envelope.into_body::<Vec<String>>(),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_page_envelope_defaults() {
        let page: PageEnvelope<String> = serde_json::from_value(json!({})).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
    }
}

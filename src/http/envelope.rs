//! The `{code, message, data}` wrapper every response is sent in.

use serde::{Deserialize, Serialize};

/// Uniform JSON response body.
///
/// `code` is `0` on success and the HTTP status code otherwise. `data` is omitted when
/// there is no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 0,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success without a payload.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
            data: None,
        }
    }

    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_omits_data() {
        let body = serde_json::to_value(Envelope::error(404, "product not found: id=9")).unwrap();
        assert_eq!(body, json!({"code": 404, "message": "product not found: id=9"}));
    }

    #[test]
    fn test_success_envelope_has_zero_code() {
        let body = serde_json::to_value(Envelope::success("ok", vec![1, 2])).unwrap();
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"], json!([1, 2]));
    }
}

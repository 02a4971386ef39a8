use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Response wrapper returned by the save-user endpoint.
///
/// The business-level outcome lives inside the body: the transport status is
/// 200 even when parsing fails, and callers inspect `Status` to detect
/// failure. Field names are capitalised on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    /// Business-level status code: 200 on success, 500 on parse failure
    #[serde(rename = "Status")]
    pub status: u16,
    /// Outcome text: "Success", or the parse error message
    #[serde(rename = "Message")]
    pub message: String,
    /// Echo of the submitted JSON body, present only on success
    #[serde(rename = "Payload", default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Envelope {
    pub fn success(payload: Value) -> Self {
        Self {
            status: 200,
            message: "Success".to_string(),
            payload: Some(payload),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            payload: None,
        }
    }
}

//! JSON shapes of `POST /api/chat`.

use serde::{Deserialize, Serialize};

/// Request body. All fields are the raw field contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub allowance: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expenses: String,
}

/// Response body. `reply` is HTML-safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<String>,
}

impl ChatReply {
    pub fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            buttons: Vec::new(),
        }
    }

    pub fn with_buttons(mut self, buttons: &[&str]) -> Self {
        self.buttons = buttons.iter().map(|b| b.to_string()).collect();
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_tolerates_missing_and_null_fields() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi","allowance":null}"#).unwrap();
        assert_eq!(req.message, "hi");
        assert_eq!(req.allowance, "");
        assert_eq!(req.expenses, "");
    }

    #[test]
    fn reply_buttons_are_optional() {
        let reply: ChatReply = serde_json::from_str(r#"{"reply":"ok"}"#).unwrap();
        assert!(reply.buttons.is_empty());
        assert_eq!(serde_json::to_value(&reply).unwrap(), serde_json::json!({"reply": "ok"}));

        let reply = ChatReply::text("plan?").with_buttons(&["Yes", "No"]);
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            serde_json::json!({"reply": "plan?", "buttons": ["Yes", "No"]})
        );
    }

    #[test]
    fn reply_without_text_is_malformed() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"buttons":[]}"#).is_err());
    }
}

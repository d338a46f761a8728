//! Outbound API request records.
//!
//! Optional fields are skipped during serialization when unset, so the
//! platform applies its own defaults instead of receiving `null`, `false`
//! or `0`.

use serde::{Deserialize, Serialize};

/// Parameters for `answerCallbackQuery`.
///
/// Completes the client-side loading state of an inline button press,
/// optionally showing a notification or alert to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCallbackQuery {
    /// Identifier of the query being answered.
    pub callback_query_id: String,

    /// Notification text, 0-200 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Show an alert instead of a notification at the top of the chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,

    /// URL to be opened by the user's client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Seconds the result may be cached client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i32>,
}

impl AnswerCallbackQuery {
    /// The Bot API method name.
    pub const METHOD: &'static str = "answerCallbackQuery";

    /// Creates a bare acknowledgment for the given query.
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn show_alert(mut self, show_alert: bool) -> Self {
        self.show_alert = Some(show_alert);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn cache_time(mut self, seconds: i32) -> Self {
        self.cache_time = Some(seconds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_are_omitted() {
        let value = serde_json::to_value(AnswerCallbackQuery::new("77")).unwrap();
        assert_eq!(value, json!({ "callback_query_id": "77" }));
    }

    #[test]
    fn test_explicit_false_and_zero_are_kept() {
        let request = AnswerCallbackQuery::new("77").show_alert(false).cache_time(0);
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            json!({ "callback_query_id": "77", "show_alert": false, "cache_time": 0 })
        );
    }
}

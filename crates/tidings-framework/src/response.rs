//! Callback query responses and handler return values.
//!
//! A callback query handler returns anything implementing
//! [`IntoCallbackQueryResponse`]. The return value decides which optional
//! fields go into the `answerCallbackQuery` call that follows:
//!
//! ```rust,ignore
//! // No return value: bare acknowledgment
//! async fn ack(_env: CallbackQueryHandlerEnvironment) {}
//!
//! // Text only
//! async fn toast(_env: CallbackQueryHandlerEnvironment) -> &'static str {
//!     "Saved"
//! }
//!
//! // Full control, fallible
//! async fn alert(env: CallbackQueryHandlerEnvironment) -> anyhow::Result<CallbackQueryResponse> {
//!     Ok(CallbackQueryResponse::new().text("Are you sure?").show_alert(true))
//! }
//! ```

use serde::{Deserialize, Serialize};

use tidings_core::AnswerCallbackQuery;

/// What a callback query handler wants sent back to the user.
///
/// Each field is independently optional. An unset field is left out of the
/// acknowledgment call rather than sent as `false`/`0`/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i32>,
}

impl CallbackQueryResponse {
    /// Creates a response with every field unset.
    pub fn new() -> Self {
        Self::default()
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

    /// Builds the acknowledgment request for the given query id.
    pub fn into_answer(self, callback_query_id: impl Into<String>) -> AnswerCallbackQuery {
        AnswerCallbackQuery {
            callback_query_id: callback_query_id.into(),
            text: self.text,
            show_alert: self.show_alert,
            url: self.url,
            cache_time: self.cache_time,
        }
    }
}

// ============================================================================
// IntoCallbackQueryResponse - Handler return values
// ============================================================================

/// A trait for types a callback query handler may return.
pub trait IntoCallbackQueryResponse: Send {
    /// Converts the handler output into an optional response.
    ///
    /// `Err` means the handler failed and no acknowledgment is sent.
    fn into_callback_response(self) -> anyhow::Result<Option<CallbackQueryResponse>>;
}

/// `()` - acknowledge without any optional field.
impl IntoCallbackQueryResponse for () {
    fn into_callback_response(self) -> anyhow::Result<Option<CallbackQueryResponse>> {
        Ok(None)
    }
}

impl IntoCallbackQueryResponse for CallbackQueryResponse {
    fn into_callback_response(self) -> anyhow::Result<Option<CallbackQueryResponse>> {
        Ok(Some(self))
    }
}

/// `String` - notification text only.
impl IntoCallbackQueryResponse for String {
    fn into_callback_response(self) -> anyhow::Result<Option<CallbackQueryResponse>> {
        Ok(Some(CallbackQueryResponse::new().text(self)))
    }
}

impl IntoCallbackQueryResponse for &'static str {
    fn into_callback_response(self) -> anyhow::Result<Option<CallbackQueryResponse>> {
        Ok(Some(CallbackQueryResponse::new().text(self)))
    }
}

/// `Option<T>` - `None` acknowledges without any optional field.
impl<T: IntoCallbackQueryResponse> IntoCallbackQueryResponse for Option<T> {
    fn into_callback_response(self) -> anyhow::Result<Option<CallbackQueryResponse>> {
        match self {
            Some(inner) => inner.into_callback_response(),
            None => Ok(None),
        }
    }
}

/// `Result<T, E>` - `Err` is passed through as the handler failure.
impl<T, E> IntoCallbackQueryResponse for Result<T, E>
where
    T: IntoCallbackQueryResponse,
    E: Into<anyhow::Error> + Send,
{
    fn into_callback_response(self) -> anyhow::Result<Option<CallbackQueryResponse>> {
        self.map_err(Into::into)?.into_callback_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_answer_copies_only_set_fields() {
        let answer = CallbackQueryResponse::new()
            .text("hi")
            .cache_time(5)
            .into_answer("q1");

        assert_eq!(answer.callback_query_id, "q1");
        assert_eq!(answer.text.as_deref(), Some("hi"));
        assert_eq!(answer.show_alert, None);
        assert_eq!(answer.url, None);
        assert_eq!(answer.cache_time, Some(5));
    }

    #[test]
    fn test_unit_and_none_mean_no_response() {
        assert_eq!(().into_callback_response().unwrap(), None);
        assert_eq!(
            None::<CallbackQueryResponse>.into_callback_response().unwrap(),
            None
        );
    }

    #[test]
    fn test_text_shorthands() {
        let expected = Some(CallbackQueryResponse::new().text("ok"));
        assert_eq!("ok".into_callback_response().unwrap(), expected);
        assert_eq!(String::from("ok").into_callback_response().unwrap(), expected);
    }

    #[test]
    fn test_result_error_is_kept() {
        let out: Result<CallbackQueryResponse, std::io::Error> =
            Err(std::io::Error::other("disk on fire"));

        let err = out.into_callback_response().unwrap_err();
        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn test_nested_ok_option() {
        let out: anyhow::Result<Option<&'static str>> = Ok(Some("nested"));
        assert_eq!(
            out.into_callback_response().unwrap(),
            Some(CallbackQueryResponse::new().text("nested"))
        );
    }
}

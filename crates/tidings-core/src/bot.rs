//! Bot trait and related types.
//!
//! This module defines the `Bot` trait, the capability a platform API client
//! exposes to handlers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};

use crate::api::AnswerCallbackQuery;
use crate::error::{ApiError, ApiResult};

/// The core Bot trait.
///
/// A Bot is the handle through which handlers talk back to the platform.
/// How requests reach the network (HTTP, a test double, a queue) is up to
/// the implementation.
///
/// # API Design
///
/// - `call_api`: Raw API call with method name and JSON parameters
/// - `answer_callback_query`: Typed acknowledgment built on top of `call_api`
///
/// Implementations only need `call_api`; the typed methods have default
/// bodies that serialize their request and forward it. An implementation
/// may still override them.
#[async_trait]
pub trait Bot: Send + Sync + 'static {
    /// Returns the bot's unique identifier.
    fn id(&self) -> &str;

    /// Calls a raw API method with the given parameters.
    ///
    /// # Arguments
    ///
    /// * `method` - The Bot API method name (e.g., "answerCallbackQuery")
    /// * `params` - JSON object containing the parameters
    ///
    /// # Returns
    ///
    /// The `result` field of the platform's response.
    async fn call_api(&self, method: &str, params: Value) -> ApiResult<Value>;

    /// Answers a callback query.
    ///
    /// Returns `true` when the platform accepted the answer.
    async fn answer_callback_query(&self, request: AnswerCallbackQuery) -> ApiResult<bool> {
        debug!(
            bot = self.id(),
            callback_query_id = %request.callback_query_id,
            "Answering callback query"
        );

        let params = serde_json::to_value(&request)?;
        trace!(params = %params, "answerCallbackQuery request");

        match self.call_api(AnswerCallbackQuery::METHOD, params).await? {
            Value::Bool(accepted) => Ok(accepted),
            other => Err(ApiError::UnexpectedResponse(format!(
                "expected boolean result from {}, got {other}",
                AnswerCallbackQuery::METHOD
            ))),
        }
    }
}

/// A boxed Bot trait object.
pub type BoxedBot = Arc<dyn Bot>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingBot {
        reply: Value,
        calls: Mutex<Vec<(String, Value)>>,
    }

    #[async_trait]
    impl Bot for RecordingBot {
        fn id(&self) -> &str {
            "recording"
        }

        async fn call_api(&self, method: &str, params: Value) -> ApiResult<Value> {
            self.calls.lock().unwrap().push((method.to_string(), params));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_answer_forwards_to_call_api() {
        let bot = RecordingBot {
            reply: Value::Bool(true),
            calls: Mutex::new(Vec::new()),
        };

        let accepted = bot
            .answer_callback_query(AnswerCallbackQuery::new("9").text("done"))
            .await
            .unwrap();

        assert!(accepted);
        let calls = bot.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "answerCallbackQuery");
        assert_eq!(calls[0].1, json!({ "callback_query_id": "9", "text": "done" }));
    }

    #[tokio::test]
    async fn test_non_boolean_result_is_rejected() {
        let bot = RecordingBot {
            reply: json!({ "ok": true }),
            calls: Mutex::new(Vec::new()),
        };

        let err = bot
            .answer_callback_query(AnswerCallbackQuery::new("9"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UnexpectedResponse(_)));
    }
}

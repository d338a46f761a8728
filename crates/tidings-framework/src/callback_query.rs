//! Callback query routing.
//!
//! [`CallbackQueryHandler`] matches updates carrying a callback query and,
//! optionally, a specific command: the first space-delimited token of the
//! query data, compared case-insensitively. On a match it runs the user
//! function and answers the query with whatever the function returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use tidings_framework::{CallbackQueryHandler, CallbackQueryResponse};
//!
//! // Matches data such as "vote up" or "VOTE down"
//! let votes = CallbackQueryHandler::new(|env| async move {
//!     let choice = env.args().next().unwrap_or("none").to_string();
//!     CallbackQueryResponse::new().text(format!("You voted {choice}"))
//! })
//! .callback_data("vote");
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{debug, trace, warn};

use crate::error::{HandleError, HandleResult};
use crate::handler::Handler;
use crate::response::{CallbackQueryResponse, IntoCallbackQueryResponse};
use tidings_core::{AnswerCallbackQuery, BoxedBot, CallbackQuery, Update};

/// Everything a callback query function gets to work with.
///
/// Built fresh for each matched update and dropped once the function returns.
#[derive(Clone)]
pub struct CallbackQueryHandlerEnvironment {
    /// The bot the update arrived on.
    pub bot: BoxedBot,
    /// The triggering update.
    pub update: Arc<Update>,
    /// The callback query extracted from `update`.
    pub callback_query: CallbackQuery,
}

impl CallbackQueryHandlerEnvironment {
    /// The raw query data, if any.
    pub fn data(&self) -> Option<&str> {
        self.callback_query.data.as_deref()
    }

    /// The tokens following the command in the query data.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.callback_query.args()
    }
}

impl std::fmt::Debug for CallbackQueryHandlerEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackQueryHandlerEnvironment")
            .field("bot", &self.bot.id())
            .field("update_id", &self.update.update_id)
            .field("callback_query", &self.callback_query)
            .finish()
    }
}

/// A type-erased callback query function.
pub type HandleCallbackQuery = Arc<
    dyn Fn(
            CallbackQueryHandlerEnvironment,
        ) -> BoxFuture<'static, anyhow::Result<Option<CallbackQueryResponse>>>
        + Send
        + Sync,
>;

/// Routes callback query updates to a user function and answers them.
#[derive(Clone)]
pub struct CallbackQueryHandler {
    /// Command to match; `None` matches every callback query that has data.
    callback_data: Option<String>,
    handle_callback_query: HandleCallbackQuery,
    name: Option<String>,
}

impl CallbackQueryHandler {
    /// Creates a catch-all handler around `f`.
    pub fn new<F, Fut, R>(f: F) -> Self
    where
        F: Fn(CallbackQueryHandlerEnvironment) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoCallbackQueryResponse + 'static,
    {
        Self {
            callback_data: None,
            handle_callback_query: Arc::new(move |env| {
                f(env)
                    .map(IntoCallbackQueryResponse::into_callback_response)
                    .boxed()
            }),
            name: None,
        }
    }

    /// Restricts the handler to queries whose command equals `data`,
    /// ignoring case.
    pub fn callback_data(mut self, data: impl Into<String>) -> Self {
        self.callback_data = Some(data.into());
        self
    }

    /// Sets a name for this handler (useful for debugging).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the configured command filter.
    pub fn filter(&self) -> Option<&str> {
        self.callback_data.as_deref()
    }

    /// Queries without data never match, not even a catch-all.
    fn matches_query(&self, query: &CallbackQuery) -> bool {
        if query.data.is_none() {
            return false;
        }
        match self.callback_data.as_deref() {
            None => true,
            Some(expected) => eq_ignore_case(query.command(), expected),
        }
    }
}

/// Compares two strings char by char, ignoring case.
///
/// Each pair matches when the chars are equal, when their uppercase forms
/// are equal, or when the lowercase of those uppercase forms are equal.
/// Only one-to-one case mappings are used, so `"ß"` does not equal `"SS"`
/// while `"i"` does equal `"İ"`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_eq_ignore_case(x, y) => {}
            _ => return false,
        }
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// U+0130 is the only char whose lowercase expands; its simple form is the
// first char of the expansion.
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl std::fmt::Debug for CallbackQueryHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackQueryHandler")
            .field("callback_data", &self.callback_data)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Handler for CallbackQueryHandler {
    fn name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.callback_data.as_deref())
            .unwrap_or("callback_query")
    }

    fn check(&self, update: &Update) -> bool {
        match &update.callback_query {
            Some(query) => self.matches_query(query),
            None => false,
        }
    }

    async fn handle(&self, bot: BoxedBot, update: Arc<Update>) -> HandleResult<()> {
        let Some(callback_query) = update.callback_query.clone() else {
            debug!(
                handler = Handler::name(self),
                update_id = update.update_id,
                "Callback query handler invoked without a callback query"
            );
            return Err(HandleError::MissingCallbackQuery {
                update_id: update.update_id,
            });
        };

        let callback_query_id = callback_query.id.clone();
        let env = CallbackQueryHandlerEnvironment {
            bot: Arc::clone(&bot),
            update,
            callback_query,
        };

        trace!(
            handler = Handler::name(self),
            callback_query_id = %callback_query_id,
            "Invoking callback query function"
        );
        let response = (self.handle_callback_query)(env)
            .await
            .map_err(HandleError::Handler)?;

        let answer = match response {
            Some(response) => response.into_answer(callback_query_id.as_str()),
            None => AnswerCallbackQuery::new(callback_query_id.as_str()),
        };

        if bot.answer_callback_query(answer).await? {
            debug!(callback_query_id = %callback_query_id, "Callback query answered");
        } else {
            warn!(callback_query_id = %callback_query_id, "Platform declined callback query answer");
        }

        Ok(())
    }
}

//! Shared test doubles.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use tidings_core::{
    AnswerCallbackQuery, ApiError, ApiResult, Bot, BoxedBot, CallbackQuery, Update, User,
};

/// A bot that records every API call and answers with a fixed result.
pub(crate) struct RecordingBot {
    calls: Mutex<Vec<(String, Value)>>,
    failure: Option<ApiError>,
}

impl RecordingBot {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        })
    }

    pub(crate) fn failing(err: ApiError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(err),
        })
    }

    pub(crate) fn boxed(self: &Arc<Self>) -> BoxedBot {
        Arc::clone(self) as BoxedBot
    }

    /// Every `answerCallbackQuery` request, decoded.
    pub(crate) fn answers(&self) -> Vec<AnswerCallbackQuery> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(method, _)| method == AnswerCallbackQuery::METHOD)
            .map(|(_, params)| serde_json::from_value(params.clone()).unwrap())
            .collect()
    }

    /// Raw parameters of every call, in order.
    pub(crate) fn raw_calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    fn id(&self) -> &str {
        "recording-bot"
    }

    async fn call_api(&self, method: &str, params: Value) -> ApiResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(Value::Bool(true)),
        }
    }
}

pub(crate) fn callback_update(id: &str, data: Option<&str>) -> Update {
    let mut query = CallbackQuery::new(id, User::new(1001, "Tester"));
    query.data = data.map(str::to_string);
    Update::new(42).with_callback_query(query)
}

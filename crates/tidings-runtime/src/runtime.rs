//! Runtime orchestration.
//!
//! [`TidingsRuntime`] ties configuration, logging and the dispatcher
//! together. Fetching updates from the platform (long polling, webhooks) is
//! left to the caller, which feeds each update to
//! [`dispatch`](TidingsRuntime::dispatch) or
//! [`dispatch_json`](TidingsRuntime::dispatch_json).
//!
//! ```rust,ignore
//! use tidings_runtime::TidingsRuntime;
//! use tidings_framework::on_callback_data;
//!
//! let mut runtime = TidingsRuntime::load()?;
//! runtime.init_logging();
//! runtime.register(on_callback_data("vote", vote));
//!
//! while let Some(body) = webhook.next().await {
//!     runtime.dispatch_json(&body, bot.clone()).await?;
//! }
//! ```

use tracing::{debug, info};

use crate::config::{ConfigLoader, TidingsConfig, validate_config};
use crate::error::RuntimeResult;
use crate::logging;
use tidings_core::{BoxedBot, Update};
use tidings_framework::{BoxedHandler, DispatchReport, Dispatcher, Handler};

/// Configuration, logging and dispatch in one place.
#[derive(Debug)]
pub struct TidingsRuntime {
    config: TidingsConfig,
    dispatcher: Dispatcher,
}

impl TidingsRuntime {
    /// Creates a runtime from an already loaded configuration.
    pub fn new(config: TidingsConfig) -> RuntimeResult<Self> {
        validate_config(&config)?;
        let dispatcher = Dispatcher::with_config(config.dispatcher.clone());
        Ok(Self { config, dispatcher })
    }

    /// Loads configuration from the default sources.
    pub fn load() -> RuntimeResult<Self> {
        Self::from_loader(ConfigLoader::new())
    }

    /// Loads configuration with a customized loader.
    pub fn from_loader(loader: ConfigLoader) -> RuntimeResult<Self> {
        Self::new(loader.load()?)
    }

    /// Installs the global tracing subscriber described by the config.
    ///
    /// Returns `false` if a subscriber was already installed.
    pub fn init_logging(&self) -> bool {
        let installed = logging::init_from_config(&self.config.logging);
        if installed {
            info!(level = %self.config.logging.level, "Logging initialized");
        }
        installed
    }

    /// Registers a handler after the ones already registered.
    pub fn register<H: Handler>(&mut self, handler: H) {
        debug!(handler = handler.name(), "Registering handler");
        self.dispatcher.add(handler);
    }

    /// Registers a pre-built boxed handler.
    pub fn register_boxed(&mut self, handler: BoxedHandler) {
        self.dispatcher.add_boxed(handler);
    }

    pub fn config(&self) -> &TidingsConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Dispatches one update.
    pub async fn dispatch(&self, update: Update, bot: BoxedBot) -> DispatchReport {
        self.dispatcher.dispatch(update, bot).await
    }

    /// Parses a raw JSON update and dispatches it.
    pub async fn dispatch_json(&self, body: &[u8], bot: BoxedBot) -> RuntimeResult<DispatchReport> {
        let update: Update = serde_json::from_slice(body)?;
        Ok(self.dispatch(update, bot).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogOutput;
    use crate::error::RuntimeError;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use tidings_core::{ApiResult, Bot};
    use tidings_framework::{CallbackQueryResponse, on_callback_data, on_callback_query};

    #[derive(Default)]
    struct MockBot {
        calls: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl Bot for MockBot {
        fn id(&self) -> &str {
            "mock"
        }

        async fn call_api(&self, _method: &str, params: Value) -> ApiResult<Value> {
            self.calls.lock().unwrap().push(params);
            Ok(Value::Bool(true))
        }
    }

    const CALLBACK_UPDATE: &str = r#"{
        "update_id": 1,
        "callback_query": {
            "id": "534241",
            "from": { "id": 5, "first_name": "Lin" },
            "chat_instance": "1",
            "data": "yeheeee"
        }
    }"#;

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = TidingsConfig::default();
        config.logging.output = LogOutput::File;

        let err = TidingsRuntime::new(config).unwrap_err();
        assert!(matches!(err, RuntimeError::Config(_)));
    }

    #[tokio::test]
    async fn test_dispatch_json() {
        let bot = Arc::new(MockBot::default());
        let mut runtime = TidingsRuntime::new(TidingsConfig::default()).unwrap();
        runtime.register(on_callback_data("yeheeee", |_env| async {
            CallbackQueryResponse::new().text("answer test").cache_time(342)
        }));

        let report = runtime
            .dispatch_json(CALLBACK_UPDATE.as_bytes(), bot.clone())
            .await
            .unwrap();

        assert_eq!(report.matched, 1);
        assert_eq!(
            *bot.calls.lock().unwrap(),
            vec![serde_json::json!({
                "callback_query_id": "534241",
                "text": "answer test",
                "cache_time": 342
            })]
        );
    }

    #[tokio::test]
    async fn test_dispatch_json_rejects_garbage() {
        let bot = Arc::new(MockBot::default());
        let runtime = TidingsRuntime::new(TidingsConfig::default()).unwrap();

        let err = runtime
            .dispatch_json(b"{\"not\": \"an update\"}", bot)
            .await
            .unwrap_err();

        assert!(matches!(err, RuntimeError::InvalidUpdate(_)));
    }

    #[tokio::test]
    async fn test_dispatcher_settings_come_from_config() {
        let bot = Arc::new(MockBot::default());
        let mut config = TidingsConfig::default();
        config.dispatcher.stop_on_first_match = true;

        let mut runtime = TidingsRuntime::new(config).unwrap();
        runtime.register(on_callback_query(|_env| async { "first" }));
        runtime.register(on_callback_query(|_env| async { "second" }));

        let report = runtime
            .dispatch_json(CALLBACK_UPDATE.as_bytes(), bot.clone())
            .await
            .unwrap();

        assert_eq!(report.matched, 1);
        assert_eq!(bot.calls.lock().unwrap()[0]["text"], "first");
    }
}

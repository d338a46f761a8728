//! Tower Service integration.
//!
//! [`HandlerService`] wraps any [`Handler`] as a `tower::Service`, so standard
//! middleware (timeouts, concurrency limits, tracing layers) can be stacked on
//! top of it:
//!
//! ```rust,ignore
//! use tower::ServiceBuilder;
//! use tower::timeout::TimeoutLayer;
//!
//! let service = ServiceBuilder::new()
//!     .layer(TimeoutLayer::new(Duration::from_secs(5)))
//!     .service(HandlerService::new(on_callback_data("vote", vote)));
//! ```
//!
//! The service performs the check itself: a request whose update does not
//! match resolves to `Ok(false)` without calling `handle`.

use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use tower::Service;

use crate::error::HandleError;
use crate::handler::{BoxedHandler, Handler};
use tidings_core::{BoxedBot, Update};

/// A request to a [`HandlerService`].
#[derive(Clone)]
pub struct HandlerRequest {
    pub bot: BoxedBot,
    pub update: Arc<Update>,
}

impl HandlerRequest {
    pub fn new(bot: BoxedBot, update: impl Into<Arc<Update>>) -> Self {
        Self {
            bot,
            update: update.into(),
        }
    }
}

/// Tower Service adapter for a handler.
///
/// Responds with `true` when the handler matched and handled the update.
#[derive(Clone)]
pub struct HandlerService {
    handler: BoxedHandler,
}

impl HandlerService {
    pub fn new<H: Handler>(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn from_boxed(handler: BoxedHandler) -> Self {
        Self { handler }
    }
}

impl Service<HandlerRequest> for HandlerService {
    type Response = bool;
    type Error = HandleError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: HandlerRequest) -> Self::Future {
        let handler = Arc::clone(&self.handler);

        Box::pin(async move {
            if !handler.check(&req.update) {
                return Ok(false);
            }
            handler.handle(req.bot, req.update).await?;
            Ok(true)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::on_callback_data;
    use crate::test_support::{RecordingBot, callback_update};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_service_matches_and_answers() {
        let bot = RecordingBot::new();
        let service = HandlerService::new(on_callback_data("go", |_env| async { "went" }));

        let handled = service
            .oneshot(HandlerRequest::new(
                bot.boxed(),
                callback_update("3", Some("go now")),
            ))
            .await
            .unwrap();

        assert!(handled);
        assert_eq!(bot.answers()[0].text.as_deref(), Some("went"));
    }

    #[tokio::test]
    async fn test_service_skips_unmatched() {
        let bot = RecordingBot::new();
        let service = HandlerService::new(on_callback_data("go", |_env| async {}));

        let handled = service
            .oneshot(HandlerRequest::new(bot.boxed(), Update::new(1)))
            .await
            .unwrap();

        assert!(!handled);
        assert!(bot.raw_calls().is_empty());
    }

    #[tokio::test]
    async fn test_service_surfaces_handler_error() {
        let bot = RecordingBot::new();
        let service = HandlerService::new(on_callback_data("go", |_env| async {
            Err::<(), _>(anyhow::anyhow!("nope"))
        }));

        let err = service
            .oneshot(HandlerRequest::new(bot.boxed(), callback_update("3", Some("go"))))
            .await
            .unwrap_err();

        assert!(matches!(err, HandleError::Handler(_)));
    }
}

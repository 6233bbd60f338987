//! Integration tests for [`command_router::CommandRouter`].
//!
//! Covers: command tokens reaching their handler and never the fallback, free text and absent text
//! reaching the fallback, `@botname` addressing, and errors propagating out of dispatch.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use command_router::{CommandRouter, Route};
use relay_core::{ConversationId, Handler, HandlerResponse, InboundEvent, RelayError};
use tokio::sync::RwLock;

/// Replies with a fixed text and counts calls.
struct CountingHandler {
    text: &'static str,
    calls: Arc<AtomicUsize>,
}

impl CountingHandler {
    fn new(text: &'static str) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Arc::new(Self {
                text,
                calls: calls.clone(),
            }),
            calls,
        )
    }
}

#[async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, event: &InboundEvent) -> relay_core::Result<HandlerResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Reply(event.reply(self.text)))
    }
}

fn event(chat: i64, text: Option<&str>) -> InboundEvent {
    InboundEvent::new(ConversationId(chat), text.map(String::from))
}

struct Fixture {
    router: CommandRouter,
    start_calls: Arc<AtomicUsize>,
    help_calls: Arc<AtomicUsize>,
    fallback_calls: Arc<AtomicUsize>,
}

fn fixture() -> Fixture {
    let (start, start_calls) = CountingHandler::new("welcome");
    let (help, help_calls) = CountingHandler::new("help");
    let (fallback, fallback_calls) = CountingHandler::new("model");
    let router = CommandRouter::new(fallback)
        .add_command("/start", start)
        .add_command("help", help);
    Fixture {
        router,
        start_calls,
        help_calls,
        fallback_calls,
    }
}

/// **Test: /start gets the welcome text and the fallback is never invoked.**
#[tokio::test]
async fn test_start_never_reaches_fallback() {
    let f = fixture();
    let response = f.router.dispatch(&event(7, Some("/start"))).await.unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply(event(7, None).reply("welcome"))
    );
    assert_eq!(f.start_calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.fallback_calls.load(Ordering::SeqCst), 0);
}

/// **Test: /help with trailing words still routes to help.**
#[tokio::test]
async fn test_help_with_arguments() {
    let f = fixture();
    let response = f
        .router
        .dispatch(&event(3, Some("/help what can you do")))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Reply(event(3, None).reply("help")));
    assert_eq!(f.help_calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.fallback_calls.load(Ordering::SeqCst), 0);
}

/// **Test: free text and unknown commands go to the fallback.**
#[tokio::test]
async fn test_free_text_and_unknown_command_go_to_fallback() {
    let f = fixture();
    f.router.dispatch(&event(1, Some("What is 2+2?"))).await.unwrap();
    f.router.dispatch(&event(1, Some("/weather"))).await.unwrap();

    assert_eq!(f.fallback_calls.load(Ordering::SeqCst), 2);
    assert_eq!(f.start_calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.help_calls.load(Ordering::SeqCst), 0);
}

/// **Test: events without text route to the fallback, which owns the absent-text rule.**
#[tokio::test]
async fn test_absent_text_routes_to_fallback() {
    let f = fixture();
    assert_eq!(f.router.route(&event(1, None)).await, Route::Fallback);
    assert_eq!(f.router.route(&event(1, Some(""))).await, Route::Fallback);
}

/// **Test: /start@other_bot is not ours once the username is known; /start@me is.**
#[tokio::test]
async fn test_bot_username_addressing() {
    let username = Arc::new(RwLock::new(None));
    let f = fixture();
    let router = f.router.with_bot_username(username.clone());

    assert_eq!(
        router.route(&event(1, Some("/start@other_bot"))).await,
        Route::Command("start".to_string())
    );

    *username.write().await = Some("relay_bot".to_string());
    assert_eq!(
        router.route(&event(1, Some("/start@other_bot"))).await,
        Route::Fallback
    );
    assert_eq!(
        router.route(&event(1, Some("/start@relay_bot"))).await,
        Route::Command("start".to_string())
    );
}

/// **Test: registered commands are listed sorted.**
#[tokio::test]
async fn test_commands_listing() {
    let f = fixture();
    assert_eq!(f.router.commands(), vec!["help", "start"]);
}

/// **Test: a handler error propagates out of dispatch for the fault notifier to handle.**
#[tokio::test]
async fn test_handler_error_propagates() {
    struct FailingHandler;

    #[async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _event: &InboundEvent) -> relay_core::Result<HandlerResponse> {
            Err(RelayError::Bot("boom".to_string()))
        }
    }

    let router = CommandRouter::new(Arc::new(FailingHandler));
    let result = router.dispatch(&event(1, Some("hello"))).await;
    assert!(matches!(result, Err(RelayError::Bot(_))));
}

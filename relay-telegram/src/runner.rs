//! Dispatcher runner: converts teloxide messages to [`InboundEvent`]s, routes them through the
//! [`CommandRouter`] and delivers the replies. Faults go to the [`FaultNotifier`].

use std::fmt;
use std::sync::Arc;

use command_router::CommandRouter;
use futures::future::BoxFuture;
use relay_core::{Bot as CoreBot, HandlerResponse, InboundEvent, RelayError, Result, ToInboundEvent};
use relay_handlers::FaultNotifier;
use teloxide::error_handlers::ErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// What happened to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The handler's reply was sent.
    Replied,
    /// The handler produced no reply.
    Ignored,
    /// Routing or sending failed; the fault notifier took over.
    Faulted,
}

/// Dispatcher and polling errors carry no conversation; they go to the notifier, which only logs them.
pub struct NotifyingErrorHandler {
    notifier: FaultNotifier,
    context: &'static str,
}

impl NotifyingErrorHandler {
    pub fn new(notifier: FaultNotifier, context: &'static str) -> Arc<Self> {
        Arc::new(Self { notifier, context })
    }
}

impl<E> ErrorHandler<E> for NotifyingErrorHandler
where
    E: fmt::Display + Send + 'static,
{
    fn handle_error(self: Arc<Self>, error: E) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let fault = RelayError::Bot(format!("{}: {}", self.context, error));
            self.notifier.notify(None, &fault).await;
        })
    }
}

/// Handles one event end to end: dispatch, send the reply, hand any fault to `notifier`.
/// Never returns an error to the host.
#[instrument(skip_all, fields(chat_id = %event.conversation_id, message_id = %event.id))]
pub async fn process_event(
    router: &CommandRouter,
    bot: &dyn CoreBot,
    notifier: &FaultNotifier,
    event: &InboundEvent,
) -> Delivery {
    let outcome = match router.dispatch(event).await {
        Ok(HandlerResponse::Reply(reply)) => bot.send_reply(&reply).await.map(|()| {
            info!(
                user_id = event.user_id(),
                reply_len = reply.text.len(),
                "Sent reply"
            );
            Delivery::Replied
        }),
        Ok(HandlerResponse::Ignore) => Ok(Delivery::Ignored),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(delivery) => delivery,
        Err(e) => {
            notifier.notify(Some(event), &e).await;
            Delivery::Faulted
        }
    }
}

/// Fetches the bot username, then long-polls until Ctrl-C. Each message is converted to an
/// [`InboundEvent`] and passed to [`process_event`]; chats are served concurrently.
#[instrument(skip_all)]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    router: CommandRouter,
    delivery_bot: Arc<dyn CoreBot>,
    notifier: FaultNotifier,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    let me = bot
        .get_me()
        .await
        .map_err(|e| RelayError::Bot(format!("getMe failed: {}", e)))?;
    if let Some(username) = &me.user.username {
        *bot_username.write().await = Some(username.clone());
        info!(username = %username, "Bot username set before polling");
    }

    let commands: Vec<String> = router.commands().into_iter().map(str::to_string).collect();
    let router = Arc::new(router);
    let event_notifier = notifier.clone();
    let handler = Update::filter_message().endpoint(move |msg: Message| {
        let router = Arc::clone(&router);
        let delivery_bot = Arc::clone(&delivery_bot);
        let notifier = event_notifier.clone();
        async move {
            let event = TelegramMessageWrapper(&msg).to_event();
            match event.text() {
                Some(_) => debug!(chat_id = %event.conversation_id, "Received text message"),
                None => info!(
                    chat_id = %event.conversation_id,
                    user_id = event.user_id(),
                    "Received non-text message"
                ),
            }
            process_event(&router, delivery_bot.as_ref(), &notifier, &event).await;
            respond(())
        }
    });

    info!(commands = ?commands, "Bot started. Press Ctrl-C to stop.");

    let listener = update_listeners::polling_default(bot.clone()).await;
    let dispatcher_errors = NotifyingErrorHandler::new(notifier.clone(), "dispatcher");
    let polling_errors = NotifyingErrorHandler::new(notifier, "update listener");

    Dispatcher::builder(bot, handler)
        .default_handler(|update| async move {
            debug!(update_id = %update.id.0, "Ignoring non-message update");
        })
        .error_handler(dispatcher_errors)
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(listener, polling_errors)
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

//! # Command router
//!
//! Maps command tokens (`/start`, `/help`, ...) to handlers in a table built at startup. Text that is not
//! a registered command, and events without text, go to the fallback handler.

use relay_core::{Handler, HandlerResponse, InboundEvent, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Where an event is sent by [`CommandRouter::route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A registered command token (lower-case, without `/` and `@botname`).
    Command(String),
    /// Free text, unknown commands, and events without text.
    Fallback,
}

/// Extracts the command token from `text`: first word, without the leading `/`, lower-cased, with any
/// `@botname` suffix removed. Returns `None` when `text` is not a command, or when the suffix names a
/// bot other than `bot_username` (if known).
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<String> {
    let word = text.trim_start().split_whitespace().next()?;
    let body = word.strip_prefix('/')?;
    let (name, target) = match body.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (body, None),
    };
    if name.is_empty() {
        return None;
    }
    if let (Some(target), Some(me)) = (target, bot_username) {
        if !target.eq_ignore_ascii_case(me) {
            return None;
        }
    }
    Some(name.to_lowercase())
}

/// Command table plus fallback. Cheap to clone; shared by every concurrent update.
#[derive(Clone)]
pub struct CommandRouter {
    commands: HashMap<String, Arc<dyn Handler>>,
    fallback: Arc<dyn Handler>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandRouter {
    /// Creates a router that sends everything to `fallback` until commands are registered.
    pub fn new(fallback: Arc<dyn Handler>) -> Self {
        Self {
            commands: HashMap::new(),
            fallback,
            bot_username: Arc::new(RwLock::new(None)),
        }
    }

    /// Registers `handler` for `command` (with or without the leading `/`; case-insensitive).
    pub fn add_command(mut self, command: &str, handler: Arc<dyn Handler>) -> Self {
        let key = command.trim_start_matches('/').to_lowercase();
        self.commands.insert(key, handler);
        self
    }

    /// Shares the bot username cell; filled by the runner from `getMe` before polling starts.
    pub fn with_bot_username(mut self, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        self.bot_username = bot_username;
        self
    }

    /// Registered command tokens, sorted.
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Picks the route for `event` without running anything.
    pub async fn route(&self, event: &InboundEvent) -> Route {
        let Some(text) = event.text() else {
            return Route::Fallback;
        };
        let username = self.bot_username.read().await;
        match parse_command(text, username.as_deref()) {
            Some(name) if self.commands.contains_key(&name) => Route::Command(name),
            _ => Route::Fallback,
        }
    }

    /// Routes `event` and runs the selected handler.
    #[instrument(skip(self, event), fields(chat_id = %event.conversation_id, message_id = %event.id))]
    pub async fn dispatch(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let route = self.route(event).await;
        let handler = match &route {
            Route::Command(name) => {
                info!(
                    user_id = event.user_id(),
                    command = %name,
                    "step: routed to command handler"
                );
                self.commands.get(name).unwrap_or(&self.fallback)
            }
            Route::Fallback => {
                debug!(user_id = event.user_id(), "step: routed to fallback handler");
                &self.fallback
            }
        };

        let handler_name = std::any::type_name_of_val(handler.as_ref());
        let response = handler.handle(event).await?;
        info!(
            user_id = event.user_id(),
            handler = %handler_name,
            response_type = %response.kind(),
            "step: handler done"
        );
        Ok(response)
    }
}

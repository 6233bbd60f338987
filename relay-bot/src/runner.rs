//! Startup wiring: Gemini client, command table, Telegram delivery and the dispatcher.

use anyhow::Result;
use command_router::CommandRouter;
use llm_client::{mask_token, GeminiLlmClient, LlmClient};
use relay_core::Bot;
use relay_handlers::{BotMessages, FaultNotifier, RelayHandler, StaticReplyHandler};
use relay_telegram::{run_dispatcher, TelegramBotAdapter};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use super::config::BotConfig;

/// Routes `start` and `help` to their fixed replies and everything else to the relay handler.
pub fn build_router(
    llm_client: Arc<dyn LlmClient>,
    messages: BotMessages,
    bot_username: Arc<RwLock<Option<String>>>,
) -> CommandRouter {
    let relay = Arc::new(RelayHandler::new(llm_client, messages));
    CommandRouter::new(relay)
        .add_command("start", Arc::new(StaticReplyHandler::welcome(&messages)))
        .add_command("help", Arc::new(StaticReplyHandler::help(&messages)))
        .with_bot_username(bot_username)
}

/// Main entry: validate config, build the Gemini client and router, then poll until Ctrl-C.
/// A missing Telegram token aborts the start here.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    info!(
        model = %config.gemini.model,
        base_url = %config.gemini.base_url,
        api_key = %mask_token(&config.gemini.api_key),
        locale = %config.locale,
        "Initializing bot"
    );

    let messages = BotMessages::for_locale(config.locale);
    let llm_client: Arc<dyn LlmClient> = Arc::new(GeminiLlmClient::new(&config.gemini)?);

    let teloxide_bot = match config.telegram.build_bot() {
        Ok(bot) => bot,
        Err(e) => {
            error!(error = %e, "Cannot start bot");
            return Err(e.into());
        }
    };

    let bot_username = Arc::new(RwLock::new(None));
    let router = build_router(llm_client, messages, Arc::clone(&bot_username));
    let delivery_bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let notifier = FaultNotifier::new(Arc::clone(&delivery_bot), messages);

    info!("Bot started successfully");

    if let Err(e) = run_dispatcher(teloxide_bot, router, delivery_bot, notifier, bot_username).await {
        error!(error = %e, "Bot stopped with error");
        return Err(e.into());
    }
    Ok(())
}

use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tracing::info;

use infobot_core::{
    config::Config, messaging::port::MessagingPort, responders::QueryEngine, store::UserStore,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub engine: Arc<QueryEngine>,
    pub users: Arc<UserStore>,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>, engine: Arc<QueryEngine>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        info!("infobot started: @{}", me.username());
    }
    if cfg.telegram_allowed_users.is_empty() {
        info!("no allow-list configured; bot is public");
    } else {
        info!("allowed users: {}", cfg.telegram_allowed_users.len());
    }
    info!(
        weather = cfg.openweather_api_key.is_some(),
        news = cfg.news_api_key.is_some(),
        "credentialed sources"
    );

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        cfg,
        engine,
        users: Arc::new(UserStore::new()),
        messenger,
    });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}

use std::sync::Arc;

use teloxide::prelude::*;

use tracing::info;

use infobot_core::{
    domain::{ChatId, UserId},
    formatting::to_telegram_html,
};

use crate::router::AppState;

pub async fn handle_text(_bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text().map(|s| s.to_string()) else {
        return Ok(());
    };
    if text.trim().is_empty() {
        return Ok(());
    }

    let user_id = UserId(user.id.0 as i64);
    let chat_id = ChatId(msg.chat.id.0);

    if state.users.touch(user_id).await {
        info!(user = user_id.0, "first message from user");
    }

    let reply = state.engine.answer(&text).await;
    state.users.record_exchange(user_id, &text, &reply).await;

    let _ = state
        .messenger
        .send_html(chat_id, &to_telegram_html(&reply))
        .await;

    Ok(())
}

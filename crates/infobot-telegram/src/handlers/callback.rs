use std::sync::Arc;

use teloxide::prelude::*;

use infobot_core::{
    config::is_authorized,
    domain::{ChatId, MessageId, MessageRef, UserId},
    formatting::to_telegram_html,
};

use crate::router::AppState;

fn section_text(data: &str) -> Option<&'static str> {
    match data {
        "info" => Some(
            "📚 *Information Section*\n\nChoose what you need:\n\
             • Wikipedia search\n• Weather info\n• News updates\n• Calculations\n\n\
             Just ask me anything!",
        ),
        "utils" => Some(
            "🔧 *Utility Section*\n\nAvailable utilities:\n\
             • /calc for arithmetic\n• Date and time info\n\n\
             Use /help for commands.",
        ),
        "data" => Some(
            "📊 *Data Section*\n\nI can help with:\n\
             • Information lookup\n• Bot statistics (/stats)\n\n\
             Provide data or ask specific questions.",
        ),
        "chat" => Some(
            "💬 *Chat Mode Activated*\n\nFeel free to chat with me! I can discuss \
             various topics, provide information, or just have a conversation.\n\n\
             What's on your mind?",
        ),
        _ => None,
    }
}

pub async fn handle_callback(
    _bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let cb_id = q.id.clone();
    let data = q.data.clone().unwrap_or_default();
    let message = q.message.as_ref();

    if !is_authorized(
        Some(UserId(q.from.id.0 as i64)),
        &state.cfg.telegram_allowed_users,
    ) {
        let _ = state
            .messenger
            .answer_callback_query(&cb_id, Some("Unauthorized"))
            .await;
        return Ok(());
    }

    let (Some(msg), Some(text)) = (message, section_text(&data)) else {
        let _ = state.messenger.answer_callback_query(&cb_id, None).await;
        return Ok(());
    };

    let target = MessageRef {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
    };
    let _ = state
        .messenger
        .edit_html(target, &to_telegram_html(text))
        .await;
    let _ = state.messenger.answer_callback_query(&cb_id, None).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_start_button_has_a_section() {
        for data in ["info", "utils", "data", "chat"] {
            assert!(section_text(data).is_some(), "missing section for {data}");
        }
        assert!(section_text("bogus").is_none());
    }
}

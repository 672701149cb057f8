use std::sync::Arc;

use teloxide::prelude::*;

use infobot_core::{
    domain::{ChatId, UserId},
    formatting::to_telegram_html,
    messaging::types::InlineKeyboard,
};

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let (cmd, args) = parse_command(text);
    let chat_id = ChatId(msg.chat.id.0);
    let user_id = UserId(user.id.0 as i64);
    state.users.touch(user_id).await;

    match cmd.as_str() {
        "start" => {
            let first_name = user.first_name.clone();
            let welcome = format!(
                "🤖 *Welcome {first_name}!*\n\n\
                 I'm an information bot with multiple capabilities:\n\n\
                 📚 *Information & Knowledge*\n\
                 • Wikipedia search\n\
                 • News updates\n\
                 • Weather information\n\
                 • Calculations\n\
                 • Date and time\n\n\
                 💬 *Conversation*\n\
                 • Just chat with me in plain language\n\n\
                 Type /help to see all available commands!"
            );
            let keyboard = InlineKeyboard::one_per_row(&[
                ("📚 Get Information", "info"),
                ("🔧 Use Utilities", "utils"),
                ("📊 Data Analysis", "data"),
                ("💬 Just Chat", "chat"),
            ]);
            let _ = state
                .messenger
                .send_inline_keyboard(chat_id, &to_telegram_html(&welcome), keyboard)
                .await;
        }

        "help" => {
            let help = "🛠 *Available Commands:*\n\n\
                 *Basic Commands:*\n\
                 /start - Start the bot\n\
                 /help - Show this help message\n\n\
                 *Information Commands:*\n\
                 /wiki <query> - Search Wikipedia\n\
                 /weather <city> - Get weather information\n\
                 /news <topic> - Get latest news\n\
                 /calc <expression> - Calculate expressions\n\n\
                 *Chat Commands:*\n\
                 /stats - Show bot statistics\n\
                 /broadcast <message> - Broadcast to all users (admin)\n\n\
                 Type any message to chat with me naturally!";
            send(&state, chat_id, help).await;
        }

        "wiki" => {
            if args.is_empty() {
                send(
                    &state,
                    chat_id,
                    "Please provide a search term. Example: /wiki Rust programming",
                )
                .await;
                return Ok(());
            }
            let reply = state.engine.answer(&format!("wiki {args}")).await;
            state.users.record_exchange(user_id, text, &reply).await;
            send(&state, chat_id, &reply).await;
        }

        "weather" => {
            let query = if args.is_empty() {
                "weather".to_string()
            } else {
                format!("weather in {args}")
            };
            let reply = state.engine.answer(&query).await;
            state.users.record_exchange(user_id, text, &reply).await;
            send(&state, chat_id, &reply).await;
        }

        "news" => {
            let query = if args.is_empty() {
                "news".to_string()
            } else {
                format!("news about {args}")
            };
            let reply = state.engine.answer(&query).await;
            state.users.record_exchange(user_id, text, &reply).await;
            send(&state, chat_id, &reply).await;
        }

        "calc" => {
            if args.is_empty() {
                send(&state, chat_id, "Usage: /calc <expression>").await;
                return Ok(());
            }
            let reply = state.engine.answer(&format!("calculate {args}")).await;
            state.users.record_exchange(user_id, text, &reply).await;
            send(&state, chat_id, &reply).await;
        }

        "stats" => {
            let users = state.users.user_count().await;
            let stats = format!(
                "📊 *Bot Statistics*\n\n\
                 • Total Users: {users}\n\n\
                 *Capabilities:*\n\
                 ✅ Wikipedia lookups\n\
                 ✅ Weather and news (with API keys)\n\
                 ✅ Arithmetic\n\
                 ✅ Date and time\n\n\
                 Bot is running smoothly! 🚀"
            );
            send(&state, chat_id, &stats).await;
        }

        "broadcast" => {
            if args.is_empty() {
                send(&state, chat_id, "Usage: /broadcast <message>").await;
                return Ok(());
            }
            // Broadcasting to every stored user needs chat ids, which the
            // store does not keep yet; acknowledge the message for now.
            send(
                &state,
                chat_id,
                &format!(
                    "📢 Broadcast feature ready!\n\nMessage: {args}\n\n\
                     (Would be sent to all users in production)"
                ),
            )
            .await;
        }

        _ => {
            let _ = bot
                .send_message(msg.chat.id, "Unknown command. Type /help to see what I can do.")
                .await;
        }
    }

    Ok(())
}

async fn send(state: &AppState, chat_id: ChatId, text: &str) {
    let _ = state
        .messenger
        .send_html(chat_id, &to_telegram_html(text))
        .await;
}

use std::sync::Arc;

use infobot_core::{config::Config, responders::QueryEngine};

#[tokio::main]
async fn main() -> Result<(), infobot_core::Error> {
    infobot_core::logging::init("infobot")?;

    let cfg = Arc::new(Config::load()?);
    let engine = Arc::new(QueryEngine::new(cfg.clone())?);

    infobot_telegram::router::run_polling(cfg, engine)
        .await
        .map_err(|e| infobot_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}

use crate::utils::config::AppConfig;
use log::info;
use log4rs;
use std::sync::Arc;

pub async fn init() -> crate::error::Result<Arc<AppConfig>> {
    log4rs::init_file("config/log4rs.yml", Default::default())?;

    let config = AppConfig::load("config/app.yml")?;
    info!("application configuration loaded");

    info!(
        "locales path: {}, default locale: {}",
        config.locales.path, config.locales.default
    );
    info!("generation model: {} via {}", config.ai.model, config.ai.endpoint);

    Ok(Arc::new(config))
}

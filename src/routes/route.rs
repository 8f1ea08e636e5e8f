use actix_web::web;
use std::sync::Arc;

use crate::controller;
use crate::service::ai::{AiAssistant, GeminiClient, TextGenerator};
use crate::service::jobs::JobCatalog;
use crate::utils::config::get_config;

/// Wires the `/v1` scope. The AI assistant and the job catalog are built
/// once here and shared through app data, so every handler sees the same
/// configured client instance.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let config = get_config();
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::from_config(&config.ai));
    let assistant = AiAssistant::new(generator);
    let catalog = JobCatalog::with_seed_data();

    cfg.service(
        web::scope("/v1")
            .app_data(web::Data::new(assistant))
            .app_data(web::Data::new(catalog))
            .service(controller::ai::routes())
            .service(controller::jobs::routes())
            .service(controller::jobs::meta_routes())
            .service(controller::profile::routes()),
    );
}

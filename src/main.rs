use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use khidma_api::routes;
use khidma_api::utils::init;
use khidma_api::Locales;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration and bring up the logging system
    let config = init::init()
        .await
        .context("failed to initialize application")
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    // Translation catalog shared with every handler
    let mut locales = Locales::new(&config.locales.path.clone()).expect("failed to load locale files");
    locales.set_default(&config.locales.default.clone()).expect("failed to set default locale");
    let locales = Arc::new(locales);
    let server_config = config.clone();
    let host = server_config.server.host.clone();
    let port = server_config.server.port;
    let shutdown_timeout = server_config.server.shutdown_timeout;

    let app_data = web::Data::new(locales.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_config.clone()))
            .app_data(app_data.clone())
            .wrap(khidma_api::middleware::error_handler::error_handler())
            .wrap(khidma_api::middleware::Logging)
            .configure(routes::route::configure)
    })
    .client_request_timeout(std::time::Duration::from_secs(30))
    .bind((host, port))?
    .shutdown_timeout(shutdown_timeout)
    .run()
    .await
}

//! AgentCraft proxy API entry point
//!
//! Exposes `/api/{resource}[/{id}]` and relays every call to the backend
//! REST service, mirroring its status code and JSON body.

mod api;
mod config;
mod error;
mod forward;
mod logging;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use anyhow::Context;

use config::WebConfig;
use forward::Forwarder;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config_path = WebConfig::resolve_path();
    let config = WebConfig::load(&config_path)?;

    // 保持 guard 存活直到退出，保证文件日志落盘
    let _log_guard = logging::init(&config.log)?;

    tracing::info!(path = %config_path.display(), "Configuration loaded");

    let forwarder = Forwarder::from_config(&config.backend)
        .context("invalid [backend] configuration")?;
    tracing::info!(backend = %forwarder.base_url(), "Forwarding to backend");

    let forwarder = web::Data::new(forwarder);
    let (host, port) = config.bind_addr();

    tracing::info!("Starting AgentCraft proxy on http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(forwarder.clone())
            .route("/health", web::get().to(api::health_check))
            .configure(api::config)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {host}:{port}"))?
    .run()
    .await?;

    tracing::info!("AgentCraft proxy stopped");
    Ok(())
}

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

use frontlines_api::config::ApiConfig;
use frontlines_api::handlers;
use frontlines_api::handlers::dataset::DatasetFile;
use frontlines_api::integrations::HttpCompanySource;
use frontlines_api::SessionManager;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,

    /// Config file to use instead of the per-user default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the URL the company list is fetched from
    #[arg(long)]
    data_url: Option<String>,

    /// Override the JSON file served at /data/companies.json
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,
}

fn init_tracing(log_file_path: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let Some(log_path) = log_file_path else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
        return None;
    };

    let log_path = std::path::Path::new(log_path);
    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(std::path::Path::new(".")),
        log_path
            .file_name()
            .unwrap_or(std::ffi::OsStr::new("frontlines-api.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_writer(std::io::stdout),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    Some(guard)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(args.log_file_path.as_deref());

    let (config, config_path) = match args.config {
        Some(path) => ApiConfig::load_from(path),
        None => ApiConfig::load(),
    }
    .context("Failed to load config")?;
    tracing::info!("Loaded config from {}", config_path.display());

    let mut data = config.data_source(&config_path);
    if let Some(url) = args.data_url {
        data.url = url;
    }
    if let Some(file) = args.data_file {
        data.file = file;
    }

    if !data.file.exists() {
        tracing::warn!(
            "Dataset file {} does not exist; {} will answer 404",
            data.file.display(),
            frontlines_api::config::DATASET_ROUTE
        );
    }

    let (host, port) = config.server_address();
    tracing::info!("Server will listen on {}:{}", host, port);
    tracing::info!("Company list source: {}", data.url);

    let manager = Arc::new(SessionManager::new(Arc::new(HttpCompanySource::new(
        data.url.clone(),
    ))));
    let dataset = DatasetFile::new(data.file.clone());

    let manager_for_server = manager.clone();
    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        let cors = if let Some(cors_config) = &cors_config {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(manager_for_server.clone()))
            .app_data(web::Data::new(dataset.clone()))
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("Failed to bind {}:{}", host, port))?
    .run();

    // The listener is bound, so a source pointing at this server can connect
    // even before the accept loop is polled.
    let _initial_load = manager.start_load().await;

    server.await.context("Server terminated with an error")?;
    tracing::info!("Server stopped");

    Ok(())
}

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn, LevelFilter};
use std::sync::Arc;

use movement_explorer_api::config::{Config, DEFAULT_CONFIG_PATH};
use movement_explorer_api::providers::{
    GraphqlStatsClient, LedgerClient, RestLedgerClient, WalletStatsProvider,
};
use movement_explorer_api::routes::configure_routes;
use movement_explorer_api::services::{ExportWorker, TokenRegistry, TransactionExporter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

fn to_io_error(e: anyhow::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, format!("{:#}", e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    // 2. Load configuration
    let config = Config::load(&args.config).map_err(|e| {
        error!("Invalid configuration: {:#}", e);
        to_io_error(e)
    })?;

    info!("Starting Movement Explorer API...");
    info!(
        "Configuration loaded: ledger {} (page size {}), indexer {}",
        config.ledger.rpc_url, config.ledger.page_size, config.indexer.graphql_url
    );

    // 3. Build upstream clients and the export worker
    let ledger: Arc<dyn LedgerClient> =
        Arc::new(RestLedgerClient::from_config(&config.ledger).map_err(to_io_error)?);
    let stats_provider: Arc<dyn WalletStatsProvider> =
        Arc::new(GraphqlStatsClient::from_config(&config.indexer).map_err(to_io_error)?);
    if config.indexer.api_key.is_none() || config.indexer.api_secret.is_none() {
        warn!("Indexer credentials not configured; wallet stats requests may be rejected");
    }

    let exporter = Arc::new(TransactionExporter::new(
        ledger,
        Some(config.ledger.page_size),
    ));
    let export_worker = ExportWorker::spawn(exporter.clone());

    let token_registry = web::Data::new(TokenRegistry::from_tokens(config.tokens.clone()));
    info!("Loaded {} tokens", token_registry.token_count());

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server will be available at http://{}", bind_addr);

    let config = Arc::new(config);
    let stats_provider = web::Data::from(stats_provider);
    let export_worker = web::Data::new(export_worker);
    let exporter = web::Data::from(exporter);

    HttpServer::new(move || {
        // Configure CORS from config
        let allowed_origins = config.cors.allowed_origins.clone();

        let cors = Cors::default().allowed_origin_fn(move |origin, _req_head| {
            let origin_str = match origin.to_str() {
                Ok(s) => s,
                Err(_) => return false,
            };
            allowed_origins.iter().any(|allowed| origin_str == allowed)
        });

        // Convert string methods to HTTP methods
        let mut methods: Vec<actix_web::http::Method> = config
            .cors
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        methods.push(actix_web::http::Method::OPTIONS);

        let cors = cors
            .allowed_methods(methods)
            .allowed_headers(config.cors.allowed_headers.clone())
            .expose_headers(vec!["Content-Disposition".to_string()])
            .max_age(3600);

        let cors = if config.cors.supports_credentials {
            cors.supports_credentials()
        } else {
            cors
        };

        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(stats_provider.clone())
            .app_data(export_worker.clone())
            .app_data(exporter.clone())
            .app_data(token_registry.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}

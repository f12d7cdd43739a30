use actix_web::{web, App, HttpServer};
use creditapi::config::{Config, LogFormat};
use creditapi::middleware::{ErrorHandler, RequestId};
use creditapi::modules;
use creditapi::OfferAggregator;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    init_tracing(&config);

    tracing::info!("Starting CreditAPI offer aggregation service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        base_url = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        lookup_concurrency = config.upstream.lookup_concurrency,
        "Credit bureau configured"
    );

    let aggregator = web::Data::new(
        OfferAggregator::from_config(&config.upstream)
            .expect("Failed to create offer aggregator"),
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(aggregator.clone())
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("creditapi={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

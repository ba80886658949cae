use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::{self as fs, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{http, middleware, web, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use agency_backend::ai::AiCapability;
use agency_backend::config::Config;
use agency_backend::state::AppState;
use agency_backend::{db, routes};

const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agency_backend=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::ACCEPT])
        .max_age(3600);

    if allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }
    allowed_origins
        .iter()
        .fold(cors.supports_credentials(), |cors, origin| {
            cors.allowed_origin(origin)
        })
}

/// Serves the built frontend; unknown paths get `index.html` so client-side
/// routing works.
fn spa_files(static_dir: PathBuf) -> fs::Files {
    let index = static_dir.join("index.html");
    fs::Files::new("/", &static_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let response = file.into_response(&req);
                Ok(ServiceResponse::new(req, response))
            }
        }))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("invalid configuration")?;

    if config.environment.is_production() && config.session_secret.is_none() {
        tracing::warn!("SESSION_SECRET is not set; sessions will not be secure");
    }

    let ai = AiCapability::from_config(&config.ai);
    match &ai {
        AiCapability::Available(model) => tracing::info!(model = %model.model_name(), "AI generation enabled"),
        AiCapability::Unavailable { reason } => {
            tracing::warn!(%reason, "AI generation disabled; using template fallbacks")
        }
    }

    let database = db::connect(&config.database).await;
    let state = web::Data::new(AppState::new(
        ai,
        database,
        config.agency.clone(),
        config.environment,
    ));

    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.join("index.html").is_file();
    if !serve_static {
        tracing::info!(dir = %static_dir.display(), "no frontend build found; serving API only");
    }

    let (host, port) = config.bind_address();
    tracing::info!(%host, port, environment = config.environment.as_str(), "agency backend starting");

    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(build_cors(&allowed_origins))
            .wrap(middleware::from_fn(routes::mask_internal_errors))
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
            .configure(|cfg| {
                if serve_static {
                    cfg.service(spa_files(static_dir.clone()));
                }
            })
    })
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {}:{}", host, port))?
    .run()
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

//! HTTP routes under `/api`.

pub mod chatbot;
pub mod contact;
pub mod generator;
pub mod health;
pub mod offerings;
pub mod portfolio;

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::{from_fn, Next};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::error::INTERNAL_ERROR_MESSAGE;
use crate::state::AppState;

const JSON_LIMIT_BYTES: usize = 1_048_576;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let detail = err.to_string();
            tracing::debug!(error = %detail, "rejected JSON body");
            let response = HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": format!("Invalid request: {}", detail)
            }));
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

/// Answers 503 before the handler runs when the startup database
/// connection never succeeded.
pub async fn require_database<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    let connected = req
        .app_data::<web::Data<AppState>>()
        .is_some_and(|state| state.database.is_connected());

    if !connected {
        tracing::warn!(path = %req.path(), "database unavailable; rejecting request");
        let response = HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "success": false,
            "error": "Service Unavailable",
            "message": "Database connection is not available. Please try again later."
        }));
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}

/// Replaces 500 bodies with a generic message in production. The real error
/// has already been logged by `ApiError::error_response`.
pub async fn mask_internal_errors<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    let hide = req
        .app_data::<web::Data<AppState>>()
        .is_some_and(|state| state.environment.is_production());

    let res = next.call(req).await?;
    if !hide || res.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return Ok(res.map_into_left_body());
    }

    let (req, _) = res.into_parts();
    let masked = HttpResponse::InternalServerError().json(serde_json::json!({
        "success": false,
        "error": INTERNAL_ERROR_MESSAGE,
    }));
    Ok(ServiceResponse::new(req, masked).map_into_right_body())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api/services")
                .wrap(from_fn(require_database))
                .configure(offerings::configure),
        )
        .service(
            web::scope("/api/portfolio-projects")
                .wrap(from_fn(require_database))
                .configure(portfolio::configure),
        )
        .service(
            web::scope("/api/contact")
                .wrap(from_fn(require_database))
                .configure(contact::configure),
        )
        .service(
            web::scope("/api/chatbot")
                .wrap(from_fn(require_database))
                .configure(chatbot::configure),
        )
        .configure(generator::configure)
        .configure(health::configure);
}

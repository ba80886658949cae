use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::ApiResult;
use crate::models::{NewContact, StatusUpdate};
use crate::state::AppState;

async fn submit(state: web::Data<AppState>, body: web::Json<NewContact>) -> ApiResult<HttpResponse> {
    let contact = state.backend()?.contacts.submit(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Thank you for your message! We'll get back to you soon.",
        "data": { "id": contact.id },
    })))
}

async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let contacts = state.backend()?.contacts.list().await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": contacts.len(),
        "data": contacts,
    })))
}

async fn get(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let contact = state.backend()?.contacts.get(&id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": contact })))
}

async fn update_status(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<StatusUpdate>,
) -> ApiResult<HttpResponse> {
    let contact = state
        .backend()?
        .contacts
        .update_status(&id, &body.status)
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Contact status updated",
        "data": contact,
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(submit))
        .route("", web::get().to(list))
        .route("/{id}", web::get().to(get))
        .route("/{id}/status", web::put().to(update_status));
}

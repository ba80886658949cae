use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiResult;
use crate::models::{NewServiceOffering, UpdateServiceOffering};
use crate::services::OfferingFilter;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ListQuery {
    category: Option<String>,
    featured: Option<bool>,
}

async fn list(state: web::Data<AppState>, query: web::Query<ListQuery>) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let filter = OfferingFilter {
        category: query.category,
        featured: query.featured,
    };
    let offerings = state.backend()?.offerings.list(&filter).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": offerings.len(),
        "data": offerings,
    })))
}

async fn get(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let offering = state.backend()?.offerings.get(&id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": offering })))
}

async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewServiceOffering>,
) -> ApiResult<HttpResponse> {
    let offering = state.backend()?.offerings.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Service created successfully",
        "data": offering,
    })))
}

async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<UpdateServiceOffering>,
) -> ApiResult<HttpResponse> {
    let offering = state
        .backend()?
        .offerings
        .update(&id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Service updated successfully",
        "data": offering,
    })))
}

async fn delete(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    state.backend()?.offerings.delete(&id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Service deleted successfully",
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

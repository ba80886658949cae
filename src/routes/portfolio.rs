use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiResult;
use crate::models::{NewPortfolioProject, UpdatePortfolioProject};
use crate::services::PortfolioFilter;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ListQuery {
    category: Option<String>,
    featured: Option<bool>,
}

async fn list(state: web::Data<AppState>, query: web::Query<ListQuery>) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let filter = PortfolioFilter {
        category: query.category,
        featured: query.featured,
    };
    let projects = state.backend()?.portfolio.list(&filter).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": projects.len(),
        "data": projects,
    })))
}

async fn get(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let project = state.backend()?.portfolio.get(&id).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": project })))
}

async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewPortfolioProject>,
) -> ApiResult<HttpResponse> {
    let project = state.backend()?.portfolio.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Portfolio project created successfully",
        "data": project,
    })))
}

async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<UpdatePortfolioProject>,
) -> ApiResult<HttpResponse> {
    let project = state
        .backend()?
        .portfolio
        .update(&id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Portfolio project updated successfully",
        "data": project,
    })))
}

async fn delete(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    state.backend()?.portfolio.delete(&id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Portfolio project deleted successfully",
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

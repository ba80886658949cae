use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::mockup::CompanyData;
use crate::models::ProjectQuoteRequest;
use crate::state::AppState;
use crate::templates;

async fn generate_mockup(
    state: web::Data<AppState>,
    body: web::Json<CompanyData>,
) -> ApiResult<HttpResponse> {
    let company = body.into_inner();
    if let Some(field) = company.missing_field() {
        return Err(ApiError::validation(format!(
            "Company name, industry, and description are required (missing {})",
            field
        )));
    }

    let mockup = state.generator.generate_website_mockup(&company).await;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "mockup": mockup })))
}

async fn project_quote(
    state: web::Data<AppState>,
    body: web::Json<ProjectQuoteRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    if request.company_name.trim().is_empty() {
        return Err(ApiError::validation("Company name is required"));
    }
    if !request.mockup.as_ref().is_some_and(|m| m.is_object()) {
        return Err(ApiError::validation("A generated mockup is required to prepare a quote"));
    }

    let quote = state.generator.generate_project_quote(&request).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "quote": quote })))
}

async fn list_templates() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "count": templates::all().len(),
        "templates": templates::all(),
    }))
}

async fn get_template(template_id: web::Path<String>) -> ApiResult<HttpResponse> {
    let template = templates::find(&template_id)
        .ok_or_else(|| ApiError::not_found("Template", &template_id))?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "template": template })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/generate-mockup", web::post().to(generate_mockup))
        .route("/api/project-quote", web::post().to(project_quote))
        .route("/api/templates", web::get().to(list_templates))
        .route("/api/templates/{template_id}", web::get().to(get_template));
}

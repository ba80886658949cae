use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const MAX_CHAT_MESSAGE_CHARS: usize = 2000;
const CONVERSATION_LIST_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageRequest {
    #[serde(default)]
    message: String,
    conversation_id: Option<String>,
}

async fn message(state: web::Data<AppState>, body: web::Json<MessageRequest>) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let text = body.message.trim();
    if text.is_empty() {
        return Err(ApiError::validation("Message is required"));
    }
    if text.chars().count() > MAX_CHAT_MESSAGE_CHARS {
        return Err(ApiError::validation(format!(
            "Message must be at most {} characters",
            MAX_CHAT_MESSAGE_CHARS
        )));
    }

    let reply = state
        .backend()?
        .chatbot
        .handle_message(text, body.conversation_id.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "response": reply.response,
        "conversationId": reply.conversation_id,
        "timestamp": reply.timestamp,
    })))
}

async fn history(
    state: web::Data<AppState>,
    conversation_id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let conversation = state
        .backend()?
        .chatbot
        .history(&conversation_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Conversation", &conversation_id))?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "conversationId": conversation.conversation_id,
        "messages": conversation.messages(),
        "lastActivity": conversation.last_activity,
        "status": conversation.status,
    })))
}

async fn conversations(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let summaries = state
        .backend()?
        .chatbot
        .recent_conversations(CONVERSATION_LIST_LIMIT)
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": summaries.len(),
        "conversations": summaries,
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/message", web::post().to(message))
        .route("/history/{conversation_id}", web::get().to(history))
        .route("/conversations", web::get().to(conversations));
}

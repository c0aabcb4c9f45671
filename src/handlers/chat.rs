// src/handlers/chat.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::chat::{ChatRequest, ChatResponse},
};

// POST /api/chat-with-data
#[utoipa::path(
    post,
    path = "/api/chat-with-data",
    tag = "Chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "SQL gerado pelo Vanna e o resultado da consulta", body = ChatResponse),
        (status = 400, description = "Pergunta vazia ou corpo inválido"),
        (status = 500, description = "Falha no serviço de NL-to-SQL")
    )
)]
pub async fn chat_with_data(
    State(app_state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::InvalidParameter(rejection.body_text()).to_api_error("Failed to process chat query")
    })?;
    let query = payload.query.unwrap_or_default();

    let answer = app_state.chat_service
        .ask(&query)
        .await
        .map_err(|app_err| app_err.to_api_error("Failed to process chat query"))?;

    Ok((StatusCode::OK, Json(answer)))
}

// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Parâmetro de query fora da lista permitida (ex: sortBy desconhecido)
    #[error("Parâmetro inválido: {0}")]
    InvalidParameter(String),

    #[error("Query is required")]
    ChatQueryMissing,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // O serviço externo (Vanna) respondeu com status de erro
    #[error("Vanna API error: {0}")]
    UpstreamError(String),

    #[error("Erro de HTTP: {0}")]
    HttpClientError(#[from] reqwest::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

/// Resposta de erro pronta para o cliente: status + corpo JSON.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl AppError {
    /// Converte o erro interno na resposta HTTP.
    ///
    /// `operation` é a mensagem genérica devolvida nas falhas 500
    /// (ex: "Failed to fetch top vendors"); o detalhe só vai para o log.
    pub fn to_api_error(self, operation: &str) -> ApiError {
        match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    body: json!({
                        "error": "One or more parameters are invalid.",
                        "details": details,
                    }),
                }
            }
            AppError::InvalidParameter(message) => ApiError {
                status: StatusCode::BAD_REQUEST,
                body: json!({ "error": message }),
            },
            AppError::ChatQueryMissing => ApiError {
                status: StatusCode::BAD_REQUEST,
                body: json!({ "error": "Query is required" }),
            },

            // Falhas do serviço externo: devolvemos o detalhe junto, como o front espera
            e @ (AppError::UpstreamError(_) | AppError::HttpClientError(_)) => {
                tracing::error!("{}: {}", operation, e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: json!({ "error": operation, "details": e.to_string() }),
                }
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500 sem resultado parcial.
            e => {
                tracing::error!("{}: {:?}", operation, e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: json!({ "error": operation }),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// src/services/chat_service.rs

use crate::{
    common::error::AppError,
    models::chat::{ChatResponse, VannaAskRequest, VannaAskResponse},
};

// Repassa a pergunta em linguagem natural para o Vanna (NL -> SQL)
#[derive(Clone)]
pub struct ChatService {
    client: reqwest::Client,
    base_url: String,
}

impl ChatService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn ask(&self, query: &str) -> Result<ChatResponse, AppError> {
        // Só a pergunta vazia é barrada; espaços seguem para o Vanna
        if query.is_empty() {
            return Err(AppError::ChatQueryMissing);
        }

        let url = format!("{}/ask", self.base_url.trim_end_matches('/'));
        tracing::debug!(%url, "encaminhando pergunta para o Vanna");

        let response = self
            .client
            .post(&url)
            .json(&VannaAskRequest { question: query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamError(
                status.canonical_reason().unwrap_or(status.as_str()).to_string(),
            ));
        }

        let data: VannaAskResponse = response.json().await?;

        Ok(ChatResponse {
            query: query.to_string(),
            sql: data.sql,
            results: data.results,
            error: data.error,
        })
    }
}

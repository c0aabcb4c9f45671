// src/models/chat.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[schema(example = "Quais os 5 fornecedores com maior gasto?")]
    pub query: Option<String>,
}

// Corpo enviado para o Vanna (POST /ask)
#[derive(Debug, Serialize)]
pub struct VannaAskRequest<'a> {
    pub question: &'a str,
}

// Resposta do Vanna; qualquer campo pode faltar
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VannaAskResponse {
    pub sql: Option<String>,
    pub results: Option<Value>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChatResponse {
    pub query: String,
    #[schema(example = "SELECT name FROM vendors LIMIT 5")]
    pub sql: Option<String>,
    #[schema(value_type = Object)]
    pub results: Option<Value>,
    pub error: Option<String>,
}

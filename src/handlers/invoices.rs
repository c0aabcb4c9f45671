// src/handlers/invoices.rs

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::invoice::{InvoiceListQuery, InvoiceListResponse},
};

// GET /api/invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoices",
    params(InvoiceListQuery),
    responses(
        (status = 200, description = "Lista paginada de faturas", body = InvoiceListResponse),
        (status = 400, description = "Paginação ou ordenação inválida"),
        (status = 500, description = "Falha ao ler as faturas")
    )
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
    query: Result<Query<InvoiceListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::InvalidParameter(rejection.body_text()).to_api_error("Failed to fetch invoices")
    })?;

    let invoices = app_state.invoice_service
        .list_invoices(query)
        .await
        .map_err(|app_err| app_err.to_api_error("Failed to fetch invoices"))?;

    Ok((StatusCode::OK, Json(invoices)))
}

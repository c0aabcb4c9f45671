// src/handlers/trends.rs

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::analytics::{CashOutflowEntry, CategorySpendEntry, MonthlyVolumeEntry},
    services::aggregation::monthly_volume::DEFAULT_WINDOW_MONTHS,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InvoiceVolumeQuery {
    /// Janela em meses a partir de hoje (padrão 12)
    #[param(example = 12)]
    pub months: Option<i32>,
}

// GET /api/trends/invoice-volume
#[utoipa::path(
    get,
    path = "/api/trends/invoice-volume",
    tag = "Trends",
    params(InvoiceVolumeQuery),
    responses(
        (status = 200, description = "Quantidade e gasto de faturas por mês", body = Vec<MonthlyVolumeEntry>),
        (status = 400, description = "Parâmetro `months` inválido"),
        (status = 500, description = "Falha ao ler as faturas")
    )
)]
pub async fn get_invoice_volume(
    State(app_state): State<AppState>,
    query: Result<Query<InvoiceVolumeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // `?months=abc` vira 400 em JSON, como os demais erros
    let Query(query) = query.map_err(|rejection| {
        AppError::InvalidParameter(rejection.body_text()).to_api_error("Failed to fetch invoice trends")
    })?;
    let months = query.months.unwrap_or(DEFAULT_WINDOW_MONTHS);

    let volume = app_state.analytics_service
        .invoice_volume(months)
        .await
        .map_err(|app_err| app_err.to_api_error("Failed to fetch invoice trends"))?;

    Ok((StatusCode::OK, Json(volume)))
}

// GET /api/trends/category-spend
#[utoipa::path(
    get,
    path = "/api/trends/category-spend",
    tag = "Trends",
    responses(
        (status = 200, description = "Gasto por categoria (Operations, Marketing, Facilities)", body = Vec<CategorySpendEntry>),
        (status = 500, description = "Falha ao ler os itens das faturas")
    )
)]
pub async fn get_category_spend(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = app_state.analytics_service
        .category_spend()
        .await
        .map_err(|app_err| app_err.to_api_error("Failed to fetch category spend"))?;

    Ok((StatusCode::OK, Json(categories)))
}

// GET /api/trends/cash-outflow
#[utoipa::path(
    get,
    path = "/api/trends/cash-outflow",
    tag = "Trends",
    responses(
        (status = 200, description = "Saída de caixa por faixa (valor ou vencimento, conforme CASH_OUTFLOW_MODE)", body = Vec<CashOutflowEntry>),
        (status = 500, description = "Falha ao ler faturas/pagamentos")
    )
)]
pub async fn get_cash_outflow(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let outflow = app_state.analytics_service
        .cash_outflow(app_state.cash_outflow_mode)
        .await
        .map_err(|app_err| app_err.to_api_error("Failed to fetch cash outflow"))?;

    Ok((StatusCode::OK, Json(outflow)))
}

// src/handlers/vendors.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::ApiError, config::AppState, models::analytics::VendorSpendEntry};

// GET /api/vendors/top10
#[utoipa::path(
    get,
    path = "/api/vendors/top10",
    tag = "Vendors",
    responses(
        (status = 200, description = "Top 10 fornecedores por gasto (Curva ABC)", body = Vec<VendorSpendEntry>),
        (status = 500, description = "Falha ao ler os fornecedores")
    )
)]
pub async fn get_top_vendors(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let vendors = app_state.analytics_service
        .top_vendors()
        .await
        .map_err(|app_err| app_err.to_api_error("Failed to fetch top vendors"))?;

    Ok((StatusCode::OK, Json(vendors)))
}

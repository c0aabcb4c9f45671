// src/handlers/stats.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::ApiError, config::AppState, models::stats::StatsOverview};

// GET /api/stats
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Stats",
    responses(
        (status = 200, description = "Cards do topo: gasto no ano, faturas, documentos e ticket médio", body = StatsOverview),
        (status = 500, description = "Falha ao calcular o resumo")
    )
)]
pub async fn get_stats(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let overview = app_state.analytics_service
        .overview()
        .await
        .map_err(|app_err| app_err.to_api_error("Failed to fetch statistics"))?;

    Ok((StatusCode::OK, Json(overview)))
}

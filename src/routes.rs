// src/routes.rs

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn app(app_state: AppState) -> Router {
    // Séries e faixas dos gráficos
    let trends_routes = Router::new()
        .route("/invoice-volume", get(handlers::trends::get_invoice_volume))
        .route("/category-spend", get(handlers::trends::get_category_spend))
        .route("/cash-outflow", get(handlers::trends::get_cash_outflow));

    let vendor_routes = Router::new()
        .route("/top10", get(handlers::vendors::get_top_vendors));

    // Combina tudo no router principal
    Router::new()
        .route("/", get(handlers::meta::root))
        .route("/health", get(handlers::meta::health))
        .route("/api/stats", get(handlers::stats::get_stats))
        .route("/api/invoices", get(handlers::invoices::list_invoices))
        .route("/api/chat-with-data", post(handlers::chat::chat_with_data))
        .nest("/api/vendors", vendor_routes)
        .nest("/api/trends", trends_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}

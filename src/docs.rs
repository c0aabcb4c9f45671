// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Stats ---
        handlers::stats::get_stats,

        // --- Invoices ---
        handlers::invoices::list_invoices,

        // --- Vendors ---
        handlers::vendors::get_top_vendors,

        // --- Trends ---
        handlers::trends::get_invoice_volume,
        handlers::trends::get_category_spend,
        handlers::trends::get_cash_outflow,

        // --- Chat ---
        handlers::chat::chat_with_data,
    ),
    components(
        schemas(
            // --- STATS ---
            models::stats::StatCard,
            models::stats::StatsOverview,

            // --- INVOICES ---
            models::invoice::InvoiceStatus,
            models::invoice::InvoiceListItem,
            models::invoice::InvoiceListResponse,

            // --- ANALYTICS ---
            models::analytics::MonthlyVolumeEntry,
            models::analytics::VendorSpendEntry,
            models::analytics::SpendCategory,
            models::analytics::CategorySpendEntry,
            models::analytics::CashOutflowEntry,
            models::analytics::CashOutflowMode,

            // --- CHAT ---
            models::chat::ChatRequest,
            models::chat::ChatResponse,
        )
    ),
    tags(
        (name = "Stats", description = "Indicadores do topo do dashboard"),
        (name = "Invoices", description = "Listagem de faturas"),
        (name = "Vendors", description = "Concentração de gasto por fornecedor"),
        (name = "Trends", description = "Séries e faixas para os gráficos"),
        (name = "Chat", description = "Perguntas em linguagem natural (Vanna)")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/stats",
            "/api/invoices",
            "/api/vendors/top10",
            "/api/trends/invoice-volume",
            "/api/trends/category-spend",
            "/api/trends/cash-outflow",
            "/api/chat-with-data",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{} sem documentação", path);
        }
    }
}

// src/handlers/meta.rs

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Flow Analytics API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "/health",
            "stats": "/api/stats",
            "invoices": "/api/invoices",
            "vendors": "/api/vendors/top10",
            "trends": {
                "invoiceVolume": "/api/trends/invoice-volume",
                "categorySpend": "/api/trends/category-spend",
                "cashOutflow": "/api/trends/cash-outflow",
            },
            "chat": "/api/chat-with-data (POST)",
        },
        "documentation": "/swagger-ui",
    }))
}

// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}

// src/models/stats.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// Um card do topo do dashboard
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub value: Decimal,
    #[schema(example = 12.5)]
    pub change: Decimal, // Variação percentual contra o mês anterior
    #[schema(example = "YTD")]
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub total_spend: StatCard,
    pub total_invoices: StatCard,
    pub documents_uploaded: StatCard,
    pub average_invoice_value: StatCard,
}

// Marcos de tempo usados nas consultas do resumo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewPeriods {
    pub year_start: DateTime<Utc>,
    pub last_month_start: DateTime<Utc>,
    pub this_month_start: DateTime<Utc>,
}

// Números brutos lidos do banco em uma única transação
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewFigures {
    pub spend_ytd: Decimal,
    pub spend_last_month: Decimal,
    pub spend_this_month: Decimal,
    pub invoices_total: i64,
    pub invoices_last_month: i64,
    pub invoices_this_month: i64,
    pub documents_last_month: i64,
    pub documents_this_month: i64,
    pub average_invoice_value: Option<Decimal>,
}

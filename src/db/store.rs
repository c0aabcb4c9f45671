// src/db/store.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::{
        invoice::{InvoicePage, InvoicePageRequest, InvoiceRecord, LineItemRecord, PaymentRecord, VendorRecord},
        stats::{OverviewFigures, OverviewPeriods},
    },
};

/// Leituras que alimentam o dashboard.
///
/// Cada chamada é uma leitura independente que devolve o snapshot completo
/// ou falha inteira. Nenhum método altera dados.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Faturas com data >= `start` (faturas sem data nunca vêm).
    async fn invoices_since(&self, start: DateTime<Utc>) -> Result<Vec<InvoiceRecord>, AppError>;

    /// Todos os fornecedores, inclusive os sem fatura.
    async fn vendors_with_invoice_totals(&self) -> Result<Vec<VendorRecord>, AppError>;

    async fn line_items(&self) -> Result<Vec<LineItemRecord>, AppError>;

    /// `total_amount` de todas as faturas.
    async fn invoice_totals(&self) -> Result<Vec<Decimal>, AppError>;

    /// Pagamentos com o total da fatura vinculada.
    async fn scheduled_payments(&self) -> Result<Vec<PaymentRecord>, AppError>;

    async fn overview_figures(&self, periods: &OverviewPeriods) -> Result<OverviewFigures, AppError>;

    async fn list_invoices(&self, request: &InvoicePageRequest) -> Result<InvoicePage, AppError>;
}

//! Store em memória para testes de serviço e de rotas.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    config::AppState,
    db::AnalyticsStore,
    models::{
        analytics::CashOutflowMode,
        invoice::{
            InvoiceListRow, InvoicePage, InvoicePageRequest, InvoiceRecord, LineItemRecord,
            PaymentRecord, VendorRecord,
        },
        stats::{OverviewFigures, OverviewPeriods},
    },
    services::{AnalyticsService, ChatService, InvoiceService},
};

#[derive(Default)]
pub struct InMemoryStore {
    pub invoices: Vec<InvoiceRecord>,
    pub vendors: Vec<VendorRecord>,
    pub line_items: Vec<LineItemRecord>,
    pub payments: Vec<PaymentRecord>,
    pub figures: OverviewFigures,
    pub invoice_rows: Vec<InvoiceListRow>,
    pub failing: bool,
    pub last_page_request: Mutex<Option<InvoicePageRequest>>,
}

impl InMemoryStore {
    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl AnalyticsStore for InMemoryStore {
    async fn invoices_since(&self, start: DateTime<Utc>) -> Result<Vec<InvoiceRecord>, AppError> {
        self.check()?;
        Ok(self
            .invoices
            .iter()
            .filter(|i| i.invoice_date.is_some_and(|d| d >= start))
            .cloned()
            .collect())
    }

    async fn vendors_with_invoice_totals(&self) -> Result<Vec<VendorRecord>, AppError> {
        self.check()?;
        Ok(self.vendors.clone())
    }

    async fn line_items(&self) -> Result<Vec<LineItemRecord>, AppError> {
        self.check()?;
        Ok(self.line_items.clone())
    }

    async fn invoice_totals(&self) -> Result<Vec<Decimal>, AppError> {
        self.check()?;
        Ok(self.invoices.iter().map(|i| i.total_amount).collect())
    }

    async fn scheduled_payments(&self) -> Result<Vec<PaymentRecord>, AppError> {
        self.check()?;
        Ok(self.payments.clone())
    }

    async fn overview_figures(&self, _periods: &OverviewPeriods) -> Result<OverviewFigures, AppError> {
        self.check()?;
        Ok(self.figures.clone())
    }

    async fn list_invoices(&self, request: &InvoicePageRequest) -> Result<InvoicePage, AppError> {
        self.check()?;
        *self.last_page_request.lock().unwrap() = Some(request.clone());

        let rows = self
            .invoice_rows
            .iter()
            .skip(request.offset as usize)
            .take(request.limit as usize)
            .cloned()
            .collect();

        Ok(InvoicePage {
            rows,
            total: self.invoice_rows.len() as i64,
        })
    }
}

/// Estado da aplicação sobre um store em memória; o Vanna aponta para
/// `chat_base_url` (use um MockServer ou um endereço qualquer).
pub fn test_state(
    store: Arc<InMemoryStore>,
    mode: CashOutflowMode,
    chat_base_url: &str,
) -> AppState {
    AppState {
        analytics_service: AnalyticsService::new(store.clone()),
        invoice_service: InvoiceService::new(store),
        chat_service: ChatService::new(reqwest::Client::new(), chat_base_url.to_string()),
        cash_outflow_mode: mode,
    }
}

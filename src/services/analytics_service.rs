// src/services/analytics_service.rs

use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Utc};

use crate::{
    common::error::AppError,
    db::AnalyticsStore,
    models::{
        analytics::{
            CashOutflowEntry, CashOutflowMode, CategorySpendEntry, MonthlyVolumeEntry,
            VendorSpendEntry,
        },
        stats::StatsOverview,
    },
    services::aggregation::{cash_outflow, category_spend, monthly_volume, overview, vendor_concentration},
};

#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn AnalyticsStore>,
    clock: fn() -> DateTime<Utc>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn AnalyticsStore>) -> Self {
        Self { store, clock: Utc::now }
    }

    // Relógio fixo para testes
    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn invoice_volume(&self, months: i32) -> Result<Vec<MonthlyVolumeEntry>, AppError> {
        let now = (self.clock)();
        let Some(start) = monthly_volume::window_start(now, months) else {
            return Ok(Vec::new());
        };

        let invoices = self.store.invoices_since(start).await?;
        tracing::debug!(months, invoices = invoices.len(), "agregando volume mensal");

        Ok(monthly_volume::monthly_volume(&invoices, months, now))
    }

    pub async fn top_vendors(&self) -> Result<Vec<VendorSpendEntry>, AppError> {
        let vendors = self.store.vendors_with_invoice_totals().await?;
        tracing::debug!(vendors = vendors.len(), "ranqueando fornecedores");

        Ok(vendor_concentration::rank_vendors(&vendors))
    }

    pub async fn category_spend(&self) -> Result<Vec<CategorySpendEntry>, AppError> {
        let items = self.store.line_items().await?;
        tracing::debug!(line_items = items.len(), "classificando gasto por categoria");

        Ok(category_spend::category_spend(&items))
    }

    pub async fn cash_outflow(&self, mode: CashOutflowMode) -> Result<Vec<CashOutflowEntry>, AppError> {
        match mode {
            CashOutflowMode::Amount => {
                let totals = self.store.invoice_totals().await?;
                tracing::debug!(invoices = totals.len(), "saída de caixa por faixa de valor");
                Ok(cash_outflow::outflow_by_amount(&totals))
            }
            CashOutflowMode::DueDate => {
                let payments = self.store.scheduled_payments().await?;
                tracing::debug!(payments = payments.len(), "saída de caixa por vencimento");
                Ok(cash_outflow::outflow_by_due_date(&payments, (self.clock)()))
            }
        }
    }

    pub async fn overview(&self) -> Result<StatsOverview, AppError> {
        let now = (self.clock)();
        let periods = overview::periods_at(now)
            .ok_or_else(|| anyhow!("não foi possível calcular os períodos para {}", now))?;

        let figures = self.store.overview_figures(&periods).await?;

        Ok(overview::build_overview(&figures))
    }
}

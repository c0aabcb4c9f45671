// src/models/analytics.rs

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 1. Volume mensal de faturas (gráfico de linha)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyVolumeEntry {
    #[schema(example = "2024-01")]
    pub month: String, // YYYY-MM
    pub invoice_count: i64,
    #[schema(example = 2000.0)]
    pub total_spend: Decimal,
}

// 2. Curva ABC de fornecedores (Top 10)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendorSpendEntry {
    #[schema(example = "CPB SOFTWARE (GERMANY) GMBH")]
    pub name: String,
    pub total_spend: Decimal,
    pub invoice_count: i64,
    #[schema(example = 90.0)]
    pub percentage: Decimal, // Relativo ao total do Top 10, não ao total geral
    #[schema(example = 90.0)]
    pub cumulative_percentage: Decimal,
}

// 3. Gasto por categoria (prefixo da conta contábil)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SpendCategory {
    Operations,
    Marketing,
    Facilities,
}

impl SpendCategory {
    // Ordem fixa da resposta
    pub const ALL: [SpendCategory; 3] = [
        SpendCategory::Operations,
        SpendCategory::Marketing,
        SpendCategory::Facilities,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpendEntry {
    pub category: SpendCategory,
    pub amount: Decimal,
    pub percentage: Decimal,
}

// 4. Saída de caixa por faixa (valor ou vencimento)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashOutflowEntry {
    #[schema(example = "$1k-$5k")]
    pub range: String,
    pub amount: Decimal,
    pub count: i64,
}

/// Estratégia de agrupamento do endpoint de saída de caixa.
/// Definida por configuração (CASH_OUTFLOW_MODE), nunca pela requisição.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum CashOutflowMode {
    #[default]
    Amount,
    DueDate,
}

impl FromStr for CashOutflowMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "amount" => Ok(CashOutflowMode::Amount),
            "dueDate" | "due_date" => Ok(CashOutflowMode::DueDate),
            other => anyhow::bail!("modo de saída de caixa desconhecido: '{}' (use 'amount' ou 'dueDate')", other),
        }
    }
}

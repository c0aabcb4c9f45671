// src/services/aggregation/cash_outflow.rs

use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{analytics::CashOutflowEntry, invoice::PaymentRecord};

// =========================================================================
//  FAIXAS DE VALOR: [min, max)
// =========================================================================

#[derive(Debug, Clone, Copy)]
pub struct AmountRange {
    pub label: &'static str,
    pub min: i64,
    pub max: Option<i64>, // None = sem teto
}

impl AmountRange {
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= Decimal::from(self.min) && self.max.is_none_or(|max| amount < Decimal::from(max))
    }
}

pub const AMOUNT_RANGES: [AmountRange; 4] = [
    AmountRange { label: "$0-$1k", min: 0, max: Some(1_000) },
    AmountRange { label: "$1k-$5k", min: 1_000, max: Some(5_000) },
    AmountRange { label: "$5k-$10k", min: 5_000, max: Some(10_000) },
    AmountRange { label: "$10k+", min: 10_000, max: None },
];

// =========================================================================
//  FAIXAS DE VENCIMENTO: dias a partir de agora, [início, fim] inclusivo
// =========================================================================

#[derive(Debug, Clone, Copy)]
pub struct DueDateRange {
    pub label: &'static str,
    pub start_days: i64,
    pub end_days: i64,
}

impl DueDateRange {
    pub fn contains(&self, due_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        due_date >= now + Duration::days(self.start_days)
            && due_date <= now + Duration::days(self.end_days)
    }
}

// Vencimentos além de 365 dias não entram em nenhuma faixa
pub const DUE_DATE_RANGES: [DueDateRange; 4] = [
    DueDateRange { label: "0-7 days", start_days: 0, end_days: 7 },
    DueDateRange { label: "8-30 days", start_days: 8, end_days: 30 },
    DueDateRange { label: "31-60 days", start_days: 31, end_days: 60 },
    DueDateRange { label: "60+ days", start_days: 61, end_days: 365 },
];

/// Soma o total de todas as faturas por faixa de valor.
/// O valor de cada faixa sai arredondado para inteiro.
pub fn outflow_by_amount(invoice_totals: &[Decimal]) -> Vec<CashOutflowEntry> {
    AMOUNT_RANGES
        .iter()
        .map(|range| {
            let (amount, count) = invoice_totals
                .iter()
                .filter(|total| range.contains(**total))
                .fold((Decimal::ZERO, 0_i64), |(sum, n), total| (sum + *total, n + 1));

            CashOutflowEntry {
                range: range.label.to_string(),
                amount: amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
                count,
            }
        })
        .collect()
}

/// Soma o total da fatura vinculada a cada pagamento, por faixa de vencimento.
/// Pagamento sem vencimento, vencido ou fora das faixas é ignorado.
pub fn outflow_by_due_date(payments: &[PaymentRecord], now: DateTime<Utc>) -> Vec<CashOutflowEntry> {
    DUE_DATE_RANGES
        .iter()
        .map(|range| {
            let (amount, count) = payments
                .iter()
                .filter(|payment| {
                    payment
                        .due_date
                        .is_some_and(|due_date| range.contains(due_date, now))
                })
                .fold((Decimal::ZERO, 0_i64), |(sum, n), payment| {
                    (sum + payment.invoice_total, n + 1)
                });

            CashOutflowEntry {
                range: range.label.to_string(),
                amount,
                count,
            }
        })
        .collect()
}

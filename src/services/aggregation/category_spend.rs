// src/services/aggregation/category_spend.rs

use rust_decimal::Decimal;

use super::share_of;
use crate::models::{
    analytics::{CategorySpendEntry, SpendCategory},
    invoice::LineItemRecord,
};

// Conta usada quando o item não tem conta contábil
pub const MISSING_ACCOUNT_CODE: &str = "0000";

// Regra grosseira por prefixo, avaliada em ordem. Não é um plano de contas.
pub const CATEGORY_RULES: &[(&str, SpendCategory)] = &[
    ("4", SpendCategory::Operations),
    ("5", SpendCategory::Marketing),
];

pub const FALLBACK_CATEGORY: SpendCategory = SpendCategory::Facilities;

pub fn classify(account_code: Option<&str>) -> SpendCategory {
    let account = account_code
        .filter(|code| !code.is_empty())
        .unwrap_or(MISSING_ACCOUNT_CODE);

    CATEGORY_RULES
        .iter()
        .find(|(prefix, _)| account.starts_with(*prefix))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Soma `|totalPrice|` por categoria (créditos entram positivos).
/// Sempre devolve as três categorias, na ordem de `SpendCategory::ALL`.
pub fn category_spend(items: &[LineItemRecord]) -> Vec<CategorySpendEntry> {
    let mut amounts = [Decimal::ZERO; SpendCategory::ALL.len()];

    for item in items {
        let category = classify(item.account_code.as_deref());
        let price = item.total_price.unwrap_or(Decimal::ZERO).abs();
        if let Some(slot) = SpendCategory::ALL.iter().position(|c| *c == category) {
            amounts[slot] += price;
        }
    }

    let total: Decimal = amounts.iter().sum();

    SpendCategory::ALL
        .iter()
        .zip(amounts)
        .map(|(category, amount)| CategorySpendEntry {
            category: *category,
            amount,
            percentage: share_of(amount, total),
        })
        .collect()
}

// src/services/aggregation/vendor_concentration.rs

use rust_decimal::Decimal;

use super::share_of;
use crate::models::{analytics::VendorSpendEntry, invoice::VendorRecord};

pub const TOP_VENDOR_LIMIT: usize = 10;

/// Curva ABC dos fornecedores: Top 10 por gasto total.
///
/// Os percentuais são calculados sobre a soma do próprio Top 10 (não sobre o
/// gasto de todos os fornecedores), então o último acumulado fecha em 100.
/// Empate no gasto: ordem alfabética do nome.
pub fn rank_vendors(vendors: &[VendorRecord]) -> Vec<VendorSpendEntry> {
    let mut ranked: Vec<(&str, Decimal, i64)> = vendors
        .iter()
        .map(|vendor| {
            let spend: Decimal = vendor.invoice_totals.iter().sum();
            (vendor.name.as_str(), spend, vendor.invoice_totals.len() as i64)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(TOP_VENDOR_LIMIT);

    let total: Decimal = ranked.iter().map(|(_, spend, _)| *spend).sum();
    let mut cumulative = Decimal::ZERO;

    ranked
        .into_iter()
        .map(|(name, total_spend, invoice_count)| {
            cumulative += total_spend;
            VendorSpendEntry {
                name: name.to_string(),
                total_spend,
                invoice_count,
                percentage: share_of(total_spend, total),
                cumulative_percentage: share_of(cumulative, total),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn vendor(name: &str, totals: &[i64]) -> VendorRecord {
        VendorRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            invoice_totals: totals.iter().map(|t| Decimal::from(*t)).collect(),
        }
    }

    #[test]
    fn two_vendors_split_ninety_ten() {
        let vendors = vec![vendor("B", &[100]), vendor("A", &[400, 500])];

        let result = rank_vendors(&vendors);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "A");
        assert_eq!(result[0].total_spend, Decimal::from(900));
        assert_eq!(result[0].invoice_count, 2);
        assert_eq!(result[0].percentage, Decimal::from(90));
        assert_eq!(result[0].cumulative_percentage, Decimal::from(90));
        assert_eq!(result[1].name, "B");
        assert_eq!(result[1].percentage, Decimal::from(10));
        assert_eq!(result[1].cumulative_percentage, Decimal::from(100));
    }

    #[test]
    fn keeps_only_top_ten_and_percentages_use_their_total() {
        // 12 fornecedores: gastos 1..=12
        let vendors: Vec<VendorRecord> = (1..=12)
            .map(|i| vendor(&format!("V{:02}", i), &[i]))
            .collect();

        let result = rank_vendors(&vendors);

        assert_eq!(result.len(), TOP_VENDOR_LIMIT);
        assert_eq!(result[0].name, "V12");
        assert_eq!(result[9].name, "V03");

        // Total do Top 10 = 3 + ... + 12 = 75
        assert_eq!(result[0].percentage, share_of(Decimal::from(12), Decimal::from(75)));

        let last = result.last().unwrap();
        assert_eq!(last.cumulative_percentage, Decimal::ONE_HUNDRED);

        assert!(result.windows(2).all(|w| w[0].total_spend >= w[1].total_spend));
    }

    #[test]
    fn ties_are_broken_by_name() {
        let vendors = vec![vendor("Zeta", &[50]), vendor("Alpha", &[50]), vendor("Mid", &[50])];

        let names: Vec<String> = rank_vendors(&vendors).into_iter().map(|v| v.name).collect();

        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn vendors_without_spend_get_zero_percentages() {
        let vendors = vec![vendor("Empty", &[]), vendor("Also Empty", &[])];

        let result = rank_vendors(&vendors);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.total_spend.is_zero()));
        assert!(result.iter().all(|v| v.percentage.is_zero()));
        assert!(result.iter().all(|v| v.cumulative_percentage.is_zero()));
        assert_eq!(result[0].invoice_count, 0);
    }

    #[test]
    fn uneven_split_still_closes_at_one_hundred() {
        let vendors = vec![vendor("A", &[1]), vendor("B", &[1]), vendor("C", &[1])];

        let result = rank_vendors(&vendors);

        let sum: Decimal = result.iter().map(|v| v.percentage).sum();
        assert!((sum - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 10));
        assert_eq!(result[2].cumulative_percentage, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn offsetting_signed_spends_do_not_panic() {
        // A = 1e26, B = -(1e26 - 0.01): o total do Top 10 fica em 0.01
        let a = Decimal::from_i128_with_scale(10i128.pow(26), 0);
        let b = -Decimal::from_i128_with_scale(10i128.pow(28) - 1, 2);
        let vendors = vec![
            VendorRecord { id: Uuid::new_v4(), name: "A".into(), invoice_totals: vec![a] },
            VendorRecord { id: Uuid::new_v4(), name: "B".into(), invoice_totals: vec![b] },
        ];

        let result = rank_vendors(&vendors);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "A");
        assert_eq!(result[0].percentage, Decimal::MAX);
        assert_eq!(result[0].cumulative_percentage, Decimal::MAX);
        assert_eq!(result[1].percentage, Decimal::MIN);
        assert_eq!(result[1].cumulative_percentage, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn empty_input_gives_empty_ranking() {
        assert!(rank_vendors(&[]).is_empty());
    }
}

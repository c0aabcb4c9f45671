// src/services/aggregation/monthly_volume.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;

use crate::models::{analytics::MonthlyVolumeEntry, invoice::InvoiceRecord};

pub const DEFAULT_WINDOW_MONTHS: i32 = 12;

/// Início da janela: `now` menos `months` meses.
///
/// Janela grande demais para o calendário começa no menor instante
/// representável. Janela negativa empurra o início para depois de `now`
/// (resultado vazio); `None` só quando nem isso é representável.
pub fn window_start(now: DateTime<Utc>, months: i32) -> Option<DateTime<Utc>> {
    if months >= 0 {
        Some(
            now.checked_sub_months(Months::new(months.unsigned_abs()))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        )
    } else {
        now.checked_add_months(Months::new(months.unsigned_abs()))
    }
}

/// Agrupa as faturas por mês (`YYYY-MM`, UTC) dentro de `[now - months, now]`.
///
/// Faturas sem data ficam de fora. Meses sem fatura não aparecem.
pub fn monthly_volume(
    invoices: &[InvoiceRecord],
    months: i32,
    now: DateTime<Utc>,
) -> Vec<MonthlyVolumeEntry> {
    let Some(start) = window_start(now, months) else {
        return Vec::new();
    };

    // BTreeMap: a chave YYYY-MM já ordena cronologicamente
    let mut buckets: BTreeMap<String, (i64, Decimal)> = BTreeMap::new();

    for invoice in invoices {
        let Some(date) = invoice.invoice_date else {
            continue;
        };
        if date < start || date > now {
            continue;
        }

        let bucket = buckets
            .entry(date.format("%Y-%m").to_string())
            .or_insert((0, Decimal::ZERO));
        bucket.0 += 1;
        bucket.1 += invoice.total_amount;
    }

    buckets
        .into_iter()
        .map(|(month, (invoice_count, total_spend))| MonthlyVolumeEntry {
            month,
            invoice_count,
            total_spend,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn invoice(amount: i64, date: Option<DateTime<Utc>>) -> InvoiceRecord {
        InvoiceRecord {
            id: Uuid::new_v4(),
            invoice_code: "INV-1".into(),
            invoice_date: date,
            total_amount: Decimal::from(amount),
            currency: "EUR".into(),
            vendor_id: Uuid::new_v4(),
            customer_id: None,
        }
    }

    #[test]
    fn groups_invoices_by_calendar_month() {
        let invoices = vec![
            invoice(500, Some(at(2024, 1, 15))),
            invoice(1500, Some(at(2024, 1, 20))),
            invoice(2000, Some(at(2024, 2, 1))),
        ];

        let result = monthly_volume(&invoices, 12, at(2024, 6, 1));

        assert_eq!(
            result,
            vec![
                MonthlyVolumeEntry {
                    month: "2024-01".into(),
                    invoice_count: 2,
                    total_spend: Decimal::from(2000),
                },
                MonthlyVolumeEntry {
                    month: "2024-02".into(),
                    invoice_count: 1,
                    total_spend: Decimal::from(2000),
                },
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(monthly_volume(&[], 12, at(2024, 6, 1)).is_empty());
    }

    #[test]
    fn undated_and_out_of_window_invoices_are_dropped() {
        let now = at(2024, 6, 1);
        let invoices = vec![
            invoice(100, None),
            invoice(200, Some(at(2023, 5, 31))), // antes da janela
            invoice(300, Some(at(2023, 6, 1))),  // exatamente no início
            invoice(400, Some(at(2024, 7, 1))),  // futuro
            invoice(500, Some(at(2024, 3, 10))),
        ];

        let result = monthly_volume(&invoices, 12, now);

        let months: Vec<&str> = result.iter().map(|e| e.month.as_str()).collect();
        assert_eq!(months, vec!["2023-06", "2024-03"]);

        let counted: i64 = result.iter().map(|e| e.invoice_count).sum();
        assert_eq!(counted, 2);
    }

    #[test]
    fn negative_window_is_empty() {
        let now = at(2024, 6, 1);
        let invoices = vec![invoice(100, Some(at(2024, 5, 30)))];

        assert!(monthly_volume(&invoices, -3, now).is_empty());
    }

    #[test]
    fn huge_window_keeps_every_dated_invoice() {
        let now = at(2024, 6, 1);
        let invoices = vec![
            invoice(100, Some(at(2024, 5, 1))),
            invoice(200, Some(at(1970, 1, 1))),
            invoice(300, None),
        ];

        assert_eq!(window_start(now, 5_000_000), Some(DateTime::<Utc>::MIN_UTC));

        let result = monthly_volume(&invoices, 5_000_000, now);
        let counted: i64 = result.iter().map(|e| e.invoice_count).sum();
        assert_eq!(counted, 2);

        assert_eq!(monthly_volume(&invoices, i32::MAX, now).len(), 2);
    }

    #[test]
    fn months_are_sorted_across_years() {
        let invoices = vec![
            invoice(1, Some(at(2024, 1, 5))),
            invoice(1, Some(at(2023, 12, 5))),
            invoice(1, Some(at(2023, 11, 5))),
        ];

        let result = monthly_volume(&invoices, 12, at(2024, 2, 1));
        let months: Vec<&str> = result.iter().map(|e| e.month.as_str()).collect();

        assert_eq!(months, vec!["2023-11", "2023-12", "2024-01"]);
    }

    #[test]
    fn rerunning_gives_the_same_output() {
        let invoices = vec![
            invoice(10, Some(at(2024, 4, 1))),
            invoice(20, Some(at(2024, 5, 1))),
        ];
        let now = at(2024, 6, 1);

        assert_eq!(monthly_volume(&invoices, 6, now), monthly_volume(&invoices, 6, now));
    }
}

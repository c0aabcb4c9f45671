// src/services/aggregation/overview.rs

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::models::stats::{OverviewFigures, OverviewPeriods, StatCard, StatsOverview};

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// Início do ano, do mês anterior e do mês atual (UTC).
pub fn periods_at(now: DateTime<Utc>) -> Option<OverviewPeriods> {
    let this_month = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)?;
    let last_month = this_month.checked_sub_months(Months::new(1))?;
    let year_start = NaiveDate::from_ymd_opt(now.year(), 1, 1)?;

    Some(OverviewPeriods {
        year_start: start_of_day(year_start)?,
        last_month_start: start_of_day(last_month)?,
        this_month_start: start_of_day(this_month)?,
    })
}

/// Variação percentual; zero quando o período anterior não é positivo.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match current.checked_sub(previous) {
        Some(delta) => super::share_of(delta, previous),
        // Só estoura para baixo: `previous` é positivo
        None => Decimal::MIN,
    }
}

pub fn build_overview(figures: &OverviewFigures) -> StatsOverview {
    StatsOverview {
        total_spend: StatCard {
            value: figures.spend_ytd,
            change: percent_change(figures.spend_this_month, figures.spend_last_month),
            period: "YTD".to_string(),
        },
        total_invoices: StatCard {
            value: Decimal::from(figures.invoices_total),
            change: percent_change(
                Decimal::from(figures.invoices_this_month),
                Decimal::from(figures.invoices_last_month),
            ),
            period: "from last month".to_string(),
        },
        documents_uploaded: StatCard {
            value: Decimal::from(figures.documents_this_month),
            change: percent_change(
                Decimal::from(figures.documents_this_month),
                Decimal::from(figures.documents_last_month),
            ),
            period: "this month".to_string(),
        },
        average_invoice_value: StatCard {
            value: figures.average_invoice_value.unwrap_or(Decimal::ZERO),
            change: Decimal::ZERO,
            period: String::new(),
        },
    }
}

// src/db/analytics_repo.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::AnalyticsStore,
    models::{
        invoice::{
            InvoiceListRow, InvoicePage, InvoicePageRequest, InvoiceRecord, LineItemRecord,
            PaymentRecord, VendorRecord,
        },
        stats::{OverviewFigures, OverviewPeriods},
    },
};

// Filtro da listagem: $1 é o padrão ILIKE (ou NULL para trazer tudo)
const INVOICE_SEARCH_FROM: &str = r#"
    FROM invoices i
    JOIN vendors v ON v.id = i.vendor_id
    LEFT JOIN customers c ON c.id = i.customer_id
    LEFT JOIN payments p ON p.invoice_id = i.id
    WHERE ($1::text IS NULL OR i.invoice_code ILIKE $1 OR v.name ILIKE $1)
"#;

/// Limite inferior aceito pelo Postgres; antes disso a janela fica sem limite.
pub(crate) fn storable_lower_bound(start: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let earliest = NaiveDate::from_ymd_opt(-4713, 11, 24)?
        .and_hms_opt(0, 0, 0)?
        .and_utc();
    (start >= earliest).then_some(start)
}

/// Transforma a busca em padrão `%termo%`, escapando os curingas do LIKE.
pub(crate) fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for ch in search.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

// O repositório de leituras do dashboard (faturas, fornecedores, itens, pagamentos)
#[derive(Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsStore for AnalyticsRepository {
    async fn invoices_since(&self, start: DateTime<Utc>) -> Result<Vec<InvoiceRecord>, AppError> {
        let invoices = sqlx::query_as::<_, InvoiceRecord>(
            r#"
            SELECT id, invoice_code, invoice_date, total_amount, currency, vendor_id, customer_id
            FROM invoices
            WHERE invoice_date IS NOT NULL
              AND ($1::timestamptz IS NULL OR invoice_date >= $1)
            "#,
        )
        .bind(storable_lower_bound(start))
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    async fn vendors_with_invoice_totals(&self) -> Result<Vec<VendorRecord>, AppError> {
        // LEFT JOIN: fornecedor sem fatura vem com array vazio
        let vendors = sqlx::query_as::<_, VendorRecord>(
            r#"
            SELECT
                v.id,
                v.name,
                COALESCE(
                    array_agg(i.total_amount) FILTER (WHERE i.id IS NOT NULL),
                    '{}'::numeric[]
                ) AS invoice_totals
            FROM vendors v
            LEFT JOIN invoices i ON i.vendor_id = v.id
            GROUP BY v.id, v.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vendors)
    }

    async fn line_items(&self) -> Result<Vec<LineItemRecord>, AppError> {
        let items = sqlx::query_as::<_, LineItemRecord>(
            r#"
            SELECT id, invoice_id, gl_account AS account_code, total_price
            FROM invoice_line_items
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn invoice_totals(&self) -> Result<Vec<Decimal>, AppError> {
        let totals = sqlx::query_scalar::<_, Decimal>("SELECT total_amount FROM invoices")
            .fetch_all(&self.pool)
            .await?;

        Ok(totals)
    }

    async fn scheduled_payments(&self) -> Result<Vec<PaymentRecord>, AppError> {
        let payments = sqlx::query_as::<_, PaymentRecord>(
            r#"
            SELECT p.id, p.invoice_id, p.due_date, i.total_amount AS invoice_total
            FROM payments p
            JOIN invoices i ON i.id = p.invoice_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    async fn overview_figures(&self, periods: &OverviewPeriods) -> Result<OverviewFigures, AppError> {
        // Transação: snapshot consistente para todos os cards
        let mut tx = self.pool.begin().await?;

        // A. Gasto no ano (YTD)
        let spend_ytd = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total_amount), 0) FROM invoices WHERE invoice_date >= $1",
        )
        .bind(periods.year_start)
        .fetch_one(&mut *tx)
        .await?;

        // B. Gasto do mês anterior e do mês atual
        let spend_last_month = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(total_amount), 0) FROM invoices
            WHERE invoice_date >= $1 AND invoice_date < $2
            "#,
        )
        .bind(periods.last_month_start)
        .bind(periods.this_month_start)
        .fetch_one(&mut *tx)
        .await?;

        let spend_this_month = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total_amount), 0) FROM invoices WHERE invoice_date >= $1",
        )
        .bind(periods.this_month_start)
        .fetch_one(&mut *tx)
        .await?;

        // C. Contagem de faturas
        let invoices_total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
            .fetch_one(&mut *tx)
            .await?;

        let invoices_last_month = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM invoices WHERE invoice_date >= $1 AND invoice_date < $2",
        )
        .bind(periods.last_month_start)
        .bind(periods.this_month_start)
        .fetch_one(&mut *tx)
        .await?;

        let invoices_this_month = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM invoices WHERE invoice_date >= $1",
        )
        .bind(periods.this_month_start)
        .fetch_one(&mut *tx)
        .await?;

        // D. Documentos enviados
        let documents_last_month = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM documents WHERE uploaded_at >= $1 AND uploaded_at < $2",
        )
        .bind(periods.last_month_start)
        .bind(periods.this_month_start)
        .fetch_one(&mut *tx)
        .await?;

        let documents_this_month = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM documents WHERE uploaded_at >= $1",
        )
        .bind(periods.this_month_start)
        .fetch_one(&mut *tx)
        .await?;

        // E. Ticket médio (NULL quando não há faturas)
        let average_invoice_value = sqlx::query_scalar::<_, Option<Decimal>>(
            "SELECT AVG(total_amount) FROM invoices",
        )
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(OverviewFigures {
            spend_ytd,
            spend_last_month,
            spend_this_month,
            invoices_total,
            invoices_last_month,
            invoices_this_month,
            documents_last_month,
            documents_this_month,
            average_invoice_value,
        })
    }

    async fn list_invoices(&self, request: &InvoicePageRequest) -> Result<InvoicePage, AppError> {
        let pattern = request.search.as_deref().map(like_pattern);

        // Coluna e direção vêm de enums fechados, nunca do texto da requisição
        let rows_sql = format!(
            r#"
            SELECT
                i.id,
                i.invoice_code,
                v.name AS vendor_name,
                c.name AS customer_name,
                i.invoice_date,
                i.total_amount,
                i.currency,
                p.due_date
            {}
            ORDER BY {} {} NULLS LAST, i.id
            LIMIT $2 OFFSET $3
            "#,
            INVOICE_SEARCH_FROM,
            request.sort.column.sql_column(),
            request.sort.direction.sql_keyword(),
        );
        let count_sql = format!("SELECT COUNT(*) {}", INVOICE_SEARCH_FROM);

        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, InvoiceListRow>(&rows_sql)
            .bind(pattern.as_deref())
            .bind(request.limit)
            .bind(request.offset)
            .fetch_all(&mut *tx)
            .await?;

        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(pattern.as_deref())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(InvoicePage { rows, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern("acme"), "%acme%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn window_start_before_postgres_range_is_unbounded() {
        let recent = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc();

        assert_eq!(storable_lower_bound(recent), Some(recent));
        assert_eq!(storable_lower_bound(DateTime::<Utc>::MIN_UTC), None);
    }
}

// src/services/invoice_service.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    common::error::AppError,
    db::AnalyticsStore,
    models::invoice::{
        InvoiceListItem, InvoiceListQuery, InvoiceListResponse, InvoiceListRow, InvoicePageRequest,
        InvoiceSort, InvoiceSortColumn, InvoiceStatus, SortDirection,
    },
};

/// Interpreta `sortBy`/`sortOrder`. Padrão: data da fatura, decrescente.
pub fn parse_sort(sort_by: Option<&str>, sort_order: Option<&str>) -> Result<InvoiceSort, AppError> {
    let column = match sort_by {
        None | Some("date") | Some("invoiceDate") => InvoiceSortColumn::InvoiceDate,
        Some("amount") | Some("totalAmount") => InvoiceSortColumn::TotalAmount,
        Some("invoiceCode") => InvoiceSortColumn::InvoiceCode,
        Some(other) => {
            return Err(AppError::InvalidParameter(format!("Unsupported sortBy: {}", other)));
        }
    };

    let direction = match sort_order.map(str::to_ascii_lowercase).as_deref() {
        None | Some("desc") => SortDirection::Desc,
        Some("asc") => SortDirection::Asc,
        Some(other) => {
            return Err(AppError::InvalidParameter(format!("Unsupported sortOrder: {}", other)));
        }
    };

    Ok(InvoiceSort { column, direction })
}

// Vencida = tem vencimento e ele já passou
pub fn invoice_status(due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> InvoiceStatus {
    match due_date {
        Some(due) if due < now => InvoiceStatus::Overdue,
        _ => InvoiceStatus::Pending,
    }
}

fn to_list_item(row: InvoiceListRow, now: DateTime<Utc>) -> InvoiceListItem {
    InvoiceListItem {
        id: row.id,
        invoice_code: row.invoice_code,
        vendor_name: row.vendor_name,
        customer_name: row.customer_name,
        invoice_date: row.invoice_date,
        total_amount: row.total_amount,
        currency: row.currency,
        status: invoice_status(row.due_date, now),
        due_date: row.due_date,
        payment_date: None,
    }
}

#[derive(Clone)]
pub struct InvoiceService {
    store: Arc<dyn AnalyticsStore>,
}

impl InvoiceService {
    pub fn new(store: Arc<dyn AnalyticsStore>) -> Self {
        Self { store }
    }

    pub async fn list_invoices(&self, query: InvoiceListQuery) -> Result<InvoiceListResponse, AppError> {
        query.validate()?;
        let sort = parse_sort(query.sort_by.as_deref(), query.sort_order.as_deref())?;

        let search = query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let offset = (query.page - 1)
            .checked_mul(query.page_size)
            .ok_or_else(|| AppError::InvalidParameter(format!("Page out of range: {}", query.page)))?;

        let request = InvoicePageRequest {
            search,
            sort,
            limit: query.page_size,
            offset,
        };

        let page = self.store.list_invoices(&request).await?;
        let now = Utc::now();

        Ok(InvoiceListResponse {
            invoices: page.rows.into_iter().map(|row| to_list_item(row, now)).collect(),
            total: page.total,
            page: query.page,
            page_size: query.page_size,
        })
    }
}

// src/models/invoice.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

// --- Projeções lidas do banco (somente leitura) ---

#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct InvoiceRecord {
    pub id: Uuid,
    pub invoice_code: String,
    pub invoice_date: Option<DateTime<Utc>>, // Nulo = fora de qualquer agregação por mês
    pub total_amount: Decimal,
    pub currency: String,
    pub vendor_id: Uuid,
    pub customer_id: Option<Uuid>,
}

// Fornecedor com os totais de todas as suas faturas (pode ser vazio)
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct VendorRecord {
    pub id: Uuid,
    pub name: String,
    pub invoice_totals: Vec<Decimal>,
}

#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct LineItemRecord {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub account_code: Option<String>, // Sachkonto / conta contábil
    pub total_price: Option<Decimal>, // Negativo para créditos
}

// Pagamento agendado + total da fatura vinculada
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub due_date: Option<DateTime<Utc>>,
    pub invoice_total: Decimal,
}

// Linha da listagem (fatura + fornecedor + cliente + vencimento)
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceListRow {
    pub id: Uuid,
    pub invoice_code: String,
    pub vendor_name: String,
    pub customer_name: Option<String>,
    pub invoice_date: Option<DateTime<Utc>>,
    pub total_amount: Decimal,
    pub currency: String,
    pub due_date: Option<DateTime<Utc>>,
}

// --- Listagem paginada (GET /api/invoices) ---

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct InvoiceListQuery {
    /// Busca por código da fatura ou nome do fornecedor (sem diferenciar maiúsculas)
    pub search: Option<String>,

    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    #[param(example = 1)]
    pub page: i64,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    #[param(example = 10)]
    pub page_size: i64,

    /// date | invoiceDate | amount | totalAmount | invoiceCode
    pub sort_by: Option<String>,

    /// asc | desc
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceSortColumn {
    InvoiceDate,
    TotalAmount,
    InvoiceCode,
}

impl InvoiceSortColumn {
    // Lista fechada: o nome da coluna vai direto no ORDER BY
    pub fn sql_column(self) -> &'static str {
        match self {
            InvoiceSortColumn::InvoiceDate => "i.invoice_date",
            InvoiceSortColumn::TotalAmount => "i.total_amount",
            InvoiceSortColumn::InvoiceCode => "i.invoice_code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn sql_keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceSort {
    pub column: InvoiceSortColumn,
    pub direction: SortDirection,
}

// O que o serviço pede ao repositório
#[derive(Debug, Clone)]
pub struct InvoicePageRequest {
    pub search: Option<String>,
    pub sort: InvoiceSort,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone)]
pub struct InvoicePage {
    pub rows: Vec<InvoiceListRow>,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Overdue,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListItem {
    pub id: Uuid,

    #[schema(example = "INV-1001-5f3a9c21")]
    pub invoice_code: String,

    #[schema(example = "CPB SOFTWARE (GERMANY) GMBH")]
    pub vendor_name: String,

    pub customer_name: Option<String>,
    pub invoice_date: Option<DateTime<Utc>>,

    #[schema(example = 381.12)]
    pub total_amount: Decimal,

    #[schema(example = "EUR")]
    pub currency: String,

    pub status: InvoiceStatus,
    pub due_date: Option<DateTime<Utc>>,

    // Ainda não registramos a data de pagamento
    pub payment_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceListItem>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

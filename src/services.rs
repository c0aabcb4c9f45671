pub mod aggregation;
pub mod analytics_service;
pub use analytics_service::AnalyticsService;
pub mod invoice_service;
pub use invoice_service::InvoiceService;
pub mod chat_service;
pub use chat_service::ChatService;

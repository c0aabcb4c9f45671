pub mod chat;
pub mod invoices;
pub mod meta;
pub mod stats;
pub mod trends;
pub mod vendors;

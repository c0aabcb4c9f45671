pub mod analytics;
pub mod chat;
pub mod invoice;
pub mod stats;

pub mod store;
pub use store::AnalyticsStore;
pub mod analytics_repo;
pub use analytics_repo::AnalyticsRepository;

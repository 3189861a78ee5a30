pub mod app;
pub mod client;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::data_service::{DataService, RunMode};
pub use client::{ApiClient, FaturaBrowser, FisForm};
pub use domain::filter::FaturaFilter;
pub use domain::model::{Depo, FaturaRecord, FisDraft, MalzemeFisTipi};
pub use infra::config::Config;

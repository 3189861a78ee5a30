pub mod router;
pub mod types;
pub mod handlers {
    pub mod db_test;
    pub mod depolar;
    pub mod faturalar;
    pub mod fis;
    pub mod health;
    pub mod siparisler;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;

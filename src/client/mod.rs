pub mod api;
pub mod browser;
pub mod fis_form;

pub use api::{ApiClient, ClientError};
pub use browser::FaturaBrowser;
pub use fis_form::{FisForm, FisFormFallbacks};

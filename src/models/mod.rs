// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GenderResult, Title};
pub use requests::{GenderiseRequest, TitleRequest};
pub use responses::{GenderiseResponse, TitleResponse, HealthResponse, ErrorResponse};

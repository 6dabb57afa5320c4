// Service exports
pub mod genderize;

pub use genderize::{GenderizeClient, GenderizeError, DEFAULT_ENDPOINT};

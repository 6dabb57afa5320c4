//! Gender Guesser - thin client for the genderize.io API
//!
//! Looks up the likely gender of up to nine names in a single request and
//! derives an honorific (`Mr`/`Ms`) from the first result. Lookups are
//! fail-soft: any failure yields an empty result.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{construct_query_string, title_for, MAX_NAMES};
pub use crate::models::{GenderResult, Title};
pub use crate::services::{GenderizeClient, GenderizeError, DEFAULT_ENDPOINT};

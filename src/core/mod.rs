// Query building and title mapping
pub mod query;
pub mod title;

pub use query::{construct_query_string, is_valid_name_count, MAX_NAMES};
pub use title::title_for;

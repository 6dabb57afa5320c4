use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to look up genders for a list of names
///
/// The name count is deliberately not validated here: out-of-range lists
/// resolve to an empty result like every other lookup failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenderiseRequest {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(alias = "country_id", rename = "countryId", default)]
    pub country_id: Option<String>,
    #[serde(alias = "api_key", rename = "apiKey", default)]
    pub api_key: Option<String>,
}

/// Request to guess the honorific for a first name
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TitleRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "first_name", rename = "firstName")]
    pub first_name: String,
}

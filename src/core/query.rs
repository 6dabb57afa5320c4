/// Maximum number of names genderize.io accepts in one request
pub const MAX_NAMES: usize = 9;

/// Check that a name list fits in a single genderize.io request
#[inline]
pub fn is_valid_name_count(count: usize) -> bool {
    (1..=MAX_NAMES).contains(&count)
}

/// Build the genderize.io query string for a list of names
///
/// Produces `name[0]=A&name[1]=B[&country_id=CC][&apiKey=KEY]`. Names are
/// written raw, without percent-encoding. Empty country codes and API keys
/// are treated as absent.
pub fn construct_query_string<S: AsRef<str>>(
    names: &[S],
    country_code: Option<&str>,
    api_key: Option<&str>,
) -> String {
    let mut query = names
        .iter()
        .enumerate()
        .map(|(index, name)| format!("name[{}]={}", index, name.as_ref()))
        .collect::<Vec<_>>()
        .join("&");

    if let Some(country) = country_code.filter(|c| !c.is_empty()) {
        query.push_str("&country_id=");
        query.push_str(country);
    }

    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        query.push_str("&apiKey=");
        query.push_str(key);
    }

    query
}

/// Same as the query string, with the API key value masked for logging
pub(crate) fn redact_api_key(query: &str) -> String {
    match query.find("apiKey=") {
        Some(pos) => format!("{}apiKey=***", &query[..pos]),
        None => query.to_string(),
    }
}

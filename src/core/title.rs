use crate::models::{GenderResult, Title};

/// Map lookup results to an honorific
///
/// Only the first record is inspected. An exact `"female"` label gives `Ms`;
/// any other label, a missing label or an empty list gives `Mr`.
pub fn title_for(results: &[GenderResult]) -> Title {
    match results.first() {
        Some(result) if result.is_female() => Title::Ms,
        _ => Title::default(),
    }
}

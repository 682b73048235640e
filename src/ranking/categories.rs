use std::collections::BTreeSet;

use crate::core::UserRecord;
use crate::ranking::RankingSelector;

/// Sorted, de-duplicated language keys across all successful records.
///
/// Failures contribute nothing. The overall sentinel is not included.
pub fn extract_categories(records: &[UserRecord]) -> Vec<String> {
    let languages: BTreeSet<&str> = records
        .iter()
        .filter_map(UserRecord::profile)
        .flat_map(|profile| profile.language_keys())
        .collect();

    languages.into_iter().map(str::to_string).collect()
}

/// Selectors offered to the user: overall first, then every category
pub fn available_selectors(records: &[UserRecord]) -> Vec<RankingSelector> {
    std::iter::once(RankingSelector::Overall)
        .chain(
            extract_categories(records)
                .into_iter()
                .map(RankingSelector::Language),
        )
        .collect()
}

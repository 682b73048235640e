use std::cmp::Reverse;

use crate::core::{RankedProfile, UserRecord};
use crate::ranking::RankingSelector;

/// Successful records ordered by the selected score, highest first.
///
/// For a language selector, users without that language are left out
/// rather than scored as zero. Equal scores are ordered by identifier
/// (case-insensitive, then exact) so the output is deterministic.
pub fn rank_by(records: &[UserRecord], selector: &RankingSelector) -> Vec<RankedProfile> {
    let mut ranked: Vec<RankedProfile> = records
        .iter()
        .filter_map(|record| match record {
            UserRecord::Success { identifier, profile } => {
                let score = match selector {
                    RankingSelector::Overall => Some(profile.overall_score()),
                    RankingSelector::Language(lang) => profile.language_score(lang),
                }?;
                Some(RankedProfile::new(identifier.clone(), profile.clone(), score))
            }
            UserRecord::Failure { .. } => None,
        })
        .collect();

    // Case-folded once per row, not per comparison
    ranked.sort_by_cached_key(|r| (Reverse(r.score), r.identifier.to_lowercase(), r.identifier.clone()));

    tracing::trace!(selector = %selector, ranked = ranked.len(), "Ranked profiles");
    ranked
}

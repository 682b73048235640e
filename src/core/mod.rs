pub mod user_record;
pub mod ranked_profile;

pub use user_record::{Rank, UserProfile, UserRecord};
pub use ranked_profile::RankedProfile;

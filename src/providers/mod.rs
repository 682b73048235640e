pub mod codewars;

use async_trait::async_trait;
use crate::core::UserProfile;
use crate::error::Result;

pub use codewars::CodewarsProvider;

/// Trait for profile data sources
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch and validate the profile of one identifier
    async fn fetch_profile(&self, identifier: &str) -> Result<UserProfile>;

    /// Get provider name
    fn name(&self) -> &str;
}

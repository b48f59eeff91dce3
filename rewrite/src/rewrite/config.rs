//! Rewrite engine configuration.
//!
//! Provides typed configuration with a bon builder and environment variable
//! fallbacks.

use bon::bon;

/// Engine limits.
///
/// The default is unbounded: a rule set that never reaches a fixed point
/// loops forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Maximum number of rewrites before the engine gives up with
    /// [`Error::RewriteLimitExceeded`](crate::Error::RewriteLimitExceeded).
    pub max_rewrites: Option<usize>,
}

#[bon]
impl RewriteConfig {
    /// Create a rewrite configuration with builder pattern.
    #[builder]
    pub fn builder(max_rewrites: Option<usize>) -> Self {
        Self { max_rewrites }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `ARBOR_MAX_REWRITES=N` - Stop with an error after N rewrites
    pub fn from_env() -> Self {
        let max_rewrites = std::env::var("ARBOR_MAX_REWRITES").ok().and_then(|s| s.parse().ok());
        Self { max_rewrites }
    }
}

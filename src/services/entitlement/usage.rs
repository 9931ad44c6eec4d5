//! Free-quota counters

use async_trait::async_trait;
use dashmap::DashMap;

use crate::auth::UserId;
use crate::utils::error::Result;

/// Per-user free-call counter
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageLimiter: Send + Sync {
    /// Whether the user still has free calls left
    async fn check_api_limit(&self, user: &UserId) -> Result<bool>;

    /// Record one billable call
    async fn increase_api_limit(&self, user: &UserId) -> Result<()>;

    /// Calls recorded so far
    async fn get_api_limit_count(&self, user: &UserId) -> Result<u32>;

    /// Free calls granted per user
    fn max_free_counts(&self) -> u32;
}

/// Process-local counters. Reset on restart.
///
/// The gate checks the counter before a call and increments it only after
/// the outcome is known, so concurrent in-flight calls from one user can all
/// pass the check and overshoot `max_free_counts` by the number in flight.
#[derive(Debug, Default)]
pub struct InMemoryUsageLimiter {
    counts: DashMap<UserId, u32>,
    max_free_counts: u32,
}

impl InMemoryUsageLimiter {
    pub fn new(max_free_counts: u32) -> Self {
        Self {
            counts: DashMap::new(),
            max_free_counts,
        }
    }
}

#[async_trait]
impl UsageLimiter for InMemoryUsageLimiter {
    async fn check_api_limit(&self, user: &UserId) -> Result<bool> {
        let count = self.counts.get(user).map(|c| *c).unwrap_or(0);
        Ok(count < self.max_free_counts)
    }

    async fn increase_api_limit(&self, user: &UserId) -> Result<()> {
        let mut count = self.counts.entry(user.clone()).or_insert(0);
        *count = count.saturating_add(1);
        Ok(())
    }

    async fn get_api_limit_count(&self, user: &UserId) -> Result<u32> {
        Ok(self.counts.get(user).map(|c| *c).unwrap_or(0))
    }

    fn max_free_counts(&self) -> u32 {
        self.max_free_counts
    }
}

/// Limiter that never denies and never counts
#[derive(Debug, Clone, Copy)]
pub struct UnlimitedUsage {
    max_free_counts: u32,
}

impl UnlimitedUsage {
    pub fn new(max_free_counts: u32) -> Self {
        Self { max_free_counts }
    }
}

#[async_trait]
impl UsageLimiter for UnlimitedUsage {
    async fn check_api_limit(&self, _user: &UserId) -> Result<bool> {
        Ok(true)
    }

    async fn increase_api_limit(&self, _user: &UserId) -> Result<()> {
        Ok(())
    }

    async fn get_api_limit_count(&self, _user: &UserId) -> Result<u32> {
        Ok(0)
    }

    fn max_free_counts(&self) -> u32 {
        self.max_free_counts
    }
}

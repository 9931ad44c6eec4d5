//! Subscription lookups

use std::collections::HashSet;

use async_trait::async_trait;

use crate::auth::UserId;
use crate::utils::error::Result;

/// Paid-subscription check
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionChecker: Send + Sync {
    async fn check_subscription(&self, user: &UserId) -> Result<bool>;
}

/// Fixed set of subscriber ids, loaded from config
#[derive(Debug, Clone, Default)]
pub struct StaticSubscriptions {
    subscribers: HashSet<UserId>,
}

impl StaticSubscriptions {
    pub fn new<I, S>(subscribers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subscribers: subscribers.into_iter().map(UserId::new).collect(),
        }
    }
}

#[async_trait]
impl SubscriptionChecker for StaticSubscriptions {
    async fn check_subscription(&self, user: &UserId) -> Result<bool> {
        Ok(self.subscribers.contains(user))
    }
}

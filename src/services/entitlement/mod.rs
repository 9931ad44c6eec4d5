//! Entitlement gate
//!
//! Billable capabilities run only while the caller has free quota left or
//! holds a subscription. Quota and subscription lookups are injected traits
//! so a real store can replace the in-memory defaults without touching the
//! handlers.

mod gate;
mod subscription;
mod usage;

pub use gate::{CallOutcome, Entitlement, EntitlementGate, QuotaIncrementPolicy};
pub use subscription::{StaticSubscriptions, SubscriptionChecker};
pub use usage::{InMemoryUsageLimiter, UnlimitedUsage, UsageLimiter};

#[cfg(test)]
pub use subscription::MockSubscriptionChecker;
#[cfg(test)]
pub use usage::MockUsageLimiter;

use std::sync::Arc;

use crate::config::models::entitlement::{EntitlementConfig, EntitlementMode};

/// Build the gate described by the `entitlement` config section
pub fn create_entitlement_gate(config: &EntitlementConfig) -> EntitlementGate {
    let limiter: Arc<dyn UsageLimiter> = match config.mode {
        EntitlementMode::Memory => Arc::new(InMemoryUsageLimiter::new(config.max_free_counts)),
        EntitlementMode::Unlimited => Arc::new(UnlimitedUsage::new(config.max_free_counts)),
    };
    let subscriptions = Arc::new(StaticSubscriptions::new(config.subscribers.iter().cloned()));

    EntitlementGate::new(limiter, subscriptions, config.quota_increment)
}

//! Gate logic: authorize before the call, record usage after it

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::subscription::SubscriptionChecker;
use super::usage::UsageLimiter;
use crate::auth::UserId;
use crate::core::types::LimitResponse;
use crate::utils::error::{GatewayError, Result};

/// When a non-subscriber's call is charged against the free quota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaIncrementPolicy {
    /// Only calls that returned a provider result
    #[default]
    OnSuccess,
    /// Every call that passed the gate
    Always,
}

/// How a gated call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Provider returned a result
    Success,
    /// A degraded result was substituted
    Fallback,
    /// The call failed and an error was returned
    Failure,
}

/// Result of a successful `authorize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    pub is_subscriber: bool,
}

/// Quota and subscription gate for billable capabilities
#[derive(Clone)]
pub struct EntitlementGate {
    limiter: Arc<dyn UsageLimiter>,
    subscriptions: Arc<dyn SubscriptionChecker>,
    policy: QuotaIncrementPolicy,
}

impl EntitlementGate {
    pub fn new(
        limiter: Arc<dyn UsageLimiter>,
        subscriptions: Arc<dyn SubscriptionChecker>,
        policy: QuotaIncrementPolicy,
    ) -> Self {
        Self {
            limiter,
            subscriptions,
            policy,
        }
    }

    pub fn policy(&self) -> QuotaIncrementPolicy {
        self.policy
    }

    /// Allow the call if free quota remains or the user subscribes
    pub async fn authorize(&self, user: &UserId) -> Result<Entitlement> {
        let free_trial = self.limiter.check_api_limit(user).await?;
        let is_subscriber = self.subscriptions.check_subscription(user).await?;

        if !free_trial && !is_subscriber {
            tracing::info!("Free quota exhausted for user {}", user);
            return Err(GatewayError::quota_exceeded(format!(
                "user {} has no free calls left",
                user
            )));
        }

        Ok(Entitlement { is_subscriber })
    }

    /// Whether this outcome is charged under the configured policy
    pub fn should_charge(&self, entitlement: Entitlement, outcome: CallOutcome) -> bool {
        if entitlement.is_subscriber {
            return false;
        }
        match self.policy {
            QuotaIncrementPolicy::Always => true,
            QuotaIncrementPolicy::OnSuccess => outcome == CallOutcome::Success,
        }
    }

    /// Charge the call at most once. Counter failures are logged, not returned.
    pub async fn record_usage(
        &self,
        user: &UserId,
        entitlement: Entitlement,
        outcome: CallOutcome,
    ) {
        if !self.should_charge(entitlement, outcome) {
            return;
        }
        if let Err(e) = self.limiter.increase_api_limit(user).await {
            tracing::warn!("Failed to record usage for user {}: {}", user, e);
        }
    }

    /// Quota snapshot for `/api/limit`
    pub async fn limit_status(&self, user: &UserId) -> Result<LimitResponse> {
        Ok(LimitResponse {
            count: self.limiter.get_api_limit_count(user).await?,
            max_free_counts: self.limiter.max_free_counts(),
            is_pro: self.subscriptions.check_subscription(user).await?,
        })
    }
}

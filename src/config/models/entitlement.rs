//! Entitlement configuration

use super::*;
use crate::services::entitlement::QuotaIncrementPolicy;
use serde::{Deserialize, Serialize};

/// Quota backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementMode {
    /// Per-process counters
    #[default]
    Memory,
    /// Never deny, never count
    Unlimited,
}

/// Free-quota and subscription settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementConfig {
    #[serde(default)]
    pub mode: EntitlementMode,
    #[serde(default = "default_max_free_counts")]
    pub max_free_counts: u32,
    #[serde(default)]
    pub quota_increment: QuotaIncrementPolicy,
    /// User ids with a paid subscription
    #[serde(default)]
    pub subscribers: Vec<String>,
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self {
            mode: EntitlementMode::default(),
            max_free_counts: default_max_free_counts(),
            quota_increment: QuotaIncrementPolicy::default(),
            subscribers: Vec::new(),
        }
    }
}

//! Services module
//!
//! Business logic that sits between the HTTP layer and the providers.

pub mod entitlement;

pub use entitlement::{
    CallOutcome, Entitlement, EntitlementGate, QuotaIncrementPolicy, SubscriptionChecker,
    UsageLimiter,
};

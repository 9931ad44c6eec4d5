//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `config_validators`: implementations for the gateway sections
//!
//! Provider sections implement `Validate` next to their definitions.

mod config_validators;
mod trait_def;

pub use trait_def::Validate;

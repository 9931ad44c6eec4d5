//! Gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Root of the YAML configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub capabilities: CapabilitiesConfig,
    #[serde(default)]
    pub entitlement: EntitlementConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use genai_gateway::config::{AuthMode, EntitlementMode};
    use genai_gateway::core::capabilities::FailurePolicy;
    use genai_gateway::core::providers::ImageProviderKind;
    use genai_gateway::server::AppState;
    use genai_gateway::{Config, GatewayError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXAMPLE: &str = include_str!("../../config/gateway.yaml.example");

    #[test]
    fn test_example_config_parses() {
        let config = assert_ok!(Config::from_yaml_str(EXAMPLE));
        assert_eq!(config.server().port, 8000);
        assert_eq!(config.capabilities().image.provider, ImageProviderKind::GeminiStockPhoto);
        assert_eq!(config.capabilities().image.failure_policy, FailurePolicy::Fallback);
        assert_eq!(config.entitlement().mode, EntitlementMode::Memory);
        assert_eq!(config.auth().mode, AuthMode::ApiKey);
        assert!(config.providers().gemini.api_key().is_none());
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let config = assert_ok!(Config::from_yaml_str("{}"));
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.capabilities().image.max_images, 4);
        assert_eq!(config.auth().user_header, "x-user-id");
    }

    #[test]
    fn test_invalid_sections_are_rejected() {
        let cases = [
            "capabilities:\n  image:\n    max_images: 11\n",
            "capabilities:\n  code:\n    temperature: 3.5\n",
            "server:\n  port: 0\n",
            "auth:\n  user_header: \"bad header\"\n",
            "server:\n  cors:\n    allowed_origins: [\"*\"]\n    allow_credentials: true\n",
            "entitlement:\n  mode: redis\n",
        ];
        for yaml in cases {
            let err = assert_err!(Config::from_yaml_str(yaml));
            assert!(matches!(err, GatewayError::Config(_)), "{}: {:?}", yaml, err);
        }
    }

    #[tokio::test]
    async fn test_load_applies_file_then_env() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server:\n  port: 9000\nentitlement:\n  max_free_counts: 7\n")
            .unwrap();

        let mut config = assert_ok!(Config::from_file(file.path()).await);
        config
            .apply_env_from(|name| (name == "GATEWAY_PORT").then(|| "9100".to_string()))
            .unwrap();

        assert_eq!(config.server().port, 9100);
        assert_eq!(config.entitlement().max_free_counts, 7);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error_for_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = assert_err!(Config::from_file(dir.path().join("nope.yaml")).await);
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_state_builds_without_provider_keys() {
        let mut config = Config::default();
        config.gateway.capabilities.image.provider = ImageProviderKind::Stability;
        let state = assert_ok!(AppState::from_config(config));
        assert_eq!(state.image.provider_name(), "stability");
        assert_eq!(state.code.model(), "gemini-1.5-pro");
    }
}

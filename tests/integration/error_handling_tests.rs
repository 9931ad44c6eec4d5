//! Error handling integration tests
//!
//! Status mapping of gateway errors and the cross-cutting HTTP behaviour:
//! malformed bodies, unknown routes, request ids and the health endpoint.

#[cfg(test)]
mod tests {
    use crate::common::{TEST_API_KEY, TestConfig, get_as};
    use crate::test_app;
    use actix_web::ResponseError;
    use actix_web::test as actix_test;
    use genai_gateway::core::providers::ProviderError;
    use genai_gateway::utils::error::GatewayError;
    use serde_json::Value;

    // ==================== GatewayError status mapping ====================

    #[test]
    fn test_status_codes() {
        let cases = [
            (GatewayError::unauthorized("anonymous"), 401),
            (GatewayError::validation("bad"), 400),
            (GatewayError::quota_exceeded("none left"), 403),
            (GatewayError::internal("boom"), 500),
            (
                GatewayError::from(ProviderError::rate_limit("gemini", Some(10))),
                500,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.error_response().status().as_u16(), status, "{:?}", err);
        }
    }

    #[test]
    fn test_provider_details_stay_private() {
        let err: GatewayError =
            ProviderError::api_error("gemini", 502, "upstream said something secret").into();
        assert_eq!(err.public_message(), "Internal server error.");

        let err: GatewayError =
            ProviderError::configuration("gemini", "Gemini API Key is required").into();
        assert_eq!(err.public_message(), "Gemini API Key is required");
    }

    // ==================== HTTP behaviour ====================

    #[actix_web::test]
    async fn test_malformed_json_is_400() {
        let app = test_app!(TestConfig::new().build());

        for path in ["/api/code", "/api/conversation", "/api/image", "/api/music", "/api/video"] {
            let resp = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri(path)
                    .insert_header(("Authorization", format!("Bearer {}", TEST_API_KEY)))
                    .insert_header(("Content-Type", "application/json"))
                    .set_payload("{\"messages\": [")
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status().as_u16(), 400, "{}", path);
            assert_eq!(actix_test::read_body(resp).await, "Invalid JSON body.");
        }
    }

    #[actix_web::test]
    async fn test_wrong_method_and_unknown_route() {
        let app = test_app!(TestConfig::new().build());

        let resp = actix_test::call_service(&app, get_as("/api/code", TEST_API_KEY).to_request()).await;
        assert!(resp.status().is_client_error());

        let resp = actix_test::call_service(&app, get_as("/api/unknown", TEST_API_KEY).to_request()).await;
        assert_eq!(resp.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn test_request_id_is_echoed_or_generated() {
        let app = test_app!(TestConfig::new().build());

        let resp = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health")
                .insert_header(("x-request-id", "req-abc-123"))
                .to_request(),
        )
        .await;
        assert_eq!(
            resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
            "req-abc-123"
        );

        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request()).await;
        let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(generated).is_ok());
    }

    #[actix_web::test]
    async fn test_health_needs_no_identity() {
        let app = test_app!(TestConfig::new().build());

        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], genai_gateway::VERSION);
    }

    #[actix_web::test]
    async fn test_limit_requires_identity() {
        let app = test_app!(TestConfig::new().build());

        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/api/limit").to_request()).await;
        assert_eq!(resp.status().as_u16(), 401);
    }
}

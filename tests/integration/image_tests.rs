//! `/api/image` integration tests

#[cfg(test)]
mod tests {
    use crate::common::providers::IMAGE_MODEL;
    use crate::common::{
        MockGemini, MockStability, TEST_API_KEY, TestConfig, get_as, post_json,
    };
    use crate::test_app;
    use actix_web::test;
    use genai_gateway::core::capabilities::FailurePolicy;
    use serde_json::{Value, json};

    const FOX_256: &str = "https://source.unsplash.com/random/256x256/?a%20red%20fox";

    async fn images_of<B: actix_web::body::MessageBody>(
        resp: actix_web::dev::ServiceResponse<B>,
    ) -> Vec<String> {
        let body: Value = test::read_body_json(resp).await;
        serde_json::from_value(body["images"].clone()).unwrap()
    }

    #[actix_web::test]
    async fn test_gemini_variant_makes_one_call_per_image() {
        let gemini = MockGemini::start().await;
        gemini.expect_calls(IMAGE_MODEL, "A fox in the snow.", 2).await;
        let app = test_app!(TestConfig::new().gemini(&gemini).build());

        let resp = test::call_service(
            &app,
            post_json(
                "/api/image",
                TEST_API_KEY,
                json!({ "prompt": "a red fox", "amount": "2", "resolution": "256x256" }),
            )
            .to_request(),
        )
        .await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(images_of(resp).await, vec![FOX_256, FOX_256]);

        let sent = gemini.received_bodies().await;
        assert_eq!(
            sent[0]["contents"][0]["parts"][0]["text"],
            "Generate an image based on this description: a red fox"
        );
    }

    #[actix_web::test]
    async fn test_defaults_to_one_image_at_512() {
        let gemini = MockGemini::start().await;
        gemini.reply_text(IMAGE_MODEL, "ok").await;
        let app = test_app!(TestConfig::new().gemini(&gemini).build());

        let resp = test::call_service(
            &app,
            post_json("/api/image", TEST_API_KEY, json!({ "prompt": "harbour" })).to_request(),
        )
        .await;

        assert_eq!(
            images_of(resp).await,
            vec!["https://source.unsplash.com/random/512x512/?harbour"]
        );
    }

    #[actix_web::test]
    async fn test_provider_failure_falls_back_to_stock_photos() {
        let gemini = MockGemini::start().await;
        gemini.reply_error(IMAGE_MODEL, 503).await;
        let app = test_app!(TestConfig::new().gemini(&gemini).build());

        let resp = test::call_service(
            &app,
            post_json(
                "/api/image",
                TEST_API_KEY,
                json!({ "prompt": "a red fox", "amount": 3, "resolution": "256x256" }),
            )
            .to_request(),
        )
        .await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(images_of(resp).await, vec![FOX_256; 3]);

        // Degraded results are not charged by default
        let resp = test::call_service(&app, get_as("/api/limit", TEST_API_KEY).to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 0);
    }

    #[actix_web::test]
    async fn test_propagate_policy_surfaces_provider_failure() {
        let gemini = MockGemini::start().await;
        gemini.reply_error(IMAGE_MODEL, 500).await;
        let app = test_app!(
            TestConfig::new()
                .gemini(&gemini)
                .image_failure_policy(FailurePolicy::Propagate)
                .build()
        );

        let resp = test::call_service(
            &app,
            post_json("/api/image", TEST_API_KEY, json!({ "prompt": "a red fox" })).to_request(),
        )
        .await;

        assert_eq!(resp.status().as_u16(), 500);
        assert_eq!(test::read_body(resp).await, "Internal server error.");
    }

    #[actix_web::test]
    async fn test_invalid_requests_never_reach_the_provider() {
        let gemini = MockGemini::start().await;
        let app = test_app!(TestConfig::new().gemini(&gemini).build());

        let bodies = [
            json!({ "amount": 1 }),
            json!({ "prompt": "fox", "amount": 0 }),
            json!({ "prompt": "fox", "amount": "5" }),
            json!({ "prompt": "fox", "amount": "many" }),
            json!({ "prompt": "fox", "resolution": "huge" }),
        ];
        for body in bodies {
            let resp =
                test::call_service(&app, post_json("/api/image", TEST_API_KEY, body).to_request())
                    .await;
            assert_eq!(resp.status().as_u16(), 400);
        }

        assert_eq!(gemini.request_count().await, 0);
    }

    #[actix_web::test]
    async fn test_missing_prompt_message() {
        let app = test_app!(TestConfig::new().build());

        let resp = test::call_service(
            &app,
            post_json("/api/image", TEST_API_KEY, json!({ "prompt": " " })).to_request(),
        )
        .await;
        assert_eq!(test::read_body(resp).await, "Prompt is required.");
    }

    #[actix_web::test]
    async fn test_missing_gemini_key_is_not_masked_by_fallback() {
        let app = test_app!(TestConfig::new().without_gemini_key().build());

        let resp = test::call_service(
            &app,
            post_json("/api/image", TEST_API_KEY, json!({ "prompt": "fox" })).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 500);
        assert_eq!(test::read_body(resp).await, "Gemini API Key is required");
    }

    #[actix_web::test]
    async fn test_stability_returns_data_uris() {
        let stability = MockStability::start().await;
        stability.reply_image("aGVsbG8=").await;
        let app = test_app!(TestConfig::new().stability(&stability).build());

        let resp = test::call_service(
            &app,
            post_json(
                "/api/image",
                TEST_API_KEY,
                json!({ "prompt": "lighthouse", "amount": 2, "resolution": "1024x1024" }),
            )
            .to_request(),
        )
        .await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(
            images_of(resp).await,
            vec!["data:image/png;base64,aGVsbG8="; 2]
        );
    }

    #[actix_web::test]
    async fn test_stability_filtered_output_falls_back() {
        let stability = MockStability::start().await;
        stability.reply_filtered().await;
        let app = test_app!(TestConfig::new().stability(&stability).build());

        let resp = test::call_service(
            &app,
            post_json("/api/image", TEST_API_KEY, json!({ "prompt": "lighthouse" })).to_request(),
        )
        .await;

        assert_eq!(
            images_of(resp).await,
            vec!["https://source.unsplash.com/random/512x512/?lighthouse"]
        );
    }

    #[actix_web::test]
    async fn test_stability_error_with_propagate_policy() {
        let stability = MockStability::start().await;
        stability.reply_error(500).await;
        let app = test_app!(
            TestConfig::new()
                .stability(&stability)
                .image_failure_policy(FailurePolicy::Propagate)
                .build()
        );

        let resp = test::call_service(
            &app,
            post_json("/api/image", TEST_API_KEY, json!({ "prompt": "lighthouse" })).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 500);
    }

    #[actix_web::test]
    async fn test_missing_stability_key() {
        let stability = MockStability::start().await;
        let mut config = TestConfig::new().stability(&stability).build();
        config.gateway.providers.stability.api_key = None;
        let app = test_app!(config);

        let resp = test::call_service(
            &app,
            post_json("/api/image", TEST_API_KEY, json!({ "prompt": "lighthouse" })).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 500);
        assert_eq!(test::read_body(resp).await, "Stability API Key is required");
    }
}

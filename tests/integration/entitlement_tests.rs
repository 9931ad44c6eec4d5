//! Quota and subscription gating

#[cfg(test)]
mod tests {
    use crate::common::fixtures::OTHER_API_KEY;
    use crate::common::providers::CHAT_MODEL;
    use crate::common::{
        MockGemini, SUBSCRIBER_KEY, TEST_API_KEY, TestConfig, get_as, post_json, single_message,
    };
    use crate::test_app;
    use actix_web::test;
    use genai_gateway::services::entitlement::QuotaIncrementPolicy;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_free_quota_is_enforced() {
        let gemini = MockGemini::start().await;
        gemini.expect_calls(CHAT_MODEL, "ok", 2).await;
        let app = test_app!(TestConfig::new().gemini(&gemini).max_free_counts(2).build());

        for _ in 0..2 {
            let resp = test::call_service(
                &app,
                post_json("/api/code", TEST_API_KEY, single_message("hi")).to_request(),
            )
            .await;
            assert_eq!(resp.status().as_u16(), 200);
        }

        let resp = test::call_service(
            &app,
            post_json("/api/code", TEST_API_KEY, single_message("hi")).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 403);
        assert_eq!(
            test::read_body(resp).await,
            "Free trial has expired. Please upgrade to pro."
        );

        // Quota is per user
        let resp = test::call_service(
            &app,
            post_json("/api/conversation", OTHER_API_KEY, json!({})).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_quota_is_shared_across_capabilities() {
        let gemini = MockGemini::start().await;
        gemini.reply_text(CHAT_MODEL, "ok").await;
        let app = test_app!(TestConfig::new().gemini(&gemini).max_free_counts(1).build());

        let resp = test::call_service(
            &app,
            post_json("/api/conversation", TEST_API_KEY, single_message("hi")).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 200);

        let resp = test::call_service(
            &app,
            post_json("/api/image", TEST_API_KEY, json!({ "prompt": "fox" })).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 403);
    }

    #[actix_web::test]
    async fn test_subscriber_is_never_blocked_or_charged() {
        let gemini = MockGemini::start().await;
        gemini.reply_text(CHAT_MODEL, "ok").await;
        let app = test_app!(TestConfig::new().gemini(&gemini).max_free_counts(0).build());

        for _ in 0..3 {
            let resp = test::call_service(
                &app,
                post_json("/api/code", SUBSCRIBER_KEY, single_message("hi")).to_request(),
            )
            .await;
            assert_eq!(resp.status().as_u16(), 200);
        }

        let resp = test::call_service(&app, get_as("/api/limit", SUBSCRIBER_KEY).to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "count": 0, "max_free_counts": 0, "is_pro": true }));
    }

    #[actix_web::test]
    async fn test_failures_are_not_charged_on_success_policy() {
        let gemini = MockGemini::start().await;
        gemini.reply_error(CHAT_MODEL, 500).await;
        let app = test_app!(TestConfig::new().gemini(&gemini).max_free_counts(1).build());

        for _ in 0..3 {
            let resp = test::call_service(
                &app,
                post_json("/api/code", TEST_API_KEY, single_message("hi")).to_request(),
            )
            .await;
            assert_eq!(resp.status().as_u16(), 500);
        }

        let resp = test::call_service(&app, get_as("/api/limit", TEST_API_KEY).to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 0);
    }

    #[actix_web::test]
    async fn test_failures_are_charged_on_always_policy() {
        let gemini = MockGemini::start().await;
        gemini.reply_error(CHAT_MODEL, 500).await;
        let app = test_app!(
            TestConfig::new()
                .gemini(&gemini)
                .max_free_counts(1)
                .quota_increment(QuotaIncrementPolicy::Always)
                .build()
        );

        let resp = test::call_service(
            &app,
            post_json("/api/code", TEST_API_KEY, single_message("hi")).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 500);

        let resp = test::call_service(
            &app,
            post_json("/api/code", TEST_API_KEY, single_message("hi")).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 403);
    }

    #[actix_web::test]
    async fn test_validation_errors_are_not_charged() {
        let app = test_app!(
            TestConfig::new()
                .max_free_counts(1)
                .quota_increment(QuotaIncrementPolicy::Always)
                .build()
        );

        for _ in 0..3 {
            let resp = test::call_service(
                &app,
                post_json("/api/code", TEST_API_KEY, json!({ "messages": [] })).to_request(),
            )
            .await;
            assert_eq!(resp.status().as_u16(), 400);
        }

        let resp = test::call_service(&app, get_as("/api/limit", TEST_API_KEY).to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "count": 0, "max_free_counts": 1, "is_pro": false }));
    }

    #[actix_web::test]
    async fn test_header_identity_mode() {
        let gemini = MockGemini::start().await;
        gemini.reply_text(CHAT_MODEL, "ok").await;
        let app = test_app!(
            TestConfig::new()
                .gemini(&gemini)
                .header_auth()
                .max_free_counts(1)
                .build()
        );

        let request = || {
            test::TestRequest::post()
                .uri("/api/code")
                .insert_header(("x-user-id", "alice"))
                .set_json(single_message("hi"))
                .to_request()
        };

        assert_eq!(test::call_service(&app, request()).await.status().as_u16(), 200);
        assert_eq!(test::call_service(&app, request()).await.status().as_u16(), 403);

        // Api keys mean nothing in header mode
        let resp = test::call_service(
            &app,
            post_json("/api/code", TEST_API_KEY, single_message("hi")).to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 401);
    }
}

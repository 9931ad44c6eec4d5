//! `/api/music` and `/api/video` integration tests

#[cfg(test)]
mod tests {
    use crate::common::{TEST_API_KEY, TestConfig, get_as, post_anonymous, post_json};
    use crate::test_app;
    use actix_web::test;
    use genai_gateway::core::fallback::{DEFAULT_AUDIO_URL, DEFAULT_VIDEO_URL};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_music_keyword_resolution() {
        let app = test_app!(TestConfig::new().build());

        let resp = test::call_service(
            &app,
            post_json("/api/music", TEST_API_KEY, json!({ "prompt": "Smooth JAZZ at night" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "audio": "https://www2.cs.uic.edu/~i101/SoundFiles/BabyElephantWalk60.wav" })
        );
    }

    #[actix_web::test]
    async fn test_music_default_clip() {
        let app = test_app!(TestConfig::new().build());

        let resp = test::call_service(
            &app,
            post_json("/api/music", TEST_API_KEY, json!({ "prompt": "xyz-nonexistent-keyword" }))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["audio"], DEFAULT_AUDIO_URL);
    }

    #[actix_web::test]
    async fn test_video_is_a_bare_array() {
        let app = test_app!(TestConfig::new().build());

        let resp = test::call_service(
            &app,
            post_json("/api/video", TEST_API_KEY, json!({ "prompt": "ocean waves at sunset" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4"
            ])
        );

        let resp = test::call_service(
            &app,
            post_json("/api/video", TEST_API_KEY, json!({ "prompt": "a quiet library" }))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([DEFAULT_VIDEO_URL]));
    }

    #[actix_web::test]
    async fn test_prompt_is_required() {
        let app = test_app!(TestConfig::new().build());

        for path in ["/api/music", "/api/video"] {
            for body in [json!({}), json!({ "prompt": "" }), json!({ "prompt": "   " })] {
                let resp =
                    test::call_service(&app, post_json(path, TEST_API_KEY, body).to_request())
                        .await;
                assert_eq!(resp.status().as_u16(), 400);
                assert_eq!(test::read_body(resp).await, "Prompt is required.");
            }
        }
    }

    #[actix_web::test]
    async fn test_media_requires_identity() {
        let app = test_app!(TestConfig::new().build());

        for path in ["/api/music", "/api/video"] {
            let resp = test::call_service(
                &app,
                post_anonymous(path, json!({ "prompt": "piano" })).to_request(),
            )
            .await;
            assert_eq!(resp.status().as_u16(), 401);
        }
    }

    #[actix_web::test]
    async fn test_media_is_not_gated() {
        let app = test_app!(TestConfig::new().max_free_counts(0).build());

        for _ in 0..3 {
            let resp = test::call_service(
                &app,
                post_json("/api/music", TEST_API_KEY, json!({ "prompt": "guitar" })).to_request(),
            )
            .await;
            assert_eq!(resp.status().as_u16(), 200);
        }

        let resp = test::call_service(&app, get_as("/api/limit", TEST_API_KEY).to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 0);
    }
}

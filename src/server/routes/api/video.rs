//! `POST /api/video`

use actix_web::{HttpResponse, web};
use tracing::info;

use super::{Caller, log_failure};
use crate::core::types::{PromptRequest, VideoResponse};
use crate::core::validation::RequestValidator;
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Resolve a prompt to a single video clip, returned as a bare array. Not gated.
pub async fn generate_video(
    state: web::Data<AppState>,
    caller: Caller,
    body: web::Json<PromptRequest>,
) -> Result<HttpResponse> {
    info!(capability = "video", user = %caller.user, request_id = %caller.request_id, "Handling generation request");

    let prompt = RequestValidator::validate_prompt(body.into_inner())
        .map_err(|e| log_failure("VIDEO_ERROR", &caller, e))?;

    Ok(HttpResponse::Ok().json(VideoResponse::single(state.video.resolve(&prompt))))
}

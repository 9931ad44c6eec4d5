//! `POST /api/music`

use actix_web::{HttpResponse, web};
use tracing::info;

use super::{Caller, log_failure};
use crate::core::types::{MusicResponse, PromptRequest};
use crate::core::validation::RequestValidator;
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Resolve a prompt to an audio clip. Not gated.
pub async fn generate_music(
    state: web::Data<AppState>,
    caller: Caller,
    body: web::Json<PromptRequest>,
) -> Result<HttpResponse> {
    info!(capability = "music", user = %caller.user, request_id = %caller.request_id, "Handling generation request");

    let prompt = RequestValidator::validate_prompt(body.into_inner())
        .map_err(|e| log_failure("MUSIC_ERROR", &caller, e))?;

    Ok(HttpResponse::Ok().json(MusicResponse {
        audio: state.music.resolve(&prompt).to_string(),
    }))
}

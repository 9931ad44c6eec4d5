//! `POST /api/code`

use actix_web::{HttpResponse, web};
use tracing::info;

use super::{Caller, log_failure, run_gated};
use crate::core::types::{CodeResponse, MessagesRequest};
use crate::core::validation::RequestValidator;
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Generate code for the last message of a conversation
pub async fn generate_code(
    state: web::Data<AppState>,
    caller: Caller,
    body: web::Json<MessagesRequest>,
) -> Result<HttpResponse> {
    info!(capability = "code", user = %caller.user, request_id = %caller.request_id, "Handling generation request");

    let result: Result<HttpResponse> = async {
        let messages = RequestValidator::validate_messages(body.into_inner())?;
        let content = run_gated(&state, &caller, state.code.respond(messages)).await?;
        Ok(HttpResponse::Ok().json(CodeResponse::new(content)))
    }
    .await;

    result.map_err(|e| log_failure("CODE_ERROR", &caller, e))
}

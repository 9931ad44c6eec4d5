//! `POST /api/conversation`

use actix_web::{HttpResponse, web};
use tracing::info;

use super::{Caller, log_failure, run_gated};
use crate::core::types::{ConversationResponse, MessagesRequest};
use crate::core::validation::RequestValidator;
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Continue a conversation; the reply is restructured into markdown
pub async fn generate_conversation(
    state: web::Data<AppState>,
    caller: Caller,
    body: web::Json<MessagesRequest>,
) -> Result<HttpResponse> {
    info!(capability = "conversation", user = %caller.user, request_id = %caller.request_id, "Handling generation request");

    let result: Result<HttpResponse> = async {
        let messages = RequestValidator::validate_messages(body.into_inner())?;
        let message = run_gated(&state, &caller, state.conversation.respond(messages)).await?;
        Ok(HttpResponse::Ok().json(ConversationResponse { message }))
    }
    .await;

    result.map_err(|e| log_failure("CONVERSATION_ERROR", &caller, e))
}

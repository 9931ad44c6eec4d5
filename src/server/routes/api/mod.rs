//! Generation API endpoints
//!
//! Every handler follows the same order: identity (the `Caller`
//! extractor), body validation, the entitlement gate for billable
//! capabilities, the capability call, then usage accounting.

mod code;
mod context;
mod conversation;
mod image;
mod limit;
mod music;
mod video;

pub use code::generate_code;
pub use context::{Caller, authenticate, get_request_id};
pub use conversation::generate_conversation;
pub use image::generate_image;
pub use limit::get_limit;
pub use music::generate_music;
pub use video::generate_video;

use std::future::Future;

use actix_web::{ResponseError, web};
use tracing::{debug, error};

use crate::core::capabilities::Generated;
use crate::server::state::AppState;
use crate::services::entitlement::CallOutcome;
use crate::utils::error::{GatewayError, Result};

/// Configure generation API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/code", web::post().to(generate_code))
            .route("/conversation", web::post().to(generate_conversation))
            .route("/image", web::post().to(generate_image))
            .route("/music", web::post().to(generate_music))
            .route("/video", web::post().to(generate_video))
            .route("/limit", web::get().to(get_limit)),
    );
}

/// Gate a billable call and account for it once its outcome is known
///
/// `call` is not polled until the gate has allowed the request.
async fn run_gated<T, F>(state: &AppState, caller: &Caller, call: F) -> Result<T>
where
    F: Future<Output = Result<Generated<T>>>,
{
    let entitlement = state.gate.authorize(&caller.user).await?;

    let result = call.await;
    let outcome = match &result {
        Ok(generated) if generated.is_fallback() => CallOutcome::Fallback,
        Ok(_) => CallOutcome::Success,
        Err(_) => CallOutcome::Failure,
    };
    state
        .gate
        .record_usage(&caller.user, entitlement, outcome)
        .await;

    result.map(|generated| generated.value)
}

/// Log a failed request under its capability tag and pass the error on
fn log_failure(tag: &str, caller: &Caller, err: GatewayError) -> GatewayError {
    if err.status_code().is_server_error() {
        error!(request_id = %caller.request_id, "[{}]: {}", tag, err);
    } else {
        debug!(request_id = %caller.request_id, "[{}]: {}", tag, err);
    }
    err
}

//! `GET /api/limit`

use actix_web::{HttpResponse, web};

use super::{Caller, log_failure};
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Free-quota usage and subscription status of the caller
pub async fn get_limit(state: web::Data<AppState>, caller: Caller) -> Result<HttpResponse> {
    let status = state
        .gate
        .limit_status(&caller.user)
        .await
        .map_err(|e| log_failure("LIMIT_ERROR", &caller, e))?;

    Ok(HttpResponse::Ok().json(status))
}

//! Request context and authentication helpers

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{Ready, ready};
use tracing::debug;

use crate::auth::UserId;
use crate::server::middleware::REQUEST_ID_HEADER;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// Authenticated caller of a request
///
/// Declared before the body in handler signatures so that an anonymous
/// request is rejected with 401 before its body is parsed.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user: UserId,
    pub request_id: String,
}

/// Request id set by `RequestIdMiddleware`
pub fn get_request_id(req: &HttpRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|id| id.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Resolve the caller through the configured identity provider
pub fn authenticate(req: &HttpRequest) -> Result<Caller> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| GatewayError::internal("Application state is not configured"))?;

    let user = state
        .identity
        .authenticate(req)
        .ok_or_else(|| GatewayError::unauthorized("no caller identity"))?;

    Ok(Caller {
        user,
        request_id: get_request_id(req),
    })
}

impl FromRequest for Caller {
    type Error = GatewayError;
    type Future = Ready<Result<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let caller = authenticate(req).inspect_err(|err| {
            debug!(
                request_id = %get_request_id(req),
                "[{}]: {} {}",
                capability_tag(req.path()),
                req.path(),
                err
            );
        });
        ready(caller)
    }
}

/// Log tag for a route, e.g. `/api/code` becomes `CODE_ERROR`
pub fn capability_tag(path: &str) -> String {
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    format!("{}_ERROR", segment.to_uppercase())
}

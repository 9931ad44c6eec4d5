//! `POST /api/image`

use actix_web::{HttpResponse, web};
use tracing::info;

use super::{Caller, log_failure, run_gated};
use crate::core::types::{ImageRequest, ImageResponse};
use crate::core::validation::RequestValidator;
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Generate `amount` images for a prompt
pub async fn generate_image(
    state: web::Data<AppState>,
    caller: Caller,
    body: web::Json<ImageRequest>,
) -> Result<HttpResponse> {
    info!(capability = "image", user = %caller.user, request_id = %caller.request_id, "Handling generation request");

    let result: Result<HttpResponse> = async {
        let spec =
            RequestValidator::validate_image_request(body.into_inner(), state.image.max_images())?;
        let images = run_gated(&state, &caller, state.image.generate(&spec)).await?;
        Ok(HttpResponse::Ok().json(ImageResponse { images }))
    }
    .await;

    result.map_err(|e| log_failure("IMAGE_ERROR", &caller, e))
}

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::request_password_reset_dto::RequestPasswordResetDto, service};

pub async fn request_password_reset(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<RequestPasswordResetDto>,
) -> Result<(), ApiError> {
    match dto.validate() {
        Ok(_) => service::request_password_reset(&dto, &state).await,
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

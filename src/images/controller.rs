use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    generation_requests::models::generation_request::GenerationRequest,
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, models::image_configuration::ImageConfiguration,
    service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GenerationRequest>, ApiError> {
    // Validation has to see the record the generator would receive, or a
    // whitespace-only prompt slips through as empty.
    let dto = dto.sanitized();

    match dto.validate() {
        Ok(_) => match service::generate_image(&dto, &state).await {
            Ok(request) => Ok(Json(request)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_image_configuration() -> Json<ImageConfiguration> {
    Json(ImageConfiguration::new())
}

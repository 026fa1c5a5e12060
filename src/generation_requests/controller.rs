use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::get_generation_requests_filter_dto::GetGenerationRequestsFilterDto,
    models::generation_request::GenerationRequest,
};

pub async fn get_generation_requests(
    State(state): State<AppState>,
    Query(dto): Query<GetGenerationRequestsFilterDto>,
) -> Result<Json<Vec<GenerationRequest>>, ApiError> {
    match dto.validate() {
        Ok(_) => Ok(Json(state.generation_requests.get_requests(&dto).await)),
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_generation_request_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GenerationRequest>, ApiError> {
    match state.generation_requests.get_request_by_id(&id).await {
        Ok(request) => Ok(Json(request)),
        Err(e) => Err(e),
    }
}

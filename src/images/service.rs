use crate::{
    app::models::api_error::ApiError,
    generation_requests::enums::generation_request_status::GenerationRequestStatus,
    generation_requests::models::generation_request::GenerationRequest, AppState,
};

use super::dtos::generate_image_dto::GenerateImageDto;

/// Records the request, hands the record to the generator exactly once, and
/// mirrors the outcome into the ledger. Callers pass a sanitized, validated
/// record; generator failures propagate to the caller untouched.
pub async fn generate_image(
    dto: &GenerateImageDto,
    state: &AppState,
) -> Result<GenerationRequest, ApiError> {
    let request = state.generation_requests.create_request(dto).await;

    state
        .generation_requests
        .update_status(&request.id, GenerationRequestStatus::Processing)
        .await?;

    match state.generator.generate(dto).await {
        Ok(_) => {
            state
                .generation_requests
                .update_status(&request.id, GenerationRequestStatus::Completed)
                .await
        }
        Err(e) => {
            tracing::error!("generate_image failed for request {}", request.id);

            if let Err(e) = state
                .generation_requests
                .update_status(&request.id, GenerationRequestStatus::Error)
                .await
            {
                tracing::error!("failed to mark request as errored: {}", e.message);
            }

            Err(e)
        }
    }
}

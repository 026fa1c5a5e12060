use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::dtos::generate_image_dto::GenerateImageDto;

/// The asynchronous action a valid submission is handed to. Injected into
/// [`crate::AppState`] so tests can substitute it.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, dto: &GenerateImageDto) -> Result<(), ApiError>;
}

/// Acknowledges accepted records without reaching a backend. Transport to a
/// real generation service lives outside this crate.
pub struct LogGenerator;

#[async_trait]
impl ImageGenerator for LogGenerator {
    async fn generate(&self, dto: &GenerateImageDto) -> Result<(), ApiError> {
        tracing::info!(
            model = %dto.model,
            num_outputs = dto.num_outputs,
            num_inference_steps = dto.num_inference_steps,
            "accepted generate request"
        );

        Ok(())
    }
}

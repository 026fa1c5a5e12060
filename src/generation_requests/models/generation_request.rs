use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    app::util::time,
    generation_requests::enums::generation_request_status::GenerationRequestStatus,
    images::dtos::generate_image_dto::GenerateImageDto,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub id: String,
    pub status: String,
    pub generate_image_dto: GenerateImageDto,
    pub created_at: i64,
}

impl GenerationRequest {
    pub fn new(generate_image_dto: &GenerateImageDto) -> Self {
        return Self {
            id: Uuid::new_v4().to_string(),
            status: GenerationRequestStatus::Pending.value().to_string(),
            generate_image_dto: generate_image_dto.clone(),
            created_at: time::current_time_in_secs() as i64,
        };
    }
}

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::generation_requests::enums::generation_request_status::GenerationRequestStatus;

#[derive(Debug, Deserialize, Validate)]
pub struct GetGenerationRequestsFilterDto {
    #[validate(custom = "validate_status")]
    pub status: Option<String>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100."))]
    pub limit: Option<u8>,
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    if GenerationRequestStatus::is_valid(status) {
        return Ok(());
    }

    let mut error = ValidationError::new("status");
    error.message = Some("status must be pending, processing, completed or error.".into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_blocks_validation() {
        let dto = GetGenerationRequestsFilterDto {
            status: Some("queued".to_string()),
            limit: None,
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn empty_filter_is_valid() {
        let dto = GetGenerationRequestsFilterDto {
            status: None,
            limit: None,
        };

        assert!(dto.validate().is_ok());
    }
}

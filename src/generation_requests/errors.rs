use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationRequestsApiError {
    RequestNotFound,
}

impl GenerationRequestsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::RequestNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Generation request not found.".to_string(),
            },
        }
    }
}

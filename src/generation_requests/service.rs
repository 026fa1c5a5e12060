use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{app::models::api_error::ApiError, images::dtos::generate_image_dto::GenerateImageDto};

use super::{
    dtos::get_generation_requests_filter_dto::GetGenerationRequestsFilterDto,
    enums::generation_request_status::GenerationRequestStatus, errors::GenerationRequestsApiError,
    models::generation_request::GenerationRequest,
};

const DEFAULT_LIMIT: usize = 50;

/// In-memory ledger of generation requests. Requests live for the lifetime
/// of the process; persistence is out of scope here.
pub struct GenerationRequestStore {
    requests: RwLock<HashMap<String, GenerationRequest>>,
}

impl GenerationRequestStore {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create_request(&self, dto: &GenerateImageDto) -> GenerationRequest {
        let request = GenerationRequest::new(dto);

        let mut requests = self.requests.write().await;
        requests.insert(request.id.to_string(), request.clone());

        request
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: GenerationRequestStatus,
    ) -> Result<GenerationRequest, ApiError> {
        let mut requests = self.requests.write().await;

        match requests.get_mut(id) {
            Some(request) => {
                request.status = status.value().to_string();
                Ok(request.clone())
            }
            None => Err(GenerationRequestsApiError::RequestNotFound.value()),
        }
    }

    pub async fn get_requests(
        &self,
        dto: &GetGenerationRequestsFilterDto,
    ) -> Vec<GenerationRequest> {
        let requests = self.requests.read().await;

        let mut matches: Vec<GenerationRequest> = requests
            .values()
            .filter(|request| match &dto.status {
                Some(status) => &request.status == status,
                None => true,
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let limit = dto.limit.map(usize::from).unwrap_or(DEFAULT_LIMIT);
        matches.truncate(limit);

        matches
    }

    pub async fn get_request_by_id(&self, id: &str) -> Result<GenerationRequest, ApiError> {
        let requests = self.requests.read().await;

        match requests.get(id) {
            Some(request) => Ok(request.clone()),
            None => Err(GenerationRequestsApiError::RequestNotFound.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> GenerateImageDto {
        GenerateImageDto {
            prompt: "a harbor at dawn".to_string(),
            ..Default::default()
        }
    }

    fn filter(status: Option<&str>, limit: Option<u8>) -> GetGenerationRequestsFilterDto {
        GetGenerationRequestsFilterDto {
            status: status.map(str::to_string),
            limit,
        }
    }

    #[tokio::test]
    async fn created_requests_start_pending() {
        let store = GenerationRequestStore::new();

        let request = store.create_request(&dto()).await;

        assert_eq!(request.status, "pending");
        assert_eq!(request.generate_image_dto, dto());
    }

    #[tokio::test]
    async fn requests_move_from_pending_to_processing() {
        let store = GenerationRequestStore::new();
        let request = store.create_request(&dto()).await;

        let updated = store
            .update_status(&request.id, GenerationRequestStatus::Processing)
            .await
            .unwrap();

        assert_eq!(updated.status, "processing");

        let pending = store.get_requests(&filter(Some("pending"), None)).await;
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn update_status_transitions_the_request() {
        let store = GenerationRequestStore::new();
        let request = store.create_request(&dto()).await;

        let updated = store
            .update_status(&request.id, GenerationRequestStatus::Completed)
            .await
            .unwrap();

        assert_eq!(updated.status, "completed");
        let fetched = store.get_request_by_id(&request.id).await.unwrap();
        assert_eq!(fetched.status, "completed");
    }

    #[tokio::test]
    async fn update_status_on_unknown_id_is_not_found() {
        let store = GenerationRequestStore::new();

        let error = store
            .update_status("missing", GenerationRequestStatus::Error)
            .await
            .unwrap_err();

        assert_eq!(error.code, axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_requests_filters_by_status_and_limits() {
        let store = GenerationRequestStore::new();
        let first = store.create_request(&dto()).await;
        store.create_request(&dto()).await;
        store
            .update_status(&first.id, GenerationRequestStatus::Completed)
            .await
            .unwrap();

        let completed = store.get_requests(&filter(Some("completed"), None)).await;
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, first.id);

        let limited = store.get_requests(&filter(None, Some(1))).await;
        assert_eq!(limited.len(), 1);
    }
}

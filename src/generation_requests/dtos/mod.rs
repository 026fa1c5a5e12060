pub mod get_generation_requests_filter_dto;

pub mod api_error;
pub mod app_info;

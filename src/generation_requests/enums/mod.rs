pub mod generation_request_status;

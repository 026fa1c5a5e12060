pub mod request_password_reset_dto;

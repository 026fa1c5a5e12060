use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RequestPasswordResetDto {
    #[validate(email(message = "email must be a valid email address."))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_passes_validation() {
        let dto = RequestPasswordResetDto {
            email: "someone@example.com".to_string(),
        };

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn invalid_email_shapes_block_validation() {
        for email in ["", "someone", "someone@", "@example.com", "a b@c.d"] {
            let dto = RequestPasswordResetDto {
                email: email.to_string(),
            };

            let message = dto.validate().unwrap_err().to_string();
            assert!(
                message.contains("email must be a valid email address."),
                "expected {email:?} to be rejected"
            );
        }
    }
}

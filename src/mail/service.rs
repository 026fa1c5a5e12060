use axum::http::StatusCode;
use lettre::{
    message::{header, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};

use crate::app::{env::Envy, errors::DefaultApiError, models::api_error::ApiError};

pub async fn send_mail(to: &str, subject: &str, body: &str, envy: &Envy) -> Result<(), ApiError> {
    let Ok(to_mailbox) = to.parse::<Mailbox>()
    else {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "Invalid recipient address.".to_string(),
        });
    };

    let Ok(from_mailbox) = envy.mail_user.parse::<Mailbox>()
    else {
        tracing::error!("mail_user is not a valid mailbox");
        return Err(DefaultApiError::InternalServerError.value());
    };

    let mail_result = lettre::Message::builder()
        .to(to_mailbox)
        .from(from_mailbox)
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(header::ContentType::TEXT_PLAIN)
                        .body(String::from("Failed to display email.")),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(header::ContentType::TEXT_HTML)
                        .body(String::from(body)),
                ),
        );

    let Ok(mail) = mail_result
    else {
        tracing::error!("failed to build mail");
        return Err(DefaultApiError::InternalServerError.value());
    };

    let Ok(relay) = AsyncSmtpTransport::<Tokio1Executor>::relay(&envy.mail_host)
    else {
        tracing::error!("failed to connect to mail relay");
        return Err(DefaultApiError::InternalServerError.value());
    };

    let mailer = relay
        .credentials(Credentials::new(
            envy.mail_user.to_string(),
            envy.mail_pass.to_string(),
        ))
        .build();

    match mailer.send(mail).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to send mail.".to_string(),
            })
        }
    }
}

use tokio_retry::{strategy::FixedInterval, Retry};
use uuid::Uuid;

use crate::{
    app::models::api_error::ApiError,
    mail::{self, templates::reset_password_template::reset_password_template},
    AppState,
};

use super::dtos::request_password_reset_dto::RequestPasswordResetDto;

/// Mails a reset link carrying an opaque token. Verifying the token and
/// updating credentials belong to the identity service, not this crate.
pub async fn request_password_reset(
    dto: &RequestPasswordResetDto,
    state: &AppState,
) -> Result<(), ApiError> {
    let reset_token = Uuid::new_v4().to_string();
    let (subject, body) = reset_password_template(&reset_token, &state.envy.frontend_url);

    let retry_strategy = FixedInterval::from_millis(10000).take(3);

    Retry::spawn(retry_strategy, || async {
        mail::service::send_mail(&dto.email, &subject, &body, &state.envy).await
    })
    .await?;

    tracing::info!("password reset mail sent");

    Ok(())
}

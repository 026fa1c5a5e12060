use crate::app;

pub fn reset_password_template(reset_token: &str, frontend_url: &str) -> (String, String) {
    let url = format!("{}/auth/password/{}", frontend_url, reset_token);

    (
        format!("{} password reset", app::config::APP_NAME),
        format!(
            "
        <p>Hello,</p>
        <p>We heard that you want to reset your {} password.</p>
        <p>You can use the following link to choose a new one:</p>
        <a href={}>{}</a>
        <p>If you did not request this, ignore this email.</p>
        <p>Your friends at {}</p>
        ",
            app::config::APP_NAME,
            url,
            url,
            app::config::APP_NAME
        ),
    )
}

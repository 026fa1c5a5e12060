use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub frontend_url: String,
    pub port: Option<u16>,

    pub mail_host: String,
    pub mail_user: String,
    pub mail_pass: String,
}

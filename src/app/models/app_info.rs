use serde::Serialize;

use crate::app::config;

#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub homepage: &'static str,
}

impl AppInfo {
    pub fn new() -> Self {
        Self {
            name: config::APP_NAME,
            version: env!("CARGO_PKG_VERSION"),
            homepage: config::APP_HOMEPAGE,
        }
    }
}

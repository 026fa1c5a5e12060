use axum::Json;

use super::models::app_info::AppInfo;

pub async fn get_root() -> Json<AppInfo> {
    Json(AppInfo::new())
}

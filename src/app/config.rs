pub const APP_NAME: &str = "Pictor";
pub const APP_HOMEPAGE: &str = "https://pictor.app";

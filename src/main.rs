#![allow(dead_code)]

use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::{env::Envy, errors::DefaultApiError},
    generation_requests::service::GenerationRequestStore,
    images::generator::{ImageGenerator, LogGenerator},
};

mod app;
mod auth;
mod generation_requests;
mod images;
mod mail;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub generator: Arc<dyn ImageGenerator>,
    pub generation_requests: Arc<GenerationRequestStore>,
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // auth
        .route("/auth/password", post(auth::controller::request_password_reset))
        // images
        .route(
            "/images/configuration",
            get(images::controller::get_image_configuration),
        )
        .route("/images/generate", post(images::controller::generate_image))
        // generation_requests
        .route(
            "/generation-requests",
            get(generation_requests::controller::get_generation_requests),
        )
        .route(
            "/generation-requests/:id",
            get(generation_requests::controller::get_generation_request_by_id),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    let state = AppState {
        envy: Arc::new(envy),
        generator: Arc::new(LogGenerator),
        generation_requests: Arc::new(GenerationRequestStore::new()),
    };

    // app
    let app = app(state).layer(cors).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|_: BoxError| async move {
                DefaultApiError::InternalServerError.value()
            }))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

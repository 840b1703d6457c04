use crate::env::EnvSource;
use crate::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

mod hello_world;

pub(crate) fn get_api(env: EnvSource) -> Router {
    Router::new()
        .route("/hello-world", get(hello_world::get))
        .route("/hello-world/", get(hello_world::get))
        .with_state(env)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id))
}

use crate::env::{EnvSource, EXECUTION_ENV_VAR};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::debug;

const GREETING_PREFIX: &str = "Hello world! I am Java Application from AWS ";

/// An unset execution environment leaves the trailing space in place.
pub fn greeting(execution_env: Option<&str>) -> String {
    format!("{GREETING_PREFIX}{}", execution_env.unwrap_or_default())
}

pub async fn get(State(env): State<EnvSource>) -> impl IntoResponse {
    let execution_env = env.var(EXECUTION_ENV_VAR);

    debug!(?execution_env, "GET hello-world");

    (StatusCode::OK, greeting(execution_env.as_deref()))
}

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::info;

use crate::{
    error::AppError,
    state::AppState,
    storage::SubscriberStore,
    utils::get_email_from_body,
};

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    storage: &'static str,
}

pub async fn create_subscriber_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let email = get_email_from_body(&body)?;

    let subscriber = state.storage.create_subscriber(&email).await?;
    info!("Subscriber {} created", subscriber.id);

    Ok((StatusCode::CREATED, Json(subscriber)))
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(Health {
        status: "ok",
        storage: state.storage.name(),
    })
}

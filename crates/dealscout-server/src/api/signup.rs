use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::users::{hash_password, UserRecord};

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SignupRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SignupResponse {
    message: &'static str,
}

pub(super) async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<SignupResponse>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::invalid_request())?;
    if body.name.trim().is_empty() || body.email.trim().is_empty() || body.password.is_empty() {
        return Err(ApiError::invalid_request());
    }

    let record = UserRecord {
        email: body.email,
        name: body.name,
        password_hash: hash_password(&state.config.password_hash_salt, &body.password),
        created_at: Utc::now(),
    };

    let replaced = state.users.put(record).await;
    if replaced.is_some() {
        tracing::debug!("signup replaced an existing user record");
    }

    Ok(Json(SignupResponse {
        message: "User data saved successfully",
    }))
}

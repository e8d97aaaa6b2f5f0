use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use skylane_core::{IdentityClaim, IdentityError};

use crate::{error::AppError, password, state::AppState};

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /api/register
/// Create an account and log the new user straight in.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let RegisterRequest {
        name,
        email,
        password,
    } = req;

    // Reject duplicates before paying for a digest; register re-checks
    // under the lock that inserts.
    if state.store.lock().identity.email_taken(&email) {
        return Err(IdentityError::DuplicateEmail.into());
    }

    let password_hash = tokio::task::spawn_blocking(move || password::hash(&password))
        .await
        .map_err(|e| AppError::InternalServerError(format!("Hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalServerError(format!("Password hashing failed: {e}")))?;

    let claim = state
        .store
        .lock()
        .identity
        .register(name, email, password_hash)?;

    let token = state
        .tokens
        .issue(&claim)
        .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {e}")))?;

    tracing::info!(user_id = claim.id, "user registered");

    Ok(Json(AuthResponse { token }))
}

/// POST /api/login
/// Exchange credentials for a bearer token. Unknown email and wrong
/// password are answered identically.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state
        .store
        .lock()
        .identity
        .find_by_email(&req.email)
        .cloned();
    let user = user.ok_or(IdentityError::InvalidCredentials)?;

    let claim = IdentityClaim {
        id: user.id,
        email: user.email.clone(),
    };

    // Digest verification runs off the async executor, lock released
    let password = req.password;
    let verified =
        tokio::task::spawn_blocking(move || password::verify(&password, &user.password_hash))
            .await
            .map_err(|e| AppError::InternalServerError(format!("Verification task failed: {e}")))?;

    if !verified {
        return Err(IdentityError::InvalidCredentials.into());
    }

    let token = state
        .tokens
        .issue(&claim)
        .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {e}")))?;

    tracing::info!(user_id = claim.id, "user logged in");

    Ok(Json(AuthResponse { token }))
}

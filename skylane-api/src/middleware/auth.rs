use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState, token::TokenError};

/// Require a valid bearer token and make its claims available to handlers
/// through request extensions. A missing token is reported separately from
/// one that fails verification.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = {
        // 1. Extract token from the Authorization header
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(TokenError::Missing)?;

        // 2. Verify signature and expiry
        state.tokens.verify(token)?
    };

    // 3. Inject claims for the handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticates requests using the static API key header.
///
/// # Header Format
///
/// ```text
/// X-API-Key: <secret>
/// ```
///
/// # Errors
///
/// Returns `403 Forbidden` with `{"detail": "Could not validate credentials"}` if:
/// - the header is missing or not valid UTF-8
/// - the key does not match the configured secret
/// - no secret is configured
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/books", get(list_books_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = st.auth_service.authenticate(provided) {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            key_present = provided.is_some(),
            "Rejected request with invalid API key"
        );
        return Err(e);
    }

    Ok(next.run(req).await)
}

//! Handler for the unauthenticated root endpoint.

use axum::Json;

use crate::api::dto::root::RootResponse;

/// Returns a static status message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Books API up. See /docs",
    })
}

//! DTO for the root status endpoint.

use serde::Serialize;

/// Static status message returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication middleware for the gateway.
//!
//! Resolves `Authorization: Bearer <token>` against the session manager
//! and threads the resulting [`Identity`] through request extensions.
//! Requests without a resolvable identity are rejected (fail-closed).

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::AppState;

/// Middleware that turns a bearer token into an [`Identity`] extension.
///
/// Missing headers, unknown tokens, and expired sessions all yield the
/// same 401 so responses reveal nothing about token state.
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(token) = bearer_token(request.headers()) else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    match state.sessions.current_identity(token).await {
        Ok(Some(identity)) => {
            request.extensions_mut().insert(identity);
            Ok(next.run(request).await)
        }
        Ok(None) => Err(StatusCode::UNAUTHORIZED),
        Err(e) => {
            tracing::error!(error = %e, "session resolution failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The single place bearer parsing happens; handlers that need the raw
/// token (logout) share it with the middleware.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the journal REST API.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use zenjournal_core::JournalError;
use zenjournal_core::types::{EntryDraft, Identity, JournalEntry};

use crate::AppState;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Maps a [`JournalError`] onto an HTTP response.
///
/// Validation problems are the caller's fault (422), credential
/// problems are 401, and backend failures surface as 502 so clients can
/// tell them apart from gateway bugs (500).
pub struct ApiError(pub JournalError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            JournalError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            JournalError::Auth(_) => StatusCode::UNAUTHORIZED,
            JournalError::Storage { .. } | JournalError::Analysis { .. } => StatusCode::BAD_GATEWAY,
            JournalError::Config(_) | JournalError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<JournalError> for ApiError {
    fn from(e: JournalError) -> Self {
        Self(e)
    }
}

/// Request body for POST /api/auth/signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    pub password: String,
}

/// Request body for POST /api/auth/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for signup, login, and session lookup.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Identity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Request body for DELETE /api/entries/{id}.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
    /// The commit phase of deletion. `false` (or a missing body) is the
    /// unconfirmed first phase and deletes nothing.
    #[serde(default)]
    pub confirm: bool,
}

/// Response body for GET /api/entries.
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub entries: Vec<JournalEntry>,
}

/// One row of the mood summary.
#[derive(Debug, Serialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

/// Response body for GET /api/moods.
#[derive(Debug, Serialize)]
pub struct MoodSummaryResponse {
    pub moods: Vec<MoodCount>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// POST /api/auth/signup
pub async fn post_signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (user, token) = state
        .sessions
        .sign_up(&body.email, &body.display_name, &body.password)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            user,
            token: Some(token),
        }),
    ))
}

/// POST /api/auth/login
pub async fn post_login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (user, token) = state.sessions.sign_in(&body.email, &body.password).await?;
    Ok(Json(SessionResponse {
        user,
        token: Some(token),
    }))
}

/// POST /api/auth/logout
pub async fn post_logout(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<StatusCode, ApiError> {
    if let Some(token) = crate::auth::bearer_token(&headers) {
        state.sessions.sign_out(token).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/session
pub async fn get_session(Extension(user): Extension<Identity>) -> Json<SessionResponse> {
    Json(SessionResponse { user, token: None })
}

/// GET /api/entries
pub async fn get_entries(
    State(state): State<AppState>,
    Extension(user): Extension<Identity>,
) -> Json<EntryListResponse> {
    Json(EntryListResponse {
        entries: state.controller.list_entries(&user).await,
    })
}

/// POST /api/entries
///
/// Saves a draft. A draft without an id creates a new entry; with an id
/// it replaces the stored record wholesale.
pub async fn post_entry(
    State(state): State<AppState>,
    Extension(user): Extension<Identity>,
    Json(draft): Json<EntryDraft>,
) -> Result<Json<JournalEntry>, ApiError> {
    let entry = state.controller.save(&user, draft).await?;
    Ok(Json(entry))
}

/// GET /api/entries/{id}
///
/// Returns the entry as an editable draft. An unknown id yields a blank
/// draft dated today, not a 404.
pub async fn get_entry(
    State(state): State<AppState>,
    Extension(user): Extension<Identity>,
    Path(id): Path<String>,
) -> Json<EntryDraft> {
    Json(state.controller.load_entry(&user, Some(&id)).await)
}

/// DELETE /api/entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(user): Extension<Identity>,
    Path(id): Path<String>,
    body: Option<Json<DeleteRequest>>,
) -> Result<StatusCode, ApiError> {
    let confirm = body.map(|Json(b)| b.confirm).unwrap_or(false);
    state.controller.delete(&user, &id, confirm).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/analyze
///
/// Runs AI analysis over a draft and returns it with the analysis
/// fields replaced. Nothing is persisted.
pub async fn post_analyze(
    State(state): State<AppState>,
    Extension(_user): Extension<Identity>,
    Json(draft): Json<EntryDraft>,
) -> Result<Json<EntryDraft>, ApiError> {
    let analyzed = state.controller.analyze(&draft).await?;
    Ok(Json(analyzed))
}

/// GET /api/moods
pub async fn get_moods(
    State(state): State<AppState>,
    Extension(user): Extension<Identity>,
) -> Json<MoodSummaryResponse> {
    let moods = state
        .controller
        .mood_summary(&user)
        .await
        .into_iter()
        .map(|(mood, count)| MoodCount { mood, count })
        .collect();
    Json(MoodSummaryResponse { moods })
}

/// GET /health
///
/// Unauthenticated liveness endpoint for process supervisors.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_deserializes_without_display_name() {
        let json = r#"{"email": "a@example.com", "password": "secret stuff"}"#;
        let req: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "a@example.com");
        assert!(req.display_name.is_empty());
    }

    #[test]
    fn delete_request_defaults_to_unconfirmed() {
        let req: DeleteRequest = serde_json::from_str("{}").unwrap();
        assert!(!req.confirm);
        let req: DeleteRequest = serde_json::from_str(r#"{"confirm": true}"#).unwrap();
        assert!(req.confirm);
    }

    #[test]
    fn session_response_omits_absent_token() {
        let resp = SessionResponse {
            user: Identity {
                id: "u1".to_string(),
                email: "a@example.com".to_string(),
                display_name: "Ada".to_string(),
            },
            token: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("token"));
    }

    #[test]
    fn validation_error_maps_to_422() {
        let response =
            ApiError(JournalError::Validation("too short".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn auth_error_maps_to_401() {
        let response = ApiError(JournalError::Auth("nope".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn storage_error_maps_to_502() {
        let response =
            ApiError(JournalError::storage("disk on fire".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

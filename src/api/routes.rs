//! JSON API route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::server::SharedState;
use crate::auth::{LoginRequest, SessionUser, SignupRequest};
use crate::error::Result;
use crate::site::{self, Destination};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Session as reported by the API
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub user: Option<SessionUser>,
    pub navigation: Vec<NavEntry>,
}

#[derive(Debug, Serialize)]
pub struct NavEntry {
    pub id: Destination,
    pub path: &'static str,
    pub label: &'static str,
}

fn nav_entries(destinations: &[Destination]) -> Vec<NavEntry> {
    destinations
        .iter()
        .map(|d| NavEntry {
            id: *d,
            path: d.path(),
            label: d.label(),
        })
        .collect()
}

fn session_info(user: Option<&SessionUser>) -> SessionInfo {
    SessionInfo {
        authenticated: user.is_some(),
        user: user.cloned(),
        navigation: nav_entries(site::Viewer::from_session(user).navigation()),
    }
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok("healthy"))
}

// Session routes

pub async fn get_session(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(ApiResponse::ok(session_info(state.session.current())))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if state.session.login(&req) {
        let info = session_info(state.session.current());
        (StatusCode::OK, Json(ApiResponse::ok(info))).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::err(
                "Invalid credentials. Please check your username, password, and role.",
            )),
        )
            .into_response()
    }
}

pub async fn signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse> {
    // Validation happens before the session is touched
    let fields = req.validate()?;

    let mut state = state.write().await;
    state.session.signup(fields);
    let info = session_info(state.session.current());
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(info))))
}

pub async fn logout(State(state): State<SharedState>) -> impl IntoResponse {
    let mut state = state.write().await;
    state.session.logout();
    Json(ApiResponse::ok(session_info(None)))
}

// Navigation

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub role: Option<String>,
}

/// Navigation for a role name; no role means logged out
pub async fn navigation(Query(query): Query<NavigationQuery>) -> impl IntoResponse {
    let destinations = site::navigation_for_role_name(query.role.as_deref());
    Json(ApiResponse::ok(nav_entries(destinations)))
}

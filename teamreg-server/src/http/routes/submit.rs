//! Registration submission endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::db::repos::TeamRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{Registration, SubmitFormRequest, TeamId};

/// Path the registration form posts to
pub const SUBMIT_FORM_PATH: &str = "/api/submit-form";

/// Successful submission response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormResponse {
    pub success: bool,
    pub message: &'static str,
    pub team_id: TeamId,
}

/// POST /api/submit-form - validate and store one registration
///
/// Validation happens before any connection is checked out; an invalid
/// payload never opens a transaction.
async fn submit_form(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<SubmitFormRequest>,
) -> Result<Json<SubmitFormResponse>, ApiError> {
    tracing::info!(
        startup = %req.startup_name,
        members = req.team_members.len(),
        "Received registration"
    );

    let registration = Registration::try_from(req)?;

    let team_id = TeamRepo::new(&state.pool)
        .create_with_members(&registration)
        .await?;

    Ok(Json(SubmitFormResponse {
        success: true,
        message: "Form submitted successfully",
        team_id,
    }))
}

/// Submission routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(SUBMIT_FORM_PATH, post(submit_form))
}

//! HTTP Handlers

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use std::sync::Arc;

use crate::application::{EvaluateLoginInput, EvaluateLoginUseCase};
use crate::domain::repository::FlagSource;
use crate::error::{ChallengeError, ChallengeResult};
use crate::presentation::extract::LoginSubmission;
use crate::presentation::page;

/// Shared state for challenge handlers
#[derive(Clone)]
pub struct ChallengeAppState<F>
where
    F: FlagSource + Clone + Send + Sync + 'static,
{
    pub flag_source: Arc<F>,
}

// ============================================================================
// Render
// ============================================================================

/// GET / (and every other non-POST method)
pub async fn render_page() -> ChallengeResult<Html<String>> {
    Ok(Html(page::render(None)?))
}

// ============================================================================
// Evaluate
// ============================================================================

/// POST /
///
/// Accepts urlencoded and multipart bodies; see [`LoginSubmission`].
pub async fn evaluate<F>(
    State(state): State<ChallengeAppState<F>>,
    LoginSubmission(form): LoginSubmission,
) -> ChallengeResult<Html<String>>
where
    F: FlagSource + Clone + Send + Sync + 'static,
{
    let use_case = EvaluateLoginUseCase::new(state.flag_source.clone());
    let outcome = use_case.execute(EvaluateLoginInput::from(form)).await;

    Ok(Html(page::render(Some(&outcome))?))
}

// ============================================================================
// Fallback
// ============================================================================

/// Any path other than the challenge page
pub async fn not_found(uri: Uri) -> ChallengeError {
    ChallengeError::PageNotFound(uri.path().to_string())
}

//! Login Submission Extractor
//!
//! Reads the login form from either `application/x-www-form-urlencoded` or
//! `multipart/form-data`. A body that cannot be read as a form is evaluated
//! as if both fields were missing; only an oversized body is rejected.

use axum::Form;
use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{HeaderMap, StatusCode, header};

use crate::error::{ChallengeError, ChallengeResult};
use crate::presentation::dto::LoginForm;

/// Login form taken from the request body
#[derive(Debug, Clone, Default)]
pub struct LoginSubmission(pub LoginForm);

impl<S> FromRequest<S> for LoginSubmission
where
    S: Send + Sync,
{
    type Rejection = ChallengeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(req.headers()) {
            return match Multipart::from_request(req, state).await {
                Ok(multipart) => read_multipart(multipart).await.map(Self),
                Err(rejection) => {
                    tracing::debug!(reason = %rejection.body_text(), "Unreadable multipart form, using empty fields");
                    Ok(Self::default())
                }
            };
        }

        // Vec of pairs keeps repeated names instead of rejecting them
        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => Ok(Self(pairs.into_iter().collect())),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(ChallengeError::PayloadTooLarge)
            }
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Unreadable form, using empty fields");
                Ok(Self::default())
            }
        }
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

/// Collect the text parts. File parts are not form fields and are skipped.
async fn read_multipart(mut multipart: Multipart) -> ChallengeResult<LoginForm> {
    let mut pairs = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => return multipart_failure(err),
        };

        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match field.text().await {
            Ok(value) => pairs.push((name, value)),
            Err(err) => return multipart_failure(err),
        }
    }

    Ok(pairs.into_iter().collect())
}

fn multipart_failure(err: MultipartError) -> ChallengeResult<LoginForm> {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return Err(ChallengeError::PayloadTooLarge);
    }
    tracing::debug!(reason = %err.body_text(), "Malformed multipart form, using empty fields");
    Ok(LoginForm::default())
}

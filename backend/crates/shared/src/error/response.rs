//! Axum conversions
//!
//! Renders an [`AppError`] as a small standalone HTML document.
//! The service only ever speaks HTML, so there is no JSON body here.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::app_error::AppError;

/// エラーページテンプレート
///
/// `.html` テンプレートなので値は askama が自動でエスケープする。
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    status: u16,
    title: &'a str,
    message: &'a str,
    action: Option<&'a str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match render_error_page(&self) {
            Ok(page) => (status, Html(page)).into_response(),
            Err(_) => (status, self.kind().as_str()).into_response(),
        }
    }
}

/// エラーページの HTML を生成
///
/// 5xx 系は内部の詳細を出さず、理由フレーズだけを表示する。
pub fn render_error_page(err: &AppError) -> askama::Result<String> {
    let kind = err.kind();
    let server_error = kind.is_server_error();

    ErrorPage {
        status: err.status_code(),
        title: kind.as_str(),
        message: if server_error { kind.as_str() } else { err.message() },
        action: if server_error { None } else { err.action() },
    }
    .render()
}

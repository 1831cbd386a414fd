//! Challenge Page
//!
//! The login page template (`templates/login.html`). A result block, when
//! present, is placed inside the container between the form and the hint.

use askama::Template;

use crate::domain::entities::LoginOutcome;

/// Login page
///
/// The flag goes through `|safe`: it is the reward, inserted verbatim.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage<'a> {
    success_flag: Option<&'a str>,
    failed: bool,
}

impl<'a> LoginPage<'a> {
    pub fn new(outcome: Option<&'a LoginOutcome>) -> Self {
        Self {
            success_flag: outcome.and_then(LoginOutcome::flag),
            failed: outcome.is_some_and(|outcome| !outcome.is_success()),
        }
    }
}

/// Render the full page, with the evaluation result if there is one
pub fn render(outcome: Option<&LoginOutcome>) -> askama::Result<String> {
    LoginPage::new(outcome).render()
}

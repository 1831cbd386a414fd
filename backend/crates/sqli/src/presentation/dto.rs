//! Form DTOs

use crate::application::EvaluateLoginInput;

/// Login form submission
///
/// Built from the raw name/value pairs of the body. Missing fields stay
/// empty and a repeated field keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl FromIterator<(String, String)> for LoginForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = LoginForm::default();
        for (name, value) in pairs {
            match name.as_str() {
                "username" => form.username = value,
                "password" => form.password = value,
                _ => {}
            }
        }
        form
    }
}

impl From<LoginForm> for EvaluateLoginInput {
    fn from(form: LoginForm) -> Self {
        EvaluateLoginInput {
            username: form.username,
            password: form.password,
        }
    }
}

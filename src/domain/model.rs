use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 使用者填寫的登入表單，每個欄位都可能是空的
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginForm {
    pub fn new(username: Option<&str>, password: Option<&str>, email: Option<&str>) -> Self {
        Self {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
            email: email.map(str::to_string),
        }
    }
}

/// 三個欄位都已解包的表單；只能由驗證器產生
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidLogin<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
}

impl<'a> ValidLogin<'a> {
    pub(crate) fn new(username: &'a str, password: &'a str, email: &'a str) -> Self {
        Self {
            username,
            password,
            email,
        }
    }

    pub fn username(&self) -> &'a str {
        self.username
    }

    pub fn password(&self) -> &'a str {
        self.password
    }

    pub fn email(&self) -> &'a str {
        self.email
    }
}

impl fmt::Display for ValidLogin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "valid username: {}\nvalid password: {}\nvalid email: {}",
            self.username, self.password, self.email
        )
    }
}

/// 第一個空白欄位；Display 即是顯示給使用者的訊息
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("username field is empty")]
    UsernameEmpty,

    #[error("password is empty")]
    PasswordEmpty,

    #[error("email is empty")]
    EmailEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_message() {
        let login = ValidLogin::new("user1", "password123", "user1@lighthouselabs.ca");
        assert_eq!(
            login.to_string(),
            "valid username: user1\nvalid password: password123\nvalid email: user1@lighthouselabs.ca"
        );
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::UsernameEmpty.to_string(), "username field is empty");
        assert_eq!(FormError::PasswordEmpty.to_string(), "password is empty");
        assert_eq!(FormError::EmailEmpty.to_string(), "email is empty");
    }

    #[test]
    fn test_login_form_missing_keys_deserialize_as_absent() {
        let form: LoginForm = serde_json::from_str(r#"{"email": "user1@x.ca"}"#).unwrap();
        assert_eq!(form, LoginForm::new(None, None, Some("user1@x.ca")));
    }
}

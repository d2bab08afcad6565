//! 登入表單驗證：同一份檢查分別用巢狀分支與提早返回寫成。
//!
//! 兩種寫法都依 username → password → email 的順序檢查，
//! 遇到第一個空白欄位就停止。

use crate::domain::model::{FormError, LoginForm, ValidLogin};
use crate::domain::ports::Console;
use crate::utils::error::Result;

pub type LoginCheck<'a> = std::result::Result<ValidLogin<'a>, FormError>;

/// 巢狀分支寫法
pub fn check_login_nested(form: &LoginForm) -> LoginCheck<'_> {
    if let Some(username) = form.username.as_deref() {
        if let Some(password) = form.password.as_deref() {
            if let Some(email) = form.email.as_deref() {
                Ok(ValidLogin::new(username, password, email))
            } else {
                Err(FormError::EmailEmpty)
            }
        } else {
            Err(FormError::PasswordEmpty)
        }
    } else {
        Err(FormError::UsernameEmpty)
    }
}

/// 提早返回（guard）寫法
pub fn check_login_guarded(form: &LoginForm) -> LoginCheck<'_> {
    let Some(username) = form.username.as_deref() else {
        return Err(FormError::UsernameEmpty);
    };
    let Some(password) = form.password.as_deref() else {
        return Err(FormError::PasswordEmpty);
    };
    let Some(email) = form.email.as_deref() else {
        return Err(FormError::EmailEmpty);
    };

    Ok(ValidLogin::new(username, password, email))
}

pub fn validate_login<C: Console>(console: &mut C, form: &LoginForm) -> Result<()> {
    report(console, check_login_nested(form))
}

pub fn validate_login_guard<C: Console>(console: &mut C, form: &LoginForm) -> Result<()> {
    report(console, check_login_guarded(form))
}

fn report<C: Console>(console: &mut C, check: LoginCheck<'_>) -> Result<()> {
    match check {
        Ok(login) => {
            tracing::debug!("✅ login form passed all checks");
            console.print(&login.to_string())
        }
        Err(e) => {
            tracing::debug!("login form stopped at check: {:?}", e);
            console.print(&e.to_string())
        }
    }
}

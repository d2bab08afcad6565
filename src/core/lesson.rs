use serde::Serialize;
use std::fmt;

/// 可以單獨執行的課程，宣告順序即預設的執行順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Lesson {
    Optionals,
    Filter,
    Login,
    NegativeCheck,
    PositiveCheck,
    Divide,
    Presence,
    Sum,
    LoginGuard,
}

impl Lesson {
    pub const ALL: [Lesson; 9] = [
        Lesson::Optionals,
        Lesson::Filter,
        Lesson::Login,
        Lesson::NegativeCheck,
        Lesson::PositiveCheck,
        Lesson::Divide,
        Lesson::Presence,
        Lesson::Sum,
        Lesson::LoginGuard,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Lesson::Optionals => "optionals",
            Lesson::Filter => "filter",
            Lesson::Login => "login",
            Lesson::NegativeCheck => "negative-check",
            Lesson::PositiveCheck => "positive-check",
            Lesson::Divide => "divide",
            Lesson::Presence => "presence",
            Lesson::Sum => "sum",
            Lesson::LoginGuard => "login-guard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Lesson::Optionals => "Declare, assign, force unwrap and conditionally unwrap a Double",
            Lesson::Filter => "Remove absent entries from a list of optional names",
            Lesson::Login => "Validate a login form with nested branches",
            Lesson::NegativeCheck => "Guard on `my_number < 0`",
            Lesson::PositiveCheck => "Guard on `-my_number > 0`",
            Lesson::Divide => "Integer division that returns 0 for a zero divisor",
            Lesson::Presence => "Guard-let an optional number",
            Lesson::Sum => "Sum an array, guarding against an empty one",
            Lesson::LoginGuard => "Validate a login form with early returns",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// `--list` 輸出的一筆資料
#[derive(Debug, Clone, Serialize)]
pub struct LessonInfo {
    pub id: &'static str,
    pub description: &'static str,
}

pub fn catalog() -> Vec<LessonInfo> {
    Lesson::ALL
        .iter()
        .map(|lesson| LessonInfo {
            id: lesson.id(),
            description: lesson.description(),
        })
        .collect()
}

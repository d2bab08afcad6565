use crate::config::toml_config::PlaygroundConfig;
use crate::core::filter::remove_absent;
use crate::core::lesson::Lesson;
use crate::core::{guards, login, optionals};
use crate::domain::ports::Console;
use crate::utils::error::{PlaygroundError, Result};

/// 依序執行課程，把輸出寫到 console
pub struct Playground<'a, C: Console> {
    config: &'a PlaygroundConfig,
    console: C,
    scenario: Option<String>,
}

impl<'a, C: Console> Playground<'a, C> {
    pub fn new(config: &'a PlaygroundConfig, console: C) -> Self {
        Self {
            config,
            console,
            scenario: None,
        }
    }

    /// 覆蓋配置中的 `login.active`
    pub fn with_scenario(mut self, scenario: Option<String>) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn run(&mut self, lessons: &[Lesson]) -> Result<()> {
        tracing::info!("🚀 Running {} lesson(s)", lessons.len());

        for lesson in lessons {
            self.run_lesson(*lesson)?;
        }

        tracing::info!("✅ All lessons finished");
        Ok(())
    }

    pub fn run_lesson(&mut self, lesson: Lesson) -> Result<()> {
        tracing::debug!("📘 Lesson: {} - {}", lesson, lesson.description());

        let config = self.config;
        let console = &mut self.console;

        match lesson {
            Lesson::Optionals => optionals::run_demo(console, config.optionals.my_double),
            Lesson::Filter => {
                let filtered = remove_absent(&config.filter.values());
                console.print(&format!("{:?}", filtered))
            }
            Lesson::Login => {
                let scenario = config.login.active_scenario(self.scenario.as_deref())?;
                tracing::debug!("login scenario: {}", scenario.name);
                login::validate_login(console, &scenario.form)
            }
            Lesson::NegativeCheck => guards::negative_check(console, config.guards.my_number),
            Lesson::PositiveCheck => {
                let my_number = config.guards.my_number;
                let negated = my_number.checked_neg().ok_or_else(|| {
                    PlaygroundError::InvalidConfigValueError {
                        field: "guards.my_number".to_string(),
                        value: my_number.to_string(),
                        reason: "Value cannot be negated".to_string(),
                    }
                })?;
                guards::positive_check(console, negated)
            }
            Lesson::Divide => {
                for [first_num, second_num] in &config.guards.divide {
                    let quotient = guards::divide_two_numbers(*first_num, *second_num);
                    console.print(&format!("{} / {} = {}", first_num, second_num, quotient))?;
                }
                Ok(())
            }
            Lesson::Presence => {
                guards::report_optional_number(console, config.guards.my_optional_number)
            }
            Lesson::Sum => {
                let sum = guards::add_num_in_array(console, &config.guards.num_array)?;
                console.print(&sum.to_string())
            }
            Lesson::LoginGuard => {
                let scenario = config.login.active_scenario(self.scenario.as_deref())?;
                tracing::debug!("login scenario: {}", scenario.name);
                login::validate_login_guard(console, &scenario.form)
            }
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

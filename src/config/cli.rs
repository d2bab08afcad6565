use crate::core::lesson::Lesson;
pub use crate::utils::logger::LogFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "optional-playground")]
#[command(about = "Walk through optional-value handling: force unwrap, if-let and guard-let")]
pub struct CliConfig {
    /// Path to a TOML scenario file; the built-in playground data is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lesson to run (repeatable); all lessons run in script order when omitted
    #[arg(short, long = "lesson", value_enum)]
    pub lessons: Vec<Lesson>,

    /// Login scenario to validate, overrides `login.active`
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// List the available lessons and exit
    #[arg(long)]
    pub list: bool,

    /// Output format for --list
    #[arg(long, value_enum, default_value = "text")]
    pub format: ListFormat,

    /// Log format written to stderr
    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn lessons_to_run(&self) -> Vec<Lesson> {
        if self.lessons.is_empty() {
            Lesson::ALL.to_vec()
        } else {
            self.lessons.clone()
        }
    }
}

use anyhow::Context;
use clap::Parser;
use optional_playground::config::ListFormat;
use optional_playground::core::lesson;
use optional_playground::utils::{logger, validation::Validate};
use optional_playground::{
    CliConfig, Console, Playground, PlaygroundConfig, PlaygroundError, StdoutConsole,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.log_format, config.verbose);

    tracing::info!("Starting optional-playground");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        let exit_code = match e.downcast_ref::<PlaygroundError>() {
            Some(playground_error) => {
                tracing::error!(
                    "❌ Playground failed: {} (Category: {:?})",
                    playground_error,
                    playground_error.category()
                );
                tracing::error!("💡 Suggestion: {}", playground_error.recovery_suggestion());
                eprintln!("❌ {}", describe_failure(&e, playground_error));
                eprintln!("💡 {}", playground_error.recovery_suggestion());
                playground_error.exit_code()
            }
            None => {
                tracing::error!("❌ Playground failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let mut console = StdoutConsole::new();

    if cli.list {
        return list_lessons(&mut console, cli.format);
    }

    // 載入並驗證配置
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading scenarios from: {}", path.display());
            PlaygroundConfig::from_file(path)
                .with_context(|| format!("failed to load scenario file '{}'", path.display()))?
        }
        None => PlaygroundConfig::default(),
    };
    config.validate()?;

    let lessons = cli.lessons_to_run();
    let mut playground = Playground::new(&config, console).with_scenario(cli.scenario.clone());
    playground.run(&lessons)?;

    Ok(())
}

fn list_lessons<C: Console>(console: &mut C, format: ListFormat) -> anyhow::Result<()> {
    let catalog = lesson::catalog();

    match format {
        ListFormat::Text => {
            for info in &catalog {
                console.print(&format!("{:<16}{}", info.id, info.description))?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&catalog).map_err(PlaygroundError::from)?;
            console.print(&json)?;
        }
    }

    Ok(())
}

/// 使用者看到的錯誤訊息；保留 `with_context` 加上的說明
fn describe_failure(error: &anyhow::Error, playground_error: &PlaygroundError) -> String {
    let friendly = playground_error.user_friendly_message();
    if error.to_string() != playground_error.to_string() {
        format!("{}: {}", error, friendly)
    } else {
        friendly
    }
}

use clap::Parser;
use prompt_ui::app::run;
use prompt_ui::config::LogFormat;
use prompt_ui::utils::error::ErrorSeverity;
use prompt_ui::utils::{logger, validation::Validate};
use prompt_ui::{CliConfig, PromptUiError, TomlConfig};

fn exit_code(e: &PromptUiError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(e: &PromptUiError) {
    tracing::error!(
        "❌ prompt-ui failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

fn main() {
    let cli = CliConfig::parse();

    // Logging has to be up before a config error can be reported, so fall back to "info".
    let config = TomlConfig::load_or_default(cli.config.as_ref());
    let level = config
        .as_ref()
        .map(|c| c.log_level().to_string())
        .unwrap_or_else(|_| "info".to_string());

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, &level),
        LogFormat::Json => logger::init_json_logger(cli.verbose, &level),
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match config.and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    };

    if let Err(e) = cli.validate() {
        report(&e);
        std::process::exit(1);
    }

    match run(&cli, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            report(&e);
            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }
}

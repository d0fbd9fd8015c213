use anyhow::Context;
use clap::Parser;
use swimmers::utils::{logger, validation::Validate};
use swimmers::{CliConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting swimmers CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load roster: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let roster = config.build_roster();
    if roster.is_empty() {
        tracing::warn!("Roster '{}' has no swimmers; nothing to do", roster.name());
        eprintln!("💡 Pass --duck <BREED>, --fish <SPECIES> or --roster <PATH>");
        return Ok(());
    }

    match cli.format {
        OutputFormat::Text => {
            roster
                .swim_all_stdout()
                .context("failed to write swim lines to stdout")?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            roster
                .write_json(&mut handle)
                .context("failed to write roster as JSON")?;
        }
    }

    Ok(())
}

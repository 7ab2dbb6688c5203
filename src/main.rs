use clap::Parser;
use pattern_catalog::utils::logger;
use pattern_catalog::{CatalogEngine, CliConfig, PatternKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.list {
        for kind in PatternKind::ALL {
            println!("{:<24} {}", kind.name(), kind.summary());
        }
        return Ok(());
    }

    let resolved = cli.resolve();

    let (level, json) = match &resolved {
        Ok(config) => (config.log_level.clone(), config.json_logs),
        Err(_) => (None, cli.json_logs),
    };
    if json {
        logger::init_json_logger(cli.verbose, level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, level.as_deref());
    }

    tracing::info!("Starting pattern-catalog");

    let config = match resolved {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    let engine = CatalogEngine::from_config(&config)?;
    let mut stdout = std::io::stdout();

    match engine.run_to(&mut stdout).await {
        Ok(transcripts) => {
            tracing::info!("Ran {} pattern demos", transcripts.len());
        }
        Err(e) => {
            tracing::error!("Catalog run failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());

            let exit_code = e.exit_code();

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

//! CLI entrypoint for Verdict Arena
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use arena_application::{
    ArenaParams, ArenaPorts, ArenaService, AuditLog, JudgingProgress, NoAuditLog, NoProgress,
};
use arena_domain::{CallContext, ParticipantId};
use arena_infrastructure::{
    ConfigLoader, FileConfig, HttpTopicSource, JsonFileStore, JsonlAuditLog, OpenAiCompatGateway,
    OpenAiSettings, Severity, ValidatorPoolRuntime,
};
use arena_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Verdict Arena");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    if cli.command == Command::ShowConfig {
        return show_config(&config, cli.no_config);
    }

    check_config(&config)?;

    // === Dependency Injection ===
    let mut service = ArenaService::load(
        participant_id(&config.arena.host, "arena.host")?,
        build_ports(&config)?,
        ArenaParams::default().with_topic_max_chars(config.topic.max_chars),
    )?;

    let caller = match cli.caller.as_deref() {
        Some(id) => participant_id(id, "--caller")?,
        None => service.state().host().clone(),
    };
    let ctx = CallContext::new(caller, cli.at.unwrap_or_else(chrono::Utc::now));
    info!("Caller {} at {}", ctx.caller, ctx.now.to_rfc3339());

    let result = match &cli.command {
        Command::Open => service.open_round(&ctx).await.map(Some),
        Command::Submit { side, text } => service.submit_argument(&ctx, side, text).map(Some),
        Command::Judge => {
            let progress: Box<dyn JudgingProgress> = if cli.quiet || cli.json {
                Box::new(NoProgress)
            } else {
                Box::new(ProgressReporter::new())
            };
            service
                .judge_all_with_progress(&ctx, progress.as_ref())
                .await
                .map(Some)
        }
        _ => Ok(None),
    };

    let output = match result {
        Ok(Some(message)) if cli.json => {
            ConsoleFormatter::format_json(&serde_json::json!({ "message": message }))
        }
        Ok(Some(message)) => ConsoleFormatter::format_message(&message),
        Ok(None) => render_query(&service, &cli)?,
        Err(e) => {
            if cli.json {
                let json = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", ConsoleFormatter::format_json(&json));
            } else {
                eprint!("{}", ConsoleFormatter::format_error(&e.to_string()));
            }
            std::process::exit(1);
        }
    };

    println!("{}", output);

    Ok(())
}

fn render_query(service: &ArenaService, cli: &Cli) -> Result<String> {
    let output = match &cli.command {
        Command::Leaderboard => {
            let board = service.get_leaderboard();
            if cli.json {
                ConsoleFormatter::format_json(&board)
            } else {
                ConsoleFormatter::format_leaderboard(&board)
            }
        }
        Command::AllTime => {
            let board = service.get_all_time_leaderboard();
            if cli.json {
                ConsoleFormatter::format_json(&board)
            } else {
                ConsoleFormatter::format_lifetime(&board)
            }
        }
        Command::Round => {
            let round = service.get_round_info();
            if cli.json {
                ConsoleFormatter::format_json(&round)
            } else {
                ConsoleFormatter::format_round(&round)
            }
        }
        Command::Score { participant } => {
            let score = service.get_my_score(&participant_id(participant, "participant")?);
            if cli.json {
                ConsoleFormatter::format_json(&score)
            } else {
                ConsoleFormatter::format_player(&score)
            }
        }
        Command::Open | Command::Submit { .. } | Command::Judge | Command::ShowConfig => {
            String::new()
        }
    };
    Ok(output)
}

/// Parse a user-supplied participant id, rejecting blank input.
fn participant_id(raw: &str, what: &str) -> Result<ParticipantId> {
    match ParticipantId::try_new(raw) {
        Some(id) => Ok(id),
        None => bail!("{} cannot be empty", what),
    }
}

fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprint!("{}", ConsoleFormatter::format_error(&issue.message)),
        }
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("invalid configuration");
    }
    Ok(())
}

fn build_ports(config: &FileConfig) -> Result<ArenaPorts> {
    let audit: Arc<dyn AuditLog> = match &config.audit.path {
        Some(path) => match JsonlAuditLog::open(path) {
            Some(log) => Arc::new(log),
            None => {
                warn!("Audit log {} could not be opened, continuing without it", path);
                Arc::new(NoAuditLog)
            }
        },
        None => Arc::new(NoAuditLog),
    };

    let gateway = Arc::new(OpenAiCompatGateway::new(OpenAiSettings {
        base_url: config.oracle.base_url.clone(),
        api_key_env: config.oracle.api_key_env.clone(),
        temperature: config.oracle.temperature,
        max_tokens: config.oracle.max_tokens,
        timeout: Duration::from_secs(config.oracle.timeout_seconds),
    })?);

    let (rule, _) = config.consensus.parse_rule();
    let validators = config.consensus.validator_models(&config.oracle.model);
    info!("Validators: {} ({})", validators.join(", "), rule);

    let runtime = Arc::new(ValidatorPoolRuntime::new(
        gateway.clone(),
        validators,
        rule,
        Arc::clone(&audit),
    ));

    let source = Arc::new(HttpTopicSource::new(
        config.topic.url.clone(),
        Duration::from_secs(config.topic.timeout_seconds),
    )?);

    Ok(ArenaPorts {
        source,
        gateway,
        runtime,
        store: Arc::new(JsonFileStore::new(&config.storage.state_path)),
        audit,
    })
}

fn show_config(config: &FileConfig, no_config: bool) -> Result<()> {
    if no_config {
        println!("Configuration files disabled (--no-config); using built-in defaults.");
    } else {
        for line in ConfigLoader::config_sources() {
            println!("{}", line);
        }
    }
    println!();
    println!("{}", toml::to_string_pretty(config).context("failed to render configuration")?);

    for issue in config.validate() {
        let label = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("# {}: {}", label, issue.message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_trims() {
        assert_eq!(participant_id("  alice ", "participant").unwrap().as_str(), "alice");
    }

    #[test]
    fn test_blank_participant_id_is_an_error() {
        let err = participant_id("   ", "participant").unwrap_err();
        assert_eq!(err.to_string(), "participant cannot be empty");
        assert!(participant_id("", "--caller").is_err());
    }
}

//! CLI entrypoint for Spark Connect
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use spark_application::{CameraPermission, MatchPresenter, SparkController};
use spark_domain::{Severity, SubmissionPolicy, default_candidates};
use spark_infrastructure::{
    ConfigLoader, ConfiguredCamera, JsonlAnswerStore, JsonlFriendStore, RandomMatchStrategy,
    SystemClock,
};
use spark_presentation::{Cli, ConsoleConfig, SparkRepl};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting Spark Connect");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = file_config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration (run with -v for details)");
    }

    let mut config = file_config.to_spark_config();
    if let Some(seed) = cli.seed {
        config.matching.seed = Some(seed);
    }
    if cli.require_complete {
        config.quiz.submission = SubmissionPolicy::RequireComplete;
    }

    let permission = match &cli.camera {
        Some(state) => state
            .parse::<CameraPermission>()
            .map_err(|e| anyhow!("--camera: {}", e))?,
        None => file_config.verification.parse_camera_permission().0,
    };

    // === Dependency Injection ===
    let camera = Arc::new(ConfiguredCamera::new(
        permission,
        file_config.verification.grant_on_request,
    ));
    let strategy = RandomMatchStrategy::from_params(&config.matching);
    let presenter = MatchPresenter::new(Box::new(strategy), default_candidates())?;

    let (tx, rx) = mpsc::unbounded_channel();
    let mut controller =
        SparkController::new(config, presenter, camera, Arc::new(SystemClock), tx);

    let answers_path = cli
        .answers
        .clone()
        .or_else(|| file_config.storage.answers_path());
    if let Some(path) = answers_path {
        match JsonlAnswerStore::new(&path) {
            Some(store) => {
                info!("Storing answers in {}", store.path().display());
                controller = controller.with_answer_store(Arc::new(store));
            }
            None => warn!("Answers will not be stored"),
        }
    }

    let friends_path = cli
        .friends
        .clone()
        .or_else(|| file_config.storage.friends_path());
    if let Some(path) = friends_path {
        match JsonlFriendStore::new(&path) {
            Some(store) => {
                info!("Keeping friends in {}", store.path().display());
                controller = controller.with_friend_store(Arc::new(store));
            }
            None => warn!("Friends will not be stored"),
        }
    }

    let console = ConsoleConfig {
        color: file_config.output.color && !cli.no_color,
        show_progress: file_config.output.show_progress,
        skip_splash: cli.skip_splash,
    };
    console.apply_color();

    let repl = SparkRepl::new(controller, rx).with_config(console);
    match &cli.script {
        Some(path) => repl
            .run_script(path)
            .await
            .with_context(|| format!("Failed to run script {}", path.display()))?,
        None => repl.run_interactive().await?,
    }

    Ok(())
}

/// Install the tracing subscriber. Verbosity picks the level; `log_dir`
/// adds a daily-rolling log file next to stderr output.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "spark-connect.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

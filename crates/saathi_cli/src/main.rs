use anyhow::{Context, Result};
use clap::Parser;
use saathi_core::{Language, SaathiConfig, TemplateStore};
use saathi_engine::{ConversationEngine, EngineOptions, SystemClock};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod repl;

use repl::Repl;

#[derive(Parser, Debug)]
#[command(name = "saathi", author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, env = "SAATHI_CONFIG")]
    config: Option<PathBuf>,

    /// Reply language: english, hindi, spanish, french (or en, hi, es, fr)
    #[arg(short, long)]
    language: Option<Language>,

    /// Seed the reply selector for reproducible conversations
    #[arg(long)]
    seed: Option<u64>,

    /// Answer self-harm phrases with emergency resources
    #[arg(long)]
    crisis_escalation: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_file.as_deref())?;

    let config = resolve_config(&args)?;
    info!(language = %config.session.language, seed = ?config.session.seed, "Starting Saathi");

    let store = Arc::new(TemplateStore::builtin().context("Built-in templates are invalid")?);
    let clock = SystemClock::new(config.display.timestamp_format.clone())
        .context("Invalid [display] timestamp_format")?;
    let options = EngineOptions {
        crisis_escalation: config.safety.crisis_escalation,
    };
    let engine = match config.session.seed {
        Some(seed) => ConversationEngine::with_seed(store, seed),
        None => ConversationEngine::new(store),
    }
    .with_clock(clock)
    .with_options(options);

    Repl::new(engine)
        .with_timestamps(config.display.show_timestamps)
        .run(config.session.language)
}

/// File, then environment, then command-line flags.
fn resolve_config(args: &Args) -> Result<SaathiConfig> {
    let mut config = match &args.config {
        // an explicit, existing file must parse
        Some(path) if path.exists() => SaathiConfig::load(path)?,
        Some(path) => SaathiConfig::load_or_default(path),
        None => match SaathiConfig::default_path() {
            Some(path) => SaathiConfig::load_or_default(path),
            None => SaathiConfig::load_or_default("saathi.toml"),
        },
    };

    if let Some(language) = args.language {
        config.session.language = language;
    }
    if args.seed.is_some() {
        config.session.seed = args.seed;
    }
    if args.crisis_escalation {
        config.safety.crisis_escalation = true;
    }
    Ok(config)
}

/// Logs go to stderr unless `--log-file` is set. The returned guard must
/// live until exit so the file writer flushes.
fn init_tracing(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use indexmap::IndexMap;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use maven_release_history::config::log_path;
use maven_release_history::{Coordinate, HistoryConfig, HistoryResolver, VersionHistory};

#[derive(Parser)]
#[command(name = "maven-release-history")]
#[command(version, about = "Publish dates of every version of a Maven artifact")]
struct Cli {
    /// Artifact coordinate as <groupId>:<artifactId>
    coordinate: Coordinate,

    /// Repository consulted together with Maven Central
    #[arg(short, long, value_name = "URL")]
    repository: Option<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the history as a JSON object
    #[arg(long)]
    json: bool,

    /// Log to a file instead of stderr (defaults to the data directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<Option<PathBuf>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.map(|path| path.unwrap_or_else(log_path));
    let _guard = init_logging(log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => HistoryConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => HistoryConfig::default(),
    };
    if let Some(repository) = cli.repository {
        config.repository_url = repository;
    }

    let resolver = HistoryResolver::from_config(&config)?;
    let history = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(resolver.resolve_history(&cli.coordinate))
        .with_context(|| format!("Failed to resolve history for {}", cli.coordinate))?;

    print_history(&history, cli.json)
}

fn print_history(history: &VersionHistory, json: bool) -> anyhow::Result<()> {
    if json {
        let rendered: IndexMap<&str, String> = history
            .iter()
            .map(|(version, published)| (version.as_str(), published.to_rfc3339()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        for (version, published) in history {
            println!("{}\t{}", version, published.to_rfc3339());
        }
    }

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create {}", directory.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

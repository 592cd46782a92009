use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use na_core::{Error, Result};
use na_inference::models::{create_synthesizer, create_translator};
use na_news::{create_fetcher, handle_analyze, handle_cache, init_logging, list_companies, AnalyzeArgs, CacheCommands};
use na_news::{ManagerConfig, ReportManager};
use na_storage::{create_cache, CacheConfig, DEFAULT_CACHE_DIR};
use na_web::AppState;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HumanDuration(Duration);

fn parse_number(digits: &str) -> std::result::Result<u64, String> {
    digits
        .parse::<u64>()
        .map_err(|_| format!("Invalid number in duration: {}", digits))
}

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if !current_number.is_empty() {
                let num = parse_number(&current_number)?;
                let unit = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    'd' => 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = num
                    .checked_mul(unit)
                    .and_then(|seconds| total_seconds.checked_add(seconds))
                    .ok_or_else(|| format!("Duration too large: {}", s))?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A trailing bare number counts as seconds
        if !current_number.is_empty() {
            total_seconds = total_seconds
                .checked_add(parse_number(&current_number)?)
                .ok_or_else(|| format!("Duration too large: {}", s))?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(name = "na", author, version, about = "Company news sentiment reports", long_about = None)]
pub struct Cli {
    /// Cache backend: file or memory
    #[arg(long, global = true, default_value = "file")]
    storage: String,
    #[arg(long, global = true, env = "NA_CACHE_DIR", default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,
    /// Translation service: google or dummy
    #[arg(long, global = true, default_value = "google")]
    translator: String,
    /// Speech service: google or dummy
    #[arg(long, global = true, default_value = "google")]
    speech: String,
    /// Refetch cached companies older than this (e.g. 30m, 6h, 1d)
    #[arg(long, global = true)]
    cache_max_age: Option<HumanDuration>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch, analyze and report on a company's recent news
    Analyze(AnalyzeArgs),
    /// List the preset companies
    Companies,
    /// Manage the article cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
    /// Serve the report API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

impl Cli {
    async fn build_manager(&self) -> Result<ReportManager> {
        let cache = create_cache(&self.storage, &CacheConfig::new(&self.cache_dir)).await?;
        info!("💾 Cache initialized (using {} at {})", self.storage, self.cache_dir.display());

        let fetcher = create_fetcher("google-news")?;
        let translator = create_translator(&self.translator)?;
        let speech = create_synthesizer(&self.speech)?;
        info!(
            "🧠 Collaborators: {} / {} / {}",
            fetcher.name(),
            translator.name(),
            speech.name()
        );

        let cache_max_age = self
            .cache_max_age
            .map(|d| chrono::Duration::from_std(d.0))
            .transpose()
            .map_err(|e| Error::InvalidRequest(format!("cache max age out of range: {}", e)))?;

        Ok(ReportManager::new(
            cache,
            fetcher,
            translator,
            speech,
            ManagerConfig {
                cache_max_age,
                ..ManagerConfig::default()
            },
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("info");
    let cli = Cli::parse();

    match &cli.command {
        Commands::Companies => list_companies(),
        Commands::Analyze(args) => {
            let manager = cli.build_manager().await?;
            handle_analyze(args.clone(), &manager).await?;
        }
        Commands::Cache { command } => {
            let manager = cli.build_manager().await?;
            handle_cache(command.clone(), &manager).await?;
        }
        Commands::Serve { addr } => {
            let manager = cli.build_manager().await?;
            na_web::serve(*addr, AppState::new(manager)).await?;
        }
    }

    Ok(())
}

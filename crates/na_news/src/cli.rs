use std::path::PathBuf;

use clap::{Args, Subcommand};
use na_core::{LoggingObserver, Result, PRESET_COMPANIES};

use crate::manager::{Language, ReportManager, ReportRequest, DEFAULT_ARTICLES};
use crate::render::{render_text, write_exports};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Company to analyze, e.g. Tesla
    pub company: String,
    /// Number of articles to analyze (5-20)
    #[arg(long, short = 'n', default_value_t = DEFAULT_ARTICLES)]
    pub count: usize,
    /// Always fetch fresh articles instead of using the cache
    #[arg(long)]
    pub no_cache: bool,
    #[arg(long, value_enum, default_value_t = Language::English)]
    pub language: Language,
    /// Write the JSON report (and Hindi audio) into this directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl AnalyzeArgs {
    pub fn request(&self) -> ReportRequest {
        ReportRequest::new(self.company.clone())
            .with_count(self.count)
            .with_cache(!self.no_cache)
            .with_language(self.language)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum CacheCommands {
    /// Remove every cached company
    Clear,
}

pub async fn handle_analyze(args: AnalyzeArgs, manager: &ReportManager) -> Result<()> {
    let outcome = manager.generate(&args.request(), &LoggingObserver).await?;
    println!("{}", render_text(&outcome));

    if let Some(dir) = &args.output_dir {
        for path in write_exports(&outcome, dir).await? {
            println!("📥 Saved {}", path.display());
        }
    }
    Ok(())
}

pub async fn handle_cache(command: CacheCommands, manager: &ReportManager) -> Result<()> {
    match command {
        CacheCommands::Clear => {
            let removed = manager.clear_cache().await?;
            println!("Cache cleared! ({} companies removed)", removed);
        }
    }
    Ok(())
}

pub fn list_companies() {
    println!("Preset companies:");
    for company in PRESET_COMPANIES {
        println!("  {}", company);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        analyze: AnalyzeArgs,
    }

    #[test]
    fn test_analyze_args_defaults() {
        let cli = TestCli::parse_from(["test", "Tesla"]);
        let request = cli.analyze.request();
        assert_eq!(request.company, "Tesla");
        assert_eq!(request.count, DEFAULT_ARTICLES);
        assert!(request.use_cache);
        assert_eq!(request.language, Language::English);
    }

    #[test]
    fn test_analyze_args_flags() {
        let cli = TestCli::parse_from(["test", "Tata Motors", "-n", "15", "--no-cache", "--language", "hindi"]);
        let request = cli.analyze.request();
        assert_eq!(request.company, "Tata Motors");
        assert_eq!(request.count, 15);
        assert!(!request.use_cache);
        assert_eq!(request.language, Language::Hindi);
    }
}

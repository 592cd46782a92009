pub mod cli;
pub mod fetchers;
pub mod logging;
pub mod manager;
pub mod render;

pub use cli::{handle_analyze, handle_cache, list_companies, AnalyzeArgs, CacheCommands};
pub use fetchers::{create_fetcher, GoogleNewsFetcher};
pub use logging::{init_logging, Logger};
pub use manager::{Language, ManagerConfig, ReportManager, ReportOutcome, ReportRequest};
pub use render::{render_text, write_exports};

pub mod prelude {
    pub use super::manager::{Language, ReportManager, ReportOutcome, ReportRequest};
    pub use na_core::{Article, Error, NewsFetcher, Result};
}

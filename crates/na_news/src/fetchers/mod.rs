use std::sync::Arc;

use na_core::{Error, NewsFetcher, Result};

pub mod google_news;

pub use google_news::GoogleNewsFetcher;

pub const AVAILABLE_FETCHERS: &[&str] = &["google-news"];

pub fn create_fetcher(name: &str) -> Result<Arc<dyn NewsFetcher>> {
    match name.to_lowercase().as_str() {
        "google-news" | "google" => Ok(Arc::new(GoogleNewsFetcher::new()?)),
        other => Err(Error::InvalidRequest(format!(
            "unknown news source '{}', expected one of: {}",
            other,
            AVAILABLE_FETCHERS.join(", ")
        ))),
    }
}

/// Common utilities for fetchers
pub(crate) mod utils {
    use na_core::{Error, Result};
    use scraper::{Html, Selector};
    use url::Url;

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::Fetch(format!("Failed to parse URL: {}", e)))
    }

    pub fn extract_texts(document: &Html, selector: &str) -> Result<Vec<String>> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Fetch(format!("Invalid selector: {:?}", e)))?;

        Ok(document
            .select(&selector)
            .map(|el| el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|text| !text.is_empty())
            .collect())
    }

    /// Visible text of an HTML fragment, whitespace collapsed.
    pub fn html_to_text(fragment: &str) -> String {
        let html = Html::parse_fragment(fragment);
        let text = html.root_element().text().collect::<Vec<_>>().join(" ");
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

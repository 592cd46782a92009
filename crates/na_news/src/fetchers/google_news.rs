//! Company news from the Google News RSS search.
//!
//! The feed supplies title, outlet, date and link. Article bodies are taken
//! from the `<p>` text of each linked page when it can be fetched, otherwise
//! from the feed's own description.

use std::fmt;
use std::io::Cursor;
use std::time::Duration;

use async_trait::async_trait;
use feed_rs::parser;
use na_core::{Article, Error, NewsFetcher, Result};
use reqwest::Client;
use scraper::Html;
use tracing::debug;
use url::Url;

use super::utils;

const SEARCH_URL: &str = "https://news.google.com/rss/search";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; NewsAnalyzer/0.1)";
/// Below this many words a scraped page is treated as a consent wall or
/// redirect stub rather than the article.
const MIN_PAGE_WORDS: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FeedItem {
    pub title: String,
    pub source: String,
    pub date: String,
    pub url: String,
    pub description: String,
}

pub struct GoogleNewsFetcher {
    client: Client,
    base_url: String,
    fetch_pages: bool,
}

impl GoogleNewsFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()?,
            base_url: SEARCH_URL.to_string(),
            fetch_pages: true,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use feed descriptions only, skipping one request per article.
    pub fn without_page_fetch(mut self) -> Self {
        self.fetch_pages = false;
        self
    }

    fn search_url(&self, company: &str) -> Result<Url> {
        let query = format!("\"{}\"", company);
        Url::parse_with_params(
            &self.base_url,
            &[("q", query.as_str()), ("hl", "en-US"), ("gl", "US"), ("ceid", "US:en")],
        )
        .map_err(|e| Error::Fetch(format!("Failed to build search URL: {}", e)))
    }

    async fn fetch_feed(&self, company: &str) -> Result<Vec<FeedItem>> {
        let url = self.search_url(company)?;
        debug!("📡 Fetching feed {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("News search failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(Error::Fetch(format!("News search returned status {}", response.status())));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read news feed: {}", e)))?;
        parse_feed(&body)
    }

    async fn fetch_page_text(&self, url: &str) -> Result<String> {
        let url = utils::parse_url(url)?;
        let html = self.client.get(url).send().await?.error_for_status()?.text().await?;
        let document = Html::parse_document(&html);
        let paragraphs = utils::extract_texts(&document, "article p")?;
        let paragraphs = if paragraphs.is_empty() {
            utils::extract_texts(&document, "p")?
        } else {
            paragraphs
        };
        Ok(paragraphs.join("\n\n"))
    }

    async fn article_body(&self, item: &FeedItem) -> String {
        if self.fetch_pages {
            match self.fetch_page_text(&item.url).await {
                Ok(text) if text.split_whitespace().count() >= MIN_PAGE_WORDS => return text,
                Ok(_) => debug!("Page for '{}' had too little text, using feed description", item.title),
                Err(e) => debug!("Could not fetch '{}': {}", item.url, e),
            }
        }
        if item.description.is_empty() {
            item.title.clone()
        } else {
            item.description.clone()
        }
    }
}

impl fmt::Debug for GoogleNewsFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleNewsFetcher")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .field("fetch_pages", &self.fetch_pages)
            .finish()
    }
}

#[async_trait]
impl NewsFetcher for GoogleNewsFetcher {
    fn name(&self) -> &str {
        "Google News"
    }

    async fn fetch(&self, company: &str, count: usize) -> Result<Vec<Article>> {
        let items = self.fetch_feed(company).await?;
        if items.is_empty() {
            return Err(Error::Fetch(format!("No news found for {}", company)));
        }

        let mut articles = Vec::with_capacity(count.min(items.len()));
        for item in items.into_iter().take(count) {
            let content = self.article_body(&item).await;
            articles.push(Article::new(item.title, item.source, item.date, item.url, content));
        }
        Ok(articles)
    }
}

/// Google News titles read "Headline - Outlet".
fn split_source(title: &str) -> (String, Option<String>) {
    match title.rsplit_once(" - ") {
        Some((headline, source)) if !headline.trim().is_empty() && !source.trim().is_empty() => {
            (headline.trim().to_string(), Some(source.trim().to_string()))
        }
        _ => (title.trim().to_string(), None),
    }
}

pub(crate) fn parse_feed(body: &[u8]) -> Result<Vec<FeedItem>> {
    let feed = parser::parse(Cursor::new(body)).map_err(|e| Error::Fetch(format!("Failed to parse news feed: {}", e)))?;

    Ok(feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let url = entry.links.first().map(|link| link.href.clone())?;
            let raw_title = entry.title.map(|t| t.content).unwrap_or_default();
            let (title, outlet) = split_source(&utils::html_to_text(&raw_title));
            if title.is_empty() {
                return None;
            }
            let host = Url::parse(&url).ok().and_then(|u| u.host_str().map(str::to_string));
            let description = entry
                .summary
                .map(|s| utils::html_to_text(&s.content))
                .unwrap_or_default();
            Some(FeedItem {
                title,
                source: outlet.or(host).unwrap_or_else(|| "Unknown".to_string()),
                date: entry
                    .published
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                url,
                description,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>"Tesla" - Google News</title>
    <link>https://news.google.com</link>
    <description>Google News</description>
    <item>
      <title>Tesla deliveries beat estimates - Reuters</title>
      <link>https://news.example.com/tesla-deliveries</link>
      <pubDate>Thu, 02 Jan 2025 14:00:00 GMT</pubDate>
      <description>&lt;a href="https://news.example.com/tesla-deliveries"&gt;Tesla deliveries beat estimates&lt;/a&gt;&amp;nbsp;&amp;nbsp;&lt;font color="#6f6f6f"&gt;Reuters&lt;/font&gt;</description>
    </item>
    <item>
      <title>Recall widens</title>
      <link>https://cars.example.org/recall</link>
    </item>
    <item>
      <title>No link here - Nobody</title>
    </item>
  </channel>
</rss>"##;

    #[test]
    fn test_parse_feed() {
        let items = parse_feed(FEED.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title, "Tesla deliveries beat estimates");
        assert_eq!(items[0].source, "Reuters");
        assert_eq!(items[0].date, "2025-01-02");
        assert_eq!(items[0].url, "https://news.example.com/tesla-deliveries");
        assert_eq!(items[0].description, "Tesla deliveries beat estimates Reuters");

        assert_eq!(items[1].title, "Recall widens");
        assert_eq!(items[1].source, "cars.example.org");
        assert_eq!(items[1].date, "");
        assert_eq!(items[1].description, "");
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(matches!(parse_feed(b"not a feed"), Err(Error::Fetch(_))));
    }

    #[test]
    fn test_split_source() {
        assert_eq!(
            split_source("Apple - Samsung rivalry heats up - The Verge"),
            ("Apple - Samsung rivalry heats up".to_string(), Some("The Verge".to_string()))
        );
        assert_eq!(split_source("Plain headline"), ("Plain headline".to_string(), None));
    }

    #[test]
    fn test_search_url_quotes_company() {
        let fetcher = GoogleNewsFetcher::new().unwrap();
        let url = fetcher.search_url("Tata Motors").unwrap();
        assert!(url.as_str().starts_with(SEARCH_URL));
        assert!(url.query_pairs().any(|(k, v)| k == "q" && v == "\"Tata Motors\""));
        assert!(url.query_pairs().any(|(k, v)| k == "ceid" && v == "US:en"));
    }

    #[tokio::test]
    async fn test_body_falls_back_to_description_then_title() {
        let fetcher = GoogleNewsFetcher::new().unwrap().without_page_fetch();
        let mut item = FeedItem {
            title: "Headline".to_string(),
            source: "Outlet".to_string(),
            date: String::new(),
            url: "https://news.example.com/a".to_string(),
            description: "Feed description.".to_string(),
        };
        assert_eq!(fetcher.article_body(&item).await, "Feed description.");
        item.description.clear();
        assert_eq!(fetcher.article_body(&item).await, "Headline");
    }
}

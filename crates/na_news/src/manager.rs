use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use na_core::models::HINDI;
use na_core::{
    Article, ArticleCache, CacheEntry, ComparativeAnalysis, Error, NewsFetcher, PipelineEvent, ProgressObserver,
    Report, Result, SpeechSynthesizer, Translator,
};
use na_inference::{compare, overall_summary, ArticleAnalyzer};
use serde::{Deserialize, Serialize};

use crate::logging::Logger;

pub const MIN_ARTICLES: usize = 5;
pub const MAX_ARTICLES: usize = 20;
pub const DEFAULT_ARTICLES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            other => Err(Error::InvalidRequest(format!("unsupported language '{}'", other))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("English"),
            Language::Hindi => f.write_str("Hindi"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub company: String,
    pub count: usize,
    pub use_cache: bool,
    pub language: Language,
}

impl ReportRequest {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            count: DEFAULT_ARTICLES,
            use_cache: true,
            language: Language::English,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty() {
            return Err(Error::InvalidRequest("Please select or enter a company name".to_string()));
        }
        if !(MIN_ARTICLES..=MAX_ARTICLES).contains(&self.count) {
            return Err(Error::InvalidRequest(format!(
                "article count must be between {} and {}, got {}",
                MIN_ARTICLES, MAX_ARTICLES, self.count
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ManagerConfig {
    /// Cached entries older than this are refetched.
    pub cache_max_age: Option<chrono::Duration>,
    pub analyzer: na_inference::Config,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub company: String,
    pub language: Language,
    pub articles: Vec<Article>,
    pub analysis: ComparativeAnalysis,
    pub report: Report,
    pub overall_summary: String,
    /// Set for Hindi requests. Holds the English text if translation failed.
    pub hindi_summary: Option<String>,
    /// Hindi article summaries, index-aligned with `articles`.
    pub article_translations: Vec<String>,
    pub translation_failed: bool,
    pub audio: Option<Vec<u8>>,
    pub audio_extension: String,
    pub from_cache: bool,
    pub cached_at: Option<DateTime<Utc>>,
}

pub struct ReportManager {
    cache: Arc<dyn ArticleCache>,
    fetcher: Arc<dyn NewsFetcher>,
    translator: Arc<dyn Translator>,
    speech: Arc<dyn SpeechSynthesizer>,
    analyzer: ArticleAnalyzer,
    config: ManagerConfig,
    logger: Logger,
}

impl fmt::Debug for ReportManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportManager")
            .field("fetcher", &self.fetcher.name())
            .field("translator", &self.translator.name())
            .field("speech", &self.speech.name())
            .field("config", &self.config)
            .finish()
    }
}

impl ReportManager {
    pub fn new(
        cache: Arc<dyn ArticleCache>,
        fetcher: Arc<dyn NewsFetcher>,
        translator: Arc<dyn Translator>,
        speech: Arc<dyn SpeechSynthesizer>,
        config: ManagerConfig,
    ) -> Self {
        Self {
            cache,
            fetcher,
            translator,
            speech,
            analyzer: ArticleAnalyzer::new(config.analyzer.clone()),
            config,
            logger: Logger::new().with_prefix("📰"),
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub async fn clear_cache(&self) -> Result<usize> {
        let removed = self.cache.clear().await?;
        self.logger.info(&format!("🧹 Cleared {} cached companies", removed));
        Ok(removed)
    }

    pub async fn generate(&self, request: &ReportRequest, observer: &dyn ProgressObserver) -> Result<ReportOutcome> {
        request.validate()?;
        let company = request.company.trim();
        let log = self.logger.scoped(format!("[{}]", company));

        let (articles, cached_at) = match self.cached_articles(request, company, observer, &log).await {
            Some(hit) => hit,
            None => (self.fresh_articles(request, company, observer, &log).await?, None),
        };
        let from_cache = cached_at.is_some();

        let analysis = compare(&articles)?;
        let summary = overall_summary(company, &articles, &analysis)?;
        let report = Report::build(company, &articles, &analysis);
        log.info(&format!(
            "📊 {} articles, average sentiment {:.2}",
            articles.len(),
            analysis.average_sentiment_score
        ));

        let mut outcome = ReportOutcome {
            company: company.to_string(),
            language: request.language,
            articles,
            analysis,
            report,
            overall_summary: summary,
            hindi_summary: None,
            article_translations: Vec::new(),
            translation_failed: false,
            audio: None,
            audio_extension: self.speech.extension().to_string(),
            from_cache,
            cached_at,
        };

        if request.language == Language::Hindi {
            self.localize(&mut outcome, observer, &log).await;
        }

        observer.on_event(&PipelineEvent::Completed);
        log.info("✅ Report ready");
        Ok(outcome)
    }

    async fn cached_articles(
        &self,
        request: &ReportRequest,
        company: &str,
        observer: &dyn ProgressObserver,
        log: &Logger,
    ) -> Option<(Vec<Article>, Option<DateTime<Utc>>)> {
        if !request.use_cache {
            return None;
        }
        let entry = self
            .cache
            .load_usable(company, request.count, self.config.cache_max_age)
            .await?;
        let CacheEntry { mut articles, timestamp, .. } = entry;
        articles.truncate(request.count);
        observer.on_event(&PipelineEvent::CacheHit {
            company: company.to_string(),
            articles: articles.len(),
            cached_at: timestamp,
        });
        log.info(&format!("💾 Using {} cached articles from {}", articles.len(), timestamp));
        Some((articles, Some(timestamp)))
    }

    async fn fresh_articles(
        &self,
        request: &ReportRequest,
        company: &str,
        observer: &dyn ProgressObserver,
        log: &Logger,
    ) -> Result<Vec<Article>> {
        observer.on_event(&PipelineEvent::FetchStarted {
            company: company.to_string(),
            count: request.count,
        });
        log.info(&format!("🔎 Fetching {} articles from {}", request.count, self.fetcher.name()));

        let mut articles = self.fetcher.fetch(company, request.count).await.map_err(|e| match e {
            Error::Fetch(_) => e,
            other => Error::Fetch(other.to_string()),
        })?;
        if articles.is_empty() {
            return Err(Error::Fetch(format!("No news articles found for {}", company)));
        }
        articles.truncate(request.count);
        observer.on_event(&PipelineEvent::FetchCompleted { articles: articles.len() });

        log.info(&format!("🧪 Analyzing {} articles", articles.len()));
        self.analyzer.analyze_all(&mut articles, |index, total| {
            observer.on_event(&PipelineEvent::ArticleAnalyzed { index, total });
        });
        let degraded = articles.iter().filter(|a| !a.degraded.is_empty()).count();
        if degraded > 0 {
            log.warn(&format!("⚠️ {} articles fell back to defaults for some fields", degraded));
        }
        observer.on_event(&PipelineEvent::AnalysisCompleted);

        let entry = CacheEntry::new(company, articles.clone());
        match self.cache.save(&entry).await {
            Ok(()) => log.debug("💾 Cache updated"),
            Err(e) => {
                log.warn(&format!("Cache update failed: {}", e));
                observer.on_event(&PipelineEvent::CacheSaveFailed { reason: e.to_string() });
            }
        }
        Ok(articles)
    }

    async fn localize(&self, outcome: &mut ReportOutcome, observer: &dyn ProgressObserver, log: &Logger) {
        observer.on_event(&PipelineEvent::TranslationStarted);
        log.info(&format!("🌐 Translating with {}", self.translator.name()));

        let hindi = match self.translator.translate(&outcome.overall_summary, HINDI).await {
            Ok(text) => text,
            Err(e) => {
                outcome.translation_failed = true;
                observer.on_event(&PipelineEvent::TranslationFailed { reason: e.to_string() });
                outcome.overall_summary.clone()
            }
        };

        let mut translations = Vec::with_capacity(outcome.articles.len());
        for article in &outcome.articles {
            match self.translator.translate(&article.summary, HINDI).await {
                Ok(text) => translations.push(text),
                Err(e) => {
                    log.debug(&format!("Keeping English summary for '{}': {}", article.title, e));
                    outcome.translation_failed = true;
                    translations.push(article.summary.clone());
                }
            }
        }
        outcome.article_translations = translations;

        observer.on_event(&PipelineEvent::SynthesisStarted);
        match self.speech.synthesize(&hindi, HINDI).await {
            Ok(audio) => {
                log.info(&format!("🔊 Synthesized {} bytes of audio", audio.len()));
                outcome.audio = Some(audio);
            }
            Err(e) => observer.on_event(&PipelineEvent::SynthesisFailed { reason: e.to_string() }),
        }
        outcome.hindi_summary = Some(hindi);
    }
}

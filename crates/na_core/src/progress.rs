use std::fmt;

use chrono::{DateTime, Utc};

/// Checkpoints reported by the report pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    CacheHit { company: String, articles: usize, cached_at: DateTime<Utc> },
    FetchStarted { company: String, count: usize },
    FetchCompleted { articles: usize },
    ArticleAnalyzed { index: usize, total: usize },
    AnalysisCompleted,
    CacheSaveFailed { reason: String },
    TranslationStarted,
    TranslationFailed { reason: String },
    SynthesisStarted,
    SynthesisFailed { reason: String },
    Completed,
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineEvent::CacheHit { company, articles, cached_at } => write!(
                f,
                "Using {} cached articles for {} from {}",
                articles,
                company,
                cached_at.format("%Y-%m-%d %H:%M:%S")
            ),
            PipelineEvent::FetchStarted { company, count } => {
                write!(f, "Fetching {} news articles for {}...", count, company)
            }
            PipelineEvent::FetchCompleted { articles } => write!(f, "Fetched {} articles", articles),
            PipelineEvent::ArticleAnalyzed { index, total } => {
                write!(f, "Analyzed article {}/{}", index + 1, total)
            }
            PipelineEvent::AnalysisCompleted => write!(f, "Analysis complete"),
            PipelineEvent::CacheSaveFailed { reason } => write!(f, "Could not update cache: {}", reason),
            PipelineEvent::TranslationStarted => write!(f, "Translating summaries to Hindi..."),
            PipelineEvent::TranslationFailed { reason } => {
                write!(f, "Translation failed, keeping English text: {}", reason)
            }
            PipelineEvent::SynthesisStarted => write!(f, "Generating Hindi audio..."),
            PipelineEvent::SynthesisFailed { reason } => write!(f, "Audio unavailable: {}", reason),
            PipelineEvent::Completed => write!(f, "Report ready"),
        }
    }
}

pub trait ProgressObserver: Send + Sync {
    fn on_event(&self, event: &PipelineEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_event(&self, _event: &PipelineEvent) {}
}

/// Forwards every event to `tracing`, failures at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl ProgressObserver for LoggingObserver {
    fn on_event(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::CacheSaveFailed { .. }
            | PipelineEvent::TranslationFailed { .. }
            | PipelineEvent::SynthesisFailed { .. } => tracing::warn!("{}", event),
            PipelineEvent::ArticleAnalyzed { .. } => tracing::debug!("{}", event),
            _ => tracing::info!("{}", event),
        }
    }
}

impl<F> ProgressObserver for F
where
    F: Fn(&PipelineEvent) + Send + Sync,
{
    fn on_event(&self, event: &PipelineEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_observer_receives_events() {
        let seen = Mutex::new(Vec::new());
        let observer = |event: &PipelineEvent| seen.lock().unwrap().push(event.clone());
        observer.on_event(&PipelineEvent::FetchStarted { company: "Tesla".into(), count: 5 });
        observer.on_event(&PipelineEvent::Completed);
        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1], PipelineEvent::Completed);
    }

    #[test]
    fn test_event_display() {
        let event = PipelineEvent::ArticleAnalyzed { index: 2, total: 10 };
        assert_eq!(event.to_string(), "Analyzed article 3/10");
    }
}

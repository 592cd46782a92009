use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use na_core::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/companies", get(handlers::list_companies))
        .route("/api/report/:company", get(handlers::get_report))
        .route("/api/report/:company/audio", get(handlers::get_audio))
        .route("/api/cache", delete(handlers::clear_cache))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use na_core::{Article, Error, Result};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use na_core::{Article, ArticleCache, NewsFetcher, SpeechSynthesizer};
    use na_inference::models::{DummySpeech, DummyTranslator};
    use na_news::{ManagerConfig, ReportManager};
    use na_storage::MemoryCache;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Debug)]
    struct MockFetcher;

    #[async_trait]
    impl NewsFetcher for MockFetcher {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch(&self, company: &str, count: usize) -> Result<Vec<Article>> {
            Ok((0..count)
                .map(|i| {
                    Article::new(
                        format!("{} headline {}", company, i),
                        "Wire",
                        "2025-02-01",
                        format!("https://x.test/{}", i),
                        format!("{} reported solid quarterly results and upbeat guidance.", company),
                    )
                })
                .collect())
        }
    }

    #[derive(Debug)]
    struct MockSpeech;

    #[async_trait]
    impl SpeechSynthesizer for MockSpeech {
        fn name(&self) -> &str {
            "mock"
        }

        async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>> {
            Ok(b"ID3audio".to_vec())
        }
    }

    async fn app_with(cache: Arc<MemoryCache>, speech: Arc<dyn SpeechSynthesizer>) -> Router {
        let manager = ReportManager::new(
            cache,
            Arc::new(MockFetcher),
            Arc::new(DummyTranslator),
            speech,
            ManagerConfig::default(),
        );
        create_app(AppState::new(manager)).await
    }

    async fn app() -> Router {
        app_with(Arc::new(MemoryCache::new()), Arc::new(MockSpeech)).await
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_list_companies() {
        let (status, body) = send(app().await, Method::GET, "/api/companies").await;
        assert_eq!(status, StatusCode::OK);
        let companies = json(&body);
        assert_eq!(companies[0], "Tesla");
        assert_eq!(companies.as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_get_report() {
        let (status, body) = send(app().await, Method::GET, "/api/report/Apple?count=5").await;
        assert_eq!(status, StatusCode::OK);
        let body = json(&body);
        assert_eq!(body["report"]["Company"], "Apple");
        assert_eq!(body["report"]["Articles"].as_array().unwrap().len(), 5);
        assert_eq!(body["report"]["Audio"], "[Play Hindi Speech]");
        assert!(body["overall_summary"].as_str().unwrap().contains("5 recent news articles about Apple"));
        assert!(body["hindi_summary"].is_null());
        assert_eq!(body["from_cache"], false);
    }

    #[tokio::test]
    async fn test_get_report_in_hindi_reuses_cache() {
        let cache = Arc::new(MemoryCache::new());
        let app = app_with(cache.clone(), Arc::new(MockSpeech)).await;

        let (status, _) = send(app.clone(), Method::GET, "/api/report/Tesla?count=6").await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(app, Method::GET, "/api/report/Tesla?count=5&language=hindi").await;
        assert_eq!(status, StatusCode::OK);

        let body = json(&body);
        assert_eq!(body["from_cache"], true);
        assert!(body["hindi_summary"].is_string());
        assert_eq!(body["article_translations"].as_array().unwrap().len(), 5);
        assert_eq!(body["audio_available"], true);
        assert!(cache.load("tesla").await.is_some());
    }

    #[tokio::test]
    async fn test_invalid_count_is_bad_request() {
        let (status, body) = send(app().await, Method::GET, "/api/report/Tesla?count=50").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json(&body)["error"].as_str().unwrap().contains("between 5 and 20"));
    }

    #[tokio::test]
    async fn test_audio_download() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/report/Infosys/audio?count=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
        assert!(response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("Infosys_summary_hindi.mp3"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ID3audio");
    }

    #[tokio::test]
    async fn test_audio_unavailable() {
        let app = app_with(Arc::new(MemoryCache::new()), Arc::new(DummySpeech)).await;
        let (status, body) = send(app, Method::GET, "/api/report/Tata/audio?count=5").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(json(&body)["error"].as_str().unwrap().contains("no audio"));
    }

    #[tokio::test]
    async fn test_clear_cache() {
        let cache = Arc::new(MemoryCache::new());
        let app = app_with(cache.clone(), Arc::new(MockSpeech)).await;
        send(app.clone(), Method::GET, "/api/report/Google?count=5").await;

        let (status, body) = send(app, Method::DELETE, "/api/cache").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["removed"], 1);
        assert!(cache.load("google").await.is_none());
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use ::common::{ContentConfig, MemoryStore};
use reqwest::Client;
use serde_json::Value;

use server::config::{AppConfig, CorsConfig, LogConfig, ServerConfig};
use server::state::AppState;

pub mod routes {
    pub const BLOG: &str = "/api/blog";
    pub const BLOG_CATEGORIES: &str = "/api/blog/categories";
    pub const PROJECTS: &str = "/api/projects";
    pub const CONTACT: &str = "/api/contact";
    pub const HEALTH: &str = "/health";
    pub const OPENAPI: &str = "/api-docs/openapi.json";

    pub fn article(slug: &str) -> String {
        format!("/api/blog/{slug}")
    }

    pub fn project(slug: &str) -> String {
        format!("/api/projects/{slug}")
    }
}

/// Slugs of the bundled sample content.
pub mod seeded {
    pub const NEWEST_ARTICLE: &str = "neural-network-overfitting-life-lessons";
    pub const OLDER_ARTICLE: &str = "jupyter-notebooks-to-production-survival-guide";
    pub const PROFESSIONAL_PROJECT: &str = "customer-churn-prediction";
    pub const PERSONAL_PROJECT: &str = "ai-music-recommender";
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    /// Spawn a server whose store holds the sample content.
    pub async fn spawn() -> Self {
        Self::spawn_with(true).await
    }

    /// Spawn a server with an empty store.
    pub async fn spawn_empty() -> Self {
        Self::spawn_with(false).await
    }

    async fn spawn_with(seed: bool) -> Self {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec!["*".to_string()],
                    max_age: 3600,
                },
            },
            content: ContentConfig {
                seed_sample_content: seed,
            },
            log: LogConfig {
                level: "info".to_string(),
            },
        };

        let store = MemoryStore::new();
        if seed {
            server::seed::seed_sample_content(&store).expect("Failed to seed sample content");
        }

        let state = AppState {
            store: Arc::new(store),
            config,
        };
        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// Publish an article via the API and return the response body.
    pub async fn create_article(&self, slug: &str, title: &str) -> Value {
        let res = self.post(routes::BLOG, &article_body(slug, title)).await;
        assert_eq!(res.status, 201, "create_article failed: {}", res.text);
        res.body
    }

    /// Add a project via the API and return the response body.
    pub async fn create_project(&self, slug: &str, kind: &str) -> Value {
        let res = self.post(routes::PROJECTS, &project_body(slug, kind)).await;
        assert_eq!(res.status, 201, "create_project failed: {}", res.text);
        res.body
    }
}

pub fn article_body(slug: &str, title: &str) -> Value {
    serde_json::json!({
        "slug": slug,
        "title": title,
        "excerpt": "A short excerpt.",
        "content": "# Heading\n\nBody text.",
        "category": "Engineering",
        "tags": ["rust", "axum"],
        "readTime": "4 min read",
    })
}

pub fn project_body(slug: &str, kind: &str) -> Value {
    serde_json::json!({
        "slug": slug,
        "title": format!("Project {slug}"),
        "description": "Something built on a weekend.",
        "content": "# Write-up",
        "type": kind,
        "status": "working",
        "technologies": ["Rust"],
    })
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    /// Values of `field` across a JSON array body.
    pub fn pluck(&self, field: &str) -> Vec<String> {
        self.body
            .as_array()
            .expect("response body should be an array")
            .iter()
            .map(|item| item[field].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

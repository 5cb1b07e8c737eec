//! HTTP surface tests
//!
//! Drives the full router (routes, extractors, middleware, error envelope)
//! with in-memory ports, so no PostgreSQL or Redis is needed.
//!
//! Run with: cargo test -p like-api --test api_tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use like_api::{create_app, AppState, ReadinessProbe};
use like_common::AppConfig;
use like_core::traits::{
    EventPublisher, LikeActionPage, LikeActionRepository, LikeQuery, RepoResult,
    UserProfileRepository,
};
use like_core::{DomainError, LikeAction, LikeEvent, RequestMethod, TargetId, UserId, UserProfile};
use like_service::ServiceContextBuilder;

// ============================================================================
// In-memory ports
// ============================================================================

#[derive(Default)]
struct MemoryLikes {
    rows: Mutex<HashMap<(UserId, TargetId), LikeAction>>,
}

#[async_trait]
impl LikeActionRepository for MemoryLikes {
    async fn find_by_participants(
        &self,
        user_id: UserId,
        target_id: TargetId,
    ) -> RepoResult<Option<LikeAction>> {
        Ok(self.rows.lock().unwrap().get(&(user_id, target_id)).cloned())
    }

    async fn list_by_target(
        &self,
        target_id: TargetId,
        query: LikeQuery,
    ) -> RepoResult<LikeActionPage> {
        let rows = self.rows.lock().unwrap();
        let matching: Vec<LikeAction> = rows
            .values()
            .filter(|a| a.target_id == target_id && a.is_active())
            .filter(|a| query.mood.is_none_or(|m| a.mood == m))
            .cloned()
            .collect();
        let total = matching.len() as i64;
        Ok(LikeActionPage {
            actions: matching.into_iter().take(query.limit as usize).collect(),
            total,
        })
    }
}

/// Applies accepted events to the store, standing in for the consumer
struct MemoryChannel {
    store: Arc<MemoryLikes>,
    events: Mutex<Vec<LikeEvent>>,
    fail: AtomicBool,
}

#[async_trait]
impl EventPublisher for MemoryChannel {
    async fn publish(&self, _topic: &str, event: &LikeEvent) -> RepoResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::PublishFailed("broker unreachable".into()));
        }
        let action = event.action()?;
        self.store
            .rows
            .lock()
            .unwrap()
            .insert((action.user_id, action.target_id), action);
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

struct MemoryProfiles;

#[async_trait]
impl UserProfileRepository for MemoryProfiles {
    async fn find_profile(&self, user_id: UserId) -> RepoResult<Option<UserProfile>> {
        Ok(Some(UserProfile::new(user_id, format!("user{user_id}"))))
    }
}

struct StubProbe {
    database: bool,
    redis: bool,
}

#[async_trait]
impl ReadinessProbe for StubProbe {
    async fn database_healthy(&self) -> bool {
        self.database
    }

    async fn redis_healthy(&self) -> bool {
        self.redis
    }
}

// ============================================================================
// Helpers
// ============================================================================

struct TestApp {
    router: Router,
    channel: Arc<MemoryChannel>,
}

fn test_config() -> AppConfig {
    let vars: HashMap<&str, &str> = [
        ("API_PORT", "8080"),
        ("DATABASE_URL", "postgres://unused/likes"),
        ("REDIS_URL", "redis://unused:6379"),
    ]
    .into_iter()
    .collect();
    AppConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap()
}

fn test_app_with_probe(probe: StubProbe) -> TestApp {
    let likes = Arc::new(MemoryLikes::default());
    let channel = Arc::new(MemoryChannel {
        store: likes.clone(),
        events: Mutex::new(Vec::new()),
        fail: AtomicBool::new(false),
    });

    let config = test_config();
    let ctx = ServiceContextBuilder::new()
        .like_repo(likes)
        .profile_repo(Arc::new(MemoryProfiles))
        .publisher(channel.clone())
        .topic(config.events.topic.clone())
        .build()
        .unwrap();

    let state = AppState::new(ctx, config, Arc::new(probe));
    TestApp {
        router: create_app(state),
        channel,
    }
}

fn test_app() -> TestApp {
    test_app_with_probe(StubProbe {
        database: true,
        redis: true,
    })
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn form(&self, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    fn methods(&self) -> Vec<RequestMethod> {
        self.channel
            .events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.method().unwrap())
            .collect()
    }
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_unhealthy_redis() {
    let app = test_app_with_probe(StubProbe {
        database: true,
        redis: false,
    });
    let (status, body) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["redis"], "unhealthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = test_app();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Like / Unlike
// ============================================================================

#[tokio::test]
async fn test_like_returns_projection() {
    let app = test_app();

    let (status, body) = app
        .form("POST", "/api/v1/feeds/55/like", "user_id=1001&mood=love")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "1001");
    assert_eq!(body["target_id"], "55");
    assert_eq!(body["mood"], "love");
    assert_eq!(body["deleted"], false);
    assert_eq!(app.methods(), vec![RequestMethod::Add]);
}

#[tokio::test]
async fn test_like_params_from_query_string() {
    let app = test_app();

    let (status, body) = app.form("POST", "/api/v1/feeds/55/like?user_id=1001", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood"], "like");
}

#[tokio::test]
async fn test_form_wins_over_query() {
    let app = test_app();

    let (status, body) = app
        .form("POST", "/api/v1/feeds/55/like?user_id=1001", "user_id=1003")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "1003");
}

#[tokio::test]
async fn test_like_rejects_non_user() {
    let app = test_app();

    let (status, body) = app.form("POST", "/api/v1/feeds/55/like", "user_id=1002").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ACTOR");
    assert!(app.methods().is_empty());
}

#[tokio::test]
async fn test_bad_identifiers_are_invalid_input() {
    let app = test_app();

    let (status, body) = app.form("POST", "/api/v1/feeds/abc/like", "user_id=1001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let (status, body) = app.form("POST", "/api/v1/feeds/55/like", "user_id=x1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let (status, body) = app.form("POST", "/api/v1/feeds/55/like", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_unlike_flow() {
    let app = test_app();

    let (status, body) = app.form("DELETE", "/api/v1/feeds/55/like", "user_id=1001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NO_SUCH_REACTION");

    app.form("POST", "/api/v1/feeds/55/like", "user_id=1001").await;

    let (status, body) = app.form("DELETE", "/api/v1/feeds/55/like", "user_id=1001").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = app.form("DELETE", "/api/v1/feeds/55/like", "user_id=1001").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "ALREADY_DELETED");

    assert_eq!(app.methods(), vec![RequestMethod::Add, RequestMethod::Delete]);
}

#[tokio::test]
async fn test_publish_failure_is_service_unavailable() {
    let app = test_app();
    app.channel.fail.store(true, Ordering::SeqCst);

    let (status, body) = app.form("POST", "/api/v1/feeds/55/like", "user_id=1001").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "PUBLISH_FAILED");
}

// ============================================================================
// Reactors
// ============================================================================

#[tokio::test]
async fn test_list_reactors() {
    let app = test_app();
    app.form("POST", "/api/v1/feeds/55/like", "user_id=1001&mood=love").await;
    app.form("POST", "/api/v1/feeds/55/like", "user_id=1003&mood=sad").await;
    app.form("POST", "/api/v1/feeds/77/like", "user_id=1005").await;

    let (status, body) = app.get("/api/v1/feeds/55/like/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["users"].as_array().unwrap().len(), 2);

    let (status, body) = app
        .form("POST", "/api/v1/feeds/55/like/users", "mood=love")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["users"][0]["id"], "1001");
    assert_eq!(body["users"][0]["nickname"], "user1001");
}

#[tokio::test]
async fn test_list_reactors_rejects_bad_count() {
    let app = test_app();

    let (status, body) = app.get("/api/v1/feeds/55/like/users?count=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

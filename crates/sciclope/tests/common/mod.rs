//! Test utilities and common setup.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use sciclope::api::{self, AppState};
use sciclope::installer::{PageRegistry, WizardController};
use sciclope::session::{MemorySessionStore, SESSION_COOKIE, SessionStore};
use sciclope::startup::Site;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SESSION_TTL_SECS: i64 = 3600;

/// A router over a temporary installation directory.
pub struct TestApp {
    pub router: Router,
    pub site: Site,
    pub store: Arc<MemorySessionStore>,
    /// Keeps the installation directory alive for the test.
    pub dir: TempDir,
}

pub fn new_store(max_sessions: usize) -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::new(
        chrono::Duration::seconds(SESSION_TTL_SECS),
        max_sessions,
    ))
}

/// Create a test application with the given page sequence.
pub fn test_app(pages: &[&str]) -> TestApp {
    test_app_with_store(pages, new_store(64))
}

/// Create a test application that shares `store` with other apps.
pub fn test_app_with_store(pages: &[&str], store: Arc<MemorySessionStore>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let site = Site::new(dir.path().to_path_buf(), "1.0.0-test").unwrap();
    let registry = PageRegistry::from_names(pages).unwrap();
    let wizard = WizardController::new(registry, "1.0.0-test");

    let sessions: Arc<dyn SessionStore> = store.clone();
    let state = AppState::new(site.clone(), wizard, sessions, SESSION_TTL_SECS);

    TestApp {
        router: api::create_router(state),
        site,
        store,
        dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().uri(uri).method(Method::GET);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// GET `uri` with one extra request header and no cookie.
    pub async fn get_with_header(&self, uri: &str, name: &str, value: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .method(Method::GET)
            .header(name, value)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .uri(uri)
            .method(Method::POST)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(form.to_string())).unwrap())
            .await
            .unwrap()
    }
}

/// The `Set-Cookie` header of a response, if any.
pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
}

/// The `name=value` pair of the session cookie, ready to send back.
pub fn session_pair(response: &Response<Body>) -> String {
    let cookie = set_cookie(response).expect("response sets a session cookie");
    let pair = cookie.split(';').next().unwrap().trim().to_string();
    assert!(pair.starts_with(&format!("{SESSION_COOKIE}=")));
    pair
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

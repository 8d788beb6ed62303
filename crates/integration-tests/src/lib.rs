//! Integration tests for Rockets Hub.
//!
//! The full site router (sessions, middleware, templates) is driven
//! in-process with `tower::ServiceExt::oneshot`; no server or network is
//! needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rockets-hub-integration-tests
//! ```

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use rockets_hub_site::{config::SiteConfig, state::AppState};
use tower::ServiceExt;

/// Upper bound on response bodies read by tests.
const BODY_LIMIT: usize = 1024 * 1024;

/// A response with its body collected to a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The cart count shown in the header badge, if the page has one.
    #[must_use]
    pub fn cart_badge(&self) -> Option<u32> {
        let start = self.body.find("id=\"cart-count\">")? + "id=\"cart-count\">".len();
        let rest = self.body.get(start..)?;
        rest.get(..rest.find('<')?)?.trim().parse().ok()
    }

    /// Whether the cart overlay is rendered.
    #[must_use]
    pub fn shows_cart_overlay(&self) -> bool {
        self.body.contains("class=\"cart-overlay\"")
    }

    /// Value of a response header, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// One simulated visitor: the site router plus whatever session cookie the
/// site has handed out so far.
pub struct Visitor {
    app: Router,
    cookie: Option<String>,
}

impl Visitor {
    /// A fresh visitor against a site built from the bundled content.
    ///
    /// # Panics
    ///
    /// Panics if the bundled content fails to load.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let state = AppState::new(SiteConfig::default()).expect("bundled content loads");
        Self {
            app: rockets_hub_site::app(state),
            cookie: None,
        }
    }

    /// Another visitor sharing this one's server (and session store).
    #[must_use]
    pub fn sibling(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// `GET path`.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self.request("GET", path).body(Body::empty());
        self.send(request).await
    }

    /// `POST path` with a url-encoded form body.
    pub async fn post(&mut self, path: &str, form: &str) -> TestResponse {
        let request = self
            .request("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()));
        self.send(request).await
    }

    /// Follow a redirect response with a `GET` of its `location`.
    ///
    /// # Panics
    ///
    /// Panics if the response has no `location` header.
    #[allow(clippy::expect_used)]
    pub async fn follow(&mut self, redirect: &TestResponse) -> TestResponse {
        let location = redirect
            .header("location")
            .expect("redirect has a location")
            .to_string();
        self.get(&location).await
    }

    fn request(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie.as_str()),
            None => builder,
        }
    }

    #[allow(clippy::expect_used)]
    async fn send(&mut self, request: Result<Request<Body>, axum::http::Error>) -> TestResponse {
        let request = request.expect("valid request");
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            let pair = set_cookie.split(';').next().unwrap_or_default();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("body collects");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for Visitor {
    fn default() -> Self {
        Self::new()
    }
}

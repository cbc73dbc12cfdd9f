//! Common test utilities and fixtures for integration tests.
//!
//! The service keeps no state, so every test builds its own server around
//! the stock transliterator.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use answer_backend::{build_router, AppState};

/// Test context wrapping the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a new test context with the default transliterator.
    pub fn new() -> Self {
        Self {
            app: build_router(AppState::default()),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

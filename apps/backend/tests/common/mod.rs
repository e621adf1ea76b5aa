//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wrapping a seeded trainer and the full router
//! - Helper functions for creating request bodies

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use vocab_core::{Direction, Trainer};
use vocab_trainer_backend::{build_router, AppState};

/// Seed used for every test trainer so shuffles are reproducible.
pub const TEST_SEED: u64 = 42;

/// Test context holding the shared state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with an empty vocabulary and source-to-target tests.
    pub fn new() -> Self {
        let trainer = Trainer::with_seed(TEST_SEED).with_direction(Direction::SourceToTarget);
        let state = AppState::new(trainer);
        let app = build_router(state.clone());
        Self { state, app }
    }

    /// Create a context with `content` already loaded.
    pub fn with_words(content: &str) -> Self {
        let ctx = Self::new();
        ctx.state.trainer().expect("trainer lock").load(content);
        ctx
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("test server")
    }

    /// Look up the expected target text for a source word.
    pub fn target_of(&self, source: &str) -> String {
        let trainer = self.state.trainer().expect("trainer lock");
        trainer
            .words()
            .iter()
            .find(|w| w.source_text == source)
            .map(|w| w.target_text.clone())
            .expect("word exists")
    }
}

//! Server dependencies for domain effects (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! effects. The AI service is a trait object so tests can inject a mock.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domains::auth::JwtService;
use crate::kernel::BaseAI;

/// Server dependencies accessible to domain effects
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// AI client for all LLM operations (scoring augmentation, flag detection)
    pub ai: Arc<dyn BaseAI>,
    /// JWT service for token verification
    pub jwt_service: Arc<JwtService>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(db_pool: PgPool, ai: Arc<dyn BaseAI>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            db_pool,
            ai,
            jwt_service,
        }
    }
}

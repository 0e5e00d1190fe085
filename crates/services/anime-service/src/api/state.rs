//! Application state for dependency injection.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::infra::Database;
use crate::service::AnimeService;

/// Application state shared across handlers.
///
/// Handlers extract only the part they need (`State<Arc<dyn AnimeService>>`),
/// so they can be exercised against a mock service without a database.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub anime_service: Arc<dyn AnimeService>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(anime_service: Arc<dyn AnimeService>, database: Arc<Database>) -> Self {
        Self {
            anime_service,
            database,
        }
    }
}

//! Service layer - anime use cases.

mod anime_service;

pub use anime_service::{AnimeManager, AnimeService};

#[cfg(any(test, feature = "test-utils"))]
pub use anime_service::MockAnimeService;

//! Repository layer for data access.

pub mod entities;
mod anime_repository;

pub use anime_repository::{AnimeRepository, AnimeStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use anime_repository::MockAnimeRepository;

//! Anime service - Handles anime-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt, Page, PageRequest};
use domain::{Anime, AnimeId, CreateAnime, ReplaceAnime, ANIME_NOT_FOUND_MESSAGE};

use crate::repository::AnimeRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Anime service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AnimeService: Send + Sync {
    /// List one page of anime
    async fn list_all(&self, request: PageRequest) -> AppResult<Page<Anime>>;

    /// List every anime without paging
    async fn list_all_non_pageable(&self) -> AppResult<Vec<Anime>>;

    /// Get anime by ID, failing with NotFound when absent
    async fn find_by_id_or_throw(&self, id: AnimeId) -> AppResult<Anime>;

    /// Find every anime with exactly this name (may be empty)
    async fn find_by_name(&self, name: String) -> AppResult<Vec<Anime>>;

    /// Create a new anime
    async fn save(&self, request: CreateAnime) -> AppResult<Anime>;

    /// Overwrite the name of an existing anime
    async fn replace(&self, request: ReplaceAnime) -> AppResult<()>;

    /// Delete an existing anime
    async fn delete(&self, id: AnimeId) -> AppResult<()>;
}

/// Concrete implementation of AnimeService using repository.
pub struct AnimeManager {
    repo: Arc<dyn AnimeRepository>,
}

impl AnimeManager {
    /// Create new anime service instance with repository
    pub fn new(repo: Arc<dyn AnimeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AnimeService for AnimeManager {
    async fn list_all(&self, request: PageRequest) -> AppResult<Page<Anime>> {
        tracing::debug!(page = request.page, size = request.size, "Listing anime page");
        self.repo.find_page(&request).await
    }

    async fn list_all_non_pageable(&self) -> AppResult<Vec<Anime>> {
        self.repo.find_all().await
    }

    async fn find_by_id_or_throw(&self, id: AnimeId) -> AppResult<Anime> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(ANIME_NOT_FOUND_MESSAGE)
    }

    async fn find_by_name(&self, name: String) -> AppResult<Vec<Anime>> {
        self.repo.find_by_name(&name).await
    }

    async fn save(&self, request: CreateAnime) -> AppResult<Anime> {
        request.validate()?;

        let anime = self.repo.create(request.name).await?;
        tracing::debug!(id = anime.id, "Anime created");
        Ok(anime)
    }

    async fn replace(&self, request: ReplaceAnime) -> AppResult<()> {
        request.validate()?;

        let mut anime = self.find_by_id_or_throw(request.id).await?;
        anime.rename(request.name);

        self.repo.update(anime).await?;
        tracing::debug!(id = request.id, "Anime replaced");
        Ok(())
    }

    async fn delete(&self, id: AnimeId) -> AppResult<()> {
        self.find_by_id_or_throw(id).await?;

        self.repo.delete(id).await?;
        tracing::debug!(id, "Anime deleted");
        Ok(())
    }
}

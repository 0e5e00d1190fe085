//! Anime repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set, Unchanged,
};

use super::entities::anime::{self, ActiveModel, Entity as AnimeEntity};
use common::{AppError, AppResult, Page, PageRequest, SortDirection};
use domain::{Anime, AnimeId, ANIME_NOT_FOUND_MESSAGE};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Anime repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AnimeRepository: Send + Sync {
    /// Find anime by ID
    async fn find_by_id(&self, id: AnimeId) -> AppResult<Option<Anime>>;

    /// Find every anime whose name equals `name`
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Anime>>;

    /// List all anime, ordered by ID
    async fn find_all(&self) -> AppResult<Vec<Anime>>;

    /// List one page of anime
    async fn find_page(&self, request: &PageRequest) -> AppResult<Page<Anime>>;

    /// Insert a new anime; the database assigns the ID
    async fn create(&self, name: String) -> AppResult<Anime>;

    /// Overwrite an existing anime, keyed by its ID
    async fn update(&self, anime: Anime) -> AppResult<Anime>;

    /// Delete anime by ID
    async fn delete(&self, id: AnimeId) -> AppResult<()>;
}

/// Concrete implementation of AnimeRepository backed by SeaORM
pub struct AnimeStore {
    db: DatabaseConnection,
}

impl AnimeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Apply the requested sort, falling back to ID order.
fn apply_sort(query: Select<AnimeEntity>, request: &PageRequest) -> AppResult<Select<AnimeEntity>> {
    let Some(sort) = request.sort_order()? else {
        return Ok(query.order_by_asc(anime::Column::Id));
    };

    let order = match sort.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    match sort.field.as_str() {
        "id" => Ok(query.order_by(anime::Column::Id, order)),
        // Tie-break on ID so pages stay stable across duplicate names
        "name" => Ok(query
            .order_by(anime::Column::Name, order)
            .order_by_asc(anime::Column::Id)),
        other => Err(AppError::validation(format!(
            "Invalid sort field '{}'. Must be 'id' or 'name'",
            other
        ))),
    }
}

#[async_trait]
impl AnimeRepository for AnimeStore {
    async fn find_by_id(&self, id: AnimeId) -> AppResult<Option<Anime>> {
        let result = AnimeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Anime::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Anime>> {
        let models = AnimeEntity::find()
            .filter(anime::Column::Name.eq(name))
            .order_by_asc(anime::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Anime::from).collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Anime>> {
        let models = AnimeEntity::find()
            .order_by_asc(anime::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Anime::from).collect())
    }

    async fn find_page(&self, request: &PageRequest) -> AppResult<Page<Anime>> {
        let limit = request.limit();
        let offset = request.offset();
        let query = apply_sort(AnimeEntity::find(), request)?;

        let total = query.clone().count(&self.db).await?;

        // Pages past the end never reach the database, so the offset always fits
        if offset >= total {
            return Ok(Page::new(Vec::new(), request.page, limit, total));
        }

        let models = query.offset(offset).limit(limit).all(&self.db).await?;

        Ok(Page::new(
            models.into_iter().map(Anime::from).collect(),
            request.page,
            limit,
            total,
        ))
    }

    async fn create(&self, name: String) -> AppResult<Anime> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Anime::from(model))
    }

    async fn update(&self, anime: Anime) -> AppResult<Anime> {
        let active_model = ActiveModel {
            id: Unchanged(anime.id),
            name: Set(anime.name),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(Anime::from(model)),
            Err(DbErr::RecordNotUpdated) => Err(AppError::not_found(ANIME_NOT_FOUND_MESSAGE)),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: AnimeId) -> AppResult<()> {
        let result = AnimeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ANIME_NOT_FOUND_MESSAGE));
        }

        Ok(())
    }
}

//! Anime handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppResult, Page, PageRequest};
use domain::{Anime, AnimeId, CreateAnime, ReplaceAnime};

use crate::api::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::api::state::AppState;
use crate::service::AnimeService;

/// Anime creation request with validation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AnimePostRequestBody {
    /// Anime title
    #[validate(length(min = 1, message = "The anime name cannot be empty"))]
    #[schema(example = "Naruto")]
    pub name: String,
}

impl From<AnimePostRequestBody> for CreateAnime {
    fn from(body: AnimePostRequestBody) -> Self {
        CreateAnime::new(body.name)
    }
}

/// Anime replacement request with validation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AnimePutRequestBody {
    /// Identifier of the anime to replace
    #[schema(value_type = i32, example = 1)]
    pub id: AnimeId,
    /// New anime title
    #[validate(length(min = 1, message = "The anime name cannot be empty"))]
    #[schema(example = "Naruto Shippuden")]
    pub name: String,
}

impl From<AnimePutRequestBody> for ReplaceAnime {
    fn from(body: AnimePutRequestBody) -> Self {
        ReplaceAnime::new(body.id, body.name)
    }
}

/// Query parameters for lookup by name
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindByNameParams {
    /// Exact anime name to match
    pub name: String,
}

/// Create anime routes
pub fn anime_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(save).put(replace))
        .route("/all", get(list_all))
        .route("/find", get(find_by_name))
        .route("/:id", get(find_by_id).delete(delete))
}

/// List anime, one page at a time
#[utoipa::path(
    get,
    path = "/animes",
    tag = "Anime",
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page index (default 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default 20, max 100)"),
        ("sort" = Option<String>, Query, description = "Sort as `field[,asc|desc]`; field is `id` or `name`")
    ),
    responses(
        (status = 200, description = "Page of anime"),
        (status = 400, description = "Invalid paging or sort parameters")
    )
)]
pub async fn list(
    State(service): State<Arc<dyn AnimeService>>,
    ApiQuery(request): ApiQuery<PageRequest>,
) -> AppResult<Json<Page<Anime>>> {
    Ok(Json(service.list_all(request).await?))
}

/// List every anime without paging
#[utoipa::path(
    get,
    path = "/animes/all",
    tag = "Anime",
    responses(
        (status = 200, description = "All anime", body = Vec<Anime>)
    )
)]
pub async fn list_all(State(service): State<Arc<dyn AnimeService>>) -> AppResult<Json<Vec<Anime>>> {
    Ok(Json(service.list_all_non_pageable().await?))
}

/// Get anime by ID
#[utoipa::path(
    get,
    path = "/animes/{id}",
    tag = "Anime",
    params(
        ("id" = i32, Path, description = "Anime ID")
    ),
    responses(
        (status = 200, description = "Anime found", body = Anime),
        (status = 400, description = "Anime not found")
    )
)]
pub async fn find_by_id(
    State(service): State<Arc<dyn AnimeService>>,
    ApiPath(id): ApiPath<AnimeId>,
) -> AppResult<Json<Anime>> {
    Ok(Json(service.find_by_id_or_throw(id).await?))
}

/// Find anime by exact name
#[utoipa::path(
    get,
    path = "/animes/find",
    tag = "Anime",
    params(FindByNameParams),
    responses(
        (status = 200, description = "Matching anime (possibly empty)", body = Vec<Anime>),
        (status = 400, description = "Missing name parameter")
    )
)]
pub async fn find_by_name(
    State(service): State<Arc<dyn AnimeService>>,
    ApiQuery(params): ApiQuery<FindByNameParams>,
) -> AppResult<Json<Vec<Anime>>> {
    Ok(Json(service.find_by_name(params.name).await?))
}

/// Create a new anime
#[utoipa::path(
    post,
    path = "/animes",
    tag = "Anime",
    request_body = AnimePostRequestBody,
    responses(
        (status = 201, description = "Anime created", body = Anime),
        (status = 400, description = "Validation error")
    )
)]
pub async fn save(
    State(service): State<Arc<dyn AnimeService>>,
    ValidatedJson(payload): ValidatedJson<AnimePostRequestBody>,
) -> AppResult<(StatusCode, Json<Anime>)> {
    let anime = service.save(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(anime)))
}

/// Replace an existing anime
#[utoipa::path(
    put,
    path = "/animes",
    tag = "Anime",
    request_body = AnimePutRequestBody,
    responses(
        (status = 204, description = "Anime replaced"),
        (status = 400, description = "Validation error or anime not found")
    )
)]
pub async fn replace(
    State(service): State<Arc<dyn AnimeService>>,
    ValidatedJson(payload): ValidatedJson<AnimePutRequestBody>,
) -> AppResult<StatusCode> {
    service.replace(payload.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete anime by ID
#[utoipa::path(
    delete,
    path = "/animes/{id}",
    tag = "Anime",
    params(
        ("id" = i32, Path, description = "Anime ID")
    ),
    responses(
        (status = 204, description = "Anime deleted"),
        (status = 400, description = "Anime not found")
    )
)]
pub async fn delete(
    State(service): State<Arc<dyn AnimeService>>,
    ApiPath(id): ApiPath<AnimeId>,
) -> AppResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    use crate::service::MockAnimeService;

    fn create_valid_anime() -> Anime {
        Anime::new(1, "Hellsing")
    }

    /// Mock service answering every call successfully.
    fn mock_service() -> MockAnimeService {
        let mut service = MockAnimeService::new();
        service.expect_list_all().returning(|request| {
            Ok(Page::new(vec![create_valid_anime()], request.page, request.limit(), 1))
        });
        service
            .expect_list_all_non_pageable()
            .returning(|| Ok(vec![create_valid_anime()]));
        service
            .expect_find_by_id_or_throw()
            .returning(|_| Ok(create_valid_anime()));
        service
            .expect_find_by_name()
            .returning(|_| Ok(vec![create_valid_anime()]));
        service.expect_save().returning(|_| Ok(create_valid_anime()));
        service.expect_replace().returning(|_| Ok(()));
        service.expect_delete().returning(|_| Ok(()));
        service
    }

    fn state(service: MockAnimeService) -> State<Arc<dyn AnimeService>> {
        let service: Arc<dyn AnimeService> = Arc::new(service);
        State(service)
    }

    #[tokio::test]
    async fn test_list_returns_anime_inside_page() {
        let Json(page) = list(state(mock_service()), ApiQuery(PageRequest::default()))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, create_valid_anime().name);
    }

    #[tokio::test]
    async fn test_list_all_returns_anime() {
        let Json(animes) = list_all(state(mock_service())).await.unwrap();

        assert_eq!(animes.len(), 1);
        assert_eq!(animes[0].name, create_valid_anime().name);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_anime() {
        let Json(anime) = find_by_id(state(mock_service()), ApiPath(1)).await.unwrap();

        assert_eq!(anime.id, create_valid_anime().id);
    }

    #[tokio::test]
    async fn test_find_by_id_propagates_not_found() {
        let mut service = MockAnimeService::new();
        service
            .expect_find_by_id_or_throw()
            .returning(|_| Err(AppError::not_found("Anime not Found")));

        let result = find_by_id(state(service), ApiPath(99)).await;

        let err = result.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_find_by_name_returns_anime() {
        let params = FindByNameParams {
            name: "anime".to_string(),
        };
        let Json(animes) = find_by_name(state(mock_service()), ApiQuery(params))
            .await
            .unwrap();

        assert_eq!(animes.len(), 1);
        assert_eq!(animes[0].name, create_valid_anime().name);
    }

    #[tokio::test]
    async fn test_find_by_name_returns_empty_list_when_not_found() {
        let mut service = MockAnimeService::new();
        service.expect_find_by_name().returning(|_| Ok(vec![]));

        let params = FindByNameParams {
            name: "anime".to_string(),
        };
        let Json(animes) = find_by_name(state(service), ApiQuery(params)).await.unwrap();

        assert!(animes.is_empty());
    }

    #[tokio::test]
    async fn test_save_returns_created_anime() {
        let body = AnimePostRequestBody {
            name: "Hellsing".to_string(),
        };
        let (status, Json(anime)) = save(state(mock_service()), ValidatedJson(body))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(anime, create_valid_anime());
    }

    #[tokio::test]
    async fn test_replace_returns_no_content() {
        let body = AnimePutRequestBody {
            id: 1,
            name: "Hellsing 2".to_string(),
        };
        let status = replace(state(mock_service()), ValidatedJson(body))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_returns_no_content() {
        let status = delete(state(mock_service()), ApiPath(1)).await.unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_request_body_validation() {
        let empty = AnimePostRequestBody {
            name: String::new(),
        };
        assert!(empty.validate().is_err());

        let valid = AnimePutRequestBody {
            id: 1,
            name: "Naruto".to_string(),
        };
        assert!(valid.validate().is_ok());
    }
}

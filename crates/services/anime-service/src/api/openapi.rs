//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::anime_handler::{AnimePostRequestBody, AnimePutRequestBody};
use domain::Anime;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::anime_handler::list,
        crate::api::handlers::anime_handler::list_all,
        crate::api::handlers::anime_handler::find_by_id,
        crate::api::handlers::anime_handler::find_by_name,
        crate::api::handlers::anime_handler::save,
        crate::api::handlers::anime_handler::replace,
        crate::api::handlers::anime_handler::delete,
    ),
    components(
        schemas(
            Anime,
            AnimePostRequestBody,
            AnimePutRequestBody,
        )
    ),
    tags(
        (name = "Anime", description = "Anime catalog endpoints"),
    )
)]
pub struct ApiDoc;

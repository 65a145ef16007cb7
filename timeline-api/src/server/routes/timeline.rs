use crate::server::{Result, ServerError, ServerRouter, json::Json, query::Query};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use serde::Deserialize;
use std::sync::Arc;
use timeline_common::{
    model::{
        Id, author::AuthorMarker, page::CursoredPostList, post::PostMarker,
        response::ApiResponse,
    },
    timeline::{PageLimit, PostSource, TimelineFilter, fetch_page},
};

pub fn routes<S>() -> ServerRouter<S>
where
    S: PostSource + Send + Sync + 'static,
{
    ServerRouter::new()
        .typed_get(get_timeline::<S>)
        .typed_get(get_author_timeline::<S>)
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
struct PageQuery {
    cursor: Option<Id<PostMarker>>,
    limit: Option<PageLimit>,
}

#[derive(TypedPath)]
#[typed_path("/timeline")]
struct TimelinePath;

async fn get_timeline<S>(
    TimelinePath: TimelinePath,
    State(source): State<Arc<S>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<CursoredPostList>>>
where
    S: PostSource + Send + Sync + 'static,
{
    page(&*source, TimelineFilter::Global, query).await
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/authors/{id}/timeline", rejection(ServerError))]
struct AuthorTimelinePath {
    id: Id<AuthorMarker>,
}

/// Unknown authors get an empty timeline rather than a 404.
async fn get_author_timeline<S>(
    AuthorTimelinePath { id }: AuthorTimelinePath,
    State(source): State<Arc<S>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<CursoredPostList>>>
where
    S: PostSource + Send + Sync + 'static,
{
    page(&*source, TimelineFilter::ByAuthor(id), query).await
}

async fn page<S: PostSource>(
    source: &S,
    filter: TimelineFilter,
    PageQuery { cursor, limit }: PageQuery,
) -> Result<Json<ApiResponse<CursoredPostList>>> {
    let page = fetch_page(source, filter, cursor, limit.unwrap_or_default())
        .await
        .map_err(ServerError::source_unavailable)?;

    Ok(Json(ApiResponse::ok(page)))
}

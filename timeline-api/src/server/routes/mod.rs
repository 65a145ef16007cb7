use crate::server::ServerRouter;
use axum::Router;
use timeline_common::timeline::PostSource;

mod timeline;

pub fn routes<S>() -> ServerRouter<S>
where
    S: PostSource + Send + Sync + 'static,
{
    Router::new().merge(timeline::routes())
}

use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{PathRejection, QueryRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use json::Json;
use std::{error::Error as StdError, sync::Arc};
use thiserror::Error;
use timeline_common::{model::response::ApiResponse, timeline::PostSource};
use tracing::error;

mod json;
mod query;
mod routes;

pub type ServerRouter<S> = Router<ServerState<S>>;

pub struct ServerState<S> {
    pub source: Arc<S>,
}

impl<S> ServerState<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

impl<S> Clone for ServerState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> FromRef<ServerState<S>> for Arc<S> {
    fn from_ref(state: &ServerState<S>) -> Self {
        Arc::clone(&state.source)
    }
}

pub fn routes<S>() -> ServerRouter<S>
where
    S: PostSource + Send + Sync + 'static,
{
    routes::routes().fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Query rejected: {0}")]
    QueryRejection(#[from] QueryRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error("Post source unavailable: {0}")]
    SourceUnavailable(Box<dyn StdError + Send + Sync>),
}

impl ServerError {
    pub fn source_unavailable(error: impl StdError + Send + Sync + 'static) -> Self {
        ServerError::SourceUnavailable(Box::new(error))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_) | ServerError::PathRejection(_) => StatusCode::NOT_FOUND,
            ServerError::QueryRejection(_) => StatusCode::BAD_REQUEST,
            ServerError::JsonResponse(_) | ServerError::SourceUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        let error_response = ApiResponse::error(
            status.as_u16(),
            status.canonical_reason().map(str::to_owned),
        );
        (status, Json(error_response)).into_response()
    }
}

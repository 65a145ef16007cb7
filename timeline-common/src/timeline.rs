//! Cursor pagination over a post stream ordered by descending post id.
//!
//! A page is built from a window of `limit + 1` rows. When the window comes back full, its last
//! row is not returned: its id becomes the next cursor, and because cursors are inclusive upper
//! bounds that row opens the following page. Posts created between two requests get larger ids
//! and never enter a window whose cursor is already fixed.

use crate::model::{
    Id,
    author::AuthorMarker,
    page::CursoredPostList,
    post::{Post, PostMarker},
};
use serde::Deserialize;
use std::{error::Error, future::Future};
use tracing::debug;

pub const MAX_PAGE_SIZE: u8 = 25;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum TimelineFilter {
    #[default]
    Global,
    ByAuthor(Id<AuthorMarker>),
}

impl TimelineFilter {
    #[must_use]
    pub fn author(self) -> Option<Id<AuthorMarker>> {
        match self {
            TimelineFilter::Global => None,
            TimelineFilter::ByAuthor(author_id) => Some(author_id),
        }
    }

    #[must_use]
    pub fn matches(self, post: &Post) -> bool {
        self.author()
            .is_none_or(|author_id| post.author_id() == author_id)
    }
}

/// Requested page size, clamped into `0..=MAX_PAGE_SIZE`.
///
/// Out of range requests are normalized rather than rejected.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Deserialize)]
#[serde(from = "i64")]
pub struct PageLimit(u8);

impl PageLimit {
    #[must_use]
    pub fn clamped(requested: i64) -> Self {
        let clamped = requested.clamp(0, i64::from(MAX_PAGE_SIZE));
        Self(u8::try_from(clamped).unwrap_or(MAX_PAGE_SIZE))
    }

    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Rows to fetch for one page: the page itself plus the sentinel row.
    #[must_use]
    pub fn window(self) -> usize {
        self.get() + 1
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self(MAX_PAGE_SIZE)
    }
}

impl From<i64> for PageLimit {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

/// Read access to posts ordered by descending id.
pub trait PostSource {
    type Error: Error + Send + Sync + 'static;

    /// Returns at most `max_rows` posts matching `filter`, by descending id, restricted to
    /// `id <= cursor` when a cursor is given.
    fn query_posts(
        &self,
        filter: TimelineFilter,
        cursor: Option<Id<PostMarker>>,
        max_rows: usize,
    ) -> impl Future<Output = Result<Vec<Post>, Self::Error>> + Send;

    fn count_posts(
        &self,
        filter: TimelineFilter,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}

/// Fetches the page of the `filter` timeline that starts at `cursor`, or at the most recent post
/// when there is no cursor.
///
/// Errors of the source are returned as they are. A page is only returned if both the window and
/// the count query succeeded.
pub async fn fetch_page<S: PostSource>(
    source: &S,
    filter: TimelineFilter,
    cursor: Option<Id<PostMarker>>,
    limit: PageLimit,
) -> Result<CursoredPostList, S::Error> {
    let window = limit.window();

    let mut content = source.query_posts(filter, cursor, window).await?;
    content.truncate(window);

    let next_cursor = if content.len() == window {
        content.pop().map(|sentinel| sentinel.id)
    } else {
        None
    };

    let total_size = source.count_posts(filter).await?;

    debug!(
        ?filter,
        ?cursor,
        limit = limit.get(),
        size = content.len(),
        total_size,
        ?next_cursor,
        "Fetched timeline page"
    );

    Ok(CursoredPostList {
        size: content.len(),
        total_size,
        next_cursor,
        content,
    })
}

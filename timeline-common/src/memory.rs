//! In-process [`PostSource`] holding its posts in memory.

use crate::{
    model::{
        Id,
        post::{Post, PostMarker},
    },
    timeline::{PostSource, TimelineFilter},
};
use std::{
    collections::BTreeMap,
    convert::Infallible,
    ops::Bound,
    sync::{PoisonError, RwLock, RwLockReadGuard},
};

#[derive(Debug, Default)]
pub struct MemoryPostSource {
    posts: RwLock<BTreeMap<Id<PostMarker>, Post>>,
}

impl MemoryPostSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `post`, returning the post previously stored under the same id.
    pub fn insert(&self, post: Post) -> Option<Post> {
        self.posts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(post.id, post)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<Id<PostMarker>, Post>> {
        self.posts.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FromIterator<Post> for MemoryPostSource {
    fn from_iter<T: IntoIterator<Item = Post>>(iter: T) -> Self {
        let posts = iter.into_iter().map(|post| (post.id, post)).collect();

        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl PostSource for MemoryPostSource {
    type Error = Infallible;

    async fn query_posts(
        &self,
        filter: TimelineFilter,
        cursor: Option<Id<PostMarker>>,
        max_rows: usize,
    ) -> Result<Vec<Post>, Self::Error> {
        let upper = cursor.map_or(Bound::Unbounded, Bound::Included);

        let posts = self
            .read()
            .range((Bound::Unbounded, upper))
            .rev()
            .map(|(_, post)| post)
            .filter(|post| filter.matches(post))
            .take(max_rows)
            .cloned()
            .collect();

        Ok(posts)
    }

    async fn count_posts(&self, filter: TimelineFilter) -> Result<u64, Self::Error> {
        let count = self
            .read()
            .values()
            .filter(|post| filter.matches(post))
            .count();

        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }
}

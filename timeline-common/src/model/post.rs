use crate::model::{
    Id, IdMarker, ImageMarker,
    author::{Author, AuthorMarker},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;
impl IdMarker for PostMarker {
    type Repr = i64;
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct ChallengeMarker;
impl IdMarker for ChallengeMarker {
    type Repr = Uuid;
}

/// A published post.
///
/// Post ids grow strictly with creation order and are never reused, which is the only ordering
/// the timeline relies on. `published_at` is informational.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub author: Author,
    pub challenge_id: Id<ChallengeMarker>,
    pub content: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    pub image_id: Id<ImageMarker>,
}

impl Post {
    #[must_use]
    pub fn author_id(&self) -> Id<AuthorMarker> {
        self.author.id
    }
}

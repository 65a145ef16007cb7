use sqlx::FromRow;
use time::OffsetDateTime;
use timeline_common::model::{author::Author, post::Post};
use uuid::Uuid;

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct TimelinePostRecord {
    pub post_id: i64,
    pub challenge_id: Uuid,
    pub content: Option<String>,
    pub published_at: OffsetDateTime,
    pub image_id: i64,
    pub author_id: Uuid,
    pub pseudo: String,
    pub avatar_id: Option<i64>,
}

impl From<TimelinePostRecord> for Post {
    fn from(value: TimelinePostRecord) -> Self {
        Self {
            id: value.post_id.into(),
            author: Author {
                id: value.author_id.into(),
                pseudo: value.pseudo,
                avatar_id: value.avatar_id.map(Into::into),
            },
            challenge_id: value.challenge_id.into(),
            content: value.content,
            published_at: value.published_at,
            image_id: value.image_id.into(),
        }
    }
}

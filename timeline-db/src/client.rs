use crate::record::TimelinePostRecord;
use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions, query_as, query_scalar};
use thiserror::Error;
use timeline_common::{
    model::{
        Id,
        post::{Post, PostMarker},
    },
    timeline::{PostSource, TimelineFilter},
};
use tracing::debug;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Running migrations failed: {0}")]
    Migrate(#[from] MigrateError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[derive(Clone, Debug)]
pub struct DbClient {
    pool: PgPool,
}

impl DbClient {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        debug!("Database migrations applied");

        Ok(())
    }

    pub async fn fetch_posts(
        &self,
        filter: TimelineFilter,
        cursor: Option<Id<PostMarker>>,
        max_rows: usize,
    ) -> Result<Vec<Post>> {
        let records = query_as::<_, TimelinePostRecord>(
            "
            SELECT
                posts.post_id,
                posts.challenge_id,
                posts.content,
                posts.published_at,
                posts.image_id,
                authors.author_id,
                authors.pseudo,
                authors.avatar_id
            FROM
                timeline.posts JOIN timeline.authors USING (author_id)
            WHERE
                ($1::uuid IS NULL OR posts.author_id = $1)
                AND ($2::bigint IS NULL OR posts.post_id <= $2)
            ORDER BY
                posts.post_id DESC
            LIMIT $3
            ",
        )
        .bind(filter.author().map(Id::get))
        .bind(cursor.map(Id::get))
        .bind(i64::try_from(max_rows).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Post::from).collect())
    }

    pub async fn fetch_post_count(&self, filter: TimelineFilter) -> Result<u64> {
        let count: i64 = query_scalar(
            "
            SELECT
                COUNT(*)
            FROM
                timeline.posts
            WHERE
                $1::uuid IS NULL OR posts.author_id = $1
            ",
        )
        .bind(filter.author().map(Id::get))
        .fetch_one(&self.pool)
        .await?;

        Ok(count.cast_unsigned())
    }
}

impl PostSource for DbClient {
    type Error = DbError;

    async fn query_posts(
        &self,
        filter: TimelineFilter,
        cursor: Option<Id<PostMarker>>,
        max_rows: usize,
    ) -> Result<Vec<Post>> {
        self.fetch_posts(filter, cursor, max_rows).await
    }

    async fn count_posts(&self, filter: TimelineFilter) -> Result<u64> {
        self.fetch_post_count(filter).await
    }
}

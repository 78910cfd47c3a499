use super::model::{NewShow, Role, Show, ShowLink, ShowListing};
use crate::infrastructure::db::store::{StoreError, StoreResult};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct ShowRepository;

impl ShowRepository {
    pub async fn create(pool: &PgPool, show: NewShow) -> StoreResult<Show> {
        let result = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (start_time, artist_id, venue_id)
            VALUES ($1, $2, $3)
            RETURNING id, start_time, artist_id, venue_id
            "#,
        )
        .bind(show.start_time)
        .bind(show.artist_id)
        .bind(show.venue_id)
        .fetch_one(pool)
        .await;

        result.map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                match db.constraint() {
                    Some(c) if c.contains("artist") => StoreError::MissingReference("Artist"),
                    _ => StoreError::MissingReference("Venue"),
                }
            }
            other => StoreError::Database(other),
        })
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> StoreResult<Option<Show>> {
        let show = sqlx::query_as::<_, Show>(
            "SELECT id, start_time, artist_id, venue_id FROM shows WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(show)
    }

    pub async fn find_all(pool: &PgPool) -> StoreResult<Vec<ShowListing>> {
        let shows = sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT s.id,
                   v.id AS venue_id,
                   v.name AS venue_name,
                   a.id AS artist_id,
                   a.name AS artist_name,
                   a.image_link AS artist_image_link,
                   s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            JOIN artists a ON a.id = s.artist_id
            ORDER BY s.start_time ASC, s.id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(shows)
    }

    pub async fn find_for(pool: &PgPool, role: Role, id: Uuid) -> StoreResult<Vec<ShowLink>> {
        let sql = match role {
            Role::Venue => {
                r#"
                SELECT s.id AS show_id,
                       a.id AS counterpart_id,
                       a.name AS counterpart_name,
                       a.image_link AS counterpart_image_link,
                       s.start_time
                FROM shows s
                JOIN artists a ON a.id = s.artist_id
                WHERE s.venue_id = $1
                ORDER BY s.start_time ASC, s.id ASC
                "#
            }
            Role::Artist => {
                r#"
                SELECT s.id AS show_id,
                       v.id AS counterpart_id,
                       v.name AS counterpart_name,
                       v.image_link AS counterpart_image_link,
                       s.start_time
                FROM shows s
                JOIN venues v ON v.id = s.venue_id
                WHERE s.artist_id = $1
                ORDER BY s.start_time ASC, s.id ASC
                "#
            }
        };

        let links = sqlx::query_as::<_, ShowLink>(sql)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(links)
    }

    pub async fn count_upcoming(
        pool: &PgPool,
        role: Role,
        id: Uuid,
        now: OffsetDateTime,
    ) -> StoreResult<i64> {
        let sql = match role {
            Role::Venue => "SELECT COUNT(*) FROM shows WHERE venue_id = $1 AND start_time >= $2",
            Role::Artist => "SELECT COUNT(*) FROM shows WHERE artist_id = $1 AND start_time >= $2",
        };

        let count = sqlx::query_scalar::<_, i64>(sql)
            .bind(id)
            .bind(now)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

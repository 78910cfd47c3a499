use super::model::{Venue, VenueFields};
use crate::infrastructure::db::store::StoreResult;
use crate::modules::show::model::NamedEntity;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VenueRepository;

impl VenueRepository {
    pub async fn create(pool: &PgPool, f: VenueFields) -> StoreResult<Venue> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (name, city, state, address, phone, genres, image_link,
                                facebook_link, website, seeking_talent, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, city, state, address, phone, genres, image_link,
                      facebook_link, website, seeking_talent, seeking_description
            "#,
        )
        .bind(f.name)
        .bind(f.city)
        .bind(f.state)
        .bind(f.address)
        .bind(f.phone)
        .bind(f.genres)
        .bind(f.image_link)
        .bind(f.facebook_link)
        .bind(f.website)
        .bind(f.seeking_talent)
        .bind(f.seeking_description)
        .fetch_one(pool)
        .await?;

        Ok(venue)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> StoreResult<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, city, state, address, phone, genres, image_link,
                   facebook_link, website, seeking_talent, seeking_description
            FROM venues
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(venue)
    }

    pub async fn find_all(pool: &PgPool) -> StoreResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, city, state, address, phone, genres, image_link,
                   facebook_link, website, seeking_talent, seeking_description
            FROM venues
            ORDER BY LOWER(name) ASC, name ASC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(venues)
    }

    /// Overwrites every column in one statement.
    pub async fn update(pool: &PgPool, id: Uuid, f: VenueFields) -> StoreResult<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            UPDATE venues
            SET
                name = $1,
                city = $2,
                state = $3,
                address = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website = $9,
                seeking_talent = $10,
                seeking_description = $11
            WHERE id = $12
            RETURNING id, name, city, state, address, phone, genres, image_link,
                      facebook_link, website, seeking_talent, seeking_description
            "#,
        )
        .bind(f.name)
        .bind(f.city)
        .bind(f.state)
        .bind(f.address)
        .bind(f.phone)
        .bind(f.genres)
        .bind(f.image_link)
        .bind(f.facebook_link)
        .bind(f.website)
        .bind(f.seeking_talent)
        .bind(f.seeking_description)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(venue)
    }

    /// Shows at the venue go with it (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn search(pool: &PgPool, pattern: &str) -> StoreResult<Vec<NamedEntity>> {
        let rows = sqlx::query_as::<_, NamedEntity>(
            r#"
            SELECT id, name
            FROM venues
            WHERE name ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY LOWER(name) ASC, name ASC, id ASC
            "#,
        )
        .bind(pattern)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

use super::model::{Artist, ArtistFields};
use crate::infrastructure::db::store::StoreResult;
use crate::modules::show::model::NamedEntity;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ArtistRepository;

impl ArtistRepository {
    pub async fn create(pool: &PgPool, f: ArtistFields) -> StoreResult<Artist> {
        let artist = sqlx::query_as::<_, Artist>(
            r#"
            INSERT INTO artists (name, city, state, phone, genres, image_link,
                                 facebook_link, website, seeking_venue, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, name, city, state, phone, genres, image_link,
                      facebook_link, website, seeking_venue, seeking_description
            "#,
        )
        .bind(f.name)
        .bind(f.city)
        .bind(f.state)
        .bind(f.phone)
        .bind(f.genres)
        .bind(f.image_link)
        .bind(f.facebook_link)
        .bind(f.website)
        .bind(f.seeking_venue)
        .bind(f.seeking_description)
        .fetch_one(pool)
        .await?;

        Ok(artist)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> StoreResult<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>(
            r#"
            SELECT id, name, city, state, phone, genres, image_link,
                   facebook_link, website, seeking_venue, seeking_description
            FROM artists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(artist)
    }

    pub async fn find_all(pool: &PgPool) -> StoreResult<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(
            r#"
            SELECT id, name, city, state, phone, genres, image_link,
                   facebook_link, website, seeking_venue, seeking_description
            FROM artists
            ORDER BY LOWER(name) ASC, name ASC, id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(artists)
    }

    pub async fn update(pool: &PgPool, id: Uuid, f: ArtistFields) -> StoreResult<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>(
            r#"
            UPDATE artists
            SET
                name = $1,
                city = $2,
                state = $3,
                phone = $4,
                genres = $5,
                image_link = $6,
                facebook_link = $7,
                website = $8,
                seeking_venue = $9,
                seeking_description = $10
            WHERE id = $11
            RETURNING id, name, city, state, phone, genres, image_link,
                      facebook_link, website, seeking_venue, seeking_description
            "#,
        )
        .bind(f.name)
        .bind(f.city)
        .bind(f.state)
        .bind(f.phone)
        .bind(f.genres)
        .bind(f.image_link)
        .bind(f.facebook_link)
        .bind(f.website)
        .bind(f.seeking_venue)
        .bind(f.seeking_description)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(artist)
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn search(pool: &PgPool, pattern: &str) -> StoreResult<Vec<NamedEntity>> {
        let rows = sqlx::query_as::<_, NamedEntity>(
            r#"
            SELECT id, name
            FROM artists
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

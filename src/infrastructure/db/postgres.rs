use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::pool::DbPool;
use super::store::{EntityStore, StoreResult};
use crate::modules::artist::model::{Artist, ArtistFields};
use crate::modules::artist::repository::ArtistRepository;
use crate::modules::show::model::{NamedEntity, NewShow, Role, Show, ShowLink, ShowListing};
use crate::modules::show::repository::ShowRepository;
use crate::modules::venue::model::{Venue, VenueFields};
use crate::modules::venue::repository::VenueRepository;

/// [`EntityStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE metacharacters so the term only matches literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl EntityStore for PgStore {
    async fn insert_venue(&self, fields: VenueFields) -> StoreResult<Venue> {
        VenueRepository::create(&self.pool, fields).await
    }

    async fn find_venue(&self, id: Uuid) -> StoreResult<Option<Venue>> {
        VenueRepository::find_by_id(&self.pool, id).await
    }

    async fn list_venues(&self) -> StoreResult<Vec<Venue>> {
        VenueRepository::find_all(&self.pool).await
    }

    async fn update_venue(&self, id: Uuid, fields: VenueFields) -> StoreResult<Option<Venue>> {
        VenueRepository::update(&self.pool, id, fields).await
    }

    async fn delete_venue(&self, id: Uuid) -> StoreResult<bool> {
        VenueRepository::delete(&self.pool, id).await
    }

    async fn insert_artist(&self, fields: ArtistFields) -> StoreResult<Artist> {
        ArtistRepository::create(&self.pool, fields).await
    }

    async fn find_artist(&self, id: Uuid) -> StoreResult<Option<Artist>> {
        ArtistRepository::find_by_id(&self.pool, id).await
    }

    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        ArtistRepository::find_all(&self.pool).await
    }

    async fn update_artist(&self, id: Uuid, fields: ArtistFields) -> StoreResult<Option<Artist>> {
        ArtistRepository::update(&self.pool, id, fields).await
    }

    async fn delete_artist(&self, id: Uuid) -> StoreResult<bool> {
        ArtistRepository::delete(&self.pool, id).await
    }

    async fn insert_show(&self, show: NewShow) -> StoreResult<Show> {
        ShowRepository::create(&self.pool, show).await
    }

    async fn find_show(&self, id: Uuid) -> StoreResult<Option<Show>> {
        ShowRepository::find_by_id(&self.pool, id).await
    }

    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>> {
        ShowRepository::find_all(&self.pool).await
    }

    async fn shows_for(&self, role: Role, id: Uuid) -> StoreResult<Vec<ShowLink>> {
        ShowRepository::find_for(&self.pool, role, id).await
    }

    async fn count_upcoming(&self, role: Role, id: Uuid, now: OffsetDateTime) -> StoreResult<i64> {
        ShowRepository::count_upcoming(&self.pool, role, id, now).await
    }

    async fn search(&self, role: Role, term: &str) -> StoreResult<Vec<NamedEntity>> {
        let pattern = escape_like(term);
        match role {
            Role::Venue => VenueRepository::search(&self.pool, &pattern).await,
            Role::Artist => ArtistRepository::search(&self.pool, &pattern).await,
        }
    }
}

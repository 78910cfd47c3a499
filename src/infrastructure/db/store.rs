use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::modules::artist::model::{Artist, ArtistFields};
use crate::modules::show::model::{NamedEntity, NewShow, Role, Show, ShowLink, ShowListing};
use crate::modules::venue::model::{Venue, VenueFields};

#[derive(Debug, Error)]
pub enum StoreError {
    /// A show pointed at an artist or venue that is not stored.
    #[error("{0} does not exist")]
    MissingReference(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence for venues, artists and the shows linking them.
///
/// Every write is applied as a unit: either all columns of the row change or
/// none do. Deleting a venue or artist also deletes the shows that reference it.
/// Listings are ordered by name, show collections by start time.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn insert_venue(&self, fields: VenueFields) -> StoreResult<Venue>;
    async fn find_venue(&self, id: Uuid) -> StoreResult<Option<Venue>>;
    async fn list_venues(&self) -> StoreResult<Vec<Venue>>;
    async fn update_venue(&self, id: Uuid, fields: VenueFields) -> StoreResult<Option<Venue>>;
    async fn delete_venue(&self, id: Uuid) -> StoreResult<bool>;

    async fn insert_artist(&self, fields: ArtistFields) -> StoreResult<Artist>;
    async fn find_artist(&self, id: Uuid) -> StoreResult<Option<Artist>>;
    async fn list_artists(&self) -> StoreResult<Vec<Artist>>;
    async fn update_artist(&self, id: Uuid, fields: ArtistFields) -> StoreResult<Option<Artist>>;
    async fn delete_artist(&self, id: Uuid) -> StoreResult<bool>;

    /// Fails with [`StoreError::MissingReference`] when either end is absent.
    async fn insert_show(&self, show: NewShow) -> StoreResult<Show>;
    async fn find_show(&self, id: Uuid) -> StoreResult<Option<Show>>;
    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>>;

    /// Shows owned by `id`, each joined with the entity on the other side.
    async fn shows_for(&self, role: Role, id: Uuid) -> StoreResult<Vec<ShowLink>>;
    /// Shows owned by `id` starting at or after `now`.
    async fn count_upcoming(&self, role: Role, id: Uuid, now: OffsetDateTime) -> StoreResult<i64>;

    /// Case-insensitive substring match on the name. The term is literal text.
    async fn search(&self, role: Role, term: &str) -> StoreResult<Vec<NamedEntity>>;
}

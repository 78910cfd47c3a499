use super::dto::ShowRequest;
use super::model::{NamedEntity, NewShow, Role, Show, ShowListing};
use super::timeline::ShowPartition;
use crate::common::error::{AppError, AppResult};
use crate::modules::search::dto::EntitySummary;
use crate::state::AppState;
use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

pub struct ShowService;

impl ShowService {
    pub async fn create(state: AppState, req: ShowRequest) -> AppResult<Show> {
        // Reject before anything is written; the store re-checks inside its write.
        if state.store.find_artist(req.artist_id).await?.is_none() {
            warn!("show rejected: artist {} does not exist", req.artist_id);
            return Err(AppError::Referential("The Artist selected does not exist.".to_string()));
        }
        if state.store.find_venue(req.venue_id).await?.is_none() {
            warn!("show rejected: venue {} does not exist", req.venue_id);
            return Err(AppError::Referential("The Venue selected does not exist.".to_string()));
        }

        let show = state
            .store
            .insert_show(NewShow {
                artist_id: req.artist_id,
                venue_id: req.venue_id,
                start_time: req.start_time,
            })
            .await?;

        info!("Show {} listed (artist {}, venue {})", show.id, show.artist_id, show.venue_id);
        Ok(show)
    }

    pub async fn list(state: AppState) -> AppResult<Vec<ShowListing>> {
        Ok(state.store.list_shows().await?)
    }

    pub async fn find_by_id(state: AppState, id: Uuid) -> AppResult<Show> {
        state
            .store
            .find_show(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Show not found".to_string()))
    }

    /// Past and upcoming shows of an existing venue or artist.
    pub async fn shows_for(state: &AppState, role: Role, id: Uuid) -> AppResult<ShowPartition> {
        Self::ensure_exists(state, role, id).await?;
        Self::partition(state, role, id).await
    }

    /// Classifies against the clock as read now, never a cached value.
    pub async fn partition(state: &AppState, role: Role, id: Uuid) -> AppResult<ShowPartition> {
        let links = state.store.shows_for(role, id).await?;
        Ok(ShowPartition::split(links, state.clock.now()))
    }

    pub async fn upcoming_count(
        state: &AppState,
        role: Role,
        id: Uuid,
        now: OffsetDateTime,
    ) -> AppResult<i64> {
        Ok(state.store.count_upcoming(role, id, now).await?)
    }

    /// List-view rows: one upcoming count per entity, all against the same `now`.
    pub async fn summarize(
        state: &AppState,
        role: Role,
        rows: Vec<NamedEntity>,
        now: OffsetDateTime,
    ) -> AppResult<Vec<EntitySummary>> {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let upcoming_count = Self::upcoming_count(state, role, row.id, now).await?;
            out.push(EntitySummary {
                id: row.id,
                name: row.name,
                upcoming_count,
            });
        }
        Ok(out)
    }

    async fn ensure_exists(state: &AppState, role: Role, id: Uuid) -> AppResult<()> {
        let exists = match role {
            Role::Artist => state.store.find_artist(id).await?.is_some(),
            Role::Venue => state.store.find_venue(id).await?.is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("{} not found", role.label())))
        }
    }
}

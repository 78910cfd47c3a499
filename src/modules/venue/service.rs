use super::dto::{VenueArea, VenueDetail, VenueRequest};
use super::model::Venue;
use crate::common::error::{AppError, AppResult};
use crate::modules::search::dto::{EntitySummary, SearchResponse};
use crate::modules::search::service::SearchService;
use crate::modules::show::dto::{ArtistShowSummary, ShowsView};
use crate::modules::show::model::Role;
use crate::modules::show::service::ShowService;
use crate::state::AppState;
use std::collections::BTreeMap;
use tracing::{info, warn};
use uuid::Uuid;

pub struct VenueService;

impl VenueService {
    pub async fn create(state: AppState, req: VenueRequest) -> AppResult<Venue> {
        let fields = req.into_fields().inspect_err(|e| warn!("venue rejected: {}", e))?;
        let venue = state.store.insert_venue(fields).await?;

        info!("Venue {} ({}) was successfully listed", venue.name, venue.id);
        Ok(venue)
    }

    /// Venues grouped by (city, state), areas in alphabetical order.
    pub async fn list_by_area(state: AppState) -> AppResult<Vec<VenueArea>> {
        let venues = state.store.list_venues().await?;
        let now = state.clock.now();

        let mut areas: BTreeMap<(String, String), Vec<EntitySummary>> = BTreeMap::new();
        for venue in venues {
            let upcoming_count = ShowService::upcoming_count(&state, Role::Venue, venue.id, now).await?;
            areas
                .entry((venue.city, venue.state))
                .or_default()
                .push(EntitySummary {
                    id: venue.id,
                    name: venue.name,
                    upcoming_count,
                });
        }

        Ok(areas
            .into_iter()
            .map(|((city, state), venues)| VenueArea { city, state, venues })
            .collect())
    }

    pub async fn search(state: AppState, term: &str) -> AppResult<SearchResponse> {
        SearchService::search(&state, Role::Venue, term).await
    }

    pub async fn find_by_id(state: AppState, id: Uuid) -> AppResult<Venue> {
        state
            .store
            .find_venue(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))
    }

    pub async fn detail(state: AppState, id: Uuid) -> AppResult<VenueDetail> {
        let venue = Self::find_by_id(state.clone(), id).await?;
        let partition = ShowService::partition(&state, Role::Venue, id).await?;

        Ok(VenueDetail {
            venue,
            shows: partition.into(),
        })
    }

    pub async fn shows(state: AppState, id: Uuid) -> AppResult<ShowsView<ArtistShowSummary>> {
        let partition = ShowService::shows_for(&state, Role::Venue, id).await?;
        Ok(partition.into())
    }

    pub async fn update(state: AppState, id: Uuid, req: VenueRequest) -> AppResult<Venue> {
        let fields = req.into_fields().inspect_err(|e| warn!("venue {} edit rejected: {}", id, e))?;
        let venue = state
            .store
            .update_venue(id, fields)
            .await?
            .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

        info!("Venue {} ({}) was successfully updated", venue.name, venue.id);
        Ok(venue)
    }

    pub async fn delete(state: AppState, id: Uuid) -> AppResult<()> {
        if !state.store.delete_venue(id).await? {
            return Err(AppError::NotFound("Venue not found".to_string()));
        }
        info!("Venue {} deleted along with its shows", id);
        Ok(())
    }
}

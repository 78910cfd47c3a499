use super::dto::{ArtistDetail, ArtistRequest};
use super::model::Artist;
use crate::common::error::{AppError, AppResult};
use crate::modules::search::dto::{EntitySummary, SearchResponse};
use crate::modules::search::service::SearchService;
use crate::modules::show::dto::{ShowsView, VenueShowSummary};
use crate::modules::show::model::{NamedEntity, Role};
use crate::modules::show::service::ShowService;
use crate::state::AppState;
use tracing::{info, warn};
use uuid::Uuid;

pub struct ArtistService;

impl ArtistService {
    pub async fn create(state: AppState, req: ArtistRequest) -> AppResult<Artist> {
        let fields = req.into_fields().inspect_err(|e| warn!("artist rejected: {}", e))?;
        let artist = state.store.insert_artist(fields).await?;

        info!("Artist {} ({}) was successfully listed", artist.name, artist.id);
        Ok(artist)
    }

    pub async fn list(state: AppState) -> AppResult<Vec<EntitySummary>> {
        let rows = state
            .store
            .list_artists()
            .await?
            .into_iter()
            .map(|a| NamedEntity { id: a.id, name: a.name })
            .collect();
        let now = state.clock.now();
        ShowService::summarize(&state, Role::Artist, rows, now).await
    }

    pub async fn search(state: AppState, term: &str) -> AppResult<SearchResponse> {
        SearchService::search(&state, Role::Artist, term).await
    }

    pub async fn find_by_id(state: AppState, id: Uuid) -> AppResult<Artist> {
        state
            .store
            .find_artist(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))
    }

    pub async fn detail(state: AppState, id: Uuid) -> AppResult<ArtistDetail> {
        let artist = Self::find_by_id(state.clone(), id).await?;
        let partition = ShowService::partition(&state, Role::Artist, id).await?;

        Ok(ArtistDetail {
            artist,
            shows: partition.into(),
        })
    }

    pub async fn shows(state: AppState, id: Uuid) -> AppResult<ShowsView<VenueShowSummary>> {
        let partition = ShowService::shows_for(&state, Role::Artist, id).await?;
        Ok(partition.into())
    }

    pub async fn update(state: AppState, id: Uuid, req: ArtistRequest) -> AppResult<Artist> {
        let fields = req.into_fields().inspect_err(|e| warn!("artist {} edit rejected: {}", id, e))?;
        let artist = state
            .store
            .update_artist(id, fields)
            .await?
            .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

        info!("Artist {} ({}) was successfully updated", artist.name, artist.id);
        Ok(artist)
    }

    pub async fn delete(state: AppState, id: Uuid) -> AppResult<()> {
        if !state.store.delete_artist(id).await? {
            return Err(AppError::NotFound("Artist not found".to_string()));
        }
        info!("Artist {} deleted along with its shows", id);
        Ok(())
    }
}

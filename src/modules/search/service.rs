use super::dto::SearchResponse;
use crate::common::error::AppResult;
use crate::modules::show::model::Role;
use crate::modules::show::service::ShowService;
use crate::state::AppState;
use tracing::debug;

pub struct SearchService;

impl SearchService {
    /// Every venue or artist whose name contains `term`, ignoring case and
    /// surrounding whitespace, with its upcoming show count.
    pub async fn search(state: &AppState, role: Role, term: &str) -> AppResult<SearchResponse> {
        let term = term.trim();
        let rows = state.store.search(role, term).await?;
        debug!("{} search {:?} matched {} rows", role.label(), term, rows.len());

        let now = state.clock.now();
        let data = ShowService::summarize(state, role, rows, now).await?;

        Ok(SearchResponse {
            count: data.len(),
            data,
        })
    }
}

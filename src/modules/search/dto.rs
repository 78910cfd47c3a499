use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct SearchRequest {
    /// Matched as a case-insensitive substring of the name. Empty matches all.
    #[serde(default)]
    pub search_term: String,
}

/// One entity of a list or search view.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct EntitySummary {
    pub id: Uuid,
    pub name: String,
    pub upcoming_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub count: usize,
    pub data: Vec<EntitySummary>,
}

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use super::model::ShowLink;
use super::timeline::ShowPartition;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ShowRequest {
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    /// RFC 3339 timestamp with an explicit offset.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub start_time: OffsetDateTime,
}

/// A show listed on a venue page.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct ArtistShowSummary {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub start_time: OffsetDateTime,
}

impl From<ShowLink> for ArtistShowSummary {
    fn from(l: ShowLink) -> Self {
        Self {
            artist_id: l.counterpart_id,
            artist_name: l.counterpart_name,
            artist_image_link: l.counterpart_image_link,
            start_time: l.start_time,
        }
    }
}

/// A show listed on an artist page.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct VenueShowSummary {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub start_time: OffsetDateTime,
}

impl From<ShowLink> for VenueShowSummary {
    fn from(l: ShowLink) -> Self {
        Self {
            venue_id: l.counterpart_id,
            venue_name: l.counterpart_name,
            venue_image_link: l.counterpart_image_link,
            start_time: l.start_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShowsView<S> {
    pub past_shows: Vec<S>,
    pub upcoming_shows: Vec<S>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<S: From<ShowLink>> From<ShowPartition> for ShowsView<S> {
    fn from(p: ShowPartition) -> Self {
        let past_shows_count = p.past_count();
        let upcoming_shows_count = p.upcoming_count();
        Self {
            past_shows: p.past.into_iter().map(S::from).collect(),
            upcoming_shows: p.upcoming.into_iter().map(S::from).collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}

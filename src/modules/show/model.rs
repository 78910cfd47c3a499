use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone, PartialEq)]
pub struct Show {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub start_time: OffsetDateTime,
    pub artist_id: Uuid,
    pub venue_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct NewShow {
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: OffsetDateTime,
}

/// Which end of a show an entity sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Artist,
    Venue,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Artist => "Artist",
            Role::Venue => "Venue",
        }
    }
}

/// A show seen from one of its owners: the other party and the start time.
#[derive(Debug, FromRow, Clone, PartialEq)]
pub struct ShowLink {
    pub show_id: Uuid,
    pub counterpart_id: Uuid,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: OffsetDateTime,
}

/// Row of the public show listing.
#[derive(Debug, Serialize, FromRow, ToSchema, Clone, PartialEq)]
pub struct ShowListing {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub start_time: OffsetDateTime,
}

#[derive(Debug, FromRow, Clone, PartialEq)]
pub struct NamedEntity {
    pub id: Uuid,
    pub name: String,
}

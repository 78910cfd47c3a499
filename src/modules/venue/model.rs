use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::genre::model::Genre;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone, PartialEq)]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Every mutable column of a venue, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    pub fn from_fields(id: Uuid, f: VenueFields) -> Self {
        Self {
            id,
            name: f.name,
            city: f.city,
            state: f.state,
            address: f.address,
            phone: f.phone,
            genres: f.genres,
            image_link: f.image_link,
            facebook_link: f.facebook_link,
            website: f.website,
            seeking_talent: f.seeking_talent,
            seeking_description: f.seeking_description,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::model::{Artist, ArtistFields};
use crate::common::error::AppResult;
use crate::common::validation::{blank_to_none, check_location, into_result, trimmed};
use crate::modules::genre::model::Genre;
use crate::modules::show::dto::{ShowsView, VenueShowSummary};

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct ArtistRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "City is required (at most 120 characters)"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(max = 120, message = "Phone is too long"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "At least one genre is required"))]
    pub genres: Vec<Genre>,
    #[validate(url(message = "Image link must be a URL"), length(max = 500, message = "Image link is too long"))]
    pub image_link: Option<String>,
    #[validate(url(message = "Facebook link must be a URL"), length(max = 120, message = "Facebook link is too long"))]
    pub facebook_link: Option<String>,
    #[serde(alias = "website_link")]
    #[validate(url(message = "Website must be a URL"), length(max = 120, message = "Website is too long"))]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[validate(length(max = 120, message = "Seeking description is too long"))]
    pub seeking_description: Option<String>,
}

impl ArtistRequest {
    fn normalized(self) -> Self {
        Self {
            name: trimmed(self.name),
            city: trimmed(self.city),
            state: trimmed(self.state).to_uppercase(),
            phone: blank_to_none(self.phone),
            genres: Genre::dedup_ordered(self.genres),
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            website: blank_to_none(self.website),
            seeking_venue: self.seeking_venue,
            seeking_description: blank_to_none(self.seeking_description),
        }
    }

    pub fn into_fields(self) -> AppResult<ArtistFields> {
        let req = self.normalized();

        let mut errors = req.validate().err().unwrap_or_else(ValidationErrors::new);
        check_location(&mut errors, &req.state, req.phone.as_deref());
        into_result(errors)?;

        Ok(ArtistFields {
            name: req.name,
            city: req.city,
            state: req.state,
            phone: req.phone,
            genres: req.genres,
            image_link: req.image_link,
            facebook_link: req.facebook_link,
            website: req.website,
            seeking_venue: req.seeking_venue,
            seeking_description: req.seeking_description,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowsView<VenueShowSummary>,
}

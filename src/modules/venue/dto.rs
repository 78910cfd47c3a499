use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::model::{Venue, VenueFields};
use crate::common::error::AppResult;
use crate::common::validation::{blank_to_none, check_location, into_result, trimmed};
use crate::modules::genre::model::Genre;
use crate::modules::search::dto::EntitySummary;
use crate::modules::show::dto::{ArtistShowSummary, ShowsView};

/// Body of the create and edit venue forms. Edits replace every field.
#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct VenueRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "City is required (at most 120 characters)"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "Address is required (at most 120 characters)"))]
    pub address: String,
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
    pub seeking_talent: bool,
    #[validate(length(max = 120, message = "Seeking description is too long"))]
    pub seeking_description: Option<String>,
}

impl VenueRequest {
    fn normalized(self) -> Self {
        Self {
            name: trimmed(self.name),
            city: trimmed(self.city),
            state: trimmed(self.state).to_uppercase(),
            address: trimmed(self.address),
            phone: blank_to_none(self.phone),
            genres: Genre::dedup_ordered(self.genres),
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            website: blank_to_none(self.website),
            seeking_talent: self.seeking_talent,
            seeking_description: blank_to_none(self.seeking_description),
        }
    }

    pub fn into_fields(self) -> AppResult<VenueFields> {
        let req = self.normalized();

        let mut errors = req.validate().err().unwrap_or_else(ValidationErrors::new);
        check_location(&mut errors, &req.state, req.phone.as_deref());
        into_result(errors)?;

        Ok(VenueFields {
            name: req.name,
            city: req.city,
            state: req.state,
            address: req.address,
            phone: req.phone,
            genres: req.genres,
            image_link: req.image_link,
            facebook_link: req.facebook_link,
            website: req.website,
            seeking_talent: req.seeking_talent,
            seeking_description: req.seeking_description,
        })
    }
}

/// Venues sharing a city and state, as shown on the venues page.
#[derive(Debug, Serialize, ToSchema)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowsView<ArtistShowSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::AppError;

    fn request() -> VenueRequest {
        serde_json::from_value(serde_json::json!({
            "name": " The Musical Hop ",
            "city": "San Francisco",
            "state": "ca",
            "address": "1015 Folsom Street",
            "phone": "123-123-1234",
            "genres": ["Jazz", "Reggae", "Jazz"],
            "image_link": "",
            "facebook_link": "https://www.facebook.com/TheMusicalHop",
            "website_link": "https://www.themusicalhop.com",
            "seeking_talent": true,
            "seeking_description": "We are on the lookout for a local artist to play every two weeks."
        }))
        .unwrap()
    }

    #[test]
    fn valid_request_is_normalized() {
        let fields = request().into_fields().unwrap();
        assert_eq!(fields.name, "The Musical Hop");
        assert_eq!(fields.state, "CA");
        assert_eq!(fields.genres, vec![Genre::Jazz, Genre::Reggae]);
        assert_eq!(fields.image_link, None);
        assert_eq!(fields.website.as_deref(), Some("https://www.themusicalhop.com"));
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let mut req = request();
        req.name = "   ".to_string();
        req.genres.clear();

        match req.into_fields() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("Name is required"));
                assert!(msg.contains("At least one genre is required"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_links_and_locations_are_rejected() {
        let mut req = request();
        req.facebook_link = Some("not a url".to_string());
        req.state = "Narnia".to_string();
        req.phone = Some("555".to_string());

        let Err(AppError::Validation(msg)) = req.into_fields() else {
            panic!("expected validation error");
        };
        assert!(msg.contains("Facebook link must be a URL"));
        assert!(msg.contains("State must be a two-letter US state code"));
        assert!(msg.contains("Phone must contain 7 to 15 digits"));
    }

    #[test]
    fn absent_fields_default_to_blank() {
        let req: VenueRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(req.into_fields(), Err(AppError::Validation(_))));
    }

    #[test]
    fn phone_is_capped_at_column_width() {
        let mut req = request();
        req.phone = Some(format!("415{}0001234", " ".repeat(200)));

        let Err(AppError::Validation(msg)) = req.into_fields() else {
            panic!("expected validation error");
        };
        assert_eq!(msg, "Phone is too long");

        let mut req = request();
        req.phone = Some("(415) 000-1234".to_string());
        assert!(req.into_fields().is_ok());
    }
}

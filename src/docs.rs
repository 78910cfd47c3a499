use utoipa::OpenApi;

use crate::modules::artist::{dto::*, model::Artist};
use crate::modules::genre::model::Genre;
use crate::modules::search::dto::*;
use crate::modules::show::{dto::*, model::{Show, ShowListing}};
use crate::modules::venue::{dto::*, model::Venue};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::venue::handler::list_venues,
        crate::modules::venue::handler::search_venues,
        crate::modules::venue::handler::get_venue,
        crate::modules::venue::handler::edit_venue,
        crate::modules::venue::handler::venue_shows,
        crate::modules::venue::handler::create_venue,
        crate::modules::venue::handler::update_venue,
        crate::modules::venue::handler::delete_venue,
        crate::modules::artist::handler::list_artists,
        crate::modules::artist::handler::search_artists,
        crate::modules::artist::handler::get_artist,
        crate::modules::artist::handler::edit_artist,
        crate::modules::artist::handler::artist_shows,
        crate::modules::artist::handler::create_artist,
        crate::modules::artist::handler::update_artist,
        crate::modules::artist::handler::delete_artist,
        crate::modules::show::handler::list_shows,
        crate::modules::show::handler::get_show,
        crate::modules::show::handler::create_show,
        crate::modules::genre::handler::list_genres,
    ),
    components(
        schemas(
            Venue, VenueRequest, VenueArea, VenueDetail,
            Artist, ArtistRequest, ArtistDetail,
            Show, ShowListing, ShowRequest, ArtistShowSummary, VenueShowSummary,
            SearchRequest, SearchResponse, EntitySummary,
            Genre,
        )
    ),
    tags(
        (name = "Venues", description = "Venue listings"),
        (name = "Artists", description = "Artist listings"),
        (name = "Shows", description = "Bookings of artists at venues"),
        (name = "Genres", description = "Genre choices")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/venues",
            "/api/v1/venues/search",
            "/api/v1/venues/{id}",
            "/api/v1/venues/{id}/edit",
            "/api/v1/venues/{id}/shows",
            "/api/v1/artists",
            "/api/v1/artists/search",
            "/api/v1/artists/{id}",
            "/api/v1/shows",
            "/api/v1/shows/{id}",
            "/api/v1/genres",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{} missing from OpenAPI", path);
        }
    }
}

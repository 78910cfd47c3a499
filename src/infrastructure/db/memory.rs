use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;
use uuid::Uuid;

use super::store::{EntityStore, StoreError, StoreResult};
use crate::modules::artist::model::{Artist, ArtistFields};
use crate::modules::show::model::{NamedEntity, NewShow, Role, Show, ShowLink, ShowListing};
use crate::modules::show::timeline::Timing;
use crate::modules::venue::model::{Venue, VenueFields};

#[derive(Default)]
struct Tables {
    venues: Vec<Venue>,
    artists: Vec<Artist>,
    shows: Vec<Show>,
}

impl Tables {
    fn owner_of(show: &Show, role: Role) -> Uuid {
        match role {
            Role::Artist => show.artist_id,
            Role::Venue => show.venue_id,
        }
    }
}

/// In-process [`EntityStore`]. Each operation holds the lock for its whole
/// duration, so writes (including cascades) are never observed half done.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Case-folded name first, same as `ORDER BY LOWER(name), name, id`.
fn by_name<T>(rows: &mut [T], key: impl Fn(&T) -> (&str, Uuid)) {
    rows.sort_by_cached_key(|row| {
        let (name, id) = key(row);
        (name.to_lowercase(), name.to_string(), id)
    });
}

fn matches_term(name: &str, term_lower: &str) -> bool {
    name.to_lowercase().contains(term_lower)
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn insert_venue(&self, fields: VenueFields) -> StoreResult<Venue> {
        let venue = Venue::from_fields(Uuid::new_v4(), fields);
        self.tables.write().venues.push(venue.clone());
        Ok(venue)
    }

    async fn find_venue(&self, id: Uuid) -> StoreResult<Option<Venue>> {
        Ok(self.tables.read().venues.iter().find(|v| v.id == id).cloned())
    }

    async fn list_venues(&self) -> StoreResult<Vec<Venue>> {
        let mut venues = self.tables.read().venues.clone();
        by_name(&mut venues, |v| (v.name.as_str(), v.id));
        Ok(venues)
    }

    async fn update_venue(&self, id: Uuid, fields: VenueFields) -> StoreResult<Option<Venue>> {
        let mut tables = self.tables.write();
        Ok(tables.venues.iter_mut().find(|v| v.id == id).map(|slot| {
            *slot = Venue::from_fields(id, fields);
            slot.clone()
        }))
    }

    async fn delete_venue(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write();
        let before = tables.venues.len();
        tables.venues.retain(|v| v.id != id);
        if tables.venues.len() == before {
            return Ok(false);
        }
        tables.shows.retain(|s| s.venue_id != id);
        Ok(true)
    }

    async fn insert_artist(&self, fields: ArtistFields) -> StoreResult<Artist> {
        let artist = Artist::from_fields(Uuid::new_v4(), fields);
        self.tables.write().artists.push(artist.clone());
        Ok(artist)
    }

    async fn find_artist(&self, id: Uuid) -> StoreResult<Option<Artist>> {
        Ok(self.tables.read().artists.iter().find(|a| a.id == id).cloned())
    }

    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        let mut artists = self.tables.read().artists.clone();
        by_name(&mut artists, |a| (a.name.as_str(), a.id));
        Ok(artists)
    }

    async fn update_artist(&self, id: Uuid, fields: ArtistFields) -> StoreResult<Option<Artist>> {
        let mut tables = self.tables.write();
        Ok(tables.artists.iter_mut().find(|a| a.id == id).map(|slot| {
            *slot = Artist::from_fields(id, fields);
            slot.clone()
        }))
    }

    async fn delete_artist(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write();
        let before = tables.artists.len();
        tables.artists.retain(|a| a.id != id);
        if tables.artists.len() == before {
            return Ok(false);
        }
        tables.shows.retain(|s| s.artist_id != id);
        Ok(true)
    }

    async fn insert_show(&self, show: NewShow) -> StoreResult<Show> {
        let mut tables = self.tables.write();
        if !tables.artists.iter().any(|a| a.id == show.artist_id) {
            return Err(StoreError::MissingReference("Artist"));
        }
        if !tables.venues.iter().any(|v| v.id == show.venue_id) {
            return Err(StoreError::MissingReference("Venue"));
        }

        let stored = Show {
            id: Uuid::new_v4(),
            start_time: show.start_time,
            artist_id: show.artist_id,
            venue_id: show.venue_id,
        };
        tables.shows.push(stored.clone());
        Ok(stored)
    }

    async fn find_show(&self, id: Uuid) -> StoreResult<Option<Show>> {
        Ok(self.tables.read().shows.iter().find(|s| s.id == id).cloned())
    }

    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>> {
        let tables = self.tables.read();
        let mut listings: Vec<ShowListing> = tables
            .shows
            .iter()
            .filter_map(|s| {
                let venue = tables.venues.iter().find(|v| v.id == s.venue_id)?;
                let artist = tables.artists.iter().find(|a| a.id == s.artist_id)?;
                Some(ShowListing {
                    id: s.id,
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: s.start_time,
                })
            })
            .collect();
        listings.sort_by(|a, b| (a.start_time, a.id).cmp(&(b.start_time, b.id)));
        Ok(listings)
    }

    async fn shows_for(&self, role: Role, id: Uuid) -> StoreResult<Vec<ShowLink>> {
        let tables = self.tables.read();
        let mut links: Vec<ShowLink> = tables
            .shows
            .iter()
            .filter(|s| Tables::owner_of(s, role) == id)
            .filter_map(|s| {
                let (counterpart_id, counterpart_name, counterpart_image_link) = match role {
                    Role::Venue => {
                        let a = tables.artists.iter().find(|a| a.id == s.artist_id)?;
                        (a.id, a.name.clone(), a.image_link.clone())
                    }
                    Role::Artist => {
                        let v = tables.venues.iter().find(|v| v.id == s.venue_id)?;
                        (v.id, v.name.clone(), v.image_link.clone())
                    }
                };
                Some(ShowLink {
                    show_id: s.id,
                    counterpart_id,
                    counterpart_name,
                    counterpart_image_link,
                    start_time: s.start_time,
                })
            })
            .collect();
        links.sort_by(|a, b| (a.start_time, a.show_id).cmp(&(b.start_time, b.show_id)));
        Ok(links)
    }

    async fn count_upcoming(&self, role: Role, id: Uuid, now: OffsetDateTime) -> StoreResult<i64> {
        let tables = self.tables.read();
        let count = tables
            .shows
            .iter()
            .filter(|s| Tables::owner_of(s, role) == id)
            .filter(|s| Timing::classify(s.start_time, now) == Timing::Upcoming)
            .count();
        Ok(count as i64)
    }

    async fn search(&self, role: Role, term: &str) -> StoreResult<Vec<NamedEntity>> {
        let term = term.to_lowercase();
        let tables = self.tables.read();
        let mut rows: Vec<NamedEntity> = match role {
            Role::Venue => tables
                .venues
                .iter()
                .filter(|v| matches_term(&v.name, &term))
                .map(|v| NamedEntity { id: v.id, name: v.name.clone() })
                .collect(),
            Role::Artist => tables
                .artists
                .iter()
                .filter(|a| matches_term(&a.name, &term))
                .map(|a| NamedEntity { id: a.id, name: a.name.clone() })
                .collect(),
        };
        by_name(&mut rows, |r| (r.name.as_str(), r.id));
        Ok(rows)
    }
}

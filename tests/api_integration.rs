//! HTTP-level tests for the booking directory.
//!
//! Every test drives the full router against the in-memory store and a manual
//! clock, so time can be moved forward to watch shows become past shows.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use time::macros::datetime;
use time::Duration;
use tower::ServiceExt;

use gigbook::app::create_app;
use gigbook::common::clock::ManualClock;
use gigbook::config::settings::AppConfig;
use gigbook::infrastructure::db::memory::MemoryStore;
use gigbook::state::AppState;

fn setup() -> (axum::Router, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(datetime!(2025-05-21 21:30 UTC)));
    let state = AppState::with_clock(
        AppConfig::default(),
        Arc::new(MemoryStore::new()),
        clock.clone(),
    );
    (create_app(state), clock)
}

async fn make_request(
    app: &axum::Router,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json_body) => request
            .header("content-type", "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn venue_body(name: &str, city: &str, state: &str) -> Value {
    json!({
        "name": name,
        "city": city,
        "state": state,
        "address": "1015 Folsom Street",
        "phone": "123-123-1234",
        "genres": ["Jazz", "Reggae"],
        "image_link": "https://images.unsplash.com/photo-1543900694-133f37abaaa5",
        "facebook_link": "https://www.facebook.com/TheMusicalHop",
        "website": "https://www.themusicalhop.com",
        "seeking_talent": true,
        "seeking_description": "We are on the lookout for a local artist to play every two weeks."
    })
}

fn artist_body(name: &str) -> Value {
    json!({
        "name": name,
        "city": "San Francisco",
        "state": "CA",
        "phone": "326-123-5000",
        "genres": ["Rock n Roll"],
        "image_link": "https://images.unsplash.com/photo-1549213783-8284d0336c4f",
        "facebook_link": "https://www.facebook.com/GunsNPetals",
        "website": "https://www.gunsnpetalsband.com",
        "seeking_venue": true,
        "seeking_description": "Looking for shows to perform at in the San Francisco Bay Area!"
    })
}

async fn create(app: &axum::Router, path: &str, body: Value) -> String {
    let (status, res) = make_request(app, Method::POST, path, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", res);
    res["data"]["id"].as_str().unwrap().to_string()
}

async fn book(app: &axum::Router, artist_id: &str, venue_id: &str, start_time: &str) -> String {
    create(
        app,
        "/api/v1/shows",
        json!({ "artist_id": artist_id, "venue_id": venue_id, "start_time": start_time }),
    )
    .await
}

fn names(body: &Value) -> Vec<String> {
    body["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = setup();
    let request = Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_read_after_write_returns_submitted_fields() {
    let (app, _) = setup();
    let submitted = venue_body("The Musical Hop", "San Francisco", "CA");
    let id = create(&app, "/api/v1/venues", submitted.clone()).await;

    let (status, body) = make_request(&app, Method::GET, &format!("/api/v1/venues/{}/edit", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = submitted;
    expected["id"] = json!(id);
    assert_eq!(body["data"], expected);
}

#[tokio::test]
async fn test_artist_read_after_write() {
    let (app, _) = setup();
    let submitted = artist_body("Guns N Petals");
    let id = create(&app, "/api/v1/artists", submitted.clone()).await;

    let (status, body) = make_request(&app, Method::GET, &format!("/api/v1/artists/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    for (key, value) in submitted.as_object().unwrap() {
        assert_eq!(&data[key], value, "field {}", key);
    }
    assert_eq!(data["past_shows_count"], 0);
    assert_eq!(data["upcoming_shows_count"], 0);
}

#[tokio::test]
async fn test_venue_search_is_case_insensitive() {
    let (app, _) = setup();
    for name in ["The Musical Hop", "Park Square Live Music & Coffee", "The Dueling Pianos Bar"] {
        create(&app, "/api/v1/venues", venue_body(name, "San Francisco", "CA")).await;
    }

    let (status, music) = make_request(&app, Method::POST, "/api/v1/venues/search", Some(json!({ "search_term": "Music" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(music["data"]["count"], 2);
    let mut found = names(&music);
    found.sort();
    assert_eq!(found, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);

    let (_, lower) = make_request(&app, Method::POST, "/api/v1/venues/search", Some(json!({ "search_term": "hop" }))).await;
    let (_, upper) = make_request(&app, Method::POST, "/api/v1/venues/search", Some(json!({ "search_term": "HOP" }))).await;
    assert_eq!(lower["data"], upper["data"]);
    assert_eq!(names(&lower), vec!["The Musical Hop"]);

    let (_, everything) = make_request(&app, Method::POST, "/api/v1/venues/search", Some(json!({ "search_term": "" }))).await;
    assert_eq!(everything["data"]["count"], 3);
}

#[tokio::test]
async fn test_artist_search() {
    let (app, _) = setup();
    for name in ["Guns N Petals", "Matt Quevado", "The Wild Sax Band"] {
        create(&app, "/api/v1/artists", artist_body(name)).await;
    }

    let (_, a) = make_request(&app, Method::POST, "/api/v1/artists/search", Some(json!({ "search_term": "A" }))).await;
    assert_eq!(a["data"]["count"], 3);

    let (_, band) = make_request(&app, Method::POST, "/api/v1/artists/search", Some(json!({ "search_term": "band" }))).await;
    assert_eq!(band["data"]["count"], 1);
    assert_eq!(names(&band), vec!["The Wild Sax Band"]);
    assert_eq!(band["data"]["data"][0]["upcoming_count"], 0);
}

#[tokio::test]
async fn test_show_with_unknown_references_is_rejected() {
    let (app, _) = setup();
    let venue_id = create(&app, "/api/v1/venues", venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let artist_id = create(&app, "/api/v1/artists", artist_body("Guns N Petals")).await;
    let missing = uuid::Uuid::new_v4().to_string();

    let (status, body) = make_request(
        &app,
        Method::POST,
        "/api/v1/shows",
        Some(json!({ "artist_id": missing, "venue_id": venue_id, "start_time": "2035-04-01T20:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "The Artist selected does not exist.");

    let (status, body) = make_request(
        &app,
        Method::POST,
        "/api/v1/shows",
        Some(json!({ "artist_id": artist_id, "venue_id": missing, "start_time": "2035-04-01T20:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "The Venue selected does not exist.");

    let (_, shows) = make_request(&app, Method::GET, "/api/v1/shows", None).await;
    assert_eq!(shows["data"], json!([]));
}

#[tokio::test]
async fn test_invalid_update_leaves_entity_unchanged() {
    let (app, _) = setup();
    let id = create(&app, "/api/v1/venues", venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let path = format!("/api/v1/venues/{}", id);
    let (_, before) = make_request(&app, Method::GET, &format!("{}/edit", path), None).await;

    let mut edit = venue_body("", "Oakland", "CA");
    edit.as_object_mut().unwrap().remove("address");
    let (status, body) = make_request(&app, Method::PUT, &path, Some(edit)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Name is required"));
    assert!(body["message"].as_str().unwrap().contains("Address is required"));

    let (_, after) = make_request(&app, Method::GET, &format!("{}/edit", path), None).await;
    assert_eq!(before["data"], after["data"]);

    let (status, _) = make_request(&app, Method::PUT, &path, Some(venue_body("The Musical Hop", "Oakland", "CA"))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, edited) = make_request(&app, Method::GET, &format!("{}/edit", path), None).await;
    assert_eq!(edited["data"]["city"], "Oakland");
}

#[tokio::test]
async fn test_update_and_delete_unknown_ids() {
    let (app, _) = setup();
    let missing = uuid::Uuid::new_v4();

    let (status, _) = make_request(&app, Method::PUT, &format!("/api/v1/artists/{}", missing), Some(artist_body("Matt Quevado"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = make_request(&app, Method::DELETE, &format!("/api/v1/venues/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Venue not found");

    for path in ["venues", "artists", "shows"] {
        let (status, body) = make_request(&app, Method::GET, &format!("/api/v1/{}/{}", path, missing), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
    }
}

#[tokio::test]
async fn test_delete_cascades_to_shows() {
    let (app, _) = setup();
    let hop = create(&app, "/api/v1/venues", venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let park = create(&app, "/api/v1/venues", venue_body("Park Square Live Music & Coffee", "San Francisco", "CA")).await;
    let artist = create(&app, "/api/v1/artists", artist_body("The Wild Sax Band")).await;

    let at_hop = book(&app, &artist, &hop, "2035-04-01T20:00:00Z").await;
    let at_park = book(&app, &artist, &park, "2035-04-08T20:00:00Z").await;

    let (status, _) = make_request(&app, Method::DELETE, &format!("/api/v1/venues/{}", hop), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = make_request(&app, Method::GET, &format!("/api/v1/shows/{}", at_hop), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = make_request(&app, Method::GET, &format!("/api/v1/shows/{}", at_park), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = make_request(&app, Method::DELETE, &format!("/api/v1/artists/{}", artist), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = make_request(&app, Method::GET, &format!("/api/v1/shows/{}", at_park), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, park_detail) = make_request(&app, Method::GET, &format!("/api/v1/venues/{}", park), None).await;
    assert_eq!(park_detail["data"]["upcoming_shows_count"], 0);
}

#[tokio::test]
async fn test_upcoming_show_becomes_past_as_time_passes() {
    let (app, clock) = setup();
    let venue = create(&app, "/api/v1/venues", venue_body("Park Square Live Music & Coffee", "San Francisco", "CA")).await;
    let artist = create(&app, "/api/v1/artists", artist_body("Matt Quevado")).await;
    book(&app, &artist, &venue, "2025-05-22T20:00:00Z").await;
    book(&app, &artist, &venue, "2019-06-15T23:00:00Z").await;

    let venue_path = format!("/api/v1/venues/{}", venue);
    let (_, detail) = make_request(&app, Method::GET, &venue_path, None).await;
    let data = &detail["data"];
    assert_eq!(data["past_shows_count"], 1);
    assert_eq!(data["upcoming_shows_count"], 1);
    assert_eq!(data["upcoming_shows"][0]["artist_name"], "Matt Quevado");
    assert_eq!(data["upcoming_shows"][0]["artist_id"], artist.as_str());
    assert_eq!(data["upcoming_shows"][0]["start_time"], "2025-05-22T20:00:00Z");

    let (_, artist_shows) = make_request(&app, Method::GET, &format!("/api/v1/artists/{}/shows", artist), None).await;
    assert_eq!(artist_shows["data"]["upcoming_shows"][0]["venue_name"], "Park Square Live Music & Coffee");

    clock.advance(Duration::days(2));

    let (_, detail) = make_request(&app, Method::GET, &venue_path, None).await;
    assert_eq!(detail["data"]["past_shows_count"], 2);
    assert_eq!(detail["data"]["upcoming_shows_count"], 0);

    let (_, artist_detail) = make_request(&app, Method::GET, &format!("/api/v1/artists/{}", artist), None).await;
    assert_eq!(artist_detail["data"]["past_shows_count"], 2);
    assert_eq!(artist_detail["data"]["past_shows"][1]["venue_id"], venue.as_str());
}

#[tokio::test]
async fn test_show_starting_now_counts_once() {
    let (app, clock) = setup();
    let venue = create(&app, "/api/v1/venues", venue_body("The Dueling Pianos Bar", "New York", "NY")).await;
    let artist = create(&app, "/api/v1/artists", artist_body("Guns N Petals")).await;
    book(&app, &artist, &venue, "2030-01-01T00:00:00Z").await;

    clock.set(datetime!(2030-01-01 0:00 UTC));
    let (_, detail) = make_request(&app, Method::GET, &format!("/api/v1/venues/{}", venue), None).await;
    assert_eq!(detail["data"]["past_shows_count"], 0);
    assert_eq!(detail["data"]["upcoming_shows_count"], 1);
}

#[tokio::test]
async fn test_venues_grouped_by_area_with_upcoming_counts() {
    let (app, _) = setup();
    let hop = create(&app, "/api/v1/venues", venue_body("The Musical Hop", "San Francisco", "CA")).await;
    let park = create(&app, "/api/v1/venues", venue_body("Park Square Live Music & Coffee", "San Francisco", "CA")).await;
    create(&app, "/api/v1/venues", venue_body("The Dueling Pianos Bar", "New York", "NY")).await;
    let artist = create(&app, "/api/v1/artists", artist_body("The Wild Sax Band")).await;

    book(&app, &artist, &park, "2035-04-01T20:00:00Z").await;
    book(&app, &artist, &park, "2035-04-08T20:00:00Z").await;
    book(&app, &artist, &park, "2019-04-08T20:00:00Z").await;
    book(&app, &artist, &hop, "2019-04-15T20:00:00Z").await;

    let (status, body) = make_request(&app, Method::GET, "/api/v1/venues", None).await;
    assert_eq!(status, StatusCode::OK);
    let areas = body["data"].as_array().unwrap();
    assert_eq!(areas.len(), 2);

    assert_eq!(areas[0]["city"], "New York");
    assert_eq!(areas[0]["state"], "NY");
    assert_eq!(areas[1]["city"], "San Francisco");

    let sf = areas[1]["venues"].as_array().unwrap();
    assert_eq!(sf.len(), 2);
    let count_for = |id: &str| {
        sf.iter()
            .find(|v| v["id"] == id)
            .map(|v| v["upcoming_count"].clone())
            .unwrap()
    };
    assert_eq!(count_for(&park), 2);
    assert_eq!(count_for(&hop), 0);

    let (_, artists) = make_request(&app, Method::GET, "/api/v1/artists", None).await;
    assert_eq!(artists["data"][0]["upcoming_count"], 2);

    let (_, shows) = make_request(&app, Method::GET, "/api/v1/shows", None).await;
    let shows = shows["data"].as_array().unwrap();
    assert_eq!(shows.len(), 4);
    assert_eq!(shows[0]["start_time"], "2019-04-08T20:00:00Z");
    assert_eq!(shows[0]["venue_name"], "Park Square Live Music & Coffee");
    assert_eq!(shows[0]["artist_name"], "The Wild Sax Band");
}

#[tokio::test]
async fn test_malformed_bodies_are_validation_errors() {
    let (app, _) = setup();

    let mut body = venue_body("The Musical Hop", "San Francisco", "CA");
    body["genres"] = json!(["Polka"]);
    let (status, res) = make_request(&app, Method::POST, "/api/v1/venues", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res["status"], "error");

    let (status, _) = make_request(
        &app,
        Method::POST,
        "/api/v1/shows",
        Some(json!({ "artist_id": "not-a-uuid", "venue_id": uuid::Uuid::new_v4(), "start_time": "tomorrow" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, venues) = make_request(&app, Method::GET, "/api/v1/venues", None).await;
    assert_eq!(venues["data"], json!([]));
}

#[tokio::test]
async fn test_genre_choices() {
    let (app, _) = setup();
    let (status, body) = make_request(&app, Method::GET, "/api/v1/genres", None).await;
    assert_eq!(status, StatusCode::OK);
    let genres = body["data"].as_array().unwrap();
    assert_eq!(genres.len(), 19);
    assert!(genres.contains(&json!("Hip-Hop")));
    assert!(genres.contains(&json!("Rock n Roll")));
}

#[tokio::test]
async fn test_search_term_is_trimmed() {
    let (app, _) = setup();
    for name in ["The Musical Hop", "Park Square Live Music & Coffee", "The Dueling Pianos Bar"] {
        create(&app, "/api/v1/venues", venue_body(name, "San Francisco", "CA")).await;
    }
    create(&app, "/api/v1/artists", artist_body("The Wild Sax Band")).await;

    let (status, hop) = make_request(&app, Method::POST, "/api/v1/venues/search", Some(json!({ "search_term": "hop " }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&hop), vec!["The Musical Hop"]);

    let (_, music) = make_request(&app, Method::POST, "/api/v1/venues/search", Some(json!({ "search_term": "  Music  " }))).await;
    assert_eq!(music["data"]["count"], 2);

    let (_, blank) = make_request(&app, Method::POST, "/api/v1/venues/search", Some(json!({ "search_term": "   " }))).await;
    assert_eq!(blank["data"]["count"], 3);

    let (_, band) = make_request(&app, Method::POST, "/api/v1/artists/search", Some(json!({ "search_term": "\tsax band\n" }))).await;
    assert_eq!(names(&band), vec!["The Wild Sax Band"]);
}

#[tokio::test]
async fn test_phone_longer_than_column_is_rejected() {
    let (app, _) = setup();
    let padded = format!("415{}0001234", " ".repeat(200));

    let mut venue = venue_body("The Musical Hop", "San Francisco", "CA");
    venue["phone"] = json!(padded);
    let (status, body) = make_request(&app, Method::POST, "/api/v1/venues", Some(venue)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Phone is too long");

    let id = create(&app, "/api/v1/artists", artist_body("Matt Quevado")).await;
    let mut edit = artist_body("Matt Quevado");
    edit["phone"] = json!(padded);
    let (status, _) = make_request(&app, Method::PUT, &format!("/api/v1/artists/{}", id), Some(edit)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, stored) = make_request(&app, Method::GET, &format!("/api/v1/artists/{}/edit", id), None).await;
    assert_eq!(stored["data"]["phone"], "326-123-5000");

    let (_, venues) = make_request(&app, Method::GET, "/api/v1/venues", None).await;
    assert_eq!(venues["data"], json!([]));
}

#[tokio::test]
async fn test_malformed_ids_use_the_error_envelope() {
    let (app, _) = setup();

    for (method, path) in [
        (Method::GET, "/api/v1/venues/abc"),
        (Method::GET, "/api/v1/venues/abc/edit"),
        (Method::GET, "/api/v1/venues/abc/shows"),
        (Method::DELETE, "/api/v1/venues/abc"),
        (Method::GET, "/api/v1/artists/abc"),
        (Method::GET, "/api/v1/artists/abc/shows"),
        (Method::DELETE, "/api/v1/artists/abc"),
        (Method::GET, "/api/v1/shows/abc"),
    ] {
        let (status, body) = make_request(&app, method, path, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", path);
        assert_eq!(body["status"], "error", "{}", path);
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()), "{}", path);
    }

    let (status, body) = make_request(
        &app,
        Method::PUT,
        "/api/v1/venues/abc",
        Some(venue_body("The Musical Hop", "San Francisco", "CA")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

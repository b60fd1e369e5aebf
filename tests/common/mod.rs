// Shared test fixtures: card builders and a fake svgdb upstream.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use svgdb_mirror::catalog::{CanonicalCard, CardType, Craft, Rarity};

pub fn card(id: u32) -> CanonicalCard {
    card_of_type(id, CardType::Follower)
}

pub fn card_of_type(id: u32, card_type: CardType) -> CanonicalCard {
    CanonicalCard {
        id,
        name: format!("Test Card {id}"),
        cost: 3,
        craft: Craft::Runecraft,
        rarity: Rarity::Gold,
        card_type,
        card_trait: "Mage".to_string(),
        expansion: "Classic".to_string(),
        base_effect: "Fanfare: Draw a card.".to_string(),
        base_flavor: "A card for testing.".to_string(),
        rotation: true,
        base_attack: 3,
        base_defense: 2,
        evo_attack: 5,
        evo_defense: 4,
        evo_effect: "Evolve: Draw a card.".to_string(),
        evo_flavor: "An evolved card for testing.".to_string(),
        tokens: vec![],
        alts: vec![],
        restricted_count: 3,
        restricted_count_main: 3,
        restricted_count_sub: 3,
        resurgent_card: None,
        original_card: None,
        artist: "Test Artist".to_string(),
    }
}

/// A small but valid PNG, decodable by the persist worker's re-encode step.
pub fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([120, 80, 200, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

/// Fake upstream. Asset filenames (e.g. "70.png") listed in `missing_assets`
/// return 404; those in `broken_assets` return 500.
#[derive(Clone, Default)]
pub struct MockSvgdb {
    pub cards: Vec<CanonicalCard>,
    pub censored: Vec<u32>,
    pub missing_assets: HashSet<String>,
    pub broken_assets: HashSet<String>,
}

/// Serve the mock on a random port; returns the base URL ("http://addr/").
pub async fn start_server(mock: MockSvgdb) -> String {
    let state = Arc::new(mock);
    let app = Router::new()
        .route("/api/en", get(catalog_handler))
        .route("/api/censored", get(censored_handler))
        .route("/assets/fullart/{file}", get(art_handler))
        .route("/assets/censored/{file}", get(art_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

async fn catalog_handler(State(mock): State<Arc<MockSvgdb>>) -> Json<serde_json::Value> {
    let map: serde_json::Map<String, serde_json::Value> = mock
        .cards
        .iter()
        .map(|c| (c.id.to_string(), serde_json::to_value(c).unwrap()))
        .collect();
    Json(serde_json::Value::Object(map))
}

async fn censored_handler(State(mock): State<Arc<MockSvgdb>>) -> Json<Vec<u32>> {
    Json(mock.censored.clone())
}

async fn art_handler(State(mock): State<Arc<MockSvgdb>>, Path(file): Path<String>) -> Response {
    if mock.missing_assets.contains(&file) {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }
    if mock.broken_assets.contains(&file) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    ([(header::CONTENT_TYPE, "image/png")], tiny_png()).into_response()
}

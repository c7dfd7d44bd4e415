use crate::bootstrap::{AppState, MapConfig, MarkerIcons};
use crate::config::DEFAULT_TILE_URL;
use crate::estates::{EstateSource, EstateView, FetchError, ResponseEnvelope};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Body;
use serde_json::{json, Value};
use std::io::Read;
use std::sync::{Arc, RwLock};

/// Serves a canned feed body.
pub struct JsonSource(pub Value);

impl EstateSource for JsonSource {
    fn fetch(&self) -> Result<ResponseEnvelope, FetchError> {
        serde_json::from_value(self.0.clone()).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Always fails like a dropped connection.
pub struct FailingSource;

impl EstateSource for FailingSource {
    fn fetch(&self) -> Result<ResponseEnvelope, FetchError> {
        Err(FetchError::Network("connection reset by peer".into()))
    }
}

pub fn estate(title: &str, city: &str, net_yield: f64, longitude: f64, latitude: f64) -> Value {
    json!({
        "id": title,
        "title": title,
        "link": format!("https://example.com/{}", title.replace(' ', "-")),
        "type": "flat",
        "price": 2_500_000,
        "net_yield": net_yield,
        "timestamp": "2020-01-01T00:00:00Z",
        "longitude": longitude,
        "latitude": latitude,
        "city": { "name": city }
    })
}

pub fn feed(estates: Vec<Value>) -> Value {
    json!({ "estates": estates, "info": { "date": "2020-01-01" } })
}

fn state_with(view: Arc<RwLock<EstateView>>) -> AppState {
    AppState {
        view,
        map: MapConfig::new(DEFAULT_TILE_URL),
        icons: MarkerIcons::default(),
    }
}

/// App state whose fetch has already finished.
pub fn mounted_state(source: impl EstateSource + 'static) -> AppState {
    let (view, fetch) = EstateView::mount(Arc::new(source));
    fetch.join().expect("fetch thread panicked");
    state_with(view)
}

/// App state still waiting on its fetch.
pub fn loading_state() -> AppState {
    state_with(Arc::new(RwLock::new(EstateView::new())))
}

/// Runs a GET through the router the way the server does and returns
/// status and body.
pub fn get(state: &AppState, uri: &str) -> (u16, String) {
    let req = http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    };

    let status = resp.status().as_u16();
    let mut body = resp.into_body();
    let mut text = String::new();
    body.reader().read_to_string(&mut text).unwrap();

    (status, text)
}

// bootstrap.rs
//
// One-time process setup: logging, map/marker defaults and mounting the
// estate view.

use crate::config::Config;
use crate::domain::geo::LatLng;
use crate::estates::{EstateClient, EstateView, FetchError, SharedView};
use serde::Serialize;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

const LEAFLET_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.5.1";

pub const ATTRIBUTION: &str = r#"&copy; <a href="https://carto.com/attribution">CARTO</a>"#;

/// Shared with every request handler.
pub struct AppState {
    pub view: SharedView,
    pub map: MapConfig,
    pub icons: MarkerIcons,
}

const DEFAULT_LOG_FILTER: &str = "info";

pub fn init_logger() {
    pretty_env_logger::formatted_builder()
        .parse_filters(&log_filters(std::env::var("RUST_LOG").ok()))
        .init();
}

/// `RUST_LOG` when set and non-blank, `info` otherwise.
fn log_filters(rust_log: Option<String>) -> String {
    rust_log
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Default Leaflet marker images, served from the CDN instead of the
/// library's bundled relative paths.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcons {
    pub icon_retina_url: String,
    pub icon_url: String,
    pub shadow_url: String,
}

impl Default for MarkerIcons {
    fn default() -> Self {
        Self {
            icon_retina_url: format!("{LEAFLET_CDN}/images/marker-icon-2x.png"),
            icon_url: format!("{LEAFLET_CDN}/images/marker-icon.png"),
            shadow_url: format!("{LEAFLET_CDN}/images/marker-shadow.png"),
        }
    }
}

impl MarkerIcons {
    /// `L.Icon.Default.mergeOptions(...)` call for the page head.
    pub fn merge_options_script(&self) -> String {
        let options = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        format!("L.Icon.Default.mergeOptions({options});")
    }
}

pub fn leaflet_css_url() -> String {
    format!("{LEAFLET_CDN}/leaflet.css")
}

pub fn leaflet_js_url() -> String {
    format!("{LEAFLET_CDN}/leaflet.js")
}

/// Initial map setup handed to the browser.
#[derive(Debug, Clone, Serialize)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub zoom_snap: f64,
    pub tile_url: String,
    pub attribution: String,
    pub renderer_padding: f64,
    #[serde(skip)]
    pub height_px: u32,
}

impl MapConfig {
    pub fn new(tile_url: impl Into<String>) -> Self {
        Self {
            center: LatLng::new(49.1871391961252, 16.5481395721436),
            zoom: 9.0,
            zoom_snap: 0.5,
            tile_url: tile_url.into(),
            attribution: ATTRIBUTION.to_string(),
            renderer_padding: 0.1,
            height_px: 300,
        }
    }
}

/// Builds the app state and kicks off the one listings fetch.
pub fn mount(config: &Config) -> Result<(AppState, JoinHandle<()>), FetchError> {
    let client = EstateClient::new(
        config.data_url.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
    )?;
    log::info!("Estate feed: {}", client.data_url());

    let (view, fetch) = EstateView::mount(Arc::new(client));

    let state = AppState {
        view,
        map: MapConfig::new(config.tile_url.clone()),
        icons: MarkerIcons::default(),
    };

    Ok((state, fetch))
}

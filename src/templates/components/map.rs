use crate::bootstrap::MapConfig;
use crate::domain::geo::LatLng;
use crate::estates::{Estate, EstateQuery, EstateView, Info};
use crate::templates::filters::to_percentage;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

/// Draws markers from `/estates.json` and reports pan/zoom bounds back
/// through the filter form. Bounds stay unset until the first move. Only the
/// newest marker request may redraw the layer.
const MAP_SCRIPT: &str = r#"
(function () {
  var config = JSON.parse(document.getElementById('estate-map-config').textContent);
  var form = document.getElementById('estate-filter');
  var map = L.map('estate-map', { zoomSnap: config.zoom_snap }).setView(config.center, config.zoom);
  L.tileLayer(config.tile_url, { attribution: config.attribution }).addTo(map);
  var renderer = L.canvas({ padding: config.renderer_padding });
  var markers = L.layerGroup().addTo(map);
  var latestRequest = 0;

  function drawMarkers() {
    var request = ++latestRequest;
    var params = new URLSearchParams(new FormData(form));
    fetch('/estates.json?' + params.toString())
      .then(function (resp) { return resp.json(); })
      .then(function (data) {
        if (request !== latestRequest) {
          return;
        }
        markers.clearLayers();
        data.markers.forEach(function (m) {
          L.circleMarker(m.lat_lng, { radius: m.radius, color: m.color, renderer: renderer })
            .bindPopup(m.popup)
            .addTo(markers);
        });
        if (data.loading) {
          setTimeout(function () {
            if (request === latestRequest) {
              drawMarkers();
            }
          }, 1000);
        }
      });
  }

  function boundsUpdated() {
    var bounds = map.getBounds();
    var sw = bounds.getSouthWest();
    var ne = bounds.getNorthEast();
    form.elements.sw_lat.value = sw.lat;
    form.elements.sw_lng.value = sw.lng;
    form.elements.ne_lat.value = ne.lat;
    form.elements.ne_lng.value = ne.lng;
    htmx.trigger(form, 'bounds');
    drawMarkers();
  }

  map.on('moveend', boundsUpdated);
  document.getElementById('search').addEventListener('input', drawMarkers);
  drawMarkers();
})();
"#;

pub fn estate_map(config: &MapConfig) -> Markup {
    // `</` would end the script element early.
    let config_json = serde_json::to_string(config)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    html! {
        div id="estate-map" style=(format!("height: {}px;", config.height_px)) {}
        script type="application/json" id="estate-map-config" { (PreEscaped(config_json)) }
        script { (PreEscaped(MAP_SCRIPT)) }
    }
}

#[derive(Debug, Serialize)]
pub struct Marker {
    pub lat_lng: LatLng,
    pub radius: u32,
    pub color: &'static str,
    /// Pre-rendered popup HTML.
    pub popup: String,
}

impl Marker {
    pub fn from_estate(estate: &Estate) -> Self {
        Self {
            lat_lng: estate.lat_lng,
            radius: estate.radius,
            color: estate.color,
            popup: popup(estate).into_string(),
        }
    }
}

fn popup(estate: &Estate) -> Markup {
    html! {
        a target="_blank" href=(estate.raw.link) { (estate.raw.title) }
        ", " (to_percentage(estate.raw.net_yield, None))
    }
}

#[derive(Debug, Serialize)]
pub struct MarkerFeed<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub info: Option<&'a Info>,
    pub count: usize,
    pub markers: Vec<Marker>,
}

/// One marker per filtered estate.
pub fn marker_feed<'a>(view: &'a EstateView, query: &EstateQuery) -> MarkerFeed<'a> {
    let markers: Vec<Marker> = view
        .filtered_estates(&query.state)
        .into_iter()
        .map(Marker::from_estate)
        .collect();

    MarkerFeed {
        loading: view.is_loading(),
        error: view.error(),
        info: view.info(),
        count: markers.len(),
        markers,
    }
}

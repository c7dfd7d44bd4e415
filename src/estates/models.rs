use crate::domain::color::get_color;
use crate::domain::geo::{Crs, LatLng, Point};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// envelope
//  ├── estates[]
//  │    ├── id
//  │    ├── title
//  │    ├── link
//  │    ├── type
//  │    ├── price
//  │    ├── net_yield      (fraction, 0.07 == 7%)
//  │    ├── timestamp
//  │    ├── longitude
//  │    ├── latitude
//  │    └── city
//  │         └── name
//  └── info
//       └── date

pub const MARKER_RADIUS: u32 = 2;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub estates: Option<Vec<RawEstateRecord>>,
    #[serde(default)]
    pub info: Option<Info>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEstateRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub estate_type: String,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub net_yield: Option<f64>,
    #[serde(default)]
    pub timestamp: Value,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: City,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A listing ready for display: the raw record plus its marker placement,
/// size and color. Built once per fetch and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estate {
    #[serde(flatten)]
    pub raw: RawEstateRecord,
    pub lat_lng: LatLng,
    pub radius: u32,
    pub color: &'static str,
}

impl Estate {
    /// The feed's `longitude`/`latitude` pair is a projected point, so it is
    /// unprojected to get the marker position.
    pub fn from_raw(raw: RawEstateRecord) -> Self {
        let lat_lng = Crs::Epsg4326.unproject(Point::new(raw.longitude, raw.latitude));
        let color = get_color(raw.net_yield.unwrap_or(0.0) * 100.0);

        Self {
            raw,
            lat_lng,
            radius: MARKER_RADIUS,
            color,
        }
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    pub fn city_name(&self) -> &str {
        &self.raw.city.name
    }
}

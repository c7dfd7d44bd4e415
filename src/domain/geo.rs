// src/domain/geo.rs

use serde::{Deserialize, Serialize};

/// A point in projected (map-plane) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Coordinate reference systems the map knows how to (un)project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crs {
    /// Plate carrée: x is longitude, y is latitude.
    Epsg4326,
}

impl Crs {
    pub fn project(self, latlng: LatLng) -> Point {
        match self {
            Crs::Epsg4326 => Point::new(latlng.lng, latlng.lat),
        }
    }

    pub fn unproject(self, point: Point) -> LatLng {
        match self {
            Crs::Epsg4326 => LatLng::new(point.y, point.x),
        }
    }
}

/// Visible map region as projected corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub south_west: Point,
    pub north_east: Point,
}

impl ViewportBounds {
    /// Longitude is closed on both ends, latitude is half-open: `[sw.y, ne.y)`.
    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        longitude >= self.south_west.x
            && latitude >= self.south_west.y
            && longitude <= self.north_east.x
            && latitude < self.north_east.y
    }
}

/// A pan/zoom notification from the map widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundsEvent {
    pub south_west: Option<LatLng>,
    pub north_east: Option<LatLng>,
}

impl BoundsEvent {
    /// Converts the event corners into projected bounds. `None` when the
    /// event does not carry a full corner pair.
    pub fn to_bounds(&self) -> Option<ViewportBounds> {
        let south_west = self.south_west?;
        let north_east = self.north_east?;

        Some(ViewportBounds {
            south_west: Crs::Epsg4326.project(south_west),
            north_east: Crs::Epsg4326.project(north_east),
        })
    }
}

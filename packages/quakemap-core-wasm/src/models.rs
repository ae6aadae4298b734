// This is the models module containing shared data structures
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Earthquake summary feed (USGS GeoJSON). Unknown properties are ignored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EarthquakeFeed {
    #[serde(default)]
    pub features: Vec<EarthquakeFeature>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EarthquakeFeature {
    pub geometry: PointGeometry,
    pub properties: QuakeProperties,
}

/// Point geometry as delivered by the feed: `[lng, lat, depth]`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PointGeometry {
    pub coordinates: Vec<f64>,
}

/// The feed reports null magnitude/place for some unreviewed events,
/// so both fields stay optional here.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QuakeProperties {
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub place: Option<String>,
}

/// Tectonic plate boundary feed (PB2002).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlateBoundaryFeed {
    #[serde(default)]
    pub features: Vec<PlateBoundaryFeature>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlateBoundaryFeature {
    pub geometry: BoundaryGeometry,
}

/// Boundary coordinates are kept untyped: a segment is a sequence of
/// `[lng, lat]` pairs, but some features nest one extra level for
/// multi-segment boundaries.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BoundaryGeometry {
    pub coordinates: serde_json::Value,
}

/// Visual descriptor for one earthquake marker. Computed per render
/// pass, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerDescriptor {
    /// Event epicenter, x = longitude, y = latitude.
    pub position: Point<f64>,
    /// Circle radius in meters, derived from magnitude.
    pub radius: f64,
    /// Fill color, derived from depth.
    pub fill_color: &'static str,
    pub popup: String,
}

/// Visual descriptor for one plate boundary segment.
#[derive(Clone, Debug, PartialEq)]
pub struct PolylineDescriptor {
    /// Path in rendering order: `[lat, lng]` pairs.
    pub path: Vec<[f64; 2]>,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TileProvider {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
}

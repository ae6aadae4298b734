// Per-feature transforms: raw feed records into visual descriptors.

use geo_types::{Coord, Point};
use serde_json::Value;

use crate::models::{EarthquakeFeature, MarkerDescriptor, PlateBoundaryFeature, PolylineDescriptor};
use crate::style;

/// Build the marker descriptor for one earthquake event.
///
/// Feed coordinates are `[lng, lat, depth]`; rendering wants latitude
/// first, so the swap happens when the descriptor is turned into a
/// Leaflet latlng. Features with fewer than three coordinate components
/// are skipped rather than treated as errors.
pub fn to_marker(feature: &EarthquakeFeature) -> Option<MarkerDescriptor> {
    let coords = &feature.geometry.coordinates;
    if coords.len() < 3 {
        return None;
    }
    let (lng, lat, depth) = (coords[0], coords[1], coords[2]);
    let magnitude = feature.properties.mag.unwrap_or(0.0);
    let place = feature.properties.place.as_deref().unwrap_or("Unknown location");

    Some(MarkerDescriptor {
        position: Point::new(lng, lat),
        radius: style::marker_radius(magnitude),
        fill_color: style::marker_color(depth),
        popup: format!("<h4>{place}</h4><hr><p>Magnitude: {magnitude}</p><p>Depth: {depth}</p>"),
    })
}

/// Build the polyline descriptors for one plate boundary feature.
///
/// Each `[lng, lat]` pair is reversed to `[lat, lng]` exactly once.
/// Multi-segment boundaries (one extra nesting level) produce one
/// descriptor per segment; empty segments are dropped.
pub fn to_polylines(feature: &PlateBoundaryFeature) -> Vec<PolylineDescriptor> {
    segments(&feature.geometry.coordinates)
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| PolylineDescriptor {
            path: segment.into_iter().map(|c| [c.y, c.x]).collect(),
            color: style::PLATE_COLOR,
        })
        .collect()
}

/// One `[lng, lat]` position, tolerating a trailing depth component.
fn as_position(value: &Value) -> Option<Coord<f64>> {
    let pair = value.as_array()?;
    let x = pair.first()?.as_f64()?;
    let y = pair.get(1)?.as_f64()?;
    Some(Coord { x, y })
}

/// Normalize boundary coordinates to a list of segments. A flat
/// sequence of positions is a single segment; otherwise each element is
/// its own segment. Non-position entries are skipped.
fn segments(coordinates: &Value) -> Vec<Vec<Coord<f64>>> {
    let Some(items) = coordinates.as_array() else {
        return Vec::new();
    };
    if items.iter().any(|item| as_position(item).is_some()) {
        return vec![items.iter().filter_map(as_position).collect()];
    }
    items
        .iter()
        .map(|segment| match segment.as_array() {
            Some(positions) => positions.iter().filter_map(as_position).collect(),
            None => Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoundaryGeometry, PointGeometry, QuakeProperties};
    use serde_json::json;

    fn quake(coordinates: Vec<f64>, mag: Option<f64>, place: Option<&str>) -> EarthquakeFeature {
        EarthquakeFeature {
            geometry: PointGeometry { coordinates },
            properties: QuakeProperties {
                mag,
                place: place.map(str::to_string),
            },
        }
    }

    fn boundary(coordinates: Value) -> PlateBoundaryFeature {
        PlateBoundaryFeature {
            geometry: BoundaryGeometry { coordinates },
        }
    }

    #[test]
    fn marker_carries_position_radius_color_and_popup() {
        let feature = quake(vec![-62.8, 37.5, 42.0], Some(2.0), Some("120 km S of Atlantis"));
        let marker = to_marker(&feature).unwrap();

        assert_eq!(marker.position.x(), -62.8); // longitude
        assert_eq!(marker.position.y(), 37.5); // latitude
        assert_eq!(marker.radius, 28000.0);
        assert_eq!(marker.fill_color, "#FFA500"); // depth 42 -> third bucket
        assert_eq!(
            marker.popup,
            "<h4>120 km S of Atlantis</h4><hr><p>Magnitude: 2</p><p>Depth: 42</p>"
        );
    }

    #[test]
    fn marker_color_ignores_magnitude() {
        let shallow_strong = to_marker(&quake(vec![0.0, 0.0, 5.0], Some(8.0), None)).unwrap();
        let deep_weak = to_marker(&quake(vec![0.0, 0.0, 95.0], Some(0.5), None)).unwrap();
        assert_eq!(shallow_strong.fill_color, "#00FF00");
        assert_eq!(deep_weak.fill_color, "#800080");
    }

    #[test]
    fn marker_falls_back_on_missing_properties() {
        let marker = to_marker(&quake(vec![10.0, 20.0, 0.0], None, None)).unwrap();
        assert_eq!(marker.radius, 0.0);
        assert!(marker.popup.contains("Unknown location"));
        assert!(marker.popup.contains("Magnitude: 0"));
    }

    #[test]
    fn marker_skips_truncated_coordinates() {
        assert!(to_marker(&quake(vec![10.0, 20.0], Some(3.0), None)).is_none());
        assert!(to_marker(&quake(vec![], Some(3.0), None)).is_none());
    }

    #[test]
    fn polyline_swaps_axis_order_once() {
        let lines = to_polylines(&boundary(json!([[1.0, 2.0], [3.0, 4.0]])));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].path, vec![[2.0, 1.0], [4.0, 3.0]]);
        assert_eq!(lines[0].color, "yellow");
    }

    #[test]
    fn double_swap_restores_source_order() {
        let once = to_polylines(&boundary(json!([[1.0, 2.0], [3.0, 4.0]])));
        let swapped: Vec<Vec<f64>> = once[0].path.iter().map(|p| vec![p[0], p[1]]).collect();
        let twice = to_polylines(&boundary(json!(swapped)));
        assert_eq!(twice[0].path, vec![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn nested_segments_yield_one_polyline_each() {
        let lines = to_polylines(&boundary(json!([
            [[1.0, 2.0], [3.0, 4.0]],
            [[5.0, 6.0], [7.0, 8.0], [9.0, 10.0]]
        ])));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].path, vec![[2.0, 1.0], [4.0, 3.0]]);
        assert_eq!(lines[1].path.len(), 3);
    }

    #[test]
    fn positions_with_depth_component_are_accepted() {
        let lines = to_polylines(&boundary(json!([[1.0, 2.0, 0.0], [3.0, 4.0, 0.0]])));
        assert_eq!(lines[0].path, vec![[2.0, 1.0], [4.0, 3.0]]);
    }

    #[test]
    fn malformed_coordinates_yield_no_polylines() {
        assert!(to_polylines(&boundary(json!("not coordinates"))).is_empty());
        assert!(to_polylines(&boundary(json!([]))).is_empty());
        assert!(to_polylines(&boundary(json!([["a", "b"]]))).is_empty());
    }
}

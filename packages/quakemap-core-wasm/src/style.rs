// Fixed lookup tables for the map: depth color ladder, marker sizing,
// legend rows, base tile providers and the initial viewport.

use crate::models::{LegendEntry, TileProvider};

/// Scale factor applied to squared magnitude when sizing markers.
pub const RADIUS_SCALE: f64 = 7000.0;

/// Marker radius in meters. Deliberately unclamped: zero or negative
/// magnitudes yield a zero or near-zero radius.
pub fn marker_radius(magnitude: f64) -> f64 {
    magnitude * magnitude * RADIUS_SCALE
}

/// Upper bounds (exclusive) of the first five depth buckets, paired
/// with their colors. Depths past the last bound fall into the
/// catch-all bucket.
const DEPTH_STOPS: [(f64, &str); 5] = [
    (10.0, "#00FF00"), // green
    (30.0, "#FFFF00"), // yellow
    (50.0, "#FFA500"), // orange
    (70.0, "#FF4500"), // dark orange
    (90.0, "#FF0000"), // red
];

pub const DEPTH_CATCHALL_COLOR: &str = "#800080"; // purple

/// Marker fill color from event depth in km. The ladder partitions the
/// whole real line, so exactly one bucket matches any input.
pub fn marker_color(depth: f64) -> &'static str {
    for (limit, color) in DEPTH_STOPS {
        if depth < limit {
            return color;
        }
    }
    DEPTH_CATCHALL_COLOR
}

/// Legend rows, one per depth bucket, using the marker palette so the
/// swatches match what is drawn.
pub const LEGEND_ENTRIES: [LegendEntry; 6] = [
    LegendEntry { label: "-10-10", color: "#00FF00" },
    LegendEntry { label: "10-30", color: "#FFFF00" },
    LegendEntry { label: "30-50", color: "#FFA500" },
    LegendEntry { label: "50-70", color: "#FF4500" },
    LegendEntry { label: "70-90", color: "#FF0000" },
    LegendEntry { label: "90+", color: "#800080" },
];

pub const LEGEND_TITLE: &str = "Depth";

pub const TILE_PROVIDERS: [TileProvider; 3] = [
    TileProvider {
        name: "Street Map",
        url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
    },
    TileProvider {
        name: "Topographical",
        url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        attribution: "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)",
    },
    TileProvider {
        name: "Stylized topographical",
        url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
    },
];

/// Plate boundary stroke color.
pub const PLATE_COLOR: &str = "yellow";

/// Circle outline styling shared by all earthquake markers.
pub const MARKER_STROKE_COLOR: &str = "black";
pub const MARKER_WEIGHT: f64 = 0.5;
pub const MARKER_FILL_OPACITY: f64 = 0.75;

/// Initial viewport. Fixed by design, not fit to the data.
pub const INITIAL_CENTER: [f64; 2] = [37.5, -62.8];
pub const INITIAL_ZOOM: f64 = 3.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_ladder_matches_fixed_buckets() {
        assert_eq!(marker_color(5.0), "#00FF00");
        assert_eq!(marker_color(10.0), "#FFFF00");
        assert_eq!(marker_color(29.9), "#FFFF00");
        assert_eq!(marker_color(30.0), "#FFA500");
        assert_eq!(marker_color(50.0), "#FF4500");
        assert_eq!(marker_color(70.0), "#FF0000");
        assert_eq!(marker_color(90.0), "#800080");
        assert_eq!(marker_color(95.0), "#800080");
    }

    #[test]
    fn color_buckets_have_no_gap_at_boundaries() {
        // The ladder partitions the real line: values just below a bound
        // stay in the lower bucket, the bound itself moves up.
        assert_eq!(marker_color(9.999), "#00FF00");
        assert_eq!(marker_color(10.0), "#FFFF00");
        assert_eq!(marker_color(-25.0), "#00FF00");
        assert_eq!(marker_color(f64::MAX), "#800080");
    }

    #[test]
    fn every_depth_maps_to_one_of_six_colors() {
        let palette: Vec<&str> = LEGEND_ENTRIES.iter().map(|e| e.color).collect();
        for depth in [-10.0, 0.0, 9.0, 15.0, 35.0, 55.0, 75.0, 95.0, 700.0] {
            assert!(palette.contains(&marker_color(depth)));
        }
    }

    #[test]
    fn radius_is_squared_magnitude_times_scale() {
        assert_eq!(marker_radius(2.0), 28000.0);
        assert_eq!(marker_radius(0.0), 0.0);
        assert_eq!(marker_radius(1.0), 7000.0);
    }

    #[test]
    fn radius_is_monotone_for_nonnegative_magnitude() {
        let mags = [0.0, 0.1, 0.5, 1.0, 2.5, 4.0, 6.3, 9.5];
        for pair in mags.windows(2) {
            assert!(marker_radius(pair[0]) <= marker_radius(pair[1]));
        }
    }

    #[test]
    fn legend_labels_follow_the_ladder() {
        assert_eq!(LEGEND_ENTRIES.len(), 6);
        assert_eq!(LEGEND_ENTRIES[0].label, "-10-10");
        assert_eq!(LEGEND_ENTRIES[5].label, "90+");
        // Swatches reuse the marker palette.
        assert_eq!(LEGEND_ENTRIES[0].color, marker_color(0.0));
        assert_eq!(LEGEND_ENTRIES[5].color, marker_color(120.0));
    }
}

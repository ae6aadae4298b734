// Map composition: base tile layers, the two overlay groups, the layer
// control and the static legend, attached to one container element.

use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::models::{EarthquakeFeed, MarkerDescriptor, PlateBoundaryFeed};
use crate::{console_log, features, feeds, leaflet, style};

#[derive(Serialize)]
struct TileLayerOptions {
    attribution: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CircleOptions {
    stroke: bool,
    fill_opacity: f64,
    color: &'static str,
    fill_color: &'static str,
    radius: f64,
    weight: f64,
}

impl CircleOptions {
    fn for_marker(marker: &MarkerDescriptor) -> Self {
        CircleOptions {
            stroke: true,
            fill_opacity: style::MARKER_FILL_OPACITY,
            color: style::MARKER_STROKE_COLOR,
            fill_color: marker.fill_color,
            radius: marker.radius,
            weight: style::MARKER_WEIGHT,
        }
    }
}

#[derive(Serialize)]
struct PolylineOptions {
    color: &'static str,
}

#[derive(Serialize)]
struct LayerControlOptions {
    collapsed: bool,
}

#[derive(Serialize)]
struct ControlOptions {
    position: &'static str,
}

/// Fetch both feeds, then compose the interactive view inside the
/// container with the given id.
pub async fn render(container_id: &str) -> Result<leaflet::LeafletMap, JsValue> {
    let (quake_feed, plate_feed) = feeds::fetch_feeds().await?;
    compose(container_id, &quake_feed, &plate_feed)
}

fn compose(
    container_id: &str,
    quake_feed: &EarthquakeFeed,
    plate_feed: &PlateBoundaryFeed,
) -> Result<leaflet::LeafletMap, JsValue> {
    let mut base_layers = Vec::with_capacity(style::TILE_PROVIDERS.len());
    for provider in &style::TILE_PROVIDERS {
        let options = to_value(&TileLayerOptions {
            attribution: provider.attribution,
        })?;
        base_layers.push(leaflet::tile_layer(provider.url, &options));
    }

    let quake_overlay = quake_layer(quake_feed)?;
    let plate_overlay = plate_layer(plate_feed)?;

    // Street tiles plus both overlays are visible from the start.
    let default_layers = Array::new();
    default_layers.push(base_layers[0].as_ref());
    default_layers.push(quake_overlay.as_ref());
    default_layers.push(plate_overlay.as_ref());

    let map_options = Object::new();
    Reflect::set(
        &map_options,
        &JsValue::from_str("center"),
        &to_value(&style::INITIAL_CENTER)?,
    )?;
    Reflect::set(
        &map_options,
        &JsValue::from_str("zoom"),
        &JsValue::from_f64(style::INITIAL_ZOOM),
    )?;
    Reflect::set(&map_options, &JsValue::from_str("layers"), &default_layers)?;

    let map = leaflet::map(container_id, &map_options);

    let base_maps = Object::new();
    for (provider, layer) in style::TILE_PROVIDERS.iter().zip(&base_layers) {
        Reflect::set(&base_maps, &JsValue::from_str(provider.name), layer.as_ref())?;
    }
    let overlay_maps = Object::new();
    Reflect::set(
        &overlay_maps,
        &JsValue::from_str("Earthquakes"),
        quake_overlay.as_ref(),
    )?;
    Reflect::set(
        &overlay_maps,
        &JsValue::from_str("Tectonic Plates"),
        plate_overlay.as_ref(),
    )?;

    let layer_control_options = to_value(&LayerControlOptions { collapsed: false })?;
    leaflet::control_layers(&base_maps, &overlay_maps, &layer_control_options).add_to(&map);

    add_legend(&map)?;

    Ok(map)
}

/// One circle marker per well-formed earthquake feature. An empty feed
/// yields an empty layer group.
fn quake_layer(feed: &EarthquakeFeed) -> Result<leaflet::LayerGroup, JsValue> {
    let markers = Array::new();
    for feature in &feed.features {
        let Some(marker) = features::to_marker(feature) else {
            continue;
        };
        // Rendering wants latitude first.
        let latlng = to_value(&[marker.position.y(), marker.position.x()])?;
        let circle = leaflet::circle(&latlng, &to_value(&CircleOptions::for_marker(&marker))?);
        circle.bind_popup(&marker.popup);
        markers.push(circle.as_ref());
    }
    console_log!("earthquake overlay: {} markers", markers.length());
    Ok(leaflet::layer_group(&markers))
}

/// One polyline per plate boundary segment.
fn plate_layer(feed: &PlateBoundaryFeed) -> Result<leaflet::LayerGroup, JsValue> {
    let lines = Array::new();
    for feature in &feed.features {
        for descriptor in features::to_polylines(feature) {
            let path = to_value(&descriptor.path)?;
            let options = to_value(&PolylineOptions {
                color: descriptor.color,
            })?;
            lines.push(leaflet::polyline(&path, &options).as_ref());
        }
    }
    console_log!("plate boundary overlay: {} segments", lines.length());
    Ok(leaflet::layer_group(&lines))
}

/// Legend body: a title and one swatch/label row per depth bucket.
pub fn legend_html() -> String {
    let rows: String = style::LEGEND_ENTRIES
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="legend-row"><i style="background: {}"></i><span>{}</span></div>"#,
                entry.color, entry.label
            )
        })
        .collect();
    format!("<h5>{}</h5>{rows}", style::LEGEND_TITLE)
}

/// Static legend control at the bottom right, rendered once via
/// Leaflet's `onAdd` hook.
fn add_legend(map: &leaflet::LeafletMap) -> Result<(), JsValue> {
    let legend = leaflet::control(&to_value(&ControlOptions {
        position: "bottomright",
    })?);

    let on_add = Closure::<dyn FnMut() -> web_sys::HtmlElement>::new(move || {
        let div = leaflet::dom_util_create("div", "info legend");
        div.set_inner_html(&legend_html());
        div
    });
    Reflect::set(legend.as_ref(), &JsValue::from_str("onAdd"), on_add.as_ref())?;
    // The hook must stay alive for as long as the control exists.
    on_add.forget();

    legend.add_to(map);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_lists_all_six_buckets() {
        let html = legend_html();
        assert!(html.starts_with("<h5>Depth</h5>"));
        assert_eq!(html.matches("legend-row").count(), 6);
        for entry in &style::LEGEND_ENTRIES {
            assert!(html.contains(entry.color));
            assert!(html.contains(entry.label));
        }
    }
}

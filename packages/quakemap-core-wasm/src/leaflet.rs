// Bindings to the global Leaflet `L` namespace. Only the surface this
// crate composes with is bound; options objects are passed as plain JS
// values built by the caller.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// An initialized `L.map` instance.
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(container_id: &str, options: &JsValue) -> LeafletMap;

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    pub type Circle;

    #[wasm_bindgen(js_namespace = L, js_name = circle)]
    pub fn circle(latlng: &JsValue, options: &JsValue) -> Circle;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Circle, html: &str);

    pub type Polyline;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    pub fn polyline(latlngs: &JsValue, options: &JsValue) -> Polyline;

    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group(layers: &js_sys::Array) -> LayerGroup;

    /// A bare `L.control`; behavior is attached through its `onAdd` hook.
    pub type Control;

    #[wasm_bindgen(js_namespace = L, js_name = control)]
    pub fn control(options: &JsValue) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &LeafletMap);

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn control_layers(base_maps: &JsValue, overlay_maps: &JsValue, options: &JsValue) -> Control;

    #[wasm_bindgen(js_namespace = ["L", "DomUtil"], js_name = create)]
    pub fn dom_util_create(tag: &str, class_name: &str) -> web_sys::HtmlElement;
}

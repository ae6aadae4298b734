use wasm_bindgen::prelude::*;

// Create a console module for logging
pub mod console;
// Per-feature transforms into visual descriptors
pub mod features;
// Feed fetching (two chained GETs)
pub mod feeds;
// Bindings to the Leaflet global
pub mod leaflet;
// Map composition and legend
pub mod map;
// Shared data structures
pub mod models;
// Fixed lookup tables: colors, sizing, tiles, viewport
pub mod style;

// Enable better panic messages in console during development
#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::console::log(&format!($($t)*)))
}

#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => ($crate::console::error(&format!($($t)*)))
}

use std::sync::Once;
static INIT: Once = Once::new();

// This sets up the wasm_bindgen start functionality
#[wasm_bindgen(start)]
pub fn start() {
    INIT.call_once(|| {
        // Set the panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        console_log!("quakemap WASM module initialized");
    });
}

/// Entry point for the page: fetch both feeds and attach the map to the
/// container with the given element id.
///
/// A failed or malformed fetch aborts the pipeline with no partial
/// rendering; the error is logged to the console and a short diagnostic
/// is written into the container instead of failing silently.
#[wasm_bindgen]
pub async fn render_map(container_id: String) -> Result<(), JsValue> {
    match map::render(&container_id).await {
        Ok(_map) => Ok(()),
        Err(err) => {
            let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
            console_error!("map rendering aborted: {message}");
            show_failure(&container_id, &message);
            Err(err)
        }
    }
}

fn show_failure(container_id: &str, message: &str) {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(container_id));
    if let Some(element) = target {
        element.set_inner_html(&format!(
            "<p class=\"map-error\">Could not load map data: {message}</p>"
        ));
    }
}

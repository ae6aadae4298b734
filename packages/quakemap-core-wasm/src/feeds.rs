// Feed fetching. Two GETs, strictly sequential: the plate boundary
// request only starts once the earthquake feed has resolved and parsed.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::console_log;
use crate::models::{EarthquakeFeed, PlateBoundaryFeed};

/// USGS all-earthquakes summary for the past week.
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic plate boundaries.
pub const PLATE_BOUNDARY_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// GET a URL with the browser fetch API and resolve the body as JSON.
async fn fetch_json(url: &str) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object available"))?;
    let response = JsFuture::from(window.fetch_with_str(url)).await?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| JsValue::from_str("fetch did not yield a Response"))?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "GET {url} failed with status {}",
            response.status()
        )));
    }
    JsFuture::from(response.json()?).await
}

fn parse_feed<T: DeserializeOwned>(value: JsValue, url: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| JsValue::from_str(&format!("malformed feed from {url}: {err}")))
}

/// Fetch both feeds in order. Failure of either request or parse aborts
/// the whole pipeline; there is no retry and no partial result.
pub async fn fetch_feeds() -> Result<(EarthquakeFeed, PlateBoundaryFeed), JsValue> {
    let quakes: EarthquakeFeed =
        parse_feed(fetch_json(EARTHQUAKE_FEED_URL).await?, EARTHQUAKE_FEED_URL)?;
    console_log!("earthquake feed: {} features", quakes.features.len());

    let plates: PlateBoundaryFeed =
        parse_feed(fetch_json(PLATE_BOUNDARY_FEED_URL).await?, PLATE_BOUNDARY_FEED_URL)?;
    console_log!("plate boundary feed: {} features", plates.features.len());

    Ok((quakes, plates))
}

//! Leaflet Bindings
//!
//! Minimal bindings to the global `L` namespace (Leaflet is loaded as a
//! script in index.html), covering only what the Map and Plan pages use.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    /// `L.map(container)`
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);

    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn new_div_icon(options: &JsValue) -> DivIcon;
}

const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

#[derive(Serialize)]
struct TileLayerOptions {
    attribution: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions {
    html: String,
    class_name: &'static str,
    icon_size: [i32; 2],
    icon_anchor: [i32; 2],
    popup_anchor: [i32; 2],
}

#[derive(Serialize)]
struct FitBoundsOptions {
    padding: [i32; 2],
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

/// Map on the given container with the standard OpenStreetMap layer.
pub fn init_map(container: &web_sys::HtmlElement, center: (f64, f64), zoom: f64) -> LeafletMap {
    let map = new_map(container);
    map.set_view(&to_js(&[center.0, center.1]), zoom);
    new_tile_layer(OSM_TILE_URL, &to_js(&TileLayerOptions { attribution: OSM_ATTRIBUTION }))
        .add_to(&map);
    map
}

/// Marker with the given icon, added to the map.
pub fn add_marker(map: &LeafletMap, lat: f64, lon: f64, icon: &DivIcon, popup_html: &str) -> Marker {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("icon"), icon);
    new_marker(&to_js(&[lat, lon]), &options)
        .add_to(map)
        .bind_popup(popup_html)
}

/// Fit the view to a set of coordinates: one point recentres at zoom 13,
/// several fit bounds with padding.
pub fn fit_to_coords(map: &LeafletMap, coords: &[(f64, f64)]) {
    match coords {
        [] => {}
        [(lat, lon)] => {
            map.set_view(&to_js(&[*lat, *lon]), 13.0);
        }
        many => {
            let bounds: Vec<[f64; 2]> = many.iter().map(|(lat, lon)| [*lat, *lon]).collect();
            map.fit_bounds(&to_js(&bounds), &to_js(&FitBoundsOptions { padding: [40, 40] }));
        }
    }
}

/// Colored SVG pin in the shape of the stock Leaflet marker.
pub fn make_pin_icon(color: &str, outline: &str) -> DivIcon {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 25 41" width="25" height="41">
    <path d="M12.5 0C5.597 0 0 5.597 0 12.5c0 9.374 12.5 28.5 12.5 28.5S25 21.874 25 12.5C25 5.597 19.403 0 12.5 0z"
      fill="{color}" stroke="{outline}" stroke-width="1.5"/>
    <circle cx="12.5" cy="12.5" r="5" fill="white" opacity="0.85"/>
  </svg>"#
    );
    new_div_icon(&to_js(&DivIconOptions {
        html: svg,
        class_name: "",
        icon_size: [25, 41],
        icon_anchor: [12, 41],
        popup_anchor: [1, -34],
    }))
}

/// Blue pin for browse/map markers.
pub fn default_pin_icon() -> DivIcon {
    make_pin_icon("#3b82f6", "#1d4ed8")
}

/// Green pin for planned stops.
pub fn plan_pin_icon() -> DivIcon {
    make_pin_icon("#10b981", "#059669")
}

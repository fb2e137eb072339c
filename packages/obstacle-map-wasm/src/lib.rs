use wasm_bindgen::prelude::*;

// Create a console module for logging
pub mod console;
// Error type shared by every module
pub mod error;
// Shared data structures
pub mod models;
// Severity to color policy
pub mod severity;
// Page configuration
pub mod config;
// Marker data sources
pub mod source;
// Map and list capability traits
pub mod map;
// List and marker rendering
pub mod presenter;
// Google Maps JS API bindings
pub mod google;
// Sidebar list and page helpers
pub mod dom;
// Startup sequence
pub mod bootstrap;

pub use bootstrap::ObstacleMap;

// Enable better panic messages in console during development
#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::console::log(&format!($($t)*)))
}

#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => ($crate::console::warn(&format!($($t)*)))
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

        console_log!("WASM module initialized successfully");
    });
}

/// Entry point for the page: load the maps library, build the map in
/// `config.dom.mapContainer` and render the markers and the sidebar list.
///
/// A library load failure is logged to the console and rejects the promise.
#[wasm_bindgen]
pub async fn launch(config: JsValue) -> Result<ObstacleMap, JsValue> {
    let launched = match bootstrap::decode_config(config) {
        Ok(config) => bootstrap::bootstrap(config).await,
        Err(e) => Err(e),
    };
    launched.map_err(|e| {
        console_error!("{}", e);
        e.into()
    })
}

/// Marker fill color for a severity level, for pages that want to draw a legend.
#[wasm_bindgen]
pub fn marker_color(severity: i32) -> String {
    severity::marker_color(models::Severity(severity.into())).to_string()
}

/// List highlight class for a severity level, `undefined` when there is none.
#[wasm_bindgen]
pub fn list_class(severity: i32) -> Option<String> {
    severity::list_class(models::Severity(severity.into())).map(str::to_string)
}

/// The mock markers as a GeoJSON `FeatureCollection` string.
#[wasm_bindgen]
pub fn mock_markers_geojson() -> Result<String, JsValue> {
    use source::MarkerSource;
    Ok(source::to_geojson(&source::StaticSource.load()?)?)
}

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::models::LatLng;

pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 46.208138,
    lng: 14.860664,
};
pub const DEFAULT_ZOOM: f64 = 14.0;
pub const DEFAULT_MAP_ID: &str = "6c66ec448a80214c";
pub const DEFAULT_VERSION: &str = "weekly";
pub const DEFAULT_MAP_CONTAINER: &str = "map";
pub const DEFAULT_LIST_CONTAINER: &str = "markerList";

// Zoom range accepted by the maps library
const MIN_ZOOM: f64 = 0.0;
const MAX_ZOOM: f64 = 22.0;

/// Options handed to `@googlemaps/js-api-loader`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderOptions {
    pub api_key: String,
    pub version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub libraries: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            version: DEFAULT_VERSION.to_string(),
            libraries: Vec::new(),
        }
    }
}

/// Options handed to the `google.maps.Map` constructor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub map_id: String,
    // e.g. "hybrid" for satellite imagery with labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_type_id: Option<String>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            map_id: DEFAULT_MAP_ID.to_string(),
            map_type_id: None,
        }
    }
}

/// Ids of the page elements the app writes into.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DomIds {
    pub map_container: String,
    pub list_container: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            map_container: DEFAULT_MAP_CONTAINER.to_string(),
            list_container: DEFAULT_LIST_CONTAINER.to_string(),
        }
    }
}

/// GeoJSON overlay drawn on the map's data layer. Clicking any of its
/// shapes opens a popup with `popup_image`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverlayConfig {
    pub url: String,
    pub popup_image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub loader: LoaderOptions,
    pub map: MapOptions,
    pub dom: DomIds,
    pub overlay: Option<OverlayConfig>,
    /// CSS `background` written on the list container
    pub sidebar_gradient: Option<String>,
    /// GeoJSON `FeatureCollection` text; the mock set is used when absent
    pub markers: Option<String>,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text).map_err(MapError::config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.loader.api_key.trim().is_empty() {
            return Err(MapError::config("loader.apiKey is required"));
        }
        if self.loader.version.trim().is_empty() {
            return Err(MapError::config("loader.version must not be empty"));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.map.zoom) {
            return Err(MapError::config(format!(
                "map.zoom {} outside {}..={}",
                self.map.zoom, MIN_ZOOM, MAX_ZOOM
            )));
        }
        let LatLng { lat, lng } = self.map.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(MapError::config(format!("map.center ({}, {}) is not a valid point", lat, lng)));
        }
        if self.dom.map_container.is_empty() || self.dom.list_container.is_empty() {
            return Err(MapError::config("dom element ids must not be empty"));
        }
        if let Some(overlay) = &self.overlay {
            if overlay.url.is_empty() {
                return Err(MapError::config("overlay.url must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config = AppConfig::from_json(r#"{ "loader": { "apiKey": "test-key" } }"#).unwrap();
        assert_eq!(config.loader.version, "weekly");
        assert!(config.loader.libraries.is_empty());
        assert_eq!(config.map.center, DEFAULT_CENTER);
        assert_eq!(config.map.zoom, 14.0);
        assert_eq!(config.map.map_id, "6c66ec448a80214c");
        assert_eq!(config.dom.map_container, "map");
        assert_eq!(config.dom.list_container, "markerList");
        assert!(config.overlay.is_none());
        assert!(config.markers.is_none());
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = AppConfig::from_json("{}").unwrap_err();
        assert!(matches!(err, MapError::Config(ref msg) if msg.contains("apiKey")));
    }

    #[test]
    fn full_config_round_trips_option_names() {
        let config = AppConfig::from_json(
            r#"{
                "loader": { "apiKey": "k", "version": "beta", "libraries": ["places"] },
                "map": { "center": { "lat": 1.5, "lng": 2.5 }, "zoom": 9, "mapId": "abc", "mapTypeId": "hybrid" },
                "dom": { "mapContainer": "m", "listContainer": "l" },
                "overlay": { "url": "rivers.geojson", "popupImage": "img/river.png" },
                "sidebarGradient": "linear-gradient(#fff, #ccc)"
            }"#,
        )
        .unwrap();
        assert_eq!(config.loader.libraries, vec!["places".to_string()]);
        assert_eq!(config.map.map_type_id.as_deref(), Some("hybrid"));
        assert_eq!(config.overlay.as_ref().unwrap().popup_image, "img/river.png");

        let loader = serde_json::to_value(&config.loader).unwrap();
        assert_eq!(loader["apiKey"], "k");
        let map = serde_json::to_value(&config.map).unwrap();
        assert_eq!(map["mapId"], "abc");
        assert_eq!(map["center"]["lat"], 1.5);
    }

    #[test]
    fn unset_optional_options_are_not_sent() {
        let map = serde_json::to_value(MapOptions::default()).unwrap();
        assert!(map.get("mapTypeId").is_none());
        let loader = serde_json::to_value(LoaderOptions::default()).unwrap();
        assert!(loader.get("libraries").is_none());
    }

    #[test]
    fn marker_click_zoom_is_not_configurable() {
        let config = AppConfig::from_json(
            r#"{ "loader": { "apiKey": "k" }, "presenter": { "markerZoom": 3 } }"#,
        )
        .unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("presenter").is_none());
        assert!(json.get("markerZoom").is_none());
    }

    #[test]
    fn out_of_range_zoom_is_rejected() {
        let err = AppConfig::from_json(r#"{ "loader": { "apiKey": "k" }, "map": { "zoom": 40 } }"#).unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }

    #[test]
    fn invalid_center_is_rejected() {
        let err = AppConfig::from_json(
            r#"{ "loader": { "apiKey": "k" }, "map": { "center": { "lat": 120, "lng": 0 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MapError::Config(_)));
    }
}

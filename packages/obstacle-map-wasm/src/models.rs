// This is the models module containing shared data structures
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Priority of a reported obstacle. 1 is low, 3 is high; other integers
/// are representable and fall through to the fallback styling.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Severity(pub i64);

impl Severity {
    pub const LOW: Severity = Severity(1);
    pub const MEDIUM: Severity = Severity(2);
    pub const HIGH: Severity = Severity(3);
}

/// A point in the shape the maps library expects: `{ lat, lng }`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// GeoJSON points are x = longitude, y = latitude
impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

impl From<LatLng> for Point<f64> {
    fn from(at: LatLng) -> Self {
        Point::new(at.lng, at.lat)
    }
}

/// One obstacle report shown both as a map marker and a sidebar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerFeature {
    pub coordinates: Point<f64>,
    pub name: String,
    pub description: String,
    pub severity: Severity,
}

impl MarkerFeature {
    pub fn new(lng: f64, lat: f64, name: &str, description: &str, severity: Severity) -> Self {
        Self {
            coordinates: Point::new(lng, lat),
            name: name.to_string(),
            description: description.to_string(),
            severity,
        }
    }

    pub fn position(&self) -> LatLng {
        self.coordinates.into()
    }
}

/// Counts reported back to the page after a render pass
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RenderSummary {
    pub list_items: usize,
    pub markers: usize,
}

/// GeoJSON-like wire shape for marker features:
/// `geometry.coordinates = [lng, lat]`, `properties.{name, description, severity}`.
pub mod wire {
    use super::{MarkerFeature, Severity};
    use geo_types::Point;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, Clone)]
    pub struct FeatureCollection {
        #[serde(default)]
        pub r#type: Option<String>,
        pub features: Vec<Feature>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone)]
    pub struct Feature {
        #[serde(default)]
        pub r#type: Option<String>,
        pub geometry: Geometry,
        pub properties: Properties,
    }

    #[derive(Serialize, Deserialize, Debug, Clone)]
    pub struct Geometry {
        #[serde(default)]
        pub r#type: Option<String>,
        pub coordinates: [f64; 2], // [lng, lat]
    }

    #[derive(Serialize, Deserialize, Debug, Clone)]
    pub struct Properties {
        pub name: String,
        pub description: String,
        pub severity: Severity,
    }

    impl From<Feature> for MarkerFeature {
        fn from(feature: Feature) -> Self {
            let [lng, lat] = feature.geometry.coordinates;
            MarkerFeature {
                coordinates: Point::new(lng, lat),
                name: feature.properties.name,
                description: feature.properties.description,
                severity: feature.properties.severity,
            }
        }
    }

    impl From<&MarkerFeature> for Feature {
        fn from(feature: &MarkerFeature) -> Self {
            Feature {
                r#type: Some("Feature".to_string()),
                geometry: Geometry {
                    r#type: Some("Point".to_string()),
                    coordinates: [feature.coordinates.x(), feature.coordinates.y()],
                },
                properties: Properties {
                    name: feature.name.clone(),
                    description: feature.description.clone(),
                    severity: feature.severity,
                },
            }
        }
    }
}

use lazy_static::lazy_static;

use crate::console_error;
use crate::error::Result;
use crate::models::{wire, MarkerFeature, Severity};

lazy_static! {
    // Mock reports shown until a real feed is wired in
    static ref MOCK_FEATURES: Vec<MarkerFeature> = vec![
        MarkerFeature::new(
            14.858912,
            46.206944,
            "Savinja weir",
            "Floating debris collected upstream of the weir.",
            Severity::LOW,
        ),
        MarkerFeature::new(
            14.864207,
            46.210530,
            "Footbridge pillar",
            "Branches caught on the central pillar, partial blockage.",
            Severity::HIGH,
        ),
        MarkerFeature::new(
            14.853740,
            46.203318,
            "Mill channel inlet",
            "Plastic waste accumulating at the inlet grate.",
            Severity::MEDIUM,
        ),
    ];
}

/// Anything that can hand out the ordered list of markers to render.
pub trait MarkerSource {
    fn load(&self) -> Result<Vec<MarkerFeature>>;
}

/// The fixed three-entry mock data set.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSource;

impl MarkerSource for StaticSource {
    fn load(&self) -> Result<Vec<MarkerFeature>> {
        Ok(MOCK_FEATURES.clone())
    }
}

/// Markers decoded from a GeoJSON `FeatureCollection` held in memory.
#[derive(Debug, Clone)]
pub struct GeoJsonSource {
    text: String,
}

impl GeoJsonSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl MarkerSource for GeoJsonSource {
    fn load(&self) -> Result<Vec<MarkerFeature>> {
        let collection: wire::FeatureCollection = serde_json::from_str(&self.text)?;
        Ok(collection
            .features
            .into_iter()
            .map(MarkerFeature::from)
            .collect())
    }
}

/// Encode features back into the GeoJSON wire shape.
pub fn to_geojson(features: &[MarkerFeature]) -> Result<String> {
    let collection = wire::FeatureCollection {
        r#type: Some("FeatureCollection".to_string()),
        features: features.iter().map(wire::Feature::from).collect(),
    };
    Ok(serde_json::to_string(&collection)?)
}

/// Load markers, logging a failure and rendering nothing in that case.
pub fn load_or_log(source: &dyn MarkerSource) -> Vec<MarkerFeature> {
    match source.load() {
        Ok(features) => features,
        Err(e) => {
            console_error!("Failed to load markers: {}", e);
            Vec::new()
        }
    }
}

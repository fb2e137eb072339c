use std::rc::Rc;

use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::dom::{self, DomList};
use crate::error::{MapError, Result};
use crate::google::{self, GoogleMap};
use crate::map::MapCapability;
use crate::models::{MarkerFeature, RenderSummary};
use crate::presenter::{Presenter, PresenterOptions};
use crate::source::{self, GeoJsonSource, MarkerSource, StaticSource};
use crate::{console_log, console_warn};

/// Pick the marker source the configuration asks for.
pub fn marker_source(config: &AppConfig) -> Box<dyn MarkerSource> {
    match &config.markers {
        Some(text) => Box::new(GeoJsonSource::new(text.clone())),
        None => Box::new(StaticSource),
    }
}

/// A running map page. Keeps the map, the list and every click callback
/// alive; freeing it from JS removes the markers and list entries.
#[wasm_bindgen]
pub struct ObstacleMap {
    presenter: Presenter<GoogleMap, DomList>,
    features: Vec<MarkerFeature>,
    summary: RenderSummary,
}

#[wasm_bindgen]
impl ObstacleMap {
    /// Counts from the last render as `{ listItems, markers }`.
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.summary)?)
    }

    /// Render the same features again, replacing the previous views.
    pub fn rerender(&mut self) -> Result<JsValue, JsValue> {
        self.summary = self.presenter.render(&self.features)?;
        self.summary()
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.presenter.map().zoom()
    }
}

/// Load the maps library, build the map and render the markers.
pub async fn bootstrap(config: AppConfig) -> Result<ObstacleMap> {
    config.validate()?;

    google::load_library(&config.loader).await?;
    console_log!("Maps JS API loaded");

    let document = dom::document()?;
    let map_container = dom::element_by_id(&document, &config.dom.map_container)?;
    let list_container = dom::element_by_id(&document, &config.dom.list_container)?;

    let map = GoogleMap::new(document.clone(), &map_container, &config.map)?;
    if let Some(overlay) = &config.overlay {
        map.attach_overlay(overlay)?;
        console_log!("Loading overlay from {}", overlay.url);
    }
    if let Some(gradient) = &config.sidebar_gradient {
        dom::apply_background(&list_container, gradient)?;
    }

    let features = source::load_or_log(marker_source(&config).as_ref());
    if features.is_empty() {
        console_warn!("No markers to render");
    }
    let mut presenter = Presenter::new(
        Rc::new(map),
        DomList::new(document, list_container),
        PresenterOptions::default(),
    );
    let summary = presenter.render(&features)?;
    console_log!(
        "Rendered {} list items and {} markers",
        summary.list_items,
        summary.markers
    );

    Ok(ObstacleMap {
        presenter,
        features,
        summary,
    })
}

/// Decode the page's configuration object.
pub fn decode_config(value: JsValue) -> Result<AppConfig> {
    serde_wasm_bindgen::from_value(value).map_err(MapError::config)
}

// Bindings to the Google Maps JavaScript API and the map capability built on them
use std::cell::RefCell;

use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::config::{MapOptions, OverlayConfig};
use crate::error::{MapError, Result};
use crate::map::{MapCapability, MarkerHandler, MarkerId};
use crate::models::LatLng;
use crate::severity::MarkerIcon;

#[wasm_bindgen(module = "@googlemaps/js-api-loader")]
extern "C" {
    pub type Loader;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> Loader;

    #[wasm_bindgen(method)]
    pub fn load(this: &Loader) -> Promise;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(element: &Element, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, at: &JsValue);

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Map) -> Option<LatLngObject>;

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &Map, level: f64);

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &Map) -> Option<f64>;

    #[wasm_bindgen(method, getter)]
    pub fn data(this: &Map) -> Data;

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = LatLng)]
    pub type LatLngObject;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "LatLng")]
    pub fn new(lat: f64, lng: f64) -> LatLngObject;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLngObject) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLngObject) -> f64;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = getPosition)]
    pub fn get_position(this: &Marker) -> Option<LatLngObject>;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: Option<&Map>);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Marker, event: &str, handler: &Function) -> MapsEventListener;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new() -> InfoWindow;

    #[wasm_bindgen(method, js_name = setContent)]
    pub fn set_content(this: &InfoWindow, content: &Node);

    #[wasm_bindgen(method, js_name = setPosition)]
    pub fn set_position(this: &InfoWindow, at: &JsValue);

    // Legacy `open(map, anchor)` form
    #[wasm_bindgen(method, js_name = open)]
    pub fn open_at_marker(this: &InfoWindow, map: &Map, anchor: &Marker);

    #[wasm_bindgen(method, js_name = open)]
    pub fn open_on_map(this: &InfoWindow, map: &Map);

    #[wasm_bindgen(method)]
    pub fn close(this: &InfoWindow);

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Data;

    #[wasm_bindgen(method, js_name = loadGeoJson)]
    pub fn load_geo_json(this: &Data, url: &str);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Data, event: &str, handler: &Function) -> MapsEventListener;

    #[wasm_bindgen(js_namespace = ["google", "maps", "Data"], js_name = MouseEvent)]
    pub type DataMouseEvent;

    #[wasm_bindgen(method, getter, js_name = latLng)]
    pub fn lat_lng(this: &DataMouseEvent) -> Option<LatLngObject>;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type MapsEventListener;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapsEventListener);
}

impl From<LatLng> for LatLngObject {
    fn from(at: LatLng) -> Self {
        LatLngObject::new(at.lat, at.lng)
    }
}

impl From<&LatLngObject> for LatLng {
    fn from(at: &LatLngObject) -> Self {
        LatLng::new(at.lat(), at.lng())
    }
}

/// Request the maps library and wait until `google.maps` is usable.
pub async fn load_library(options: &crate::config::LoaderOptions) -> Result<()> {
    let loader = Loader::new(&to_value(options)?);
    wasm_bindgen_futures::JsFuture::from(loader.load())
        .await
        .map_err(MapError::library_load)?;
    Ok(())
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    position: LatLng,
    icon: &'a MarkerIcon,
    title: &'a str,
}

struct PlacedMarker {
    marker: Marker,
    listener: MapsEventListener,
    _on_click: Closure<dyn FnMut()>,
}

/// A `google.maps.Map` with the single popup and the markers placed on it.
pub struct GoogleMap {
    map: Map,
    document: Document,
    popup: InfoWindow,
    markers: RefCell<Vec<PlacedMarker>>,
    overlay_listener: RefCell<Option<(MapsEventListener, Closure<dyn FnMut(DataMouseEvent)>)>>,
}

impl GoogleMap {
    pub fn new(document: Document, container: &Element, options: &MapOptions) -> Result<Self> {
        let map = Map::new(container, &to_value(options)?);
        Ok(Self {
            map,
            document,
            popup: InfoWindow::new(),
            markers: RefCell::new(Vec::new()),
            overlay_listener: RefCell::new(None),
        })
    }

    /// Draw a GeoJSON file on the data layer. Clicking any shape opens the
    /// popup with a fixed image, whichever shape it was.
    pub fn attach_overlay(&self, overlay: &OverlayConfig) -> Result<()> {
        let data = self.map.data();
        data.load_geo_json(&overlay.url);

        let img = self.document.create_element("img").map_err(MapError::from_js)?;
        img.set_attribute("src", &overlay.popup_image).map_err(MapError::from_js)?;
        img.set_attribute("alt", "overlay").map_err(MapError::from_js)?;

        let map = self.map.clone();
        let popup = self.popup.clone();
        let on_click = Closure::<dyn FnMut(DataMouseEvent)>::new(move |event: DataMouseEvent| {
            popup.set_content(&img);
            if let Some(at) = event.lat_lng() {
                popup.set_position(&at);
            }
            popup.open_on_map(&map);
        });
        let listener = data.add_listener("click", on_click.as_ref().unchecked_ref());

        if let Some((previous, _)) = self.overlay_listener.borrow_mut().replace((listener, on_click)) {
            previous.remove();
        }
        Ok(())
    }
}

impl MapCapability for GoogleMap {
    fn set_center(&self, at: LatLng) {
        self.map.set_center(&LatLngObject::from(at));
    }

    fn set_zoom(&self, level: f64) {
        self.map.set_zoom(level);
    }

    fn zoom(&self) -> f64 {
        self.map.get_zoom().unwrap_or_default()
    }

    fn center(&self) -> Option<LatLng> {
        self.map.get_center().map(|at| LatLng::from(&at))
    }

    fn place_marker(
        &self,
        at: LatLng,
        icon: &MarkerIcon,
        title: &str,
        on_click: MarkerHandler,
    ) -> Result<MarkerId> {
        let options = to_value(&MarkerOptions {
            position: at,
            icon,
            title,
        })?;
        Reflect::set(&options, &JsValue::from_str("map"), &self.map).map_err(MapError::from_js)?;
        let marker = Marker::new(&options);

        let id = MarkerId(self.markers.borrow().len());
        let on_click = Closure::<dyn FnMut()>::new(move || on_click(id));
        let listener = marker.add_listener("click", on_click.as_ref().unchecked_ref());

        self.markers.borrow_mut().push(PlacedMarker {
            marker,
            listener,
            _on_click: on_click,
        });
        Ok(id)
    }

    fn marker_position(&self, marker: MarkerId) -> Option<LatLng> {
        self.markers
            .borrow()
            .get(marker.0)
            .and_then(|placed| placed.marker.get_position())
            .map(|at| LatLng::from(&at))
    }

    fn open_popup(&self, marker: MarkerId, content: &str) {
        let markers = self.markers.borrow();
        let Some(placed) = markers.get(marker.0) else {
            return;
        };
        let text = self.document.create_text_node(content);
        self.popup.set_content(&text);
        self.popup.open_at_marker(&self.map, &placed.marker);
    }

    fn clear_markers(&self) {
        self.popup.close();
        for placed in self.markers.borrow_mut().drain(..) {
            placed.listener.remove();
            placed.marker.set_map(None);
        }
    }
}

impl Drop for GoogleMap {
    fn drop(&mut self) {
        self.clear_markers();
        if let Some((listener, _)) = self.overlay_listener.borrow_mut().take() {
            listener.remove();
        }
    }
}


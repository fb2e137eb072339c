use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T, E = MapError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Missing page element: #{0}")]
    MissingElement(String),

    #[error("Maps library failed to load: {0}")]
    LibraryLoad(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl MapError {
    pub fn config<E: std::fmt::Display>(e: E) -> Self {
        Self::Config(e.to_string())
    }

    pub fn decode<E: std::fmt::Display>(e: E) -> Self {
        Self::Decode(e.to_string())
    }

    /// Wrap a thrown JS value, keeping its string form when it has one.
    pub fn from_js(value: JsValue) -> Self {
        Self::Js(js_text(&value))
    }

    pub fn library_load(value: JsValue) -> Self {
        Self::LibraryLoad(js_text(&value))
    }
}

fn js_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<MapError> for JsValue {
    fn from(err: MapError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err)
    }
}

impl From<serde_wasm_bindgen::Error> for MapError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::decode(err)
    }
}

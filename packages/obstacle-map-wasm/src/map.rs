//! Seams between the presenter and whatever draws the map and the list.
//!
//! The real implementations live in `google` (Maps JS API) and `dom`
//! (sidebar list). Tests drive the presenter through in-memory fakes.

use crate::error::Result;
use crate::models::LatLng;
use crate::severity::MarkerIcon;

/// Click callback registered by the presenter
pub type Handler = Box<dyn Fn()>;

/// Marker click callback; receives the id of the clicked marker
pub type MarkerHandler = Box<dyn Fn(MarkerId)>;

/// Index of a marker placed on a map, valid until the next `clear_markers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

/// Operations the presenter needs from a map. Methods take `&self`; the map
/// is shared with every click handler, so implementations keep their own
/// state behind interior mutability.
pub trait MapCapability {
    fn set_center(&self, at: LatLng);
    fn set_zoom(&self, level: f64);
    fn zoom(&self) -> f64;
    /// `None` until the map has a center
    fn center(&self) -> Option<LatLng>;

    fn place_marker(
        &self,
        at: LatLng,
        icon: &MarkerIcon,
        title: &str,
        on_click: MarkerHandler,
    ) -> Result<MarkerId>;

    fn marker_position(&self, marker: MarkerId) -> Option<LatLng>;

    /// Show `content` anchored to `marker`. At most one popup is open at a
    /// time; opening another replaces it.
    fn open_popup(&self, marker: MarkerId, content: &str);

    fn clear_markers(&self);
}

/// The clickable sidebar list
pub trait ListSurface {
    fn append_entry(&mut self, label: &str, class: Option<&str>, on_click: Handler) -> Result<()>;
    fn clear(&mut self);
}

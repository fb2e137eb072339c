use std::cmp::Reverse;
use std::rc::Rc;

use crate::error::Result;
use crate::map::{ListSurface, MapCapability};
use crate::models::{MarkerFeature, RenderSummary};
use crate::severity::{list_class, MarkerIcon};

/// Zoom level a marker click jumps to
pub const MARKER_CLICK_ZOOM: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenterOptions {
    pub marker_zoom: f64,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            marker_zoom: MARKER_CLICK_ZOOM,
        }
    }
}

/// Renders the sidebar list and the map markers from one feature sequence
/// and wires the click navigation between them.
pub struct Presenter<M: MapCapability + 'static, L: ListSurface> {
    map: Rc<M>,
    list: L,
    options: PresenterOptions,
}

impl<M: MapCapability + 'static, L: ListSurface> Presenter<M, L> {
    pub fn new(map: Rc<M>, list: L, options: PresenterOptions) -> Self {
        Self { map, list, options }
    }

    pub fn map(&self) -> &Rc<M> {
        &self.map
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    /// Replace whatever was rendered before with `features`.
    ///
    /// The list is ordered by descending severity; markers keep the
    /// order of `features`. The two views may therefore disagree on order.
    pub fn render(&mut self, features: &[MarkerFeature]) -> Result<RenderSummary> {
        self.clear();

        let list_items = self.render_list(features)?;
        let markers = self.render_markers(features)?;

        Ok(RenderSummary { list_items, markers })
    }

    pub fn clear(&mut self) {
        self.list.clear();
        self.map.clear_markers();
    }

    fn render_list(&mut self, features: &[MarkerFeature]) -> Result<usize> {
        let mut ordered: Vec<&MarkerFeature> = features.iter().collect();
        ordered.sort_unstable_by_key(|feature| Reverse(feature.severity));

        for feature in &ordered {
            let map = Rc::clone(&self.map);
            let at = feature.position();
            self.list.append_entry(
                &feature.name,
                list_class(feature.severity),
                Box::new(move || map.set_center(at)),
            )?;
        }

        Ok(ordered.len())
    }

    fn render_markers(&mut self, features: &[MarkerFeature]) -> Result<usize> {
        for feature in features {
            let map = Rc::clone(&self.map);
            let description = feature.description.clone();
            let zoom = self.options.marker_zoom;

            self.map.place_marker(
                feature.position(),
                &MarkerIcon::for_severity(feature.severity),
                &feature.name,
                Box::new(move |marker| {
                    map.set_zoom(zoom);
                    if let Some(at) = map.marker_position(marker) {
                        map.set_center(at);
                    }
                    map.open_popup(marker, &description);
                }),
            )?;
        }

        Ok(features.len())
    }
}

// Handlers hold an Rc of the map, so the rendered views must be cleared to
// release it.
impl<M: MapCapability + 'static, L: ListSurface> Drop for Presenter<M, L> {
    fn drop(&mut self) {
        self.clear();
    }
}

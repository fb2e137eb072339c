// Severity to color mapping shared by the sidebar list and the map markers
use serde::Serialize;

use crate::models::Severity;

/// Class applied to list entries whose severity is outside 1..=3.
/// The list has no fallback styling; such entries keep the default look.
pub const LIST_FALLBACK_CLASS: Option<&str> = None;

/// Fill color for markers whose severity is outside 1..=3.
pub const MARKER_FALLBACK_COLOR: &str = "green";

/// Base class every list entry carries
pub const LIST_ITEM_CLASS: &str = "list-item";

pub const MARKER_FILL_OPACITY: f64 = 0.7;
pub const MARKER_STROKE_WEIGHT: f64 = 0.0;
pub const MARKER_SCALE: f64 = 10.0;

// google.maps.SymbolPath.CIRCLE
pub const SYMBOL_PATH_CIRCLE: u32 = 0;

fn severity_color(severity: Severity) -> Option<&'static str> {
    match severity.0 {
        1 => Some("yellow"),
        2 => Some("orange"),
        3 => Some("red"),
        _ => None,
    }
}

/// Highlight class for a list entry
pub fn list_class(severity: Severity) -> Option<&'static str> {
    severity_color(severity).or(LIST_FALLBACK_CLASS)
}

/// Fill color for a map marker
pub fn marker_color(severity: Severity) -> &'static str {
    severity_color(severity).unwrap_or(MARKER_FALLBACK_COLOR)
}

/// Circular marker symbol, serialized as a `google.maps.Symbol` literal.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub path: u32,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub stroke_weight: f64,
    pub scale: f64,
}

impl MarkerIcon {
    pub fn for_severity(severity: Severity) -> Self {
        Self {
            path: SYMBOL_PATH_CIRCLE,
            fill_color: marker_color(severity).to_string(),
            fill_opacity: MARKER_FILL_OPACITY,
            stroke_weight: MARKER_STROKE_WEIGHT,
            scale: MARKER_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_severities_share_colors() {
        let table = [(1, "yellow"), (2, "orange"), (3, "red")];
        for (level, color) in table {
            assert_eq!(list_class(Severity(level)), Some(color));
            assert_eq!(marker_color(Severity(level)), color);
        }
    }

    #[test]
    fn out_of_range_severity_diverges_between_list_and_marker() {
        for level in [0, 4, -1, 99] {
            assert_eq!(list_class(Severity(level)), None);
            assert_eq!(marker_color(Severity(level)), "green");
        }
    }

    #[test]
    fn icon_is_fixed_circle() {
        let icon = MarkerIcon::for_severity(Severity::MEDIUM);
        assert_eq!(icon.fill_color, "orange");
        assert_eq!(icon.fill_opacity, 0.7);
        assert_eq!(icon.stroke_weight, 0.0);
        assert_eq!(icon.path, SYMBOL_PATH_CIRCLE);

        let json = serde_json::to_value(&icon).unwrap();
        assert_eq!(json["fillColor"], "orange");
        assert_eq!(json["strokeWeight"], 0.0);
    }
}

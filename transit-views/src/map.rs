//! Marker map rendering, expressed as commands for the map bridge.

use serde::Serialize;
use transit_core::color::ValueDomain;
use transit_core::geo::{Bounds, LatLng};

/// Radius of every stop marker, in pixels.
pub const MARKER_RADIUS: u32 = 6;

/// Fraction of the marker span added on each side when fitting the viewport.
pub const FIT_PADDING: f64 = 0.1;

/// A result item that can be placed on the map.
pub trait GeoItem {
    /// `None` when the item has no usable coordinates.
    fn position(&self) -> Option<LatLng>;
    /// Value driving the marker color.
    fn metric(&self) -> f64;
    /// Hover label, as HTML.
    fn tooltip(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    pub radius: u32,
    pub color: String,
    pub tooltip: String,
}

/// One instruction to the map bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MapCommand {
    ClearMarkers,
    AddMarker(Marker),
    FitBounds { bounds: Bounds },
    InvalidateSize,
}

/// Markers for one result set and the box around them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerLayer {
    pub markers: Vec<Marker>,
    pub bounds: Option<Bounds>,
}

impl MarkerLayer {
    /// Colors span the metric range of every item, mapped or not. Items
    /// without coordinates are skipped.
    pub fn build<T: GeoItem>(items: &[T]) -> Self {
        let domain = ValueDomain::from_values(items.iter().map(T::metric));
        let mut layer = MarkerLayer::default();
        for item in items {
            let Some(position) = item.position() else {
                continue;
            };
            match layer.bounds.as_mut() {
                Some(bounds) => bounds.extend(position),
                None => layer.bounds = Some(Bounds::from_point(position)),
            }
            layer.markers.push(Marker {
                position,
                radius: MARKER_RADIUS,
                color: domain.color(item.metric()).to_string(),
                tooltip: item.tooltip(),
            });
        }
        layer
    }
}

/// Per-map state: the last bounds the viewport was fitted to.
#[derive(Debug, Clone, Default)]
pub struct MapState {
    last_bounds: Option<Bounds>,
}

impl MapState {
    pub fn last_bounds(&self) -> Option<Bounds> {
        self.last_bounds
    }

    /// Replace every marker with `layer`. The viewport is only refitted when
    /// the layer has at least one marker.
    pub fn render(&mut self, layer: MarkerLayer) -> Vec<MapCommand> {
        let mut commands = Vec::with_capacity(layer.markers.len() + 2);
        commands.push(MapCommand::ClearMarkers);
        commands.extend(layer.markers.into_iter().map(MapCommand::AddMarker));
        if let Some(bounds) = layer.bounds {
            self.last_bounds = Some(bounds);
            commands.push(MapCommand::FitBounds {
                bounds: bounds.pad(FIT_PADDING),
            });
        }
        commands
    }

    /// Commands to run once the map container becomes visible.
    pub fn invalidate(&self) -> Vec<MapCommand> {
        let mut commands = vec![MapCommand::InvalidateSize];
        if let Some(bounds) = self.last_bounds {
            commands.push(MapCommand::FitBounds {
                bounds: bounds.pad(FIT_PADDING),
            });
        }
        commands
    }
}

/// Tile layer and initial viewport shared by every map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: u32,
    pub center: LatLng,
    pub zoom: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            max_zoom: 19,
            // Toronto
            center: LatLng::new(43.6532, -79.3832),
            zoom: 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        lat: Option<f64>,
        lng: Option<f64>,
        value: f64,
    }

    impl GeoItem for Point {
        fn position(&self) -> Option<LatLng> {
            LatLng::checked(self.lat, self.lng)
        }
        fn metric(&self) -> f64 {
            self.value
        }
        fn tooltip(&self) -> String {
            format!("{}", self.value)
        }
    }

    fn point(lat: Option<f64>, lng: Option<f64>, value: f64) -> Point {
        Point { lat, lng, value }
    }

    #[test]
    fn invalid_coordinates_are_skipped() {
        let items = vec![
            point(Some(43.70), Some(-79.40), 10.0),
            point(None, Some(-79.10), 500.0),
            point(Some(43.60), Some(-79.50), 20.0),
            point(Some(f64::INFINITY), Some(-79.0), 30.0),
            point(Some(43.65), Some(-79.30), 40.0),
        ];
        let layer = MarkerLayer::build(&items);
        assert_eq!(layer.markers.len(), 3);
        assert_eq!(
            layer.bounds,
            Some(Bounds {
                south_west: LatLng::new(43.60, -79.50),
                north_east: LatLng::new(43.70, -79.30),
            })
        );
    }

    #[test]
    fn color_domain_includes_unmapped_items() {
        // The unmapped 500 stretches the domain, so 40 stays mostly green.
        let items = vec![point(None, None, 500.0), point(Some(1.0), Some(1.0), 40.0)];
        let layer = MarkerLayer::build(&items);
        assert_eq!(layer.markers[0].color, "rgb(20,184,0)");
    }

    #[test]
    fn render_clears_then_adds_then_fits() {
        let mut state = MapState::default();
        let layer = MarkerLayer::build(&[
            point(Some(10.0), Some(20.0), 1.0),
            point(Some(12.0), Some(24.0), 2.0),
        ]);
        let commands = state.render(layer);
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], MapCommand::ClearMarkers);
        assert!(matches!(commands[1], MapCommand::AddMarker(_)));
        match &commands[3] {
            MapCommand::FitBounds { bounds } => {
                assert!((bounds.south_west.lat - 9.8).abs() < 1e-9);
                assert!((bounds.north_east.lng - 24.4).abs() < 1e-9);
            }
            other => panic!("expected FitBounds, got {:?}", other),
        }
    }

    #[test]
    fn empty_result_leaves_viewport_unchanged() {
        let mut state = MapState::default();
        state.render(MarkerLayer::build(&[point(Some(10.0), Some(20.0), 1.0)]));
        let before = state.last_bounds();

        let commands = state.render(MarkerLayer::build::<Point>(&[]));
        assert_eq!(commands, vec![MapCommand::ClearMarkers]);
        assert_eq!(state.last_bounds(), before);

        let commands = state.render(MarkerLayer::build(&[point(None, None, 3.0)]));
        assert_eq!(commands, vec![MapCommand::ClearMarkers]);
        assert_eq!(state.last_bounds(), before);
    }

    #[test]
    fn invalidate_refits_last_bounds() {
        let mut state = MapState::default();
        assert_eq!(state.invalidate(), vec![MapCommand::InvalidateSize]);

        state.render(MarkerLayer::build(&[point(Some(10.0), Some(20.0), 1.0)]));
        let commands = state.invalidate();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], MapCommand::InvalidateSize);
        assert!(matches!(commands[1], MapCommand::FitBounds { .. }));
    }

    #[test]
    fn commands_serialize_with_op_tag() {
        let json = serde_json::to_value(MapCommand::ClearMarkers).unwrap();
        assert_eq!(json, serde_json::json!({"op": "clear_markers"}));
        let json = serde_json::to_value(MapCommand::InvalidateSize).unwrap();
        assert_eq!(json["op"], "invalidate_size");
    }
}

// Copyright (C) 2024 Hove and/or its affiliates.
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by the
// Free Software Foundation, version 3.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more
// details.

// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>

//! Map of a GTFS feed: a marker per stop, a polyline per shape.

mod write;

pub use write::{to_html, write};

use crate::{
    color::{resolve_color, Color},
    gtfs::Model,
    objects::{Coord, Route, Shape, Stop},
    Error, Result,
};
use std::collections::HashMap;
use tracing::{debug, info};

/// Initial zoom level, a neighborhood-scale view
pub const ZOOM_START: u8 = 13;
/// Width in pixels of the route polylines
pub const LINE_WEIGHT: f64 = 2.5;
/// Opacity of the route polylines
pub const LINE_OPACITY: f64 = 0.7;

/// A stop marker
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    #[allow(missing_docs)]
    pub coord: Coord,
    /// Shown in bold when the marker is clicked
    pub popup: String,
    /// Shown when hovering the marker
    pub tooltip: String,
}

/// The drawing of a shape
#[derive(Debug, Clone, PartialEq)]
pub struct PolyLine {
    /// Points, in drawing order
    pub points: Vec<Coord>,
    #[allow(missing_docs)]
    pub color: Color,
    #[allow(missing_docs)]
    pub weight: f64,
    #[allow(missing_docs)]
    pub opacity: f64,
}

/// Interactive map ready to be written as HTML
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    /// Initial center of the view
    pub center: Coord,
    /// Initial zoom level
    pub zoom: u8,
    #[allow(missing_docs)]
    pub markers: Vec<Marker>,
    #[allow(missing_docs)]
    pub polylines: Vec<PolyLine>,
}

fn center(stops: &[Stop]) -> Result<Coord> {
    if stops.is_empty() {
        return Err(Error::NoDataToCenterMap);
    }
    let count = stops.len() as f64;
    let (lat_sum, lon_sum) = stops.iter().fold((0.0, 0.0), |(lat, lon), stop| {
        (lat + stop.coord.lat, lon + stop.coord.lon)
    });
    Ok(Coord::new(lat_sum / count, lon_sum / count))
}

impl From<&Stop> for Marker {
    fn from(stop: &Stop) -> Self {
        Marker {
            coord: stop.coord,
            popup: stop.name.clone(),
            tooltip: stop.name.clone(),
        }
    }
}

// Without a route, or with a route without long name, there is nothing to
// resolve the color from.
fn shape_color(routes_by_id: &HashMap<&str, &Route>, shape: &Shape) -> Color {
    match routes_by_id.get(shape.id.as_str()) {
        Some(route) if !route.long_name.is_empty() => {
            resolve_color(&route.long_name, route.color.as_deref())
        }
        Some(_) => Color::DEFAULT,
        None => {
            debug!("no route found for shape {:?}", shape.id);
            Color::DEFAULT
        }
    }
}

/// Builds the map of the stops and shapes of `model`.
///
/// Fails with [`Error::NoDataToCenterMap`] when `model` has no stop.
pub fn render(model: &Model) -> Result<Map> {
    let center = center(&model.stops)?;
    let markers = model.stops.iter().map(Marker::from).collect();
    let routes_by_id = model.routes_by_id();
    let polylines = model
        .shapes
        .iter()
        .map(|shape| PolyLine {
            points: shape.points.clone(),
            color: shape_color(&routes_by_id, shape),
            weight: LINE_WEIGHT,
            opacity: LINE_OPACITY,
        })
        .collect();
    let map = Map {
        center,
        zoom: ZOOM_START,
        markers,
        polylines,
    };
    info!(
        "Map centered on ({}, {}) with {} markers and {} polylines",
        map.center.lat,
        map.center.lon,
        map.markers.len(),
        map.polylines.len()
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn stop(id: &str, lat: f64, lon: f64) -> Stop {
        Stop {
            id: id.into(),
            name: format!("Stop {}", id),
            coord: Coord::new(lat, lon),
        }
    }

    fn route(id: &str, long_name: &str, color: Option<&str>) -> Route {
        Route {
            id: id.into(),
            long_name: long_name.into(),
            color: color.map(String::from),
        }
    }

    fn shape(id: &str) -> Shape {
        Shape {
            id: id.into(),
            points: vec![Coord::new(1.0, 2.0), Coord::new(3.0, 4.0)],
        }
    }

    #[test]
    fn center_is_the_mean_of_stops() {
        let model = Model {
            stops: vec![stop("A", 28.0, 77.0), stop("B", 29.0, 77.5), stop("C", 30.0, 78.0)],
            ..Default::default()
        };
        let map = render(&model).unwrap();
        assert_relative_eq!(29.0, map.center.lat);
        assert_relative_eq!(77.5, map.center.lon);
        assert_eq!(ZOOM_START, map.zoom);
    }

    #[test]
    fn no_stop_no_map() {
        let model = Model {
            shapes: vec![shape("R1")],
            ..Default::default()
        };
        assert!(matches!(render(&model), Err(Error::NoDataToCenterMap)));
    }

    #[test]
    fn markers_and_explicit_color() {
        let model = Model {
            stops: vec![stop("A", 1.0, 2.0), stop("B", 3.0, 4.0)],
            routes: vec![route("R1", "Red line", Some("00FF00"))],
            shapes: vec![shape("R1")],
        };
        let map = render(&model).unwrap();
        assert_eq!(
            vec![
                Marker {
                    coord: Coord::new(1.0, 2.0),
                    popup: "Stop A".into(),
                    tooltip: "Stop A".into(),
                },
                Marker {
                    coord: Coord::new(3.0, 4.0),
                    popup: "Stop B".into(),
                    tooltip: "Stop B".into(),
                },
            ],
            map.markers
        );
        assert_eq!(
            vec![PolyLine {
                points: vec![Coord::new(1.0, 2.0), Coord::new(3.0, 4.0)],
                color: Color::Hex("00FF00".into()),
                weight: LINE_WEIGHT,
                opacity: LINE_OPACITY,
            }],
            map.polylines
        );
        assert_eq!("#00FF00", map.polylines[0].color.to_string());
    }

    #[test]
    fn shape_without_route_is_black() {
        // "BLUE" would resolve to blue if the route was consulted
        let model = Model {
            stops: vec![stop("A", 1.0, 2.0)],
            routes: vec![route("R1", "BLUE line", None)],
            shapes: vec![shape("unknown")],
        };
        let map = render(&model).unwrap();
        assert_eq!(1, map.polylines.len());
        assert_eq!(Color::DEFAULT, map.polylines[0].color);
    }

    #[test]
    fn route_without_long_name_is_black() {
        let model = Model {
            stops: vec![stop("A", 1.0, 2.0)],
            routes: vec![route("R1", "", Some("FF0000"))],
            shapes: vec![shape("R1")],
        };
        let map = render(&model).unwrap();
        assert_eq!(Color::DEFAULT, map.polylines[0].color);
    }

    #[test]
    fn first_route_with_the_identifier_is_used() {
        let model = Model {
            stops: vec![stop("A", 1.0, 2.0)],
            routes: vec![route("R1", "Violet", None), route("R1", "Pink", None)],
            shapes: vec![shape("R1"), shape("R2")],
        };
        let map = render(&model).unwrap();
        let colors: Vec<String> = map.polylines.iter().map(|p| p.color.to_string()).collect();
        assert_eq!(vec!["purple", "black"], colors);
    }
}

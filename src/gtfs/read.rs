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

use crate::{
    file_handler::FileHandler,
    objects::{Coord, Route, Shape, Stop},
    read_utils::read_objects,
    Result,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
struct GtfsStop {
    #[serde(rename = "stop_id", default)]
    id: String,
    #[serde(rename = "stop_name")]
    name: String,
    #[serde(rename = "stop_lat")]
    lat: f64,
    #[serde(rename = "stop_lon")]
    lon: f64,
}

impl From<GtfsStop> for Stop {
    fn from(stop: GtfsStop) -> Stop {
        Stop {
            id: stop.id,
            name: stop.name,
            coord: Coord::new(stop.lat, stop.lon),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
struct GtfsRoute {
    #[serde(rename = "route_id")]
    id: String,
    #[serde(rename = "route_long_name")]
    long_name: String,
    #[serde(rename = "route_color", default)]
    color: Option<String>,
}

impl From<GtfsRoute> for Route {
    fn from(route: GtfsRoute) -> Route {
        Route {
            id: route.id,
            long_name: route.long_name,
            color: route.color,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
struct ShapePoint {
    #[serde(rename = "shape_id")]
    id: String,
    #[serde(rename = "shape_pt_lat")]
    lat: f64,
    #[serde(rename = "shape_pt_lon")]
    lon: f64,
}

pub(crate) fn read_stops<H>(file_handler: &mut H) -> Result<Vec<Stop>>
where
    for<'a> &'a mut H: FileHandler,
{
    let stops: Vec<GtfsStop> = read_objects(file_handler, "stops.txt")?;
    Ok(stops.into_iter().map(Stop::from).collect())
}

pub(crate) fn read_routes<H>(file_handler: &mut H) -> Result<Vec<Route>>
where
    for<'a> &'a mut H: FileHandler,
{
    let routes: Vec<GtfsRoute> = read_objects(file_handler, "routes.txt")?;
    Ok(routes.into_iter().map(Route::from).collect())
}

/// Points are grouped by `shape_id` and kept in file order inside a group;
/// `shape_pt_sequence` is not used.
pub(crate) fn read_shapes<H>(file_handler: &mut H) -> Result<Vec<Shape>>
where
    for<'a> &'a mut H: FileHandler,
{
    let points: Vec<ShapePoint> = read_objects(file_handler, "shapes.txt")?;
    let mut points_by_shape: BTreeMap<String, Vec<Coord>> = BTreeMap::new();
    for point in points {
        points_by_shape
            .entry(point.id)
            .or_insert_with(Vec::new)
            .push(Coord::new(point.lat, point.lon));
    }
    debug!("{} shapes built", points_by_shape.len());
    Ok(points_by_shape
        .into_iter()
        .map(|(id, points)| Shape { id, points })
        .collect())
}

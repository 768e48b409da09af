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

//! The different objects read from a GTFS feed.

/// A WGS84 position, latitude first as Leaflet expects it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl Coord {
    /// Creates a coordinate from a latitude and a longitude
    pub fn new(lat: f64, lon: f64) -> Self {
        Coord { lat, lon }
    }
}

impl From<Coord> for [f64; 2] {
    fn from(coord: Coord) -> Self {
        [coord.lat, coord.lon]
    }
}

/// A named physical location served by transit
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Stop {
    /// Empty when the feed has no `stop_id` column
    pub id: String,
    pub name: String,
    pub coord: Coord,
}

/// A named transit line, optionally with an explicit display color
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Identifier, shared with the shape drawing the route
    pub id: String,
    /// Long display name, empty when the feed doesn't provide one
    pub long_name: String,
    /// Raw `route_color` value, without the leading `#`
    pub color: Option<String>,
}

/// Ordered path of a route, points kept in file order
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Identifier, matching a route identifier in the feeds we handle
    pub id: String,
    #[allow(missing_docs)]
    pub points: Vec<Coord>,
}

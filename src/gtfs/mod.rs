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

//! [GTFS](http://gtfs.org/) reading: stops, routes and shapes.

mod read;

use crate::{
    file_handler::{FileHandler, PathFileHandler, ZipHandler},
    objects::{Route, Shape, Stop},
    Error, Result,
};
use anyhow::Context;
use std::{collections::HashMap, fs::File, path::Path};
use tracing::info;

/// The three collections needed to draw a GTFS feed
#[derive(Debug, Default, Clone)]
pub struct Model {
    /// Stops, in file order
    pub stops: Vec<Stop>,
    /// Routes, in file order
    pub routes: Vec<Route>,
    /// Shapes, by ascending identifier
    pub shapes: Vec<Shape>,
}

impl Model {
    /// Routes by identifier; the first route in file order wins on duplicates
    pub fn routes_by_id(&self) -> HashMap<&str, &Route> {
        let mut routes_by_id = HashMap::with_capacity(self.routes.len());
        for route in &self.routes {
            routes_by_id.entry(route.id.as_str()).or_insert(route);
        }
        routes_by_id
    }
}

fn read_file_handler<H>(file_handler: &mut H) -> Result<Model>
where
    for<'a> &'a mut H: FileHandler,
{
    let stops = read::read_stops(file_handler)?;
    let routes = read::read_routes(file_handler)?;
    let shapes = read::read_shapes(file_handler)?;
    Ok(Model {
        stops,
        routes,
        shapes,
    })
}

/// Imports a `Model` from the GTFS files in a `path` directory.
pub fn from_dir<P: AsRef<Path>>(p: P) -> Result<Model> {
    let mut file_handler = PathFileHandler::new(p.as_ref().to_path_buf());
    read_file_handler(&mut file_handler)
}

/// Imports a `Model` from a zipped GTFS.
///
/// The `stops.txt`, `routes.txt` and `shapes.txt` files can be in a sub
/// directory of the archive.
pub fn from_zip<P: AsRef<Path>>(p: P) -> Result<Model> {
    let p = p.as_ref();
    let reader = File::open(p)
        .with_context(|| format!("Error reading {:?}", p))
        .map_err(|source| Error::Load {
            path: p.to_path_buf(),
            source,
        })?;
    let mut file_handler = ZipHandler::new(reader, p)?;
    read_file_handler(&mut file_handler)
}

/// Imports a `Model` from a GTFS directory or a zipped GTFS, depending on
/// the extension of `path`.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Model> {
    let p = path.as_ref();
    info!("Reading GTFS from {:?}", p);
    if p.is_file() && p.extension().map_or(false, |ext| ext == "zip") {
        from_zip(p)
    } else {
        from_dir(p)
    }
}

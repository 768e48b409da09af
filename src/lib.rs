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

//! The `gtfs_map` crate renders a [GTFS](http://gtfs.org/) feed as an
//! interactive map: one marker per stop and one colored polyline per shape,
//! written as a standalone HTML document.

#![deny(missing_docs)]

pub mod color;
pub mod file_handler;
pub mod gtfs;
pub mod map;
pub mod objects;
mod read_utils;
#[doc(hidden)]
pub mod test_utils;
mod version_utils;

pub use version_utils::{binary_full_version, GIT_VERSION};

use std::path::PathBuf;
use thiserror::Error;

/// Name of the HTML file written by default
pub const OUTPUT_FILE: &str = "gtfs_map.html";

/// The error type used by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file is missing, unreadable, malformed or lacks a column.
    #[error("failed to load {path:?}")]
    Load {
        /// File (or archive) which could not be loaded
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: anyhow::Error,
    },
    /// The mean of an empty set of stops is undefined.
    #[error("no data to center map: the feed has no stop")]
    NoDataToCenterMap,
    /// The HTML output could not be written.
    #[error("failed to write {path:?}")]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },
}

/// The corresponding result type used by the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub use crate::gtfs::Model;
pub use crate::map::Map;

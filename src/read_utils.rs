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

use crate::{file_handler::FileHandler, Error, Result};
use anyhow::Context;
use std::result::Result as StdResult;
use tracing::info;

/// Read a vector of objects from a CSV file of a file_handler
pub(crate) fn read_objects<H, O>(file_handler: &mut H, file_name: &str) -> Result<Vec<O>>
where
    for<'a> &'a mut H: FileHandler,
    O: for<'de> serde::Deserialize<'de>,
{
    let (reader, path) = file_handler.get_file(file_name)?;
    info!("Reading {}", file_name);

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let objects: Vec<O> = match rdr
        .deserialize()
        .collect::<StdResult<_, _>>()
        .with_context(|| format!("Error reading {:?}", path))
    {
        Ok(objects) => objects,
        Err(source) => return Err(Error::Load { path, source }),
    };
    info!("{} objects read from {}", objects.len(), file_name);
    Ok(objects)
}

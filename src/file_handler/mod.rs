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

//! Gives the same access to the files of a GTFS directory or of a zipped GTFS
use crate::{Error, Result};
use anyhow::{anyhow, Context};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{Read, Seek},
    path::{Path, PathBuf},
};

/// Source of GTFS files, looked up by their file name
pub trait FileHandler
where
    Self: std::marker::Sized,
{
    /// Reader
    type Reader: Read;

    /// Return the file, or `None` with its expected path when it doesn't exist
    fn get_file_if_exists(self, name: &str) -> Result<(Option<Self::Reader>, PathBuf)>;

    /// Return a file or a load error if it doesn't exist
    fn get_file(self, name: &str) -> Result<(Self::Reader, PathBuf)> {
        let (reader, path) = self.get_file_if_exists(name)?;
        match reader {
            Some(reader) => Ok((reader, path)),
            None => Err(Error::Load {
                source: anyhow!("file {:?} not found", path),
                path,
            }),
        }
    }
}

/// Reads the files of a directory
pub struct PathFileHandler<P: AsRef<Path>> {
    base_path: P,
}

impl<P: AsRef<Path>> PathFileHandler<P> {
    /// Constructs a new PathFileHandler
    pub fn new(path: P) -> Self {
        PathFileHandler { base_path: path }
    }
}

impl<'a, P: AsRef<Path>> FileHandler for &'a mut PathFileHandler<P> {
    type Reader = File;
    fn get_file_if_exists(self, name: &str) -> Result<(Option<Self::Reader>, PathBuf)> {
        let f = self.base_path.as_ref().join(name);
        if !f.exists() {
            return Ok((None, f));
        }
        match File::open(&f).with_context(|| format!("Error reading {:?}", &f)) {
            Ok(file) => Ok((Some(file), f)),
            Err(source) => Err(Error::Load { path: f, source }),
        }
    }
}

/// Reads the files of a zip archive by their name, whatever the sub-directory
/// they are stored in.
///
/// Two files with the same name in different sub-directories can't be told
/// apart; the last one in the archive wins.
pub struct ZipHandler<R: Seek + Read> {
    archive: zip::ZipArchive<R>,
    archive_path: PathBuf,
    index_by_name: BTreeMap<String, usize>,
}

impl<R> ZipHandler<R>
where
    R: Seek + Read,
{
    /// Opens the archive read from `r`, `path` being only used in messages
    pub fn new<P: AsRef<Path>>(r: R, path: P) -> Result<Self> {
        let archive_path = path.as_ref().to_path_buf();
        let mut archive = zip::ZipArchive::new(r).map_err(|e| Error::Load {
            path: archive_path.clone(),
            source: e.into(),
        })?;
        Ok(ZipHandler {
            index_by_name: Self::files_by_name(&mut archive),
            archive,
            archive_path,
        })
    }

    fn files_by_name(archive: &mut zip::ZipArchive<R>) -> BTreeMap<String, usize> {
        (0..archive.len())
            .filter_map(|i| {
                let file = archive.by_index(i).ok()?;
                if file.is_dir() {
                    return None;
                }
                let real_name = Path::new(file.name()).file_name()?;
                let real_name: String = real_name.to_str()?.into();
                Some((real_name, i))
            })
            .collect()
    }
}

impl<'a, R> FileHandler for &'a mut ZipHandler<R>
where
    R: Seek + Read,
{
    type Reader = zip::read::ZipFile<'a, R>;
    fn get_file_if_exists(self, name: &str) -> Result<(Option<Self::Reader>, PathBuf)> {
        let p = self.archive_path.join(name);
        match self.index_by_name.get(name) {
            None => Ok((None, p)),
            Some(i) => match self.archive.by_index(*i) {
                Ok(file) => Ok((Some(file), p)),
                Err(e) => Err(Error::Load {
                    path: p,
                    source: e.into(),
                }),
            },
        }
    }
}

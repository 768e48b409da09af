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

use clap::Parser;
use gtfs_map::{gtfs, map, OUTPUT_FILE};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
};

lazy_static::lazy_static! {
    pub static ref GIT_VERSION: String = gtfs_map::binary_full_version(env!("CARGO_PKG_VERSION"));
}

fn get_version() -> &'static str {
    &GIT_VERSION
}

#[derive(Debug, Parser)]
#[command(
    name = "gtfs2map",
    about = "Render the stops and shapes of a GTFS as an HTML map.",
    version = get_version()
)]
struct Opt {
    /// Input directory, or zip archive, containing stops.txt, routes.txt
    /// and shapes.txt.
    #[arg(short = 'i', long = "input", default_value = ".")]
    input: PathBuf,
}

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter_subscriber = EnvFilter::try_new(rust_log).unwrap_or_else(|e| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            e,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter_subscriber)
        .init();
}

fn run(opt: Opt) -> anyhow::Result<()> {
    info!("Launching gtfs2map...");

    let model = gtfs::read(opt.input)?;
    let map = map::render(&model)?;
    map::write(&map, OUTPUT_FILE)?;

    info!(
        "Interactive GTFS map saved as {} ({} stops, {} routes drawn).",
        OUTPUT_FILE,
        map.markers.len(),
        map.polylines.len()
    );
    Ok(())
}

fn main() {
    init_logger();
    if let Err(err) = run(Opt::parse()) {
        for cause in err.chain() {
            eprintln!("{cause}");
        }
        std::process::exit(1);
    }
}

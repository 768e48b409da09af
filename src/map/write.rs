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

use super::Map;
use crate::{color::Color, Error, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use tracing::info;

const LEAFLET_CSS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.js";
const TILES_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILES_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Serialize)]
struct HtmlMarker {
    location: [f64; 2],
    popup: String,
    tooltip: String,
}

#[derive(Serialize)]
struct HtmlPolyLine<'a> {
    locations: Vec<[f64; 2]>,
    color: &'a Color,
    weight: f64,
    opacity: f64,
}

#[derive(Serialize)]
struct HtmlMap<'a> {
    center: [f64; 2],
    zoom: u8,
    markers: Vec<HtmlMarker>,
    polylines: Vec<HtmlPolyLine<'a>>,
}

impl<'a> From<&'a Map> for HtmlMap<'a> {
    fn from(map: &'a Map) -> Self {
        HtmlMap {
            center: map.center.into(),
            zoom: map.zoom,
            markers: map
                .markers
                .iter()
                .map(|marker| HtmlMarker {
                    location: marker.coord.into(),
                    popup: format!("<strong>{}</strong>", escape_html(&marker.popup)),
                    tooltip: escape_html(&marker.tooltip),
                })
                .collect(),
            polylines: map
                .polylines
                .iter()
                .map(|polyline| HtmlPolyLine {
                    locations: polyline.points.iter().map(|&p| p.into()).collect(),
                    color: &polyline.color,
                    weight: polyline.weight,
                    opacity: polyline.opacity,
                })
                .collect(),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Standalone HTML document displaying `map` with Leaflet
pub fn to_html(map: &Map) -> serde_json::Result<String> {
    // "</" would end the script element
    let data = serde_json::to_string(&HtmlMap::from(map))?.replace("</", "<\\/");
    let tiles = serde_json::to_string(TILES_URL)?;
    let attribution = serde_json::to_string(TILES_ATTRIBUTION)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta http-equiv="content-type" content="text/html; charset=UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no" />
    <title>GTFS map</title>
    <link rel="stylesheet" href="{css}" />
    <script src="{js}"></script>
    <style>
        html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
        #map {{ position: absolute; top: 0; bottom: 0; right: 0; left: 0; }}
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        var data = {data};
        var map = L.map("map").setView(data.center, data.zoom);
        L.tileLayer({tiles}, {{ maxZoom: 19, attribution: {attribution} }}).addTo(map);
        data.polylines.forEach(function (line) {{
            L.polyline(line.locations, {{
                color: line.color,
                weight: line.weight,
                opacity: line.opacity
            }}).addTo(map);
        }});
        data.markers.forEach(function (marker) {{
            L.marker(marker.location)
                .bindPopup(marker.popup)
                .bindTooltip(marker.tooltip)
                .addTo(map);
        }});
    </script>
</body>
</html>
"#,
        css = LEAFLET_CSS,
        js = LEAFLET_JS,
        data = data,
        tiles = tiles,
        attribution = attribution,
    ))
}

fn write_html<W: Write>(map: &Map, mut writer: W) -> io::Result<()> {
    let html = to_html(map)?;
    writer.write_all(html.as_bytes())?;
    writer.flush()
}

/// Writes `map` as a standalone HTML document at `path`.
pub fn write<P: AsRef<Path>>(map: &Map, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Writing map to {:?}", path);
    File::create(path)
        .and_then(|file| write_html(map, BufWriter::new(file)))
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

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

//! Choice of the display color of a route.

use serde::{Serialize, Serializer};
use std::fmt;

/// Keywords looked for in a route long name, with the color they stand for.
///
/// Order matters: the first keyword found wins.
pub const COLOR_KEYWORDS: &[(&str, &str)] = &[
    ("RED", "red"),
    ("GREEN", "green"),
    ("BLUE", "blue"),
    ("YELLOW", "yellow"),
    ("MAGENTA", "magenta"),
    ("VIOLET", "purple"),
    ("AQUA", "cyan"),
    ("ORANGE", "orange"),
    ("GRAY", "gray"),
    ("PINK", "pink"),
];

/// Values of `route_color` standing for a missing color, the default NA
/// values of `pandas.read_csv`
const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A color usable by the map: a CSS color name or a `#`-prefixed code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// CSS color name
    Named(&'static str),
    /// `route_color` of the feed, kept as is
    Hex(String),
}

impl Color {
    /// Color used when nothing better is known
    pub const DEFAULT: Color = Color::Named("black");
}

impl Default for Color {
    fn default() -> Self {
        Color::DEFAULT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => write!(f, "{}", name),
            Color::Hex(code) => write!(f, "#{}", code),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

fn is_null_marker(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || NULL_MARKERS.contains(&value)
}

/// Display color of a route.
///
/// An explicit `route_color` always wins and is not validated. Otherwise the
/// first of [`COLOR_KEYWORDS`] found in the long name, ignoring case, gives
/// the color; black when none is found.
pub fn resolve_color(route_long_name: &str, route_color: Option<&str>) -> Color {
    if let Some(code) = route_color.filter(|c| !is_null_marker(c)) {
        return Color::Hex(code.to_string());
    }
    let name = route_long_name.to_uppercase();
    COLOR_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|&(_, color)| Color::Named(color))
        .unwrap_or_default()
}

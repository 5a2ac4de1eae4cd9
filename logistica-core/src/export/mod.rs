//! Renderer-facing exports: the active-condition edge list plus an optional
//! path to highlight. Drawing is left to external tools.

mod to_dot;
mod to_json;

pub use to_dot::to_dot;
pub use to_json::to_json;

use hashbrown::HashSet;
use itertools::Itertools;

/// Cities and consecutive city pairs of a path, for highlighting
struct Highlight<'a> {
    cities: HashSet<&'a str>,
    legs: HashSet<(&'a str, &'a str)>,
}

impl<'a> Highlight<'a> {
    fn new(path: &'a [String]) -> Self {
        Self {
            cities: path.iter().map(String::as_str).collect(),
            legs: path
                .iter()
                .map(String::as_str)
                .tuple_windows()
                .collect(),
        }
    }

    fn contains_city(&self, city: &str) -> bool {
        self.cities.contains(city)
    }

    fn contains_leg(&self, origin: &str, destination: &str) -> bool {
        self.legs.contains(&(origin, destination))
    }
}

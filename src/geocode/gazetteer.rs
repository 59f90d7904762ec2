//! Local tier: exact-match lookup against a preloaded reference table.
//!
//! The table is built once at construction and is read-only for the life of
//! the run. No fuzzy or prefix matching: the local vocabulary is closed, and
//! anything outside it belongs to the remote tier.

use super::dataset::CORDOBA_PLACES;
use super::types::Coordinate;
use std::collections::HashMap;

/// The closed-vocabulary name→coordinate table.
pub struct Gazetteer {
    entries: HashMap<String, Coordinate>,
}

impl Gazetteer {
    /// Build a gazetteer from (normalized key, coordinate) pairs.
    ///
    /// Duplicate keys follow last-write-wins: the final pair for a key is
    /// the one that sticks.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Coordinate)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The built-in Córdoba reference table.
    pub fn cordoba() -> Self {
        Self::new(
            CORDOBA_PLACES
                .iter()
                .map(|&(name, lat, lon)| (name.to_string(), Coordinate::new(lat, lon))),
        )
    }

    /// Exact-match lookup. The key must already be normalized.
    pub fn lookup(&self, key: &str) -> Option<Coordinate> {
        self.entries.get(key).copied()
    }

    /// All entries sorted by name (for listings and the places API).
    pub fn sorted_entries(&self) -> Vec<(&str, Coordinate)> {
        let mut entries: Vec<(&str, Coordinate)> = self
            .entries
            .iter()
            .map(|(name, coord)| (name.as_str(), *coord))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lookup_hit() {
        let gazetteer = Gazetteer::cordoba();
        let coord = gazetteer.lookup("rio cuarto").unwrap();
        assert_relative_eq!(coord.lat, -33.1307);
        assert_relative_eq!(coord.lon, -64.3499);
    }

    #[test]
    fn test_lookup_miss_is_none_not_error() {
        let gazetteer = Gazetteer::cordoba();
        assert!(gazetteer.lookup("atlantis").is_none());
    }

    #[test]
    fn test_lookup_is_exact_only() {
        let gazetteer = Gazetteer::cordoba();
        // Neither prefixes nor raw (un-normalized) forms match.
        assert!(gazetteer.lookup("rio").is_none());
        assert!(gazetteer.lookup("Río Cuarto").is_none());
    }

    #[test]
    fn test_aliases_share_a_coordinate() {
        let gazetteer = Gazetteer::cordoba();
        let a = gazetteer.lookup("carlos paz").unwrap();
        let b = gazetteer.lookup("villa carlos paz").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let gazetteer = Gazetteer::new(vec![
            ("doble".to_string(), Coordinate::new(-31.0, -64.0)),
            ("doble".to_string(), Coordinate::new(-32.0, -65.0)),
        ]);
        let coord = gazetteer.lookup("doble").unwrap();
        assert_relative_eq!(coord.lat, -32.0);
        assert_relative_eq!(coord.lon, -65.0);
        assert_eq!(gazetteer.len(), 1);
    }

    #[test]
    fn test_sorted_entries_ordering() {
        let gazetteer = Gazetteer::new(vec![
            ("b".to_string(), Coordinate::new(1.0, 1.0)),
            ("a".to_string(), Coordinate::new(2.0, 2.0)),
        ]);
        let names: Vec<&str> = gazetteer.sorted_entries().iter().map(|e| e.0).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_builtin_table_loads() {
        let gazetteer = Gazetteer::cordoba();
        assert!(gazetteer.len() > 70);
        assert!(!gazetteer.is_empty());
    }
}

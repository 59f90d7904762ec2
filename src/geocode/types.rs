//! Core types for the geocoding subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Which tier produced a resolution, or that none did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Local,
    Remote,
    Unresolved,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
            Self::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// The outcome of one pipeline lookup. Produced fresh per call, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub coordinate: Option<Coordinate>,
    pub source: Source,
}

impl Resolution {
    pub fn local(coordinate: Coordinate) -> Self {
        Self { coordinate: Some(coordinate), source: Source::Local }
    }

    pub fn remote(coordinate: Coordinate) -> Self {
        Self { coordinate: Some(coordinate), source: Source::Remote }
    }

    pub fn unresolved() -> Self {
        Self { coordinate: None, source: Source::Unresolved }
    }
}

/// Remote-tier failures. These never escape the pipeline: they are logged at
/// that boundary and collapse to an unresolved outcome.
#[derive(Debug)]
pub enum RemoteError {
    Network(String),
    InvalidResponse(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "invalid API response: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display_matches_output_vocabulary() {
        assert_eq!(Source::Local.to_string(), "local");
        assert_eq!(Source::Remote.to_string(), "remote");
        assert_eq!(Source::Unresolved.to_string(), "unresolved");
    }

    #[test]
    fn test_unresolved_has_no_coordinate() {
        let r = Resolution::unresolved();
        assert!(r.coordinate.is_none());
        assert_eq!(r.source, Source::Unresolved);
    }
}

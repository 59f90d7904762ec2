//! Place-name geocoding and record enrichment for Córdoba, Argentina.
//!
//! Resolves locality names to coordinates through two tiers — an exact-match
//! gazetteer and an optional Nominatim fallback — and streams delimited
//! records through that pipeline, appending coordinates and a source tag.

pub mod enrich;
pub mod geocode;
pub mod server;

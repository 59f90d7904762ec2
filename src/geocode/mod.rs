//! Place-name geocoding for the province of Córdoba.
//!
//! Two tiers: an exact-match gazetteer of known localities, and Nominatim
//! as an optional open-world fallback. Every result is tagged with the tier
//! that produced it.

mod dataset;
pub mod gazetteer;
pub mod nominatim;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use gazetteer::Gazetteer;
pub use nominatim::NominatimClient;
pub use normalize::normalize;
pub use pipeline::{Geocoder, IntervalGate, RateGate, RemoteGeocoder};
pub use types::{Coordinate, RemoteError, Resolution, Source};

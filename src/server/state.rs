use crate::geocode::{Geocoder, IntervalGate};
use std::sync::Mutex;

pub struct AppState {
    pub geocoder: Mutex<Geocoder>,
    pub gate: Mutex<IntervalGate>,
}

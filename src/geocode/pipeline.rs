//! The resolution pipeline — local tier first, remote tier as fallback.
//!
//! The local gazetteer is authoritative for the closed vocabulary: a local
//! hit short-circuits the remote tier even when both would succeed. Remote
//! failures are reported here and degrade to an unresolved outcome; nothing
//! in a single lookup can abort a batch.
//!
//! Every remote attempt first claims a slot from the caller's [`RateGate`],
//! so consecutive remote calls are spaced no matter which surface (batch
//! loop or HTTP API) drives the pipeline.

use super::gazetteer::Gazetteer;
use super::nominatim::NominatimClient;
use super::normalize::normalize;
use super::types::{Coordinate, RemoteError, Resolution};
use std::thread;
use std::time::{Duration, Instant};

/// The seam between the pipeline and the external geocoding service.
pub trait RemoteGeocoder {
    fn lookup(&self, raw_name: &str) -> Result<Option<Coordinate>, RemoteError>;
}

impl RemoteGeocoder for NominatimClient {
    fn lookup(&self, raw_name: &str) -> Result<Option<Coordinate>, RemoteError> {
        NominatimClient::lookup(self, raw_name)
    }
}

/// Spacing between consecutive remote-tier calls.
///
/// Consulted immediately before every remote lookup; the remote client
/// itself does no throttling. Tests substitute a no-op.
pub trait RateGate {
    /// Block until a remote call may fire, and claim the slot.
    fn pause(&mut self);
}

/// Minimum-interval gate: the first call passes immediately, every later
/// call waits until the configured interval has elapsed since the last
/// claimed slot.
pub struct IntervalGate {
    min_interval: Duration,
    next_slot: Option<Instant>,
}

impl IntervalGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: None,
        }
    }

    /// Nominatim's acceptable-use policy: at most one query per second.
    pub fn nominatim() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl RateGate for IntervalGate {
    fn pause(&mut self) {
        let now = Instant::now();
        if let Some(slot) = self.next_slot {
            if slot > now {
                thread::sleep(slot - now);
            }
        }
        self.next_slot = Some(Instant::now() + self.min_interval);
    }
}

/// Two-tier place-name resolver.
pub struct Geocoder {
    gazetteer: Gazetteer,
    remote: Box<dyn RemoteGeocoder + Send>,
}

impl Geocoder {
    pub fn new(gazetteer: Gazetteer, remote: Box<dyn RemoteGeocoder + Send>) -> Self {
        Self { gazetteer, remote }
    }

    /// The production configuration: built-in Córdoba table plus Nominatim.
    pub fn cordoba() -> Self {
        Self::new(Gazetteer::cordoba(), Box::new(NominatimClient::cordoba()))
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Resolve a raw place name.
    ///
    /// The local tier is always attempted and never touches the gate. The
    /// remote tier runs only when the local tier misses, `allow_remote` is
    /// set, and the name is non-blank (a blank query cannot match and would
    /// burn a rate-limited call); the gate is claimed right before the
    /// remote lookup fires. No retries, no caching.
    pub fn resolve(
        &self,
        raw_name: &str,
        allow_remote: bool,
        gate: &mut dyn RateGate,
    ) -> Resolution {
        if let Some(coordinate) = self.gazetteer.lookup(&normalize(raw_name)) {
            return Resolution::local(coordinate);
        }

        if allow_remote && !raw_name.trim().is_empty() {
            gate.pause();
            match self.remote.lookup(raw_name) {
                Ok(Some(coordinate)) => return Resolution::remote(coordinate),
                Ok(None) => {}
                Err(e) => {
                    eprintln!("  Advertencia: falló la consulta remota de '{}': {}", raw_name, e);
                }
            }
        }

        Resolution::unresolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::types::Source;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct NoopGate;

    impl RateGate for NoopGate {
        fn pause(&mut self) {}
    }

    struct FakeRemote {
        answer: Option<Coordinate>,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    impl RemoteGeocoder for FakeRemote {
        fn lookup(&self, _raw_name: &str) -> Result<Option<Coordinate>, RemoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RemoteError::Network("connection refused".into()));
            }
            Ok(self.answer)
        }
    }

    fn geocoder_with(answer: Option<Coordinate>, fail: bool) -> (Geocoder, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let remote = FakeRemote {
            answer,
            fail,
            calls: calls.clone(),
        };
        (
            Geocoder::new(Gazetteer::cordoba(), Box::new(remote)),
            calls,
        )
    }

    #[test]
    fn test_local_hit_with_accents_and_case() {
        let (geocoder, calls) = geocoder_with(None, false);
        for name in ["Río Cuarto", "RIO CUARTO", "  rio cuarto "] {
            let r = geocoder.resolve(name, true, &mut NoopGate);
            assert_eq!(r.source, Source::Local);
            let coord = r.coordinate.unwrap();
            assert_relative_eq!(coord.lat, -33.1307);
            assert_relative_eq!(coord.lon, -64.3499);
        }
        // Local is authoritative: the remote double was never consulted.
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_local_precedence_over_remote() {
        let (geocoder, calls) = geocoder_with(Some(Coordinate::new(0.0, 0.0)), false);
        let r = geocoder.resolve("Cordoba", true, &mut NoopGate);
        assert_eq!(r.source, Source::Local);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remote_fallback_on_local_miss() {
        let expected = Coordinate::new(-31.73, -64.57);
        let (geocoder, calls) = geocoder_with(Some(expected), false);
        let r = geocoder.resolve("Cuesta Blanca", true, &mut NoopGate);
        assert_eq!(r.source, Source::Remote);
        assert_eq!(r.coordinate, Some(expected));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remote_disabled_means_no_remote_call() {
        let (geocoder, calls) = geocoder_with(Some(Coordinate::new(0.0, 0.0)), false);
        let r = geocoder.resolve("Atlantis", false, &mut NoopGate);
        assert_eq!(r.source, Source::Unresolved);
        assert!(r.coordinate.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remote_miss_is_unresolved() {
        let (geocoder, calls) = geocoder_with(None, false);
        let r = geocoder.resolve("Atlantis", true, &mut NoopGate);
        assert_eq!(r.source, Source::Unresolved);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remote_error_degrades_to_unresolved() {
        let (geocoder, _) = geocoder_with(None, true);
        let r = geocoder.resolve("Atlantis", true, &mut NoopGate);
        assert_eq!(r.source, Source::Unresolved);
        assert!(r.coordinate.is_none());
    }

    #[test]
    fn test_blank_name_skips_remote_and_gate() {
        let (geocoder, calls) = geocoder_with(Some(Coordinate::new(0.0, 0.0)), false);
        let mut gate = EventGate::new();
        for name in ["", "   "] {
            let r = geocoder.resolve(name, true, &mut gate);
            assert_eq!(r.source, Source::Unresolved);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(gate.events.lock().unwrap().is_empty());
    }

    // Records the interleaving of gate claims and remote calls.
    struct EventGate {
        events: Arc<Mutex<Vec<&'static str>>>,
    }

    impl EventGate {
        fn new() -> Self {
            Self {
                events: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl RateGate for EventGate {
        fn pause(&mut self) {
            self.events.lock().unwrap().push("gate");
        }
    }

    struct EventRemote {
        events: Arc<Mutex<Vec<&'static str>>>,
    }

    impl RemoteGeocoder for EventRemote {
        fn lookup(&self, _raw_name: &str) -> Result<Option<Coordinate>, RemoteError> {
            self.events.lock().unwrap().push("remote");
            Ok(None)
        }
    }

    #[test]
    fn test_gate_claimed_before_each_remote_call() {
        let mut gate = EventGate::new();
        let remote = EventRemote {
            events: gate.events.clone(),
        };
        let geocoder = Geocoder::new(Gazetteer::cordoba(), Box::new(remote));

        geocoder.resolve("Atlantis", true, &mut gate);
        geocoder.resolve("El Dorado", true, &mut gate);
        // A local hit in between claims nothing.
        geocoder.resolve("Cordoba", true, &mut gate);

        let events = gate.events.lock().unwrap();
        assert_eq!(*events, vec!["gate", "remote", "gate", "remote"]);
    }

    #[test]
    fn test_interval_gate_spaces_consecutive_claims() {
        let interval = Duration::from_millis(40);
        let mut gate = IntervalGate::new(interval);

        let start = Instant::now();
        gate.pause();
        // The first claim passes without waiting.
        assert!(start.elapsed() < interval);

        gate.pause();
        assert!(start.elapsed() >= interval);
    }
}

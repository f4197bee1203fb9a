//! Coalescing store for the latest sighting per mark and instance.
//!
//! The ingest task writes every decoded sighting here; the flush task takes
//! a snapshot at most once per tick, and only when something changed. The
//! lock is only ever held for a map insert or a map copy, never across
//! network I/O.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hashbrown::HashMap;

use crate::sighting::{Sighting, SightingKey};

#[derive(Debug, Default)]
struct Inner {
    sightings: HashMap<SightingKey, Sighting>,
    pending_flush: bool,
}

#[derive(Debug, Default)]
pub struct SightingCache {
    inner: Mutex<Inner>,
}

impl SightingCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Entries are replaced whole, so a poisoned map is still consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `sighting`, replacing any earlier one with the same key, and
    /// mark the cache as due for a flush.
    pub fn update(&self, sighting: Sighting) {
        let mut inner = self.lock();
        inner.sightings.insert(sighting.key(), sighting);
        inner.pending_flush = true;
    }

    /// Snapshot of every tracked sighting if anything changed since the last
    /// flush, clearing the pending flag. `None` when nothing is due.
    ///
    /// Sightings stay tracked after a flush; each batch carries the full
    /// latest state.
    pub fn flush_if_pending(&self) -> Option<Vec<Sighting>> {
        let mut inner = self.lock();
        if !inner.pending_flush {
            return None;
        }
        inner.pending_flush = false;
        Some(inner.sightings.values().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.lock().sightings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt_data::Point;
    use std::sync::Arc;

    fn sighting(name: &'static str, instance: u32, x: f64) -> Sighting {
        Sighting {
            name,
            pos: Point::new(x, 10.0),
            zone: 1190,
            instance,
        }
    }

    #[test]
    fn test_same_key_is_replaced() {
        let cache = SightingCache::new();
        cache.update(sighting("Keheniheyamewi", 1, 11.0));
        cache.update(sighting("Keheniheyamewi", 1, 22.0));

        let snapshot = cache.flush_if_pending().unwrap();
        assert_eq!(snapshot, vec![sighting("Keheniheyamewi", 1, 22.0)]);
    }

    #[test]
    fn test_instances_are_tracked_separately() {
        let cache = SightingCache::new();
        cache.update(sighting("Keheniheyamewi", 1, 11.0));
        cache.update(sighting("Keheniheyamewi", 2, 11.0));
        cache.update(sighting("Yehehetoaua'pyo", 1, 11.0));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_flush_clears_pending() {
        let cache = SightingCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.flush_if_pending(), None);

        cache.update(sighting("Heshuala", 1, 5.0));
        assert_eq!(cache.flush_if_pending().map(|s| s.len()), Some(1));
        assert_eq!(cache.flush_if_pending(), None);
        assert!(!cache.is_empty());

        // Next update re-arms the flush with the full state
        cache.update(sighting("Heshuala", 3, 5.0));
        assert_eq!(cache.flush_if_pending().map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let cache = SightingCache::new();
        cache.update(sighting("Heshuala", 1, 5.0));
        let snapshot = cache.flush_if_pending().unwrap();

        cache.update(sighting("Heshuala", 1, 9.0));
        assert_eq!(snapshot[0].pos.x, 5.0);
    }

    #[test]
    fn test_concurrent_updates_keep_unique_keys() {
        let cache = Arc::new(SightingCache::new());
        let names = ["Nechuciho", "Queen Hawk", "Starcrier", "Pkuucha"];

        let writers: Vec<_> = names
            .into_iter()
            .map(|name| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for round in 0..200 {
                        cache.update(sighting(name, 1 + round % 3, f64::from(round)));
                    }
                })
            })
            .collect();

        while writers.iter().any(|w| !w.is_finished()) {
            if let Some(snapshot) = cache.flush_if_pending() {
                let keys: std::collections::HashSet<_> =
                    snapshot.iter().map(Sighting::key).collect();
                assert_eq!(keys.len(), snapshot.len());
            }
        }
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(cache.len(), names.len() * 3);
        if let Some(snapshot) = cache.flush_if_pending() {
            assert_eq!(snapshot.len(), names.len() * 3);
        }
    }
}

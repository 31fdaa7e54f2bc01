//! Single-entry memoization

use crate::telemetry::{increment, record_compute_time, CounterMetric};
use std::sync::Arc;
use std::time::Instant;

/// Caches the output of one selector for its most recent key
///
/// Keys are compared with `==`. For `Arc<[T]>` and `Arc<Vec<T>>` with
/// `T: Eq` that is a pointer check first, so passing the same snapshot back
/// is cheap. A failed computation leaves the previous entry in place.
#[derive(Debug)]
pub struct Memo<K, V> {
    name: &'static str,
    entry: Option<(K, Arc<V>)>,
    recomputes: u64,
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Create an empty memo
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entry: None,
            recomputes: 0,
        }
    }

    /// Return the cached output for `key`, computing it on a miss
    pub fn get_or_try_compute<E, F>(&mut self, key: K, compute: F) -> Result<Arc<V>, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
        E: std::fmt::Display,
    {
        if let Some((cached_key, value)) = &self.entry {
            if *cached_key == key {
                increment(CounterMetric::SelectorHit, self.name);
                return Ok(Arc::clone(value));
            }
        }

        let started = Instant::now();
        let value = match compute(&key) {
            Ok(value) => Arc::new(value),
            Err(e) => {
                increment(CounterMetric::SelectorError, self.name);
                tracing::warn!(selector = self.name, error = %e, "Selector failed");
                return Err(e);
            }
        };

        self.recomputes += 1;
        increment(CounterMetric::SelectorRecompute, self.name);
        record_compute_time(self.name, started.elapsed());

        self.entry = Some((key, Arc::clone(&value)));
        Ok(value)
    }

    /// Number of times the output was rebuilt
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

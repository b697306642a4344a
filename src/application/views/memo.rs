//! Single-entry selector cache

/// Caches one derived value against the key it was computed from.
///
/// A screen keeps one `Memo` per derived list; recomputation happens only
/// when the key (store revisions, session, filter) differs from the last.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    cached: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            cached: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        if self.cached.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.cached = None;
        }
        let computations = &mut self.computations;
        let (_, value) = self.cached.get_or_insert_with(|| {
            *computations += 1;
            (key, compute())
        });
        value
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// How many times the value has been (re)computed
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

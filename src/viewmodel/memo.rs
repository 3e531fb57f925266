//! Single-slot cached derivation keyed on an explicit identity token.

/// Caches the result of one derivation together with the key it was
/// computed for.
///
/// A lookup with the same key returns the cached value untouched; a lookup
/// with a different key recomputes and replaces the slot. The number of
/// recomputations is tracked so callers can assert that no-op renders do
/// no work.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value cached for `key`, computing it first if the slot is
    /// empty or holds a different key.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        let hit = matches!(&self.slot, Some((cached, _)) if *cached == key);
        if !hit {
            self.computations += 1;
            self.slot = None;
        }
        &self.slot.get_or_insert_with(|| (key, compute())).1
    }

    /// The cached value, if it was computed for `key`.
    #[must_use]
    pub fn peek(&self, key: &K) -> Option<&V> {
        match &self.slot {
            Some((cached, value)) if cached == key => Some(value),
            _ => None,
        }
    }

    /// Drop the cached value. The computation counter is kept.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// How many times a value has been computed.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }
}

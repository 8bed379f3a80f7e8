//! Deduplication cache of shingle strings.
use std::sync::Arc;

use hashbrown::HashSet;

/// Cache mapping shingle content to one canonical shared instance.
///
/// The cache is append-only: once a shingle is interned, every later call with an equal
/// string returns a clone of the same [`Arc`]. Clearing it only affects memory sharing,
/// never the profiles built from it.
#[derive(Debug, Default)]
pub struct ShingleInterner {
    shingles: HashSet<Arc<str>>,
}

impl ShingleInterner {
    /// Creates an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical instance equal to `shingle`, registering it if unseen.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use shingle_similarity::ShingleInterner;
    ///
    /// let mut interner = ShingleInterner::new();
    /// let a = interner.intern("abc");
    /// let b = interner.intern(&String::from("abc"));
    /// assert!(Arc::ptr_eq(&a, &b));
    /// assert_eq!(interner.len(), 1);
    /// ```
    pub fn intern(&mut self, shingle: &str) -> Arc<str> {
        Arc::clone(self.shingles.get_or_insert_with(shingle, |s| Arc::from(s)))
    }

    /// Gets the number of distinct shingles seen.
    pub fn len(&self) -> usize {
        self.shingles.len()
    }

    /// Checks if no shingle has been interned.
    pub fn is_empty(&self) -> bool {
        self.shingles.is_empty()
    }

    /// Forgets all the interned shingles.
    pub fn clear(&mut self) {
        self.shingles.clear();
    }
}

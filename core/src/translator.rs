// core/src/translator.rs
//
// Translator abstraction shared by the grapheme and dictionary front ends, plus
// an LRU-memoizing wrapper. Translation is a pure function of its input once the
// tables are built, so results can be cached freely.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use lru::LruCache;

/// Text → phonetic-spelling rewriting. Implementations never fail.
pub trait Translator {
    fn translate(&self, text: &str) -> String;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

impl<T: Translator + ?Sized> Translator for std::sync::Arc<T> {
    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

/// Memoizing wrapper around any `Translator`.
///
/// A capacity of 0 disables the cache; every call is forwarded.
pub struct CachedTranslator<T> {
    inner: T,
    cache: Option<Mutex<LruCache<String, String>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<T: Translator> CachedTranslator<T> {
    pub fn new(inner: T, capacity: usize) -> Self {
        Self {
            inner,
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// The wrapped translator.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns (hits, misses).
    pub fn cache_stats(&self) -> (usize, usize) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    /// Hit rate as a percentage, `None` before the first lookup.
    pub fn cache_hit_rate(&self) -> Option<f32> {
        let (hits, misses) = self.cache_stats();
        let total = hits + misses;
        if total == 0 {
            None
        } else {
            Some((hits as f32 / total as f32) * 100.0)
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache
            .as_ref()
            .map(|c| c.lock().unwrap_or_else(PoisonError::into_inner).len())
            .unwrap_or(0)
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache
            .as_ref()
            .map(|c| c.lock().unwrap_or_else(PoisonError::into_inner).cap().get())
            .unwrap_or(0)
    }

    /// Drop all cached entries and reset the counters.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl<T: Translator> Translator for CachedTranslator<T> {
    fn translate(&self, text: &str) -> String {
        let Some(cache) = &self.cache else {
            return self.inner.translate(text);
        };

        if let Some(hit) = cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(text)
            .cloned()
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        // Translate without holding the lock.
        let out = self.inner.translate(text);
        cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(text.to_string(), out.clone());
        out
    }
}

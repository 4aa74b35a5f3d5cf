//! Pattern cache for compile-once reuse.
//!
//! This module provides a cache for compiled patterns keyed by source and
//! flags, so that convenience functions taking a pattern string do not
//! recompile it on every call.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use super::flags::PatternFlags;
use super::pattern::Pattern;
use crate::config::{CacheConfig, CompileConfig, DEFAULT_CACHE_SIZE};
use crate::error::Result;

type CacheKey = (String, PatternFlags);

/// A cache for compiled patterns.
///
/// When full, the oldest inserted pattern is evicted.
pub struct PatternCache {
    cache: RwLock<Entries>,
    max_size: usize,
    compile: CompileConfig,
    total_hits: AtomicUsize,
    total_misses: AtomicUsize,
}

struct Entries {
    map: HashMap<CacheKey, Arc<Pattern>>,
    order: Vec<CacheKey>,
}

impl PatternCache {
    /// Create a new cache with the specified maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self::with_compile_config(max_size, CompileConfig::default())
    }

    /// Create a cache whose patterns are compiled with extra flags and limits.
    #[must_use]
    pub fn with_compile_config(max_size: usize, compile: CompileConfig) -> Self {
        Self {
            cache: RwLock::new(Entries {
                map: HashMap::with_capacity(max_size),
                order: Vec::with_capacity(max_size),
            }),
            max_size,
            compile,
            total_hits: AtomicUsize::new(0),
            total_misses: AtomicUsize::new(0),
        }
    }

    /// Create a cache from configuration.
    #[must_use]
    pub fn from_config(cache: &CacheConfig, compile: CompileConfig) -> Self {
        Self::with_compile_config(cache.capacity, compile)
    }

    /// Get or compile a pattern with no extra flags.
    pub fn get(&self, source: &str) -> Result<Arc<Pattern>> {
        self.get_with_flags(source, PatternFlags::empty())
    }

    /// Get or compile a pattern.
    ///
    /// Returns the cached pattern if available, otherwise compiles and caches
    /// it. Invalid patterns are never cached.
    pub fn get_with_flags(&self, source: &str, flags: PatternFlags) -> Result<Arc<Pattern>> {
        let flags = flags | self.compile.flags;
        let key = (source.to_string(), flags);

        // The cache only saves recompilation, so a poisoned lock is still usable.
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(pattern) = cache.map.get(&key) {
                self.total_hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(pattern = %source, "pattern cache hit");
                return Ok(Arc::clone(pattern));
            }
        }

        self.total_misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(pattern = %source, "pattern cache miss");

        let pattern = Arc::new(
            Pattern::builder(source)
                .config(&self.compile)
                .flags(flags)
                .build()?,
        );

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);

        // Another thread may have inserted it meanwhile.
        if let Some(existing) = cache.map.get(&key) {
            return Ok(Arc::clone(existing));
        }

        if self.max_size == 0 {
            return Ok(pattern);
        }

        if cache.map.len() >= self.max_size && !cache.order.is_empty() {
            let oldest = cache.order.remove(0);
            cache.map.remove(&oldest);
            tracing::trace!(pattern = %oldest.0, "evicted pattern");
        }

        cache.map.insert(key.clone(), Arc::clone(&pattern));
        cache.order.push(key);

        Ok(pattern)
    }

    /// Check if a pattern is cached.
    #[must_use]
    pub fn contains(&self, source: &str, flags: PatternFlags) -> bool {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache
            .map
            .contains_key(&(source.to_string(), flags | self.compile.flags))
    }

    /// Get the current number of cached patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.map.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the cache.
    pub fn clear(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.map.clear();
        cache.order.clear();
    }

    /// Get the maximum cache size.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            max_size: self.max_size,
            total_hits: self.total_hits.load(Ordering::Relaxed),
            total_misses: self.total_misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}

impl std::fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCache")
            .field("stats", &self.stats())
            .field("compile", &self.compile)
            .finish_non_exhaustive()
    }
}

/// Statistics about a pattern cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached patterns.
    pub size: usize,
    /// Maximum cache size.
    pub max_size: usize,
    /// Total cache hits.
    pub total_hits: usize,
    /// Total cache misses.
    pub total_misses: usize,
}

impl CacheStats {
    /// Get the cache hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no lookups have been made.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_hits + self.total_misses;
        if total == 0 {
            1.0
        } else {
            self.total_hits as f64 / total as f64
        }
    }
}

/// Global pattern cache for shared use.
pub static GLOBAL_CACHE: LazyLock<PatternCache> = LazyLock::new(PatternCache::default);

/// Get or compile a pattern using the global cache.
pub fn get_pattern(source: &str) -> Result<Arc<Pattern>> {
    GLOBAL_CACHE.get(source)
}

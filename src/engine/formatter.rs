// ============================================================================
// Formatter
// Memoizing front end over the conversions, partitioned by call site
// ============================================================================

use super::cache::PartitionedCache;
use crate::convert::{self, FormatError, FormatResult};
use crate::domain::{CacheStats, Conversion, FormatterConfig, PartitionKey};
use crate::interfaces::{FormatEvent, FormatObserver, NoOpObserver};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Configuration and cache; `None` once the formatter is destroyed
struct FormatterState {
    config: FormatterConfig,
    cache: PartitionedCache,
}

/// Number formatter that memoizes every result per call site.
///
/// The plain conversion methods (`to_abbreviation`, `to_comma`, ...) key
/// their cache partition on the source location of the calling
/// expression, so the same value formatted from two places is cached
/// twice. The `*_in` variants take an explicit [`PartitionKey`].
///
/// # Example
/// ```
/// use tiered_format::prelude::*;
///
/// let formatter = Formatter::new();
/// assert_eq!(formatter.to_abbreviation(1_000_000).unwrap(), "1.00M");
/// assert_eq!(formatter.to_comma(-1234.5).unwrap(), "-1,234.5");
/// assert_eq!(formatter.to_byte_abbreviation(1024).unwrap(), "1.00KB");
/// assert_eq!(formatter.to_roman_numeral(1994).unwrap(), "MCMXCIV");
///
/// formatter.destroy().unwrap();
/// assert_eq!(formatter.to_comma(1), Err(FormatError::UseAfterDestroy));
/// ```
pub struct Formatter {
    state: RwLock<Option<FormatterState>>,

    /// Instrumentation hook, invoked outside the lock
    observer: Arc<dyn FormatObserver>,

    hits: AtomicU64,
    misses: AtomicU64,
}

impl Formatter {
    /// Create a formatter with the default suffix ladders and two decimals
    pub fn new() -> Self {
        Self::from_parts(FormatterConfig::default(), Arc::new(NoOpObserver))
    }

    /// Create a formatter from a validated configuration
    pub fn with_config(config: FormatterConfig) -> FormatResult<Self> {
        Self::with_observer(config, Arc::new(NoOpObserver))
    }

    /// Create a formatter that reports cache activity to `observer`
    pub fn with_observer(
        config: FormatterConfig,
        observer: Arc<dyn FormatObserver>,
    ) -> FormatResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, observer))
    }

    fn from_parts(config: FormatterConfig, observer: Arc<dyn FormatObserver>) -> Self {
        let cache = PartitionedCache::new(config.partition_capacity);
        Self {
            state: RwLock::new(Some(FormatterState { config, cache })),
            observer,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    // ========================================================================
    // Call-site partitioned conversions
    // ========================================================================

    /// Abbreviate a large number ("1.23K"), cached for this call site
    #[track_caller]
    pub fn to_abbreviation(&self, value: impl Into<f64>) -> FormatResult<String> {
        self.convert(PartitionKey::caller(), Conversion::Abbreviation, value.into())
    }

    /// Group integer digits with commas ("1,234.5"), cached for this call site
    #[track_caller]
    pub fn to_comma(&self, value: impl Into<f64>) -> FormatResult<String> {
        self.convert(PartitionKey::caller(), Conversion::Comma, value.into())
    }

    /// Abbreviate a byte count ("1.50KB"), cached for this call site
    #[track_caller]
    pub fn to_byte_abbreviation(&self, value: impl Into<f64>) -> FormatResult<String> {
        self.convert(PartitionKey::caller(), Conversion::ByteSize, value.into())
    }

    /// Render a positive integer as Roman numerals, cached for this call site
    #[track_caller]
    pub fn to_roman_numeral(&self, value: impl Into<f64>) -> FormatResult<String> {
        self.convert(PartitionKey::caller(), Conversion::RomanNumeral, value.into())
    }

    // ========================================================================
    // Explicitly partitioned conversions
    // ========================================================================

    pub fn to_abbreviation_in(
        &self,
        key: impl Into<PartitionKey>,
        value: impl Into<f64>,
    ) -> FormatResult<String> {
        self.convert(key.into(), Conversion::Abbreviation, value.into())
    }

    pub fn to_comma_in(
        &self,
        key: impl Into<PartitionKey>,
        value: impl Into<f64>,
    ) -> FormatResult<String> {
        self.convert(key.into(), Conversion::Comma, value.into())
    }

    pub fn to_byte_abbreviation_in(
        &self,
        key: impl Into<PartitionKey>,
        value: impl Into<f64>,
    ) -> FormatResult<String> {
        self.convert(key.into(), Conversion::ByteSize, value.into())
    }

    pub fn to_roman_numeral_in(
        &self,
        key: impl Into<PartitionKey>,
        value: impl Into<f64>,
    ) -> FormatResult<String> {
        self.convert(key.into(), Conversion::RomanNumeral, value.into())
    }

    /// Look up `(key, conversion, value)`, computing and caching on a miss.
    /// Failed conversions are not cached.
    pub fn convert(
        &self,
        key: PartitionKey,
        conversion: Conversion,
        value: f64,
    ) -> FormatResult<String> {
        let computed = {
            let guard = self.state.read();
            let state = guard.as_ref().ok_or(FormatError::UseAfterDestroy)?;

            let cached = state
                .cache
                .get(&key, conversion, value)
                .map(str::to_string);
            if let Some(output) = cached {
                drop(guard);
                self.hits.fetch_add(1, Ordering::Relaxed);
                self.observer.on_event(FormatEvent::CacheHit {
                    partition: key,
                    conversion,
                    value,
                });
                return Ok(output);
            }

            run_conversion(conversion, value, &state.config)
        };

        self.misses.fetch_add(1, Ordering::Relaxed);

        let output = match computed {
            Ok(output) => output,
            Err(error) => {
                self.observer.on_event(FormatEvent::Failed {
                    partition: key,
                    conversion,
                    value,
                    error: error.clone(),
                });
                return Err(error);
            },
        };

        tracing::trace!(partition = %key, %conversion, value, output = %output, "cache miss");

        let outcome = {
            let mut guard = self.state.write();
            let state = guard.as_mut().ok_or(FormatError::UseAfterDestroy)?;
            state
                .cache
                .insert(key.clone(), conversion, value, output.clone())
        };

        let mut events = Vec::new();
        if outcome.created {
            events.push(FormatEvent::PartitionCreated {
                partition: key.clone(),
            });
        }
        if outcome.evicted > 0 {
            tracing::debug!(partition = %key, evicted = outcome.evicted, "partition at capacity, cleared");
            events.push(FormatEvent::PartitionReset {
                partition: key.clone(),
                evicted: outcome.evicted,
            });
        }
        events.push(FormatEvent::Computed {
            partition: key,
            conversion,
            value,
            output: output.clone(),
        });
        self.observer.on_events(events);

        Ok(output)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Clear every partition; configuration is kept
    pub fn flush(&self) -> FormatResult<()> {
        let (partitions, entries) = {
            let mut guard = self.state.write();
            let state = guard.as_mut().ok_or(FormatError::UseAfterDestroy)?;
            state.cache.clear()
        };

        tracing::debug!(partitions, entries, "formatter cache flushed");
        self.observer
            .on_event(FormatEvent::Flushed { partitions, entries });
        Ok(())
    }

    /// Drop cache and configuration. Every later call, including a second
    /// `destroy`, fails with [`FormatError::UseAfterDestroy`].
    pub fn destroy(&self) -> FormatResult<()> {
        let mut state = self
            .state
            .write()
            .take()
            .ok_or(FormatError::UseAfterDestroy)?;
        let (partitions, entries) = state.cache.clear();

        tracing::debug!(partitions, entries, "formatter destroyed");
        self.observer
            .on_event(FormatEvent::Destroyed { partitions, entries });
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.read().is_none()
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Get a copy of the configuration
    pub fn config(&self) -> FormatResult<FormatterConfig> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(FormatError::UseAfterDestroy)?;
        Ok(state.config.clone())
    }

    /// Get cache statistics
    pub fn stats(&self) -> FormatResult<CacheStats> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(FormatError::UseAfterDestroy)?;
        Ok(CacheStats {
            partitions: state.cache.partition_count(),
            entries: state.cache.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        })
    }

    /// Entries cached under `key`
    pub fn partition_len(&self, key: &PartitionKey) -> FormatResult<usize> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(FormatError::UseAfterDestroy)?;
        Ok(state.cache.partition_len(key))
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

fn run_conversion(
    conversion: Conversion,
    value: f64,
    config: &FormatterConfig,
) -> FormatResult<String> {
    match conversion {
        Conversion::Abbreviation => convert::abbreviate(
            value,
            &config.abbreviations,
            config.decimal_places,
            config.overflow_policy,
        ),
        Conversion::Comma => convert::group_thousands(value),
        Conversion::ByteSize => convert::abbreviate_bytes(
            value,
            &config.byte_abbreviations,
            config.decimal_places,
            config.overflow_policy,
        ),
        Conversion::RomanNumeral => convert::to_roman(value),
    }
}

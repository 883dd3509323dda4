// ============================================================================
// Formatter Builder
// Fluent construction of formatters
// ============================================================================

use super::Formatter;
use crate::convert::FormatResult;
use crate::domain::{FormatterConfig, TierOverflowPolicy};
use crate::interfaces::{FormatObserver, LoggingObserver, NoOpObserver};
use std::sync::Arc;

/// Builder for creating formatters with fluent API
///
/// # Example
/// ```
/// use tiered_format::prelude::*;
///
/// let formatter = FormatterBuilder::new()
///     .abbreviations(["k", "m", "bn"])
///     .decimal_places(1)
///     .reject_overflow()
///     .build()
///     .unwrap();
///
/// assert_eq!(formatter.to_abbreviation(2_500_000).unwrap(), "2.5m");
/// ```
pub struct FormatterBuilder {
    config: FormatterConfig,
    observer: Arc<dyn FormatObserver>,
}

impl FormatterBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::from_config(FormatterConfig::default())
    }

    /// Start from an existing configuration
    pub fn from_config(config: FormatterConfig) -> Self {
        Self {
            config,
            observer: Arc::new(NoOpObserver),
        }
    }

    /// Large-number suffix ladder, thousands first
    pub fn abbreviations<I>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config = self.config.with_abbreviations(suffixes);
        self
    }

    /// Byte suffix ladder, plain bytes first
    pub fn byte_abbreviations<I>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config = self.config.with_byte_abbreviations(suffixes);
        self
    }

    pub fn decimal_places(mut self, decimal_places: usize) -> Self {
        self.config = self.config.with_decimal_places(decimal_places);
        self
    }

    /// Clamp oversized tiers to the last suffix (default)
    pub fn clamp_overflow(mut self) -> Self {
        self.config = self.config.with_overflow_policy(TierOverflowPolicy::Clamp);
        self
    }

    /// Fail on tiers beyond the suffix ladder
    pub fn reject_overflow(mut self) -> Self {
        self.config = self.config.with_overflow_policy(TierOverflowPolicy::Reject);
        self
    }

    /// Bound every cache partition to `capacity` entries
    pub fn partition_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_partition_capacity(capacity);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn FormatObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Report cache activity through `tracing`
    pub fn with_logging(self) -> Self {
        self.observer(Arc::new(LoggingObserver))
    }

    /// Validate the configuration and build the formatter
    pub fn build(self) -> FormatResult<Formatter> {
        Formatter::with_observer(self.config, self.observer)
    }
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Cache Partition Keys
// Identify which call site a cached string belongs to
// ============================================================================

use std::fmt;
use std::panic::Location;

/// Identifies one cache partition.
///
/// The implicit conversion methods on the formatter resolve a `Location`
/// key from the source position of the calling expression. The `*_in`
/// variants accept any key, so callers can share a partition across
/// several sites (`Named`) or opt out of partitioning (`Global`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionKey {
    /// Source position of the calling expression
    Location(&'static Location<'static>),
    /// Caller-chosen tag
    Named(String),
    /// Single shared partition
    Global,
}

impl PartitionKey {
    /// Resolve the key for whoever called the `#[track_caller]` chain
    #[track_caller]
    pub fn caller() -> Self {
        PartitionKey::Location(Location::caller())
    }

    pub fn named(tag: impl Into<String>) -> Self {
        PartitionKey::Named(tag.into())
    }
}

impl From<&str> for PartitionKey {
    fn from(tag: &str) -> Self {
        PartitionKey::Named(tag.to_string())
    }
}

impl From<String> for PartitionKey {
    fn from(tag: String) -> Self {
        PartitionKey::Named(tag)
    }
}

impl From<&'static Location<'static>> for PartitionKey {
    fn from(location: &'static Location<'static>) -> Self {
        PartitionKey::Location(location)
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionKey::Location(location) => write!(f, "{}", location),
            PartitionKey::Named(tag) => write!(f, "#{}", tag),
            PartitionKey::Global => write!(f, "<global>"),
        }
    }
}

// ============================================================================
// Conversion Kind
// ============================================================================

/// The four conversions a formatter performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    Abbreviation,
    Comma,
    ByteSize,
    RomanNumeral,
}

impl Conversion {
    pub fn name(&self) -> &'static str {
        match self {
            Conversion::Abbreviation => "abbreviation",
            Conversion::Comma => "comma",
            Conversion::ByteSize => "byte size",
            Conversion::RomanNumeral => "roman numeral",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Cache Statistics
// ============================================================================

/// Point-in-time view of a formatter's cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Partitions currently held
    pub partitions: usize,
    /// Cached strings across all partitions
    pub entries: usize,
    /// Lookups answered from the cache since construction
    pub hits: u64,
    /// Lookups that had to compute since construction
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from cache, None before the first lookup
    pub fn hit_ratio(&self) -> Option<f64> {
        let total = self.hits + self.misses;
        if total == 0 {
            None
        } else {
            Some(self.hits as f64 / total as f64)
        }
    }
}

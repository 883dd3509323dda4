// ============================================================================
// Domain Models Module
// Configuration and cache-key value types
// ============================================================================

pub mod config;
pub mod partition;

pub use config::{
    FormatterConfig, TierOverflowPolicy, DEFAULT_ABBREVIATIONS, DEFAULT_BYTE_ABBREVIATIONS,
    DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES,
};
pub use partition::{CacheStats, Conversion, PartitionKey};

// ============================================================================
// Formatter Configuration
// Suffix ladders, precision and cache policy for a formatter instance
// ============================================================================

use crate::convert::{FormatError, FormatResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Large-number suffixes, tier 1 = thousands, tier 2 = millions, ...
pub const DEFAULT_ABBREVIATIONS: [&str; 13] = [
    "K", "M", "B", "T", "Qd", "Qn", "Sx", "Sp", "Oc", "No", "De", "Ud", "Dd",
];

/// Byte-size suffixes, tier 0 = bytes as-is, tier 1 = kibibytes, ...
pub const DEFAULT_BYTE_ABBREVIATIONS: [&str; 9] =
    ["Byte", "KB", "MB", "GB", "TB", "PB", "EP", "ZB", "YB"];

pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Upper bound accepted by [`FormatterConfig::validate`]
pub const MAX_DECIMAL_PLACES: usize = 20;

// ============================================================================
// Tier Overflow Policy
// ============================================================================

/// What to do when a value's magnitude tier has no configured suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TierOverflowPolicy {
    /// Use the last configured suffix
    #[default]
    Clamp,
    /// Fail with [`FormatError::ConfigurationExhausted`]
    Reject,
}

// ============================================================================
// Formatter Configuration
// ============================================================================

/// Immutable configuration of a formatter instance
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatterConfig {
    /// Suffixes for large-number abbreviation, index 0 = thousands
    pub abbreviations: Vec<String>,

    /// Suffixes for byte sizes, index 0 = plain bytes
    pub byte_abbreviations: Vec<String>,

    /// Fractional digits emitted by abbreviation and byte conversions
    pub decimal_places: usize,

    /// Behavior when a tier exceeds the suffix list
    pub overflow_policy: TierOverflowPolicy,

    /// Optional: maximum entries per cache partition
    /// None means unbounded; a full partition is cleared wholesale
    pub partition_capacity: Option<usize>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
            byte_abbreviations: DEFAULT_BYTE_ABBREVIATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            overflow_policy: TierOverflowPolicy::Clamp,
            partition_capacity: None,
        }
    }
}

impl FormatterConfig {
    /// Create a configuration with explicit suffix ladders and precision
    pub fn new<A, B>(abbreviations: A, byte_abbreviations: B, decimal_places: usize) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            abbreviations: abbreviations.into_iter().map(Into::into).collect(),
            byte_abbreviations: byte_abbreviations.into_iter().map(Into::into).collect(),
            decimal_places,
            ..Self::default()
        }
    }

    /// Builder method: Replace the large-number suffix ladder
    pub fn with_abbreviations<I>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.abbreviations = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Replace the byte suffix ladder
    pub fn with_byte_abbreviations<I>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.byte_abbreviations = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Set fractional digit count
    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Builder method: Set tier overflow policy
    pub fn with_overflow_policy(mut self, policy: TierOverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Builder method: Bound each cache partition
    pub fn with_partition_capacity(mut self, capacity: usize) -> Self {
        self.partition_capacity = Some(capacity);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> FormatResult<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(FormatError::InvalidConfig(format!(
                "decimal places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.decimal_places
            )));
        }

        if self.abbreviations.iter().any(String::is_empty) {
            return Err(FormatError::InvalidConfig(
                "abbreviation suffixes cannot be empty".to_string(),
            ));
        }

        if self.byte_abbreviations.is_empty() {
            return Err(FormatError::InvalidConfig(
                "byte abbreviation list needs at least one suffix".to_string(),
            ));
        }

        if self.byte_abbreviations.iter().any(String::is_empty) {
            return Err(FormatError::InvalidConfig(
                "byte abbreviation suffixes cannot be empty".to_string(),
            ));
        }

        if self.partition_capacity == Some(0) {
            return Err(FormatError::InvalidConfig(
                "partition capacity must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl FormatterConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> FormatResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FormatError::InvalidConfig(format!("malformed JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> FormatResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FormatError::InvalidConfig(e.to_string()))
    }
}

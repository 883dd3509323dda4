// ============================================================================
// Tiered Format Library
// Memoizing number-to-text formatter with call-site cache partitions
// ============================================================================

//! # Tiered Format
//!
//! Converts numbers into short human-readable text and remembers every
//! result, partitioned by the call site that asked for it.
//!
//! ## Features
//!
//! - **Large-number abbreviation** with a configurable suffix ladder (`1.23K`, `4.50M`)
//! - **Thousands grouping** that leaves the fractional part untouched (`-1,234.5`)
//! - **Byte sizes** on 1024-based tiers (`1.50KB`)
//! - **Roman numerals** by greedy subtraction (`MCMXCIV`)
//! - **Call-site caching** via `#[track_caller]`, or explicit partition keys
//! - **Instrumentation** through a pluggable [`interfaces::FormatObserver`]
//!
//! ## Example
//!
//! ```rust
//! use tiered_format::prelude::*;
//!
//! let formatter = Formatter::new();
//!
//! // Re-rendered every frame: computed once, then served from cache
//! for _ in 0..3 {
//!     assert_eq!(formatter.to_abbreviation(1234).unwrap(), "1.23K");
//! }
//!
//! // Explicit partitions share results across call sites
//! assert_eq!(formatter.to_comma_in("ledger", 1234567).unwrap(), "1,234,567");
//!
//! let stats = formatter.stats().unwrap();
//! assert_eq!(stats.hits, 2);
//!
//! formatter.flush().unwrap();
//! assert_eq!(formatter.stats().unwrap().entries, 0);
//! ```

pub mod convert;
pub mod domain;
pub mod engine;
pub mod interfaces;

// Re-exports for convenience
pub mod prelude {
    pub use crate::convert::{FormatError, FormatResult};
    pub use crate::domain::{
        CacheStats, Conversion, FormatterConfig, PartitionKey, TierOverflowPolicy,
    };
    pub use crate::engine::{Formatter, FormatterBuilder};
    pub use crate::interfaces::{
        CountingObserver, FormatEvent, FormatObserver, LoggingObserver, NoOpObserver,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every event for inspection
    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<FormatEvent>>,
    }

    impl FormatObserver for RecordingObserver {
        fn on_event(&self, event: FormatEvent) {
            self.events.lock().push(event);
        }
    }

    fn render_hud(formatter: &Formatter, gold: f64, bytes: f64) -> (String, String) {
        (
            formatter.to_abbreviation(gold).unwrap(),
            formatter.to_byte_abbreviation(bytes).unwrap(),
        )
    }

    #[test]
    fn test_end_to_end_frame_loop() {
        let observer = Arc::new(CountingObserver::new());
        let formatter = FormatterBuilder::new()
            .observer(observer.clone())
            .build()
            .unwrap();

        for _ in 0..10 {
            let (gold, memory) = render_hud(&formatter, 2_500_000.0, 1536.0);
            assert_eq!(gold, "2.50M");
            assert_eq!(memory, "1.50KB");
        }

        // Two call sites inside render_hud, each computed once
        assert_eq!(observer.computed(), 2);
        assert_eq!(observer.hits(), 18);

        let stats = formatter.stats().unwrap();
        assert_eq!(stats.partitions, 2);
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.hit_ratio(), Some(0.9));
    }

    #[test]
    fn test_event_sequence() {
        let observer = Arc::new(RecordingObserver::default());
        let formatter = Formatter::with_observer(FormatterConfig::default(), observer.clone())
            .unwrap();

        formatter.to_roman_numeral_in("chapters", 7).unwrap();
        formatter.to_roman_numeral_in("chapters", 7).unwrap();
        formatter.flush().unwrap();
        formatter.destroy().unwrap();

        let events = observer.events.lock();
        let partition = PartitionKey::named("chapters");
        assert_eq!(
            *events,
            vec![
                FormatEvent::PartitionCreated {
                    partition: partition.clone(),
                },
                FormatEvent::Computed {
                    partition: partition.clone(),
                    conversion: Conversion::RomanNumeral,
                    value: 7.0,
                    output: "VII".to_string(),
                },
                FormatEvent::CacheHit {
                    partition,
                    conversion: Conversion::RomanNumeral,
                    value: 7.0,
                },
                FormatEvent::Flushed {
                    partitions: 1,
                    entries: 1,
                },
                FormatEvent::Destroyed {
                    partitions: 0,
                    entries: 0,
                },
            ]
        );
    }

    #[test]
    fn test_custom_configuration() {
        let config = FormatterConfig::new(["k", "M", "G"], ["B", "kB", "MB"], 1);
        let formatter = Formatter::with_config(config).unwrap();

        assert_eq!(formatter.to_abbreviation(1500).unwrap(), "1.5k");
        assert_eq!(formatter.to_abbreviation(-999.94).unwrap(), "-999.9");
        assert_eq!(formatter.to_byte_abbreviation(3 * 1024 * 1024).unwrap(), "3.0MB");
        // Comma grouping ignores decimal places
        assert_eq!(formatter.to_comma(1234.5678).unwrap(), "1,234.5678");
    }

    #[test]
    fn test_invalid_inputs_reported() {
        let formatter = Formatter::new();

        assert!(matches!(
            formatter.to_byte_abbreviation(-1),
            Err(FormatError::InvalidInput { .. })
        ));
        assert!(matches!(
            formatter.to_roman_numeral(-4),
            Err(FormatError::InvalidInput { .. })
        ));
        assert!(matches!(
            formatter.to_abbreviation(f64::NAN),
            Err(FormatError::InvalidInput { .. })
        ));
        // Formatter stays usable
        assert_eq!(formatter.to_roman_numeral(4).unwrap(), "IV");
    }
}

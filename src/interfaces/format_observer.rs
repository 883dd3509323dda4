// ============================================================================
// Format Observer Interface
// Instrumentation hook for cache activity inside a formatter
// ============================================================================

use crate::convert::FormatError;
use crate::domain::{Conversion, PartitionKey};
use std::sync::atomic::{AtomicU64, Ordering};

/// Events emitted by a formatter
#[derive(Debug, Clone, PartialEq)]
pub enum FormatEvent {
    /// A cached string was returned without recomputation
    CacheHit {
        partition: PartitionKey,
        conversion: Conversion,
        value: f64,
    },

    /// The conversion routine ran and its output was cached
    Computed {
        partition: PartitionKey,
        conversion: Conversion,
        value: f64,
        output: String,
    },

    /// The conversion routine ran and rejected the value
    Failed {
        partition: PartitionKey,
        conversion: Conversion,
        value: f64,
        error: FormatError,
    },

    /// First lookup through a call site
    PartitionCreated { partition: PartitionKey },

    /// A partition reached its capacity and was cleared
    PartitionReset {
        partition: PartitionKey,
        evicted: usize,
    },

    /// All partitions cleared, configuration kept
    Flushed { partitions: usize, entries: usize },

    /// Formatter invalidated
    Destroyed { partitions: usize, entries: usize },
}

/// Observer trait for formatter instrumentation
/// Implementations can handle logging, metrics, test counters, etc.
pub trait FormatObserver: Send + Sync {
    /// Handle a formatter event
    fn on_event(&self, event: FormatEvent);

    /// Batch handler (optional optimization)
    fn on_events(&self, events: Vec<FormatEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op observer, the formatter default
pub struct NoOpObserver;

impl FormatObserver for NoOpObserver {
    fn on_event(&self, _event: FormatEvent) {}
}

/// Logging observer
pub struct LoggingObserver;

impl FormatObserver for LoggingObserver {
    fn on_event(&self, event: FormatEvent) {
        tracing::debug!("Formatter event: {:?}", event);
    }
}

/// Counts computations and cache hits
#[derive(Debug, Default)]
pub struct CountingObserver {
    computed: AtomicU64,
    hits: AtomicU64,
    failures: AtomicU64,
    flushes: AtomicU64,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Times a conversion routine actually ran successfully
    pub fn computed(&self) -> u64 {
        self.computed.load(Ordering::Acquire)
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Acquire)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Acquire)
    }

    pub fn flushes(&self) -> u64 {
        self.flushes.load(Ordering::Acquire)
    }
}

impl FormatObserver for CountingObserver {
    fn on_event(&self, event: FormatEvent) {
        let counter = match event {
            FormatEvent::Computed { .. } => &self.computed,
            FormatEvent::CacheHit { .. } => &self.hits,
            FormatEvent::Failed { .. } => &self.failures,
            FormatEvent::Flushed { .. } => &self.flushes,
            _ => return,
        };
        counter.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;
        observer.on_event(FormatEvent::PartitionCreated {
            partition: PartitionKey::Global,
        });
        // Should not panic
    }

    #[test]
    fn test_counting_observer() {
        let observer = CountingObserver::new();
        observer.on_events(vec![
            FormatEvent::Computed {
                partition: PartitionKey::Global,
                conversion: Conversion::Comma,
                value: 1.0,
                output: "1".to_string(),
            },
            FormatEvent::CacheHit {
                partition: PartitionKey::Global,
                conversion: Conversion::Comma,
                value: 1.0,
            },
            FormatEvent::CacheHit {
                partition: PartitionKey::Global,
                conversion: Conversion::Comma,
                value: 1.0,
            },
            FormatEvent::Flushed {
                partitions: 1,
                entries: 1,
            },
            FormatEvent::Destroyed {
                partitions: 0,
                entries: 0,
            },
        ]);

        assert_eq!(observer.computed(), 1);
        assert_eq!(observer.hits(), 2);
        assert_eq!(observer.flushes(), 1);
        assert_eq!(observer.failures(), 0);
    }
}

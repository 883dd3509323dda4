// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod format_observer;

pub use format_observer::{
    CountingObserver, FormatEvent, FormatObserver, LoggingObserver, NoOpObserver,
};

// ============================================================================
// Engine Module
// Memoizing formatter and its construction
// ============================================================================

pub mod builder;
mod cache;
pub mod formatter;

pub use builder::FormatterBuilder;
pub use formatter::Formatter;

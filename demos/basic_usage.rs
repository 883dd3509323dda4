// ============================================================================
// Basic Usage Example
// ============================================================================

use std::sync::Arc;
use tiered_format::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FormatError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    println!("=== Tiered Format Example ===\n");

    let observer = Arc::new(CountingObserver::new());
    let formatter = FormatterBuilder::new()
        .observer(observer.clone())
        .build()?;

    // Simulate a HUD re-rendered every frame
    println!("Rendering 5 frames...");
    for frame in 0..5 {
        let score = 1_234_567.0 + (frame / 3) as f64;
        println!(
            "  frame {}: score={} gold={} download={} level={}",
            frame,
            formatter.to_comma(score)?,
            formatter.to_abbreviation(score)?,
            formatter.to_byte_abbreviation(5_368_709_120.0)?,
            formatter.to_roman_numeral(14)?,
        );
    }

    println!("\nComputed: {}  Cache hits: {}", observer.computed(), observer.hits());

    let stats = formatter.stats()?;
    println!(
        "Partitions: {}  Entries: {}  Hit ratio: {:.2}",
        stats.partitions,
        stats.entries,
        stats.hit_ratio().unwrap_or(0.0)
    );

    // Shared partition across call sites
    let logged = FormatterBuilder::new().with_logging().build()?;
    println!("\nTagged partition:");
    println!("  {}", logged.to_abbreviation_in("totals", 7.5e12)?);
    println!("  {}", logged.to_abbreviation_in("totals", 7.5e12)?);

    formatter.flush()?;
    println!("\nAfter flush: {} entries", formatter.stats()?.entries);

    formatter.destroy()?;
    match formatter.to_comma(1.0) {
        Err(err) => println!("After destroy: {}", err),
        Ok(text) => println!("Unexpected output after destroy: {}", text),
    }

    Ok(())
}

// ============================================================================
// Partitioned Cache
// Two-level map: call site -> (conversion, value) -> formatted string
// ============================================================================

use crate::domain::{Conversion, PartitionKey};
use std::collections::HashMap;

/// Values are keyed by their IEEE-754 bit pattern, so `0.0` and `-0.0`
/// occupy separate entries.
type ValueKey = (Conversion, u64);

type Partition = HashMap<ValueKey, String>;

/// What happened to the partition during an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct InsertOutcome {
    /// The partition did not exist before this insert
    pub created: bool,
    /// Entries dropped because the partition was at capacity
    pub evicted: usize,
}

/// Unsynchronized cache storage; the formatter owns the lock around it
#[derive(Debug, Default)]
pub(crate) struct PartitionedCache {
    partitions: HashMap<PartitionKey, Partition>,
    capacity: Option<usize>,
}

impl PartitionedCache {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            partitions: HashMap::new(),
            capacity,
        }
    }

    pub fn get(&self, key: &PartitionKey, conversion: Conversion, value: f64) -> Option<&str> {
        self.partitions
            .get(key)?
            .get(&(conversion, value.to_bits()))
            .map(String::as_str)
    }

    /// Look up a partition, inserting an empty one when absent.
    /// Returns the partition and whether it was created.
    pub fn partition_mut(&mut self, key: PartitionKey) -> (&mut Partition, bool) {
        let mut created = false;
        let partition = self.partitions.entry(key).or_insert_with(|| {
            created = true;
            Partition::new()
        });
        (partition, created)
    }

    pub fn insert(
        &mut self,
        key: PartitionKey,
        conversion: Conversion,
        value: f64,
        output: String,
    ) -> InsertOutcome {
        let capacity = self.capacity;
        let (partition, created) = self.partition_mut(key);
        let value_key = (conversion, value.to_bits());

        let mut evicted = 0;
        if let Some(limit) = capacity {
            if partition.len() >= limit && !partition.contains_key(&value_key) {
                evicted = partition.len();
                partition.clear();
            }
        }

        partition.insert(value_key, output);
        InsertOutcome { created, evicted }
    }

    /// Drop every partition; returns (partitions, entries) removed
    pub fn clear(&mut self) -> (usize, usize) {
        let counts = (self.partitions.len(), self.len());
        self.partitions.clear();
        counts
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    pub fn partition_len(&self, key: &PartitionKey) -> usize {
        self.partitions.get(key).map_or(0, HashMap::len)
    }

    /// Total cached strings across partitions
    pub fn len(&self) -> usize {
        self.partitions.values().map(HashMap::len).sum()
    }
}

//! Operation Log
//!
//! Append-only record of the operations served during this process lifetime.

use std::collections::BTreeMap;

use tracing::debug;

/// Maps operation keys to human-readable descriptions.
///
/// Keys are prefixed with a zero-padded sequence number, so entries never
/// overwrite each other and iterate in arrival order.
#[derive(Debug, Default)]
pub struct OperationLog {
    entries: BTreeMap<String, String>,
    next_seq: u64,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Appends an entry and returns the key it was stored under.
    pub fn record(&mut self, operation: &str, description: impl Into<String>) -> String {
        self.next_seq += 1;
        let key = format!("{:06}_{}", self.next_seq, operation);
        let description = description.into();
        debug!(%key, %description, "Operation logged");
        self.entries.insert(key.clone(), description);
        key
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_new() {
        let log = OperationLog::new();
        assert!(log.is_empty());
    }

    #[test]
    fn test_record_never_overwrites() {
        let mut log = OperationLog::new();
        let first = log.record("sort", "Sorted by expiry");
        let second = log.record("sort", "Sorted by quantity");

        assert_ne!(first, second);
        assert_eq!(log.len(), 2);
        assert_eq!(first, "000001_sort");
        assert_eq!(log.entries()[&second], "Sorted by quantity");
    }

    #[test]
    fn test_entries_iterate_in_arrival_order() {
        let mut log = OperationLog::new();
        log.record("add_PROD_2", "Added: Eggs");
        log.record("add_PROD_1", "Added: Milk");
        log.record("stats", "Dashboard generated");

        let descriptions: Vec<&str> = log.entries().values().map(String::as_str).collect();
        assert_eq!(descriptions, vec!["Added: Eggs", "Added: Milk", "Dashboard generated"]);
    }
}

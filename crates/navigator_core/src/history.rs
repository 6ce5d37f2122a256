use crate::ResultItem;

/// Most recent entries kept; older ones are evicted from the tail.
pub const HISTORY_CAPACITY: usize = 10;

/// Immutable snapshot of one successful query, taken at completion time.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub instruction: String,
    pub items: Vec<ResultItem>,
    /// Preformatted local wall-clock time, supplied by the platform layer.
    pub recorded_at: String,
    pub execution_time: f64,
    pub content_type: String,
}

/// Bounded, most-recent-first record of past successful queries.
///
/// There is deliberately no `clear`: a new conversation keeps prior
/// history visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Prepends `entry`, evicting from the tail past [`HISTORY_CAPACITY`].
    /// Identical instructions are kept; no deduplication.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

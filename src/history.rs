use crate::error::QuizError;
use crate::model::{HistoryEntry, QuizResult};
use crate::storage::KeyValueStore;

/// Most-recent-first log of completed attempts, stored as one JSON array
/// under a single key and rewritten in full on every change.
pub struct HistoryStore {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl HistoryStore {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored entries. Missing or unreadable data yields an empty list.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read history '{}': {e}", self.key);
                return Vec::new();
            }
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("discarding malformed history '{}': {e}", self.key);
                Vec::new()
            }
        }
    }

    /// Records `result` stamped with the current local time.
    pub fn record(&mut self, result: &QuizResult) -> Result<Vec<HistoryEntry>, QuizError> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.record_at(result, timestamp)
    }

    /// Prepends an entry for `result` unless an entry with the same outcome
    /// is already stored, in which case the list is returned untouched.
    pub fn record_at(
        &mut self,
        result: &QuizResult,
        timestamp: impl Into<String>,
    ) -> Result<Vec<HistoryEntry>, QuizError> {
        let candidate = HistoryEntry::from_result(result, timestamp);
        let mut entries = self.load();

        if entries.iter().any(|e| e.same_outcome(&candidate)) {
            log::debug!(
                "history already holds {}/{} for {} ({})",
                candidate.score,
                candidate.total,
                candidate.topic,
                candidate.difficulty
            );
            return Ok(entries);
        }

        entries.insert(0, candidate);
        self.persist(&entries)?;
        Ok(entries)
    }

    pub fn clear(&mut self) -> Result<(), QuizError> {
        self.store.remove(&self.key)?;
        log::info!("history '{}' cleared", self.key);
        Ok(())
    }

    fn persist(&mut self, entries: &[HistoryEntry]) -> Result<(), QuizError> {
        let json = serde_json::to_string(entries).map_err(crate::error::StorageError::from)?;
        self.store.set(&self.key, &json)?;
        Ok(())
    }
}

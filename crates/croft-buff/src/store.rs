//! Durable store backends for buff records.

use croft_core::{BuffRecord, BuffStore, ClaimId, StoreError};
use indexmap::IndexMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

// ── MemoryStore ──────────────────────────────────────────────────

/// In-process store backed by shared memory.
///
/// Cloning produces another handle to the same records, so a host can
/// keep one handle while the registry owns another. This is also how
/// tests observe what the registry persisted. Durable only for the
/// process lifetime; pair with [`JsonFileStore`] when state must
/// survive a restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<IndexMap<ClaimId, BuffRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, IndexMap<ClaimId, BuffRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BuffStore for MemoryStore {
    fn put(&mut self, claim: ClaimId, record: &BuffRecord) -> Result<(), StoreError> {
        self.lock().insert(claim, record.clone());
        Ok(())
    }

    fn remove(&mut self, claim: ClaimId) -> Result<(), StoreError> {
        self.lock().shift_remove(&claim);
        Ok(())
    }

    fn load_all(&self) -> Result<IndexMap<ClaimId, BuffRecord>, StoreError> {
        Ok(self.lock().clone())
    }
}

// ── JsonFileStore ────────────────────────────────────────────────

/// Whole-file JSON snapshot store.
///
/// Each mutation rewrites the file with the full record list; buff
/// counts are small (one record per claim with an active buff), so the
/// simplicity wins over an incremental format. A missing file loads as
/// empty; an unreadable or unparsable file is a [`StoreError`] for the
/// host to act on.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to `path`. The file is created on the
    /// first mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_file(&self) -> Result<Vec<(ClaimId, BuffRecord)>, StoreError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Io {
                    reason: format!("{}: {err}", self.path.display()),
                })
            }
        };
        serde_json::from_str(&data).map_err(|err| StoreError::Corrupt {
            reason: format!("{}: {err}", self.path.display()),
        })
    }

    fn write_file(&self, records: &[(ClaimId, BuffRecord)]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(records).map_err(|err| StoreError::Corrupt {
            reason: err.to_string(),
        })?;
        std::fs::write(&self.path, data).map_err(|err| StoreError::Io {
            reason: format!("{}: {err}", self.path.display()),
        })
    }
}

impl BuffStore for JsonFileStore {
    fn put(&mut self, claim: ClaimId, record: &BuffRecord) -> Result<(), StoreError> {
        let mut records = self.read_file()?;
        match records.iter_mut().find(|(c, _)| *c == claim) {
            Some((_, existing)) => *existing = record.clone(),
            None => records.push((claim, record.clone())),
        }
        self.write_file(&records)
    }

    fn remove(&mut self, claim: ClaimId) -> Result<(), StoreError> {
        let mut records = self.read_file()?;
        let before = records.len();
        records.retain(|(c, _)| *c != claim);
        if records.len() == before {
            return Ok(());
        }
        self.write_file(&records)
    }

    fn load_all(&self) -> Result<IndexMap<ClaimId, BuffRecord>, StoreError> {
        Ok(self.read_file()?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use croft_core::Tier;

    fn record(tier: u32, expire_at_ms: u64) -> BuffRecord {
        BuffRecord {
            tier: Tier(tier),
            label: format!("tier-{tier}"),
            multiplier: 1.5,
            expire_at_ms,
            interval_secs: 30,
            growth_chance: 0.5,
            growth_amount: 1,
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        store.put(ClaimId(1), &record(1, 10_000)).unwrap();
        store.put(ClaimId(2), &record(2, 20_000)).unwrap();
        store.put(ClaimId(1), &record(3, 30_000)).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[&ClaimId(1)].tier, Tier(3));

        store.remove(ClaimId(1)).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn memory_store_handles_share_state() {
        let mut writer = MemoryStore::new();
        let reader = writer.clone();
        writer.put(ClaimId(9), &record(1, 10_000)).unwrap();
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn json_store_missing_file_loads_empty() {
        let store = JsonFileStore::new("/nonexistent-dir-for-sure/buffs.json");
        // Missing file is empty, not an error...
        let missing = JsonFileStore::new(std::env::temp_dir().join("croft-absent.json"));
        assert!(missing.load_all().unwrap().is_empty());
        // ...but an unwritable path does surface as Io on mutation.
        let mut store = store;
        assert!(matches!(
            store.put(ClaimId(1), &record(1, 10_000)),
            Err(StoreError::Io { .. })
        ));
    }

    #[test]
    fn json_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "croft-json-store-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let mut store = JsonFileStore::new(&path);
        store.put(ClaimId(1), &record(1, 10_000)).unwrap();
        store.put(ClaimId(2), &record(2, 20_000)).unwrap();
        store.remove(ClaimId(1)).unwrap();

        let reopened = JsonFileStore::new(&path);
        let all = reopened.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[&ClaimId(2)], record(2, 20_000));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn json_store_corrupt_file_is_reported() {
        let path = std::env::temp_dir().join(format!(
            "croft-json-corrupt-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load_all(), Err(StoreError::Corrupt { .. })));

        let _ = std::fs::remove_file(&path);
    }
}

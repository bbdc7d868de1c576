use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::fs_util::write_atomic;
use crate::types::{MemoryRecord, Personality};

/// File-backed store for the memory and personality records.
///
/// A missing file yields the default record. A file that exists but does not
/// parse is a `StorageError::Corrupt` and is never repaired automatically.
#[derive(Debug, Clone)]
pub struct StateStore {
    memory_path: PathBuf,
    personality_path: PathBuf,
}

impl StateStore {
    pub fn new(memory_path: impl Into<PathBuf>, personality_path: impl Into<PathBuf>) -> Self {
        Self {
            memory_path: memory_path.into(),
            personality_path: personality_path.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.memory_path(), config.personality_path())
    }

    pub fn memory_path(&self) -> &Path {
        &self.memory_path
    }

    pub fn personality_path(&self) -> &Path {
        &self.personality_path
    }

    /// Read both records, defaulting whichever file is absent.
    pub fn load(&self) -> Result<(MemoryRecord, Personality), StorageError> {
        let memory = self.load_memory()?;
        let personality = self.load_personality()?;
        Ok((memory, personality))
    }

    pub fn load_memory(&self) -> Result<MemoryRecord, StorageError> {
        read_or_default(&self.memory_path)
    }

    pub fn load_personality(&self) -> Result<Personality, StorageError> {
        read_or_default(&self.personality_path)
    }

    /// Overwrite the memory snapshot atomically.
    pub fn save(&self, memory: &MemoryRecord) -> Result<(), StorageError> {
        write_json(&self.memory_path, memory)?;
        debug!(
            path = %self.memory_path.display(),
            turns = memory.turn_count(),
            "memory saved"
        );
        Ok(())
    }

    /// Write the personality record. Only used to seed an editable profile.
    pub fn save_personality(&self, personality: &Personality) -> Result<(), StorageError> {
        write_json(&self.personality_path, personality)
    }
}

fn read_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "state file absent, using defaults");
            return Ok(T::default());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, json.as_bytes()).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// The in-memory working copies of both records, plus the store that owns
/// their durable form. One instance per process.
#[derive(Debug)]
pub struct ChatState {
    pub store: StateStore,
    pub memory: MemoryRecord,
    pub personality: Personality,
}

impl ChatState {
    /// Load both records from `store`.
    pub fn open(store: StateStore) -> Result<Self, StorageError> {
        let (memory, personality) = store.load()?;
        info!(
            display_name = %personality.display_name,
            turns = memory.turn_count(),
            mood = %memory.mood,
            "chat state loaded"
        );
        Ok(Self {
            store,
            memory,
            personality,
        })
    }

    /// Persist the current memory record.
    pub fn persist(&self) -> Result<(), StorageError> {
        self.store.save(&self.memory)
    }
}

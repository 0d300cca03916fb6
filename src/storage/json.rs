//! JSON file-based entity store.
//!
//! This module provides a simple, human-readable storage implementation
//! using JSON serialization. It uses atomic file writes (write-to-temp +
//! rename) to prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads the entire file into memory once
//! - **Write**: O(n) - serializes and writes the entire dataset
//! - **Best for**: personal collections (thousands of cards), infrequent writes

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{Result, TangochoError};
use crate::domain::{Card, Folder};
use crate::storage::backend::EntityStore;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Folders and cards
/// are keyed by id for O(1) lookups; the version field exists for future
/// migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored folders, indexed by id.
    #[serde(default)]
    folders: HashMap<Uuid, Folder>,

    /// All stored cards, indexed by id.
    #[serde(default)]
    cards: HashMap<Uuid, Card>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            folders: HashMap::new(),
            cards: HashMap::new(),
        }
    }
}

/// JSON file entity store.
///
/// Keeps the whole folder/card graph in memory and writes it back as one
/// pretty-printed JSON document on [`EntityStore::save`]. Writes are atomic
/// (temp file + rename), clean saves are skipped, and a best-effort save
/// runs on drop so a forgotten save does not silently lose data.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "folders": {
///     "5a9c…": { "id": "5a9c…", "name": "Animals", "order_index": 0, "is_pinned": false, "created_at": 1754300000, "updated_at": 1754300000 }
///   },
///   "cards": {
///     "77f2…": { "id": "77f2…", "folder_id": "5a9c…", "front_text": "Cat", "back_meaning": "ネコ", "back_etymology": "", "back_example": "", "back_example_jp": "", "is_starred": false, "created_at": 1754300100 }
///   }
/// }
/// ```
pub struct JsonStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data, loaded on creation.
    data: StoreData,

    /// Tracks whether memory has diverged from the file since the last save.
    dirty: bool,
}

impl JsonStore {
    /// Creates or opens a JSON entity store.
    ///
    /// If the file exists, loads its contents. Otherwise starts empty;
    /// the file appears on the first save. Parent directories are created
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::PathBuf;
    /// use tangocho::storage::JsonStore;
    ///
    /// let store = JsonStore::new(PathBuf::from("/tmp/collection.json"))?;
    /// # Ok::<(), tangocho::TangochoError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no existing file, starting empty");
            StoreData::default()
        };

        tracing::debug!(
            folder_count = data.folders.len(),
            card_count = data.cards.len(),
            "store initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Returns the path this store reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }

    fn load_from_file(path: &PathBuf) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| TangochoError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            folders = data.folders.len(),
            cards = data.cards.len(),
            "loaded store data"
        );

        Ok(data)
    }

    /// Writes the current state to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target, so
    /// the file is never left half-written even if the process crashes.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving store data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| TangochoError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("store saved");
        Ok(())
    }
}

impl EntityStore for JsonStore {
    fn insert_folder(&mut self, folder: Folder) -> Result<()> {
        let _span = tracing::debug_span!("json_insert_folder", folder_id = %folder.id).entered();

        self.data.folders.insert(folder.id, folder);
        self.dirty = true;
        Ok(())
    }

    fn delete_folder(&mut self, id: Uuid) -> Result<bool> {
        let _span = tracing::debug_span!("json_delete_folder", folder_id = %id).entered();

        let existed = self.data.folders.remove(&id).is_some();
        if existed {
            self.dirty = true;
        }
        Ok(existed)
    }

    fn folder(&self, id: Uuid) -> Result<Option<Folder>> {
        Ok(self.data.folders.get(&id).cloned())
    }

    fn all_folders(&self) -> Result<Vec<Folder>> {
        Ok(self.data.folders.values().cloned().collect())
    }

    fn insert_card(&mut self, card: Card) -> Result<()> {
        let _span = tracing::debug_span!("json_insert_card", card_id = %card.id).entered();

        self.data.cards.insert(card.id, card);
        self.dirty = true;
        Ok(())
    }

    fn delete_card(&mut self, id: Uuid) -> Result<bool> {
        let _span = tracing::debug_span!("json_delete_card", card_id = %id).entered();

        let existed = self.data.cards.remove(&id).is_some();
        if existed {
            self.dirty = true;
        }
        Ok(existed)
    }

    fn card(&self, id: Uuid) -> Result<Option<Card>> {
        Ok(self.data.cards.get(&id).cloned())
    }

    fn all_cards(&self) -> Result<Vec<Card>> {
        Ok(self.data.cards.values().cloned().collect())
    }

    fn cards_in_folder(&self, folder_id: Uuid) -> Result<Vec<Card>> {
        Ok(self
            .data
            .cards
            .values()
            .filter(|card| card.folder_id == folder_id)
            .cloned()
            .collect())
    }

    fn save(&mut self) -> Result<()> {
        self.save_to_file()
    }
}

impl Drop for JsonStore {
    /// Ensures data is saved on drop, even if the caller forgot to save.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardContent;

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("collection.json")).unwrap()
    }

    fn sample_card(folder: &Folder, front: &str) -> Card {
        Card::new(
            folder.id,
            CardContent {
                front_text: front.to_string(),
                back_meaning: "意味".to_string(),
                ..CardContent::default()
            },
        )
    }

    #[test]
    fn starts_empty_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.all_folders().unwrap().is_empty());
        assert!(store.all_cards().unwrap().is_empty());
    }

    #[test]
    fn saved_data_survives_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.json");

        let folder = Folder::new("Animals", 0);
        let card = sample_card(&folder, "Cat");
        {
            let mut store = JsonStore::new(path.clone()).unwrap();
            store.insert_folder(folder.clone()).unwrap();
            store.insert_card(card.clone()).unwrap();
            store.save().unwrap();
        }

        let reopened = JsonStore::new(path).unwrap();
        assert_eq!(reopened.folder(folder.id).unwrap().unwrap(), folder);
        assert_eq!(reopened.card(card.id).unwrap().unwrap(), card);
    }

    #[test]
    fn unsaved_data_is_flushed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.json");

        let folder = Folder::new("Animals", 0);
        {
            let mut store = JsonStore::new(path.clone()).unwrap();
            store.insert_folder(folder.clone()).unwrap();
            // no explicit save
        }

        let reopened = JsonStore::new(path).unwrap();
        assert!(reopened.folder(folder.id).unwrap().is_some());
    }

    #[test]
    fn insert_is_an_upsert() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let mut folder = Folder::new("Animals", 0);
        store.insert_folder(folder.clone()).unwrap();
        folder.name = "Beasts".to_string();
        store.insert_folder(folder.clone()).unwrap();

        let folders = store.all_folders().unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "Beasts");
    }

    #[test]
    fn delete_reports_whether_the_entity_existed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let folder = Folder::new("Animals", 0);
        store.insert_folder(folder.clone()).unwrap();

        assert!(store.delete_folder(folder.id).unwrap());
        assert!(!store.delete_folder(folder.id).unwrap());
    }

    #[test]
    fn cards_in_folder_filters_by_owner() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let animals = Folder::new("Animals", 0);
        let travel = Folder::new("Travel", 1);
        store.insert_folder(animals.clone()).unwrap();
        store.insert_folder(travel.clone()).unwrap();
        store.insert_card(sample_card(&animals, "Cat")).unwrap();
        store.insert_card(sample_card(&animals, "Dog")).unwrap();
        store.insert_card(sample_card(&travel, "Ticket")).unwrap();

        assert_eq!(store.cards_in_folder(animals.id).unwrap().len(), 2);
        assert_eq!(store.cards_in_folder(travel.id).unwrap().len(), 1);
        assert!(store.cards_in_folder(Uuid::new_v4()).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_surfaces_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = JsonStore::new(path);
        assert!(matches!(result, Err(TangochoError::Storage(_))));
    }
}

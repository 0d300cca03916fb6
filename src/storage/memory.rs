//! Volatile in-memory entity store.
//!
//! The in-memory analog of [`JsonStore`](crate::storage::JsonStore): same
//! trait, no file. The store of choice for tests and preview data, where
//! durability would only slow things down.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::error::Result;
use crate::domain::{Card, Folder};
use crate::storage::backend::EntityStore;

/// Entity store that keeps everything in memory and persists nothing.
///
/// [`EntityStore::save`] always succeeds and does nothing; dropping the
/// store drops the data.
///
/// # Examples
///
/// ```
/// use tangocho::storage::{EntityStore, MemoryStore};
/// use tangocho::domain::Folder;
///
/// let mut store = MemoryStore::new();
/// store.insert_folder(Folder::new("Animals", 0))?;
/// store.save()?; // no-op
/// # Ok::<(), tangocho::TangochoError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    folders: HashMap<Uuid, Folder>,
    cards: HashMap<Uuid, Card>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for MemoryStore {
    fn insert_folder(&mut self, folder: Folder) -> Result<()> {
        self.folders.insert(folder.id, folder);
        Ok(())
    }

    fn delete_folder(&mut self, id: Uuid) -> Result<bool> {
        Ok(self.folders.remove(&id).is_some())
    }

    fn folder(&self, id: Uuid) -> Result<Option<Folder>> {
        Ok(self.folders.get(&id).cloned())
    }

    fn all_folders(&self) -> Result<Vec<Folder>> {
        Ok(self.folders.values().cloned().collect())
    }

    fn insert_card(&mut self, card: Card) -> Result<()> {
        self.cards.insert(card.id, card);
        Ok(())
    }

    fn delete_card(&mut self, id: Uuid) -> Result<bool> {
        Ok(self.cards.remove(&id).is_some())
    }

    fn card(&self, id: Uuid) -> Result<Option<Card>> {
        Ok(self.cards.get(&id).cloned())
    }

    fn all_cards(&self) -> Result<Vec<Card>> {
        Ok(self.cards.values().cloned().collect())
    }

    fn cards_in_folder(&self, folder_id: Uuid) -> Result<Vec<Card>> {
        Ok(self
            .cards
            .values()
            .filter(|card| card.folder_id == folder_id)
            .cloned()
            .collect())
    }

    fn save(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardContent;

    #[test]
    fn save_is_a_no_op_and_data_stays_in_memory() {
        let mut store = MemoryStore::new();
        let folder = Folder::new("Animals", 0);
        store.insert_folder(folder.clone()).unwrap();
        store.save().unwrap();
        assert_eq!(store.all_folders().unwrap().len(), 1);
    }

    #[test]
    fn deleting_a_folder_leaves_its_cards_behind() {
        // Cascading is the coordinator's job; the store must not guess.
        let mut store = MemoryStore::new();
        let folder = Folder::new("Animals", 0);
        let card = Card::new(
            folder.id,
            CardContent {
                front_text: "Cat".to_string(),
                back_meaning: "ネコ".to_string(),
                ..CardContent::default()
            },
        );
        store.insert_folder(folder.clone()).unwrap();
        store.insert_card(card.clone()).unwrap();

        store.delete_folder(folder.id).unwrap();
        assert!(store.card(card.id).unwrap().is_some());
    }
}

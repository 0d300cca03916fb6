//! Entity store abstraction.
//!
//! This module defines the [`EntityStore`] trait that abstracts over
//! persistence backends for the folder/card graph. Implementations keep the
//! working set in memory; only [`EntityStore::save`] touches durable media,
//! which is what lets the coordinator's fire-and-forget persistence contract
//! exist at all.
//!
//! # Design Philosophy
//!
//! The trait is designed to be minimal and focused on the actual operations
//! the coordinator needs, not a generic ORM. Inserts are upserts; deletes
//! report whether the entity existed so callers can decide between no-op and
//! error. Relationship maintenance (cascades, index renormalization) is not
//! part of the trait; it lives in the coordinator.

use uuid::Uuid;

use crate::domain::error::Result;
use crate::domain::{Card, Folder};

/// Abstraction over persistence backends for folders and cards.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): single JSON document with
///   atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): volatile, for tests and
///   in-memory-only use
///
/// # Examples
///
/// ```
/// use tangocho::domain::Folder;
/// use tangocho::storage::{EntityStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// let folder = Folder::new("Animals", 0);
/// store.insert_folder(folder.clone())?;
/// assert_eq!(store.all_folders()?.len(), 1);
/// # Ok::<(), tangocho::TangochoError>(())
/// ```
pub trait EntityStore {
    /// Adds or replaces a folder record, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot accept the record.
    fn insert_folder(&mut self, folder: Folder) -> Result<()>;

    /// Removes a folder record. Returns whether it existed.
    ///
    /// Owned cards are NOT touched; cascading is the coordinator's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot perform the removal.
    fn delete_folder(&mut self, id: Uuid) -> Result<bool>;

    /// Fetches a single folder by id. `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn folder(&self, id: Uuid) -> Result<Option<Folder>>;

    /// Fetches all folders, unsorted.
    ///
    /// Ordering is the query engine's job, not the store's.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn all_folders(&self) -> Result<Vec<Folder>>;

    /// Adds or replaces a card record, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot accept the record.
    fn insert_card(&mut self, card: Card) -> Result<()>;

    /// Removes a card record. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot perform the removal.
    fn delete_card(&mut self, id: Uuid) -> Result<bool>;

    /// Fetches a single card by id. `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn card(&self, id: Uuid) -> Result<Option<Card>>;

    /// Fetches all cards across every folder, unsorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn all_cards(&self) -> Result<Vec<Card>>;

    /// Fetches the cards owned by one folder, unsorted.
    ///
    /// An unknown folder id yields an empty list, not an error: stale
    /// queries are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn cards_in_folder(&self, folder_id: Uuid) -> Result<Vec<Card>>;

    /// Persists the current in-memory state.
    ///
    /// Mutating methods only update memory; durability happens here. A
    /// failed save leaves the in-memory state as-is; callers decide how to
    /// surface the divergence.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self) -> Result<()>;
}

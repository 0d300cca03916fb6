//! Mutation coordination and read accessors.
//!
//! This module implements [`Coordinator`], the single entry point through
//! which a presentation layer mutates the collection. Each operation
//! translates one user intent into validated entity mutations plus any
//! required order-index renormalization, then requests persistence from the
//! entity store.
//!
//! # Persistence contract
//!
//! Persistence is fire-and-forget with respect to in-memory truth: every
//! operation applies its mutation to the store's working set first and only
//! then calls `save()`. A failed save surfaces as an error to the caller,
//! but the in-memory mutation is NOT rolled back: the rendered state may
//! briefly be ahead of durable state. Callers that need stronger guarantees
//! must re-read from a fresh store.
//!
//! # Read model
//!
//! There are no change events. The presentation layer re-queries
//! [`Coordinator::sorted_folders`] / [`Coordinator::sorted_and_filtered_cards`]
//! after each mutation (pull model, not push).

use uuid::Uuid;

use crate::domain::error::{Result, TangochoError};
use crate::domain::{Card, CardContent, Folder};
use crate::query::{self, CardQuery, FolderQuery};
use crate::storage::EntityStore;

/// Applies user intents to the entity graph and keeps ordering invariants.
///
/// Generic over the entity store so the same coordination logic runs against
/// the JSON backend in the application and the in-memory backend in tests.
///
/// # Examples
///
/// ```
/// use tangocho::app::Coordinator;
/// use tangocho::domain::CardContent;
/// use tangocho::query::CardQuery;
/// use tangocho::storage::MemoryStore;
///
/// let mut app = Coordinator::new(MemoryStore::new());
/// let animals = app.create_folder("Animals")?;
/// let cat = app.create_card(animals.id, CardContent {
///     front_text: "Cat".to_string(),
///     back_meaning: "ネコ".to_string(),
///     ..CardContent::default()
/// })?;
/// app.toggle_star(cat.id)?;
///
/// let starred = app.sorted_and_filtered_cards(animals.id, &CardQuery::starred())?;
/// assert_eq!(starred.len(), 1);
/// # Ok::<(), tangocho::TangochoError>(())
/// ```
pub struct Coordinator<S: EntityStore> {
    store: S,
}

impl<S: EntityStore> Coordinator<S> {
    /// Wraps an entity store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the coordinator, returning the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    // ---- read accessors ---------------------------------------------------

    /// The ordered, visible folder list for the current view state.
    ///
    /// Pinned folders first, ascending `order_index` within each group,
    /// filtered by the query's search text (folder name or contained card
    /// front term).
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn sorted_folders(&self, view: &FolderQuery) -> Result<Vec<Folder>> {
        let folders = self.store.all_folders()?;
        let cards = self.store.all_cards()?;
        Ok(query::visible_folders(&folders, &cards, view))
    }

    /// The ordered, visible card list of one folder for the current view
    /// state.
    ///
    /// A folder id that no longer exists yields an empty list: a stale
    /// query is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn sorted_and_filtered_cards(&self, folder_id: Uuid, view: &CardQuery) -> Result<Vec<Card>> {
        let cards = self.store.cards_in_folder(folder_id)?;
        Ok(query::visible_cards(&cards, view))
    }

    // ---- folder operations ------------------------------------------------

    /// Creates a folder at the end of the manual ordering.
    ///
    /// The new folder is unpinned and takes `order_index` equal to the
    /// current folder count.
    ///
    /// # Errors
    ///
    /// [`TangochoError::Validation`] if `name` is blank after trimming (the
    /// store is untouched); storage errors after the in-memory insert.
    pub fn create_folder(&mut self, name: &str) -> Result<Folder> {
        let _span = tracing::debug_span!("create_folder").entered();
        require_text(name, "folder name")?;

        let order_index = self.store.all_folders()?.len();
        let folder = Folder::new(name, order_index);

        tracing::debug!(folder_id = %folder.id, order_index, "folder created");
        self.store.insert_folder(folder.clone())?;
        self.store.save()?;
        Ok(folder)
    }

    /// Renames a folder and touches its `updated_at` timestamp.
    ///
    /// # Errors
    ///
    /// [`TangochoError::Validation`] if `name` is blank after trimming;
    /// [`TangochoError::NotFound`] if the folder no longer exists; storage
    /// errors after the in-memory update.
    pub fn rename_folder(&mut self, id: Uuid, name: &str) -> Result<()> {
        let _span = tracing::debug_span!("rename_folder", folder_id = %id).entered();
        require_text(name, "folder name")?;

        let mut folder = self.store.folder(id)?.ok_or(TangochoError::NotFound(id))?;
        folder.name = name.to_string();
        folder.updated_at = chrono::Utc::now().timestamp();

        self.store.insert_folder(folder)?;
        self.store.save()
    }

    /// Deletes a folder, cascading to all cards it owns, then renormalizes
    /// the remaining folders' `order_index` values to a dense 0..N-1 range.
    ///
    /// Deleting an id that no longer exists is a silent no-op, so stale UI
    /// state cannot turn a double-tap into an error.
    ///
    /// # Errors
    ///
    /// Storage errors after the in-memory removal.
    pub fn delete_folder(&mut self, id: Uuid) -> Result<()> {
        let _span = tracing::debug_span!("delete_folder", folder_id = %id).entered();

        if self.store.folder(id)?.is_none() {
            tracing::debug!("folder already gone, nothing to delete");
            return Ok(());
        }

        let owned = self.store.cards_in_folder(id)?;
        for card in &owned {
            self.store.delete_card(card.id)?;
        }
        self.store.delete_folder(id)?;
        tracing::debug!(cascaded_cards = owned.len(), "folder deleted");

        self.renormalize_order_indices()?;
        self.store.save()
    }

    /// Flips a folder's pin flag.
    ///
    /// `order_index` is left untouched; the ordering recompute repositions
    /// the folder on the next query.
    ///
    /// # Errors
    ///
    /// [`TangochoError::NotFound`] if the folder no longer exists; storage
    /// errors after the in-memory update.
    pub fn toggle_pin(&mut self, id: Uuid) -> Result<()> {
        let _span = tracing::debug_span!("toggle_pin", folder_id = %id).entered();

        let mut folder = self.store.folder(id)?.ok_or(TangochoError::NotFound(id))?;
        folder.is_pinned = !folder.is_pinned;
        tracing::debug!(is_pinned = folder.is_pinned, "pin toggled");

        self.store.insert_folder(folder)?;
        self.store.save()
    }

    /// Moves the folder at `from` to position `to` within the current
    /// display order, then renormalizes every `order_index` to match.
    ///
    /// Reordering is only defined on the unfiltered list: the positions the
    /// user sees while searching do not correspond to stable sibling
    /// positions, so a move with an active search is rejected.
    ///
    /// # Errors
    ///
    /// [`TangochoError::Validation`] if `view` has an active search or an
    /// index is out of bounds; storage errors after the in-memory reorder.
    pub fn move_folder(&mut self, view: &FolderQuery, from: usize, to: usize) -> Result<()> {
        let _span = tracing::debug_span!("move_folder", from, to).entered();

        if view.has_search() {
            return Err(TangochoError::Validation(
                "cannot reorder folders while a search filter is active".to_string(),
            ));
        }

        let mut ordered = self.sorted_folders(view)?;
        if from >= ordered.len() || to >= ordered.len() {
            return Err(TangochoError::Validation(format!(
                "move indices {from}→{to} out of bounds for {} folders",
                ordered.len()
            )));
        }

        let folder = ordered.remove(from);
        ordered.insert(to, folder);

        self.write_order(&mut ordered)?;
        self.store.save()
    }

    // ---- card operations --------------------------------------------------

    /// Creates a card in the given folder.
    ///
    /// # Errors
    ///
    /// [`TangochoError::Validation`] if `front_text` or `back_meaning` is
    /// blank after trimming (the store is untouched);
    /// [`TangochoError::NotFound`] if the folder does not exist (a card is
    /// never created without a valid owner); storage errors after the
    /// in-memory insert.
    pub fn create_card(&mut self, folder_id: Uuid, content: CardContent) -> Result<Card> {
        let _span = tracing::debug_span!("create_card", folder_id = %folder_id).entered();
        require_text(&content.front_text, "front text")?;
        require_text(&content.back_meaning, "meaning")?;

        if self.store.folder(folder_id)?.is_none() {
            return Err(TangochoError::NotFound(folder_id));
        }

        let card = Card::new(folder_id, content);
        tracing::debug!(card_id = %card.id, "card created");

        self.store.insert_card(card.clone())?;
        self.store.save()?;
        Ok(card)
    }

    /// Overwrites a card's text fields.
    ///
    /// Folder ownership, star state, and the creation timestamp are
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`TangochoError::Validation`] if `front_text` or `back_meaning` is
    /// blank after trimming; [`TangochoError::NotFound`] if the card no
    /// longer exists; storage errors after the in-memory update.
    pub fn update_card(&mut self, id: Uuid, content: CardContent) -> Result<()> {
        let _span = tracing::debug_span!("update_card", card_id = %id).entered();
        require_text(&content.front_text, "front text")?;
        require_text(&content.back_meaning, "meaning")?;

        let mut card = self.store.card(id)?.ok_or(TangochoError::NotFound(id))?;
        card.set_content(content);

        self.store.insert_card(card)?;
        self.store.save()
    }

    /// Deletes a card. Missing ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// Storage errors after the in-memory removal.
    pub fn delete_card(&mut self, id: Uuid) -> Result<()> {
        let _span = tracing::debug_span!("delete_card", card_id = %id).entered();

        if !self.store.delete_card(id)? {
            tracing::debug!("card already gone, nothing to delete");
            return Ok(());
        }
        self.store.save()
    }

    /// Flips a card's star flag.
    ///
    /// # Errors
    ///
    /// [`TangochoError::NotFound`] if the card no longer exists; storage
    /// errors after the in-memory update.
    pub fn toggle_star(&mut self, id: Uuid) -> Result<()> {
        let _span = tracing::debug_span!("toggle_star", card_id = %id).entered();

        let mut card = self.store.card(id)?.ok_or(TangochoError::NotFound(id))?;
        card.is_starred = !card.is_starred;
        tracing::debug!(is_starred = card.is_starred, "star toggled");

        self.store.insert_card(card)?;
        self.store.save()
    }

    // ---- ordering maintenance ---------------------------------------------

    /// Reassigns dense 0..N-1 order indices following the current display
    /// order (pinned first, then manual position).
    ///
    /// Runs after any removal so sibling indices never drift or collide.
    /// Only folders whose index actually changed are written back.
    fn renormalize_order_indices(&mut self) -> Result<()> {
        let mut folders = self.store.all_folders()?;
        folders.sort_by(query::display_order);
        self.write_order(&mut folders)
    }

    /// Writes `order_index = position` for each folder in the given order,
    /// skipping folders already in place.
    fn write_order(&mut self, ordered: &mut [Folder]) -> Result<()> {
        for (index, folder) in ordered.iter_mut().enumerate() {
            if folder.order_index != index {
                folder.order_index = index;
                self.store.insert_folder(folder.clone())?;
            }
        }
        Ok(())
    }
}

/// Rejects blank required text with a field-specific message.
fn require_text(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TangochoError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

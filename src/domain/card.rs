//! Card domain model.
//!
//! A card is a single flashcard: a front-side term plus back-side fields
//! (meaning, etymology, example sentence and its translation). Every card
//! references its owning folder by id; the reference is mandatory: an
//! orphan card is never a valid persisted state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The editable text fields of a card, as one value object.
///
/// Used by create and update operations so validation applies to a single
/// shape: `front_text` and `back_meaning` are required (non-blank), the
/// remaining fields are optional free text defaulting to empty.
///
/// # Examples
///
/// ```
/// use tangocho::domain::CardContent;
///
/// let content = CardContent {
///     front_text: "Cat".to_string(),
///     back_meaning: "ネコ".to_string(),
///     ..CardContent::default()
/// };
/// assert!(content.back_etymology.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent {
    /// Front side: the term being studied. Required.
    pub front_text: String,

    /// Back side: the term's meaning. Required.
    pub back_meaning: String,

    /// Back side: etymology notes. Optional.
    pub back_etymology: String,

    /// Back side: example sentence. Optional.
    pub back_example: String,

    /// Back side: Japanese translation of the example sentence. Optional.
    pub back_example_jp: String,
}

/// A single flashcard owned by exactly one folder.
///
/// # Fields
///
/// - `id`: unique identifier, assigned at creation and never reused; also
///   the deterministic tie-break key for every sort order
/// - `folder_id`: id of the owning folder (mandatory, never null)
/// - `created_at`: unix timestamp, set once; the default sort key
/// - `is_starred`: user-marked favorite flag, filterable in queries
/// - text fields: see [`CardContent`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub folder_id: Uuid,
    pub created_at: i64,
    pub is_starred: bool,
    pub front_text: String,
    pub back_meaning: String,
    pub back_etymology: String,
    pub back_example: String,
    pub back_example_jp: String,
}

impl Card {
    /// Creates a new unstarred card in the given folder.
    ///
    /// `created_at` is set to the current time and a fresh v4 id is
    /// assigned. Content validation is the coordinator's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use tangocho::domain::{Card, CardContent};
    /// use uuid::Uuid;
    ///
    /// let folder_id = Uuid::new_v4();
    /// let card = Card::new(folder_id, CardContent {
    ///     front_text: "Apple".to_string(),
    ///     back_meaning: "りんご".to_string(),
    ///     ..CardContent::default()
    /// });
    /// assert_eq!(card.folder_id, folder_id);
    /// assert!(!card.is_starred);
    /// ```
    #[must_use]
    pub fn new(folder_id: Uuid, content: CardContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            folder_id,
            created_at: chrono::Utc::now().timestamp(),
            is_starred: false,
            front_text: content.front_text,
            back_meaning: content.back_meaning,
            back_etymology: content.back_etymology,
            back_example: content.back_example,
            back_example_jp: content.back_example_jp,
        }
    }

    /// Overwrites the card's text fields in place.
    ///
    /// Identity, folder ownership, star state, and the creation timestamp
    /// are untouched.
    pub fn set_content(&mut self, content: CardContent) {
        self.front_text = content.front_text;
        self.back_meaning = content.back_meaning;
        self.back_etymology = content.back_etymology;
        self.back_example = content.back_example;
        self.back_example_jp = content.back_example_jp;
    }

    /// Returns a copy of the card's text fields as a [`CardContent`].
    ///
    /// The natural starting point for an edit form.
    #[must_use]
    pub fn content(&self) -> CardContent {
        CardContent {
            front_text: self.front_text.clone(),
            back_meaning: self.back_meaning.clone(),
            back_etymology: self.back_etymology.clone(),
            back_example: self.back_example.clone(),
            back_example_jp: self.back_example_jp.clone(),
        }
    }
}

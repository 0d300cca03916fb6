//! Folder domain model.
//!
//! A folder is a named grouping of cards. Folders carry a manual ordering
//! position (`order_index`) and a pin flag that forces them ahead of
//! unpinned folders regardless of position. Cascade deletion of a folder's
//! cards is coordinator logic, not a property of this type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, orderable, pinnable grouping of cards.
///
/// # Fields
///
/// - `id`: unique identifier, assigned at creation and never reused
/// - `name`: display name, non-blank (enforced by the coordinator)
/// - `created_at`: unix timestamp, set once at creation
/// - `updated_at`: unix timestamp, touched when the folder is renamed
/// - `is_pinned`: pinned folders sort before unpinned ones
/// - `order_index`: manual position among siblings; kept dense (0..N-1)
///   by the coordinator's renormalization pass after every insert, delete,
///   or move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub is_pinned: bool,
    pub order_index: usize,
}

impl Folder {
    /// Creates a new unpinned folder at the given ordering position.
    ///
    /// Both timestamps are set to the current time and a fresh v4 id is
    /// assigned. The caller (normally the coordinator) picks `order_index`;
    /// for appends that is the current folder count.
    ///
    /// # Examples
    ///
    /// ```
    /// use tangocho::domain::Folder;
    ///
    /// let folder = Folder::new("Animals", 0);
    /// assert_eq!(folder.name, "Animals");
    /// assert!(!folder.is_pinned);
    /// assert_eq!(folder.order_index, 0);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, order_index: usize) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            is_pinned: false,
            order_index,
        }
    }
}

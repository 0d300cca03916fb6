//! Folder ordering and search filtering.
//!
//! Pure functions computing the exact folder list a presentation layer
//! should render. No hidden state: the full folder and card sets plus the
//! current [`FolderQuery`] go in, the ordered visible subset comes out,
//! recomputed from scratch on every call.

use std::cmp::Ordering;

use super::view::FolderQuery;
use crate::domain::{Card, Folder};

/// Display ordering for folders.
///
/// Pinned folders always precede unpinned ones; within each group folders
/// order by ascending `order_index`. Sibling indices are unique by
/// invariant, but equal indices (a degenerate input) still compare totally
/// via the id tie-break rather than producing unstable output.
#[must_use]
pub fn display_order(a: &Folder, b: &Folder) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| a.order_index.cmp(&b.order_index))
        .then_with(|| a.id.cmp(&b.id))
}

/// Computes the ordered, visible folder list for the current view state.
///
/// With an active search, a folder is kept when its name contains the query
/// (case-insensitive substring) or when at least one of its cards has a
/// matching front term. An empty search keeps everything. The result is
/// always sorted by [`display_order`].
///
/// # Examples
///
/// ```
/// use tangocho::domain::Folder;
/// use tangocho::query::{visible_folders, FolderQuery};
///
/// let mut pinned = Folder::new("Phrases", 1);
/// pinned.is_pinned = true;
/// let folders = vec![Folder::new("Animals", 0), pinned];
///
/// let visible = visible_folders(&folders, &[], &FolderQuery::default());
/// assert_eq!(visible[0].name, "Phrases"); // pinned first
/// assert_eq!(visible[1].name, "Animals");
/// ```
#[must_use]
pub fn visible_folders(folders: &[Folder], cards: &[Card], query: &FolderQuery) -> Vec<Folder> {
    let _span = tracing::debug_span!(
        "visible_folders",
        total = folders.len(),
        query_len = query.search.len()
    )
    .entered();

    let needle = query.search.to_lowercase();

    let mut visible: Vec<Folder> = folders
        .iter()
        .filter(|folder| {
            if needle.is_empty() {
                return true;
            }
            contains_ci(&folder.name, &needle)
                || cards.iter().any(|card| {
                    card.folder_id == folder.id && contains_ci(&card.front_text, &needle)
                })
        })
        .cloned()
        .collect();

    visible.sort_by(display_order);

    tracing::debug!(visible = visible.len(), "folder list computed");
    visible
}

/// Case-insensitive substring match. The needle must already be lowercased.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

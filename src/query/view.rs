//! View-state value objects driving the query engine.
//!
//! The ordering and filter functions in this module's siblings are pure:
//! everything the presentation layer would otherwise hold as ambient state
//! (search text, starred toggle, sort order) is passed in explicitly through
//! these types, never read from globals.

/// Sort order applied to a folder's cards.
///
/// Creation-date descending is the default, matching the list view's
/// newest-first presentation. Alphabetical orders compare `front_text`
/// case-insensitively. Every order is made total by an id tie-break, so
/// identical inputs always produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSort {
    /// Newest cards first (default).
    #[default]
    CreatedDesc,

    /// Oldest cards first.
    CreatedAsc,

    /// Front term A→Z, case-insensitive.
    FrontAsc,

    /// Front term Z→A, case-insensitive.
    FrontDesc,
}

/// View state for the folder list.
///
/// An empty `search` string disables search filtering entirely; a non-empty
/// string keeps folders whose name matches, or that own at least one card
/// whose front term matches (case-insensitive substring in both cases).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderQuery {
    /// Current search text. Empty means "no filter".
    pub search: String,
}

impl FolderQuery {
    /// A query with the given search text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tangocho::query::FolderQuery;
    ///
    /// let query = FolderQuery::with_search("toeic");
    /// assert!(query.has_search());
    /// assert!(!FolderQuery::default().has_search());
    /// ```
    #[must_use]
    pub fn with_search(search: impl Into<String>) -> Self {
        Self { search: search.into() }
    }

    /// Whether a search filter is active.
    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }
}

/// View state for a folder's card list.
///
/// Filters apply in order: starred-only first, then search (over front term
/// and meaning), then the selected sort. An empty `search` disables the
/// search filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardQuery {
    /// Current search text. Empty means "no filter".
    pub search: String,

    /// When set, only starred cards are retained.
    pub starred_only: bool,

    /// Sort order applied after filtering.
    pub sort: CardSort,
}

impl CardQuery {
    /// A query with the given search text and default sort.
    #[must_use]
    pub fn with_search(search: impl Into<String>) -> Self {
        Self { search: search.into(), ..Self::default() }
    }

    /// A query retaining only starred cards, default sort.
    #[must_use]
    pub fn starred() -> Self {
        Self { starred_only: true, ..Self::default() }
    }

    /// Whether a search filter is active.
    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }
}

//! Card filtering and sorting within one folder.
//!
//! Pure functions computing the visible, ordered card list for a folder's
//! list or study view. Filters apply before sorting: starred-only first,
//! then search, then the selected [`CardSort`]. All four orders are total
//! (ties fall back to id), so the same input always yields the same output.

use std::cmp::Ordering;

use super::folders::contains_ci;
use super::view::{CardQuery, CardSort};
use crate::domain::Card;

/// Compares two cards under the given sort order.
///
/// Alphabetical orders compare the front term after Unicode lowercasing;
/// creation orders compare the unix timestamp. Every order tie-breaks by id
/// ascending so sorting is deterministic even for cards created within the
/// same second or sharing a front term.
#[must_use]
pub fn compare(sort: CardSort, a: &Card, b: &Card) -> Ordering {
    let primary = match sort {
        CardSort::CreatedDesc => b.created_at.cmp(&a.created_at),
        CardSort::CreatedAsc => a.created_at.cmp(&b.created_at),
        CardSort::FrontAsc => compare_front(a, b),
        CardSort::FrontDesc => compare_front(b, a),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

fn compare_front(a: &Card, b: &Card) -> Ordering {
    a.front_text.to_lowercase().cmp(&b.front_text.to_lowercase())
}

/// Computes the visible, ordered card list for the current view state.
///
/// Applies the starred-only filter, then the search filter (front term OR
/// meaning, case-insensitive substring), then the selected sort. An empty
/// search keeps everything; an empty input yields an empty list, not an
/// error.
///
/// # Examples
///
/// ```
/// use tangocho::domain::{Card, CardContent};
/// use tangocho::query::{visible_cards, CardQuery};
/// use uuid::Uuid;
///
/// let folder_id = Uuid::new_v4();
/// let mut card = Card::new(folder_id, CardContent {
///     front_text: "Cat".to_string(),
///     back_meaning: "ネコ".to_string(),
///     ..CardContent::default()
/// });
/// card.is_starred = true;
///
/// let visible = visible_cards(&[card], &CardQuery::starred());
/// assert_eq!(visible.len(), 1);
/// ```
#[must_use]
pub fn visible_cards(cards: &[Card], query: &CardQuery) -> Vec<Card> {
    let _span = tracing::debug_span!(
        "visible_cards",
        total = cards.len(),
        starred_only = query.starred_only,
        query_len = query.search.len(),
        sort = ?query.sort
    )
    .entered();

    let needle = query.search.to_lowercase();

    let mut visible: Vec<Card> = cards
        .iter()
        .filter(|card| !query.starred_only || card.is_starred)
        .filter(|card| {
            needle.is_empty()
                || contains_ci(&card.front_text, &needle)
                || contains_ci(&card.back_meaning, &needle)
        })
        .cloned()
        .collect();

    visible.sort_by(|a, b| compare(query.sort, a, b));

    tracing::debug!(visible = visible.len(), "card list computed");
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardContent;
    use uuid::Uuid;

    fn card(id: u128, front: &str, meaning: &str, created_at: i64, starred: bool) -> Card {
        let mut card = Card::new(
            Uuid::from_u128(900),
            CardContent {
                front_text: front.to_string(),
                back_meaning: meaning.to_string(),
                ..CardContent::default()
            },
        );
        card.id = Uuid::from_u128(id);
        card.created_at = created_at;
        card.is_starred = starred;
        card
    }

    fn fronts(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.front_text.as_str()).collect()
    }

    #[test]
    fn default_sort_is_creation_date_descending() {
        let cards = vec![
            card(1, "old", "古い", 100, false),
            card(2, "new", "新しい", 300, false),
            card(3, "mid", "中", 200, false),
        ];

        let visible = visible_cards(&cards, &CardQuery::default());
        assert_eq!(fronts(&visible), vec!["new", "mid", "old"]);
    }

    #[test]
    fn creation_date_ascending() {
        let cards = vec![
            card(1, "old", "古い", 100, false),
            card(2, "new", "新しい", 300, false),
        ];

        let query = CardQuery { sort: CardSort::CreatedAsc, ..CardQuery::default() };
        assert_eq!(fronts(&visible_cards(&cards, &query)), vec!["old", "new"]);
    }

    #[test]
    fn alphabetical_orders_are_case_insensitive() {
        let cards = vec![
            card(1, "banana", "バナナ", 100, false),
            card(2, "Apple", "りんご", 200, false),
            card(3, "cherry", "さくらんぼ", 300, false),
        ];

        let asc = CardQuery { sort: CardSort::FrontAsc, ..CardQuery::default() };
        assert_eq!(fronts(&visible_cards(&cards, &asc)), vec!["Apple", "banana", "cherry"]);

        let desc = CardQuery { sort: CardSort::FrontDesc, ..CardQuery::default() };
        assert_eq!(fronts(&visible_cards(&cards, &desc)), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn ties_break_by_id_ascending_in_every_order() {
        // Same timestamp, same front text: only the id can separate them.
        let cards = vec![
            card(2, "same", "同じ", 100, false),
            card(1, "same", "同じ", 100, false),
        ];

        for sort in [CardSort::CreatedDesc, CardSort::CreatedAsc, CardSort::FrontAsc, CardSort::FrontDesc] {
            let query = CardQuery { sort, ..CardQuery::default() };
            let visible = visible_cards(&cards, &query);
            assert_eq!(visible[0].id, Uuid::from_u128(1), "sort {sort:?}");
            assert_eq!(visible[1].id, Uuid::from_u128(2), "sort {sort:?}");
        }
    }

    #[test]
    fn sorting_is_idempotent_for_all_orders() {
        let cards = vec![
            card(3, "Banana", "バナナ", 100, true),
            card(1, "apple", "りんご", 300, false),
            card(2, "Cherry", "さくらんぼ", 200, true),
        ];

        for sort in [CardSort::CreatedDesc, CardSort::CreatedAsc, CardSort::FrontAsc, CardSort::FrontDesc] {
            let query = CardQuery { sort, ..CardQuery::default() };
            let once = visible_cards(&cards, &query);
            let twice = visible_cards(&once, &query);
            assert_eq!(once, twice, "sort {sort:?}");
        }
    }

    #[test]
    fn starred_only_filter() {
        let cards = vec![
            card(1, "plain", "普通", 100, false),
            card(2, "starred", "星付き", 200, true),
        ];

        let visible = visible_cards(&cards, &CardQuery::starred());
        assert_eq!(fronts(&visible), vec!["starred"]);
    }

    #[test]
    fn search_matches_front_text_or_meaning() {
        let cards = vec![
            card(1, "Cat", "ネコ", 100, false),
            card(2, "Dog", "イヌ", 200, false),
            card(3, "Bird", "トリ", 300, false),
        ];

        let by_front = visible_cards(&cards, &CardQuery::with_search("cat"));
        assert_eq!(fronts(&by_front), vec!["Cat"]);

        let by_meaning = visible_cards(&cards, &CardQuery::with_search("イヌ"));
        assert_eq!(fronts(&by_meaning), vec!["Dog"]);
    }

    #[test]
    fn starred_filter_applies_before_search() {
        let cards = vec![
            card(1, "Cat", "ネコ", 100, false),
            card(2, "Caterpillar", "イモムシ", 200, true),
        ];

        let query = CardQuery { search: "cat".to_string(), starred_only: true, ..CardQuery::default() };
        assert_eq!(fronts(&visible_cards(&cards, &query)), vec!["Caterpillar"]);
    }

    #[test]
    fn search_filter_is_idempotent_and_narrowing() {
        let cards = vec![
            card(1, "Cat", "ネコ", 100, false),
            card(2, "Cattle", "ウシ", 200, false),
            card(3, "Dog", "イヌ", 300, false),
        ];
        let query = CardQuery::with_search("cat");

        let once = visible_cards(&cards, &query);
        let twice = visible_cards(&once, &query);
        assert_eq!(once, twice);
        assert!(once.len() <= cards.len());
        for kept in &once {
            assert!(cards.iter().any(|c| c.id == kept.id));
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(visible_cards(&[], &CardQuery::default()).is_empty());
        assert!(visible_cards(&[], &CardQuery::starred()).is_empty());
    }
}

//! Study-session state machine.
//!
//! Models a flip-through study run over a folder's cards: the deck is
//! shuffled once at the start, the user flips the current card between its
//! front term and back fields, and steps forward or backward through the
//! deck. Stepping always lands on the front face; reshuffling rewinds to
//! the first card.
//!
//! This is pure state; rendering the faces and capturing gestures is the
//! presentation layer's problem.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::Card;

/// One shuffled pass over a deck of cards.
///
/// # Examples
///
/// ```
/// use tangocho::domain::{Card, CardContent};
/// use tangocho::study::StudySession;
/// use uuid::Uuid;
///
/// let folder_id = Uuid::new_v4();
/// let cards = vec![Card::new(folder_id, CardContent {
///     front_text: "Cat".to_string(),
///     back_meaning: "ネコ".to_string(),
///     ..CardContent::default()
/// })];
///
/// let mut session = StudySession::new(cards);
/// assert_eq!(session.progress(), (1, 1));
/// assert!(!session.is_flipped());
/// session.flip();
/// assert!(session.is_flipped());
/// ```
#[derive(Debug, Clone)]
pub struct StudySession {
    deck: Vec<Card>,
    current: usize,
    flipped: bool,
}

impl StudySession {
    /// Starts a session over the given cards, shuffled.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_rng(cards, &mut rand::rng())
    }

    /// Starts a session shuffled with the caller's RNG.
    ///
    /// Seed the RNG for reproducible decks (tests, resumable sessions).
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Self {
        cards.shuffle(rng);
        Self { deck: cards, current: 0, flipped: false }
    }

    /// The card currently shown, or `None` for an empty deck.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.current)
    }

    /// Whether the back face is showing.
    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Flips the current card between front and back. No-op on an empty
    /// deck.
    pub fn flip(&mut self) {
        if !self.deck.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    /// Advances to the next card, landing on its front face.
    ///
    /// Returns `false` (and stays put) when already on the last card.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.deck.len() {
            self.current += 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Steps back to the previous card, landing on its front face.
    ///
    /// Returns `false` (and stays put) when already on the first card.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Reshuffles the deck, rewinding to the first card, front face up.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Reshuffles with the caller's RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
        self.current = 0;
        self.flipped = false;
    }

    /// `(position, total)` with a 1-based position; `(0, 0)` for an empty
    /// deck.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        if self.deck.is_empty() {
            (0, 0)
        } else {
            (self.current + 1, self.deck.len())
        }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The deck in its current shuffled order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardContent;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn deck(count: usize) -> Vec<Card> {
        let folder_id = Uuid::from_u128(900);
        (0..count)
            .map(|i| {
                let mut card = Card::new(
                    folder_id,
                    CardContent {
                        front_text: format!("word-{i}"),
                        back_meaning: format!("意味-{i}"),
                        ..CardContent::default()
                    },
                );
                card.id = Uuid::from_u128(i as u128 + 1);
                card
            })
            .collect()
    }

    #[test]
    fn deck_is_a_shuffled_permutation_of_the_input() {
        let cards = deck(8);
        let mut rng = StdRng::seed_from_u64(42);
        let session = StudySession::with_rng(cards.clone(), &mut rng);

        assert_eq!(session.len(), cards.len());
        for card in &cards {
            assert!(session.deck().iter().any(|c| c.id == card.id));
        }
    }

    #[test]
    fn same_seed_gives_the_same_deck_order() {
        let cards = deck(8);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = StudySession::with_rng(cards.clone(), &mut a);
        let second = StudySession::with_rng(cards, &mut b);
        assert_eq!(first.deck(), second.deck());
    }

    #[test]
    fn stepping_resets_the_flip_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = StudySession::with_rng(deck(3), &mut rng);

        session.flip();
        assert!(session.is_flipped());
        assert!(session.next());
        assert!(!session.is_flipped());

        session.flip();
        assert!(session.previous());
        assert!(!session.is_flipped());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = StudySession::with_rng(deck(2), &mut rng);

        assert!(!session.previous());
        assert_eq!(session.progress(), (1, 2));

        assert!(session.next());
        assert!(!session.next());
        assert_eq!(session.progress(), (2, 2));
    }

    #[test]
    fn shuffle_rewinds_to_the_first_card_front_face() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = StudySession::with_rng(deck(5), &mut rng);

        session.next();
        session.next();
        session.flip();

        session.shuffle_with(&mut rng);
        assert_eq!(session.progress(), (1, 5));
        assert!(!session.is_flipped());
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut session = StudySession::new(vec![]);
        assert!(session.current_card().is_none());
        assert_eq!(session.progress(), (0, 0));
        session.flip();
        assert!(!session.is_flipped());
        assert!(!session.next());
        assert!(!session.previous());
    }
}

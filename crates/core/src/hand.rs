use crate::Card;
use thiserror::Error;

/// How many dealt cards a player sees at the start of a round.
pub const OPENING_PEEKS: usize = 2;

#[derive(Debug, Error)]
pub enum HandError {
    #[error("card index {index} out of range for hand of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("hand is empty")]
    EmptyHand,
}

/// An ordered hand. Positions are stable between turns; discovery flags are
/// only ever flipped through the methods here.
#[derive(Debug, Default, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Every card face down. Callers discover indices explicitly.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Round-start construction: the owner peeks at the first dealt cards.
    pub fn deal(cards: Vec<Card>) -> Self {
        let mut hand = Self::from_cards(cards);
        for index in 0..OPENING_PEEKS.min(hand.cards.len()) {
            hand.cards[index].discovered = true;
        }
        hand
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Discovered cards paired with the hand positions they occupy.
    pub fn known(&self) -> Vec<(usize, Card)> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.discovered)
            .map(|(index, card)| (index, *card))
            .collect()
    }

    pub fn hidden_indices(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.discovered)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn first_hidden(&self) -> Option<usize> {
        self.cards.iter().position(|card| !card.discovered)
    }

    pub fn discovered_count(&self) -> usize {
        self.cards.iter().filter(|card| card.discovered).count()
    }

    pub fn discover(&mut self, index: usize) -> Result<(), HandError> {
        self.card_mut(index)?.discovered = true;
        Ok(())
    }

    pub fn hide(&mut self, index: usize) -> Result<(), HandError> {
        self.card_mut(index)?.discovered = false;
        Ok(())
    }

    /// Puts `card` at `index` exactly as given, flags included, and returns
    /// the displaced card.
    pub fn replace(&mut self, index: usize, card: Card) -> Result<Card, HandError> {
        let slot = self.card_mut(index)?;
        Ok(std::mem::replace(slot, card))
    }

    /// The drawn card takes over `index` face up. The selected card leaves,
    /// and every other discovered card of the same rank leaves with it; the
    /// returned set is in left-to-right scan order, selected card first.
    /// The drawn card never joins the discard set, even on a rank match.
    pub fn substitute(&mut self, index: usize, mut drawn: Card) -> Result<Vec<Card>, HandError> {
        let len = self.cards.len();
        let selected = *self
            .cards
            .get(index)
            .ok_or(HandError::IndexOutOfRange { index, len })?;
        drawn.discovered = true;
        self.cards[index] = drawn;
        let mut thrown = vec![selected];
        let mut kept = Vec::with_capacity(len);
        for (position, card) in std::mem::take(&mut self.cards).into_iter().enumerate() {
            if position != index && card.discovered && card.rank == selected.rank {
                thrown.push(card);
            } else {
                kept.push(card);
            }
        }
        self.cards = kept;
        Ok(thrown)
    }

    /// Burns the drawn card instead of keeping it: discovered cards matching
    /// its rank leave the hand, then the drawn card itself is appended to
    /// the discard set. It never touches the hand.
    pub fn decline(&mut self, drawn: Card) -> Vec<Card> {
        let mut thrown = Vec::new();
        let mut kept = Vec::with_capacity(self.cards.len());
        for card in std::mem::take(&mut self.cards) {
            if card.discovered && card.rank == drawn.rank {
                thrown.push(card);
            } else {
                kept.push(card);
            }
        }
        self.cards = kept;
        thrown.push(drawn);
        thrown
    }

    fn card_mut(&mut self, index: usize) -> Result<&mut Card, HandError> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .ok_or(HandError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn two_pair_hand() -> Hand {
        // 2♣ 2♦ 7♥ K♠, first two discovered
        Hand::deal(vec![
            card(Rank::Two, Suit::Clubs),
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::King, Suit::Spades),
        ])
    }

    #[test]
    fn deal_discovers_the_first_two_cards() {
        let hand = two_pair_hand();
        let flags: Vec<bool> = hand.cards().iter().map(|c| c.discovered()).collect();
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn substitute_echoes_discovered_duplicates() {
        let mut hand = two_pair_hand();
        let thrown = hand.substitute(0, card(Rank::Two, Suit::Spades)).unwrap();
        assert_eq!(thrown.len(), 2);
        assert_eq!(thrown[0].suit, Suit::Clubs);
        assert_eq!(thrown[1].suit, Suit::Diamonds);
        assert_eq!(hand.len(), 3);
        assert_eq!(hand.cards()[0].rank, Rank::Two);
        assert_eq!(hand.cards()[0].suit, Suit::Spades);
        assert!(hand.cards()[0].discovered());
        assert_eq!(hand.cards()[1].rank, Rank::Seven);
        assert_eq!(hand.cards()[2].rank, Rank::King);
    }

    #[test]
    fn substitute_ignores_hidden_duplicates() {
        let mut hand = Hand::deal(vec![
            card(Rank::Five, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Five, Suit::Spades),
            card(Rank::Five, Suit::Diamonds),
        ]);
        let thrown = hand.substitute(0, card(Rank::Three, Suit::Clubs)).unwrap();
        assert_eq!(thrown.len(), 1);
        assert_eq!(thrown[0].suit, Suit::Clubs);
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn substitute_never_echoes_the_drawn_card() {
        let mut hand = Hand::deal(vec![
            card(Rank::Four, Suit::Clubs),
            card(Rank::Nine, Suit::Hearts),
        ]);
        let thrown = hand.substitute(0, card(Rank::Four, Suit::Spades)).unwrap();
        assert_eq!(thrown.len(), 1);
        assert_eq!(thrown[0].suit, Suit::Clubs);
        assert_eq!(hand.cards()[0].suit, Suit::Spades);
        assert!(hand.cards()[0].discovered());
    }

    #[test]
    fn substitute_at_a_hidden_index_still_works() {
        let mut hand = two_pair_hand();
        let thrown = hand.substitute(3, card(Rank::Ace, Suit::Clubs)).unwrap();
        assert_eq!(thrown.len(), 1);
        assert_eq!(thrown[0].rank, Rank::King);
        assert!(hand.cards()[3].discovered());
    }

    #[test]
    fn decline_burns_discovered_matches_and_appends_the_drawn_card_last() {
        let mut hand = two_pair_hand();
        let thrown = hand.decline(card(Rank::Two, Suit::Hearts));
        assert_eq!(thrown.len(), 3);
        assert_eq!(thrown[0].suit, Suit::Clubs);
        assert_eq!(thrown[1].suit, Suit::Diamonds);
        assert_eq!(thrown[2].suit, Suit::Hearts);
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.cards()[0].rank, Rank::Seven);
        assert_eq!(hand.cards()[1].rank, Rank::King);
    }

    #[test]
    fn decline_without_matches_throws_only_the_drawn_card() {
        let mut hand = two_pair_hand();
        let thrown = hand.decline(card(Rank::Nine, Suit::Clubs));
        assert_eq!(thrown.len(), 1);
        assert_eq!(thrown[0].rank, Rank::Nine);
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn decline_ignores_hidden_matches() {
        let mut hand = two_pair_hand();
        let thrown = hand.decline(card(Rank::King, Suit::Hearts));
        assert_eq!(thrown.len(), 1);
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn substitute_rejects_out_of_range_indices() {
        let mut hand = two_pair_hand();
        let err = hand.substitute(4, card(Rank::Nine, Suit::Clubs)).unwrap_err();
        assert!(matches!(err, HandError::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn known_reports_hand_positions() {
        let mut hand = two_pair_hand();
        hand.hide(0).unwrap();
        hand.discover(3).unwrap();
        let positions: Vec<usize> = hand.known().into_iter().map(|(i, _)| i).collect();
        assert_eq!(positions, vec![1, 3]);
        assert_eq!(hand.first_hidden(), Some(0));
    }
}

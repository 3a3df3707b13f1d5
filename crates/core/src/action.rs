use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Move {
    /// Put the drawn card at this hand position, throwing what was there.
    Substitute(usize),
    /// Burn the drawn card without taking it into the hand.
    Decline,
}

/// What an actor resolves a turn to: a move plus the optional Kobo call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub play: Move,
    pub kobo: bool,
}

impl Decision {
    pub fn substitute(index: usize) -> Self {
        Self {
            play: Move::Substitute(index),
            kobo: false,
        }
    }

    pub fn decline() -> Self {
        Self {
            play: Move::Decline,
            kobo: false,
        }
    }

    pub fn with_kobo(mut self) -> Self {
        self.kobo = true;
        self
    }
}

/// The committed result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub thrown: Vec<Card>,
    pub kobo: bool,
}

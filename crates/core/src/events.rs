use crate::{Card, EffectKind, Seat};
use serde::{Deserialize, Serialize};

/// What the engine reports while a turn runs. Front-ends drain these and
/// decide what to show; the engine never prints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    TurnStarted { seat: Seat, deck_remaining: usize },
    CardDrawn { seat: Seat, card: Card },
    CardsThrown { seat: Seat, cards: Vec<Card> },
    KoboDeclared { seat: Seat },
    BlindSwapped {
        seat: Seat,
        own_index: usize,
        rival_index: usize,
    },
    CardRevealed { seat: Seat, index: usize },
    EffectDeclined { seat: Seat, effect: EffectKind },
    RoundWon { winner: Seat },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}

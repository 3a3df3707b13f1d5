use crate::{Card, Decision, Hand, RngState, RoundError, SwapChoice};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    Human,
    Opponent,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Opponent,
            Seat::Opponent => Seat::Human,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::Human => "player",
            Seat::Opponent => "opponent",
        }
    }
}

/// Read-only context a turn is decided from.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub drawn: Card,
    pub own: &'a Hand,
    pub rival: &'a Hand,
    /// True once the opposing player has declared Kobo.
    pub rival_kobo: bool,
}

/// One seat's decision maker. The round controller only talks to actors
/// through this interface; the human and the scripted rival sit behind it
/// as peers.
pub trait Actor {
    /// Resolve the drawn card into a move, optionally declaring Kobo.
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, RoundError>;

    /// Pick both sides of a Jack swap, or decline with `None`. `forced` is
    /// set while the opposing player's Kobo declaration stands.
    fn choose_swap(
        &mut self,
        own: &Hand,
        rival: &Hand,
        forced: bool,
        rng: &mut RngState,
    ) -> Result<Option<SwapChoice>, RoundError>;

    /// Pick one own card to discover after a Queen, or decline with `None`.
    fn choose_reveal(&mut self, own: &Hand) -> Result<Option<usize>, RoundError>;
}

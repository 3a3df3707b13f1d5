use crate::{Hand, HandError, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EffectKind {
    /// Jack: exchange one own card for one rival card, both face down.
    BlindSwap,
    /// Queen: discover one of the acting player's own cards.
    Reveal,
}

/// The single rank-to-effect table. Thrown cards trigger these once each,
/// in discard-set order.
pub fn effect_for_rank(rank: Rank) -> Option<EffectKind> {
    match rank {
        Rank::Jack => Some(EffectKind::BlindSwap),
        Rank::Queen => Some(EffectKind::Reveal),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapChoice {
    pub own: usize,
    pub rival: usize,
}

/// Exchanges the two chosen cards between hands. Both end face down no
/// matter what either side knew before, which is what makes the swap blind.
pub fn blind_swap(
    own: &mut Hand,
    own_index: usize,
    rival: &mut Hand,
    rival_index: usize,
) -> Result<(), HandError> {
    if own.is_empty() || rival.is_empty() {
        return Err(HandError::EmptyHand);
    }
    // validate both sides before touching either hand
    let mut mine = own.get(own_index).ok_or(HandError::IndexOutOfRange {
        index: own_index,
        len: own.len(),
    })?;
    let mut theirs = rival.get(rival_index).ok_or(HandError::IndexOutOfRange {
        index: rival_index,
        len: rival.len(),
    })?;
    mine.discovered = false;
    theirs.discovered = false;
    own.replace(own_index, theirs)?;
    rival.replace(rival_index, mine)?;
    Ok(())
}

use crate::{Actor, Card, Decision, Hand, Rank, RngState, RoundError, SwapChoice, TurnView};

/// The scripted rival. Stateless: every turn is decided from the visible
/// context alone by walking a fixed priority ladder. The first matching
/// rule wins and every tie-break takes the lowest position index.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpponentActor;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Hand position, or `None` for the drawn card.
    slot: Option<usize>,
    card: Card,
}

impl OpponentActor {
    pub fn new() -> Self {
        Self
    }

    fn ladder(view: &TurnView<'_>) -> Decision {
        let known = view.own.known();

        // 1. while the human's kobo stands, get a jack thrown
        if view.rival_kobo {
            if view.drawn.rank == Rank::Jack {
                return Decision::decline();
            }
            if let Some(&(slot, _)) = known.iter().find(|(_, card)| card.rank == Rank::Jack) {
                return Decision::substitute(slot);
            }
        }

        // 2. queens turn hidden cards into known ones
        if view.drawn.rank == Rank::Queen {
            return Decision::decline();
        }
        if view.own.first_hidden().is_some() {
            if let Some(&(slot, _)) = known.iter().find(|(_, card)| card.rank == Rank::Queen) {
                return Decision::substitute(slot);
            }
        }

        // 3. learn the first unseen card
        if let Some(slot) = view.own.first_hidden() {
            return Decision::substitute(slot);
        }

        // rules 4-6 see a fully discovered hand
        let mut candidates: Vec<Candidate> = known
            .iter()
            .map(|&(slot, card)| Candidate {
                slot: Some(slot),
                card,
            })
            .collect();
        candidates.push(Candidate {
            slot: None,
            card: view.drawn,
        });

        // 4. kobo once the highest candidate is itself a great card
        let best = best_hit(&candidates);
        if candidates[best].card.rank.is_great() {
            let worst = worst_combination(&candidates);
            let decision = match candidates[worst].slot {
                Some(slot) => Decision::substitute(slot),
                None => Decision::decline(),
            };
            return decision.with_kobo();
        }

        // 5. a drawn duplicate of a known card echoes the match out for free
        if !view.drawn.rank.is_great()
            && known.iter().any(|(_, card)| card.rank == view.drawn.rank)
        {
            return Decision::decline();
        }

        // 6. shed the most expensive card
        let best = best_hit(&candidates);
        match candidates[best].slot {
            Some(slot) => Decision::substitute(slot),
            None => Decision::decline(),
        }
    }
}

impl Actor for OpponentActor {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, RoundError> {
        Ok(Self::ladder(view))
    }

    fn choose_swap(
        &mut self,
        own: &Hand,
        rival: &Hand,
        forced: bool,
        rng: &mut RngState,
    ) -> Result<Option<SwapChoice>, RoundError> {
        // jack swaps are only worth spending while the human's kobo stands
        if !forced {
            return Ok(None);
        }
        let candidates: Vec<Candidate> = own
            .cards()
            .iter()
            .enumerate()
            .map(|(slot, card)| Candidate {
                slot: Some(slot),
                card: *card,
            })
            .collect();
        let own_index = match candidates.get(worst_combination(&candidates)) {
            Some(candidate) => candidate.slot.unwrap_or(0),
            None => return Ok(None),
        };
        Ok(Some(SwapChoice {
            own: own_index,
            rival: rng.pick_index(rival.len()),
        }))
    }

    fn choose_reveal(&mut self, own: &Hand) -> Result<Option<usize>, RoundError> {
        Ok(own.first_hidden())
    }
}

fn best_hit(candidates: &[Candidate]) -> usize {
    let mut best = 0;
    for (index, candidate) in candidates.iter().enumerate().skip(1) {
        if candidate.card.rank.value() > candidates[best].card.rank.value() {
            best = index;
        }
    }
    best
}

/// Duplicate-aware cost: every card of a rank contributes its full value.
/// The pick is the first candidate of the heaviest rank.
fn worst_combination(candidates: &[Candidate]) -> usize {
    if candidates.is_empty() {
        return 0;
    }
    let mut totals: Vec<(Rank, u32)> = Vec::new();
    for candidate in candidates {
        let value = u32::from(candidate.card.rank.value());
        match totals.iter_mut().find(|(rank, _)| *rank == candidate.card.rank) {
            Some((_, total)) => *total += value,
            None => totals.push((candidate.card.rank, value)),
        }
    }
    let mut heaviest = 0;
    for (index, entry) in totals.iter().enumerate().skip(1) {
        if entry.1 > totals[heaviest].1 {
            heaviest = index;
        }
    }
    let target = totals[heaviest].0;
    candidates
        .iter()
        .position(|candidate| candidate.card.rank == target)
        .unwrap_or(0)
}

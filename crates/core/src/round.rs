use crate::{
    blind_swap, effect_for_rank, Actor, Card, Deck, DiscardPile, EffectKind, Event, EventBus,
    Hand, HandError, Move, RngState, RoundConfig, Seat, TurnOutcome, TurnView, OPENING_PEEKS,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("the deck is exhausted")]
    DeckExhausted,
    #[error("input closed")]
    InputClosed,
    #[error("round already decided")]
    RoundOver,
    #[error("hand size {0} does not fit a two-player deal")]
    InvalidHandSize(usize),
    #[error("hand error: {0}")]
    Hand(#[from] HandError),
}

/// One game from deal to victory. The state is open for front ends and tests
/// to inspect; mutation during play goes through [`Round::play_turn`], which
/// owns the ordering of draw, decision, throw, effects and victory check.
#[derive(Debug)]
pub struct Round {
    pub config: RoundConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub pile: DiscardPile,
    pub human: Hand,
    pub opponent: Hand,
    pub turn: Seat,
    pub human_kobo: bool,
    pub opponent_kobo: bool,
    pub winner: Option<Seat>,
}

impl Round {
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self, RoundError> {
        if config.hand_size < OPENING_PEEKS || config.hand_size * 2 > 52 {
            return Err(RoundError::InvalidHandSize(config.hand_size));
        }
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);
        let opponent = Hand::deal(Self::draw_many(&mut deck, config.hand_size)?);
        let human = Hand::deal(Self::draw_many(&mut deck, config.hand_size)?);
        let turn = if rng.coin_flip() {
            Seat::Human
        } else {
            Seat::Opponent
        };
        Ok(Self {
            config,
            rng,
            deck,
            pile: DiscardPile::default(),
            human,
            opponent,
            turn,
            human_kobo: false,
            opponent_kobo: false,
            winner: None,
        })
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Human => &self.human,
            Seat::Opponent => &self.opponent,
        }
    }

    pub fn kobo_declared(&self, seat: Seat) -> bool {
        match seat {
            Seat::Human => self.human_kobo,
            Seat::Opponent => self.opponent_kobo,
        }
    }

    /// Runs one full turn for whichever seat is up: draw, decide, commit,
    /// resolve effects, check victory, pass the turn. Order matters; the
    /// discard is committed before any effect fires, and effects finish
    /// before the victory check.
    pub fn play_turn(
        &mut self,
        actor: &mut dyn Actor,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, RoundError> {
        if self.winner.is_some() {
            return Err(RoundError::RoundOver);
        }
        let seat = self.turn;
        events.push(Event::TurnStarted {
            seat,
            deck_remaining: self.deck.cards.len(),
        });
        let drawn = self.deck.draw().ok_or(RoundError::DeckExhausted)?;
        events.push(Event::CardDrawn { seat, card: drawn });

        let decision = {
            let view = TurnView {
                drawn,
                own: self.hand(seat),
                rival: self.hand(seat.other()),
                rival_kobo: self.kobo_declared(seat.other()),
            };
            actor.decide(&view)?
        };

        if decision.kobo && !self.kobo_declared(seat) {
            self.set_kobo(seat);
            events.push(Event::KoboDeclared { seat });
        }

        let thrown = match decision.play {
            Move::Substitute(index) => self.hand_mut(seat).substitute(index, drawn)?,
            Move::Decline => self.hand_mut(seat).decline(drawn),
        };
        events.push(Event::CardsThrown {
            seat,
            cards: thrown.clone(),
        });

        self.resolve_effects(seat, &thrown, actor, events)?;
        self.pile.throw(thrown.clone());

        if self.hand(seat).is_empty() {
            self.winner = Some(seat);
            events.push(Event::RoundWon { winner: seat });
        }
        self.turn = seat.other();
        Ok(TurnOutcome {
            thrown,
            kobo: decision.kobo,
        })
    }

    fn resolve_effects(
        &mut self,
        seat: Seat,
        thrown: &[Card],
        actor: &mut dyn Actor,
        events: &mut EventBus,
    ) -> Result<(), RoundError> {
        for card in thrown {
            let Some(effect) = effect_for_rank(card.rank) else {
                continue;
            };
            match effect {
                EffectKind::BlindSwap => {
                    let forced = self.kobo_declared(seat.other());
                    let Self {
                        human,
                        opponent,
                        rng,
                        ..
                    } = self;
                    let (own, rival) = match seat {
                        Seat::Human => (&mut *human, &mut *opponent),
                        Seat::Opponent => (&mut *opponent, &mut *human),
                    };
                    // no legal target once either hand is empty
                    if own.is_empty() || rival.is_empty() {
                        continue;
                    }
                    match actor.choose_swap(own, rival, forced, rng)? {
                        Some(choice) => {
                            blind_swap(own, choice.own, rival, choice.rival)?;
                            events.push(Event::BlindSwapped {
                                seat,
                                own_index: choice.own,
                                rival_index: choice.rival,
                            });
                        }
                        None => events.push(Event::EffectDeclined { seat, effect }),
                    }
                }
                EffectKind::Reveal => {
                    if self.hand(seat).is_empty() {
                        continue;
                    }
                    match actor.choose_reveal(self.hand(seat))? {
                        Some(index) => {
                            self.hand_mut(seat).discover(index)?;
                            events.push(Event::CardRevealed { seat, index });
                        }
                        None => events.push(Event::EffectDeclined { seat, effect }),
                    }
                }
            }
        }
        Ok(())
    }

    fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Opponent => &mut self.opponent,
        }
    }

    fn set_kobo(&mut self, seat: Seat) {
        match seat {
            Seat::Human => self.human_kobo = true,
            Seat::Opponent => self.opponent_kobo = true,
        }
    }

    fn draw_many(deck: &mut Deck, count: usize) -> Result<Vec<Card>, RoundError> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(deck.draw().ok_or(RoundError::DeckExhausted)?);
        }
        Ok(cards)
    }
}

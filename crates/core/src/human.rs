use crate::{
    parse_pick, parse_turn, Actor, CommandSet, Decision, Display, Hand, InputSource, RngState,
    RoundError, SwapChoice, TurnView, OPENING_PEEKS,
};

/// The interactive seat. Generic over its front-end so whole turns can run
/// against scripted input in tests.
pub struct HumanActor<D: Display, I: InputSource> {
    display: D,
    input: I,
    commands: CommandSet,
    pending_hints: Vec<usize>,
}

impl<D: Display, I: InputSource> HumanActor<D, I> {
    pub fn new(display: D, input: I) -> Self {
        Self::with_commands(display, input, CommandSet::default())
    }

    pub fn with_commands(display: D, input: I, commands: CommandSet) -> Self {
        Self {
            display,
            input,
            commands,
            // the opening peeks are shown exactly once, on the first render
            pending_hints: (0..OPENING_PEEKS).collect(),
        }
    }

    fn read(&mut self, prompt: &str) -> Result<String, RoundError> {
        self.input.read_token(prompt).ok_or(RoundError::InputClosed)
    }

    fn pick(&mut self, hand_size: usize, ask: &str) -> Result<Option<usize>, RoundError> {
        let mut prompt = ask.to_string();
        loop {
            let line = self.read(&prompt)?;
            match parse_pick(&line, hand_size, &self.commands) {
                Ok(choice) => return Ok(choice),
                Err(_) => {
                    prompt = format!(
                        "Valid inputs: {}\n{}",
                        self.commands.valid_picks(hand_size),
                        ask
                    );
                }
            }
        }
    }
}

impl<D: Display, I: InputSource> Actor for HumanActor<D, I> {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, RoundError> {
        let hints = std::mem::take(&mut self.pending_hints);
        self.display.show_hand(view.own, &hints);
        self.display.show_drawn_card(view.drawn);
        let mut prompt = String::from("Your turn: ");
        loop {
            let line = self.read(&prompt)?;
            match parse_turn(&line, view.own.len(), &self.commands) {
                Ok(decision) => return Ok(decision),
                Err(_) => {
                    prompt = format!(
                        "Valid inputs: {}\nYour turn: ",
                        self.commands.valid_inputs(view.own.len())
                    );
                }
            }
        }
    }

    fn choose_swap(
        &mut self,
        own: &Hand,
        rival: &Hand,
        _forced: bool,
        _rng: &mut RngState,
    ) -> Result<Option<SwapChoice>, RoundError> {
        self.display.show_hand(own, &[]);
        let Some(own_index) = self.pick(own.len(), "Swap away which of your cards? ")? else {
            return Ok(None);
        };
        self.display.show_hand(rival, &[]);
        let Some(rival_index) = self.pick(rival.len(), "Take which rival card? ")? else {
            return Ok(None);
        };
        Ok(Some(SwapChoice {
            own: own_index,
            rival: rival_index,
        }))
    }

    fn choose_reveal(&mut self, own: &Hand) -> Result<Option<usize>, RoundError> {
        let Some(index) = self.pick(own.len(), "Look at which of your cards? ")? else {
            return Ok(None);
        };
        // the queen's one-time peek
        self.display.show_hand(own, &[index]);
        Ok(Some(index))
    }
}

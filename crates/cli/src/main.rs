use colored::Colorize;
use kobo_core::{EventBus, HumanActor, OpponentActor, Round, RoundConfig, RoundError, Seat};

mod display;
mod input;

use display::TerminalDisplay;
use input::StdinInput;

fn main() {
    let seed: u64 = rand::random();
    let round = match Round::new(RoundConfig::default(), seed) {
        Ok(round) => round,
        Err(err) => {
            eprintln!("could not start a round: {err}");
            std::process::exit(1);
        }
    };
    println!("{}", display::star_box("K O B O").bold());
    println!("seed: {seed}");
    run_round(round);
}

fn run_round(mut round: Round) {
    let mut events = EventBus::default();
    let mut human = HumanActor::new(TerminalDisplay, StdinInput);
    let mut opponent = OpponentActor::new();

    loop {
        let seat = round.turn;
        display::turn_banner(seat, round.deck.cards.len(), round.hand(seat.other()).len());
        let result = match seat {
            Seat::Human => round.play_turn(&mut human, &mut events),
            Seat::Opponent => round.play_turn(&mut opponent, &mut events),
        };
        match result {
            Ok(_) => {}
            Err(RoundError::DeckExhausted) => {
                for event in events.drain() {
                    display::narrate(&event);
                }
                println!("{}", "The deck is empty. No winner this round.".bold());
                return;
            }
            Err(RoundError::InputClosed) => return,
            Err(err) => {
                eprintln!("round error: {err}");
                std::process::exit(1);
            }
        }
        for event in events.drain() {
            display::narrate(&event);
        }
        if round.is_over() {
            return;
        }
    }
}

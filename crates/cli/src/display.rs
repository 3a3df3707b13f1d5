use colored::Colorize;
use kobo_core::{Card, Display, EffectKind, Event, Hand, Seat};

const CARD_BACK: &str = "##";

/// Hands and drawn cards rendered as starred boxes on stdout. Faces appear
/// only at the indices the engine marks visible; everything else is a back,
/// seen or not. Remembering is the player's job.
pub struct TerminalDisplay;

impl Display for TerminalDisplay {
    fn show_hand(&mut self, hand: &Hand, visible: &[usize]) {
        println!("{}", star_box(&hand_line(hand, visible)));
    }

    fn show_drawn_card(&mut self, card: Card) {
        println!("{}", "You drew".bold());
        println!("{}", star_box(&card.to_string()).cyan());
    }
}

fn hand_line(hand: &Hand, visible: &[usize]) -> String {
    if hand.is_empty() {
        return "empty".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if visible.contains(&index) {
                card.to_string()
            } else {
                CARD_BACK.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn star_box(text: &str) -> String {
    let margin = 4;
    let width = text.chars().count() + 2 * margin;
    let bar = "*".repeat(width);
    let pad = " ".repeat(margin - 1);
    format!("{bar}\n*{pad}{text}{pad}*\n{bar}")
}

pub fn turn_banner(seat: Seat, deck_remaining: usize, rival_holds: usize) {
    match seat {
        Seat::Human => println!(
            "\n{} (deck {}, rival holds {})",
            "Your turn".bold(),
            deck_remaining,
            rival_holds
        ),
        Seat::Opponent => println!("\n{}", "Rival's turn".red().bold()),
    }
}

/// Turns an engine event into narration. The rival's drawn card stays
/// unnamed; thrown cards are public.
pub fn narrate(event: &Event) {
    match event {
        // the pre-turn banner covers these
        Event::TurnStarted { .. } => {}
        Event::CardDrawn {
            seat: Seat::Opponent,
            ..
        } => println!("{}", "The rival draws a card.".red()),
        // the human watched their own draw happen
        Event::CardDrawn { .. } => {}
        Event::CardsThrown { seat, cards } => {
            let list = card_list(cards);
            match seat {
                Seat::Human => println!("You threw: {list}"),
                Seat::Opponent => println!("{}", format!("The rival threw: {list}").red()),
            }
        }
        Event::KoboDeclared { seat } => {
            let line = match seat {
                Seat::Human => "KOBO! You call the round.",
                Seat::Opponent => "KOBO! The rival calls the round.",
            };
            println!("{}", line.yellow().bold());
        }
        Event::BlindSwapped {
            seat,
            own_index,
            rival_index,
        } => match seat {
            Seat::Human => println!(
                "Swapped your card {} for the rival's card {}.",
                own_index + 1,
                rival_index + 1
            ),
            Seat::Opponent => println!(
                "{}",
                format!(
                    "The rival swapped its card {} for your card {}.",
                    own_index + 1,
                    rival_index + 1
                )
                .red()
            ),
        },
        Event::CardRevealed { seat, index } => match seat {
            Seat::Human => println!("You peeked at card {}.", index + 1),
            Seat::Opponent => println!("{}", "The rival peeked at one of its cards.".red()),
        },
        Event::EffectDeclined { seat, effect } => {
            let name = match effect {
                EffectKind::BlindSwap => "jack",
                EffectKind::Reveal => "queen",
            };
            match seat {
                Seat::Human => println!("You let the {name} pass."),
                Seat::Opponent => println!("{}", format!("The rival lets the {name} pass.").red()),
            }
        }
        Event::RoundWon { winner } => match winner {
            Seat::Human => println!("{}", star_box("YOU WON!").green().bold()),
            Seat::Opponent => println!("{}", star_box("THE RIVAL WON").red().bold()),
        },
    }
}

fn card_list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

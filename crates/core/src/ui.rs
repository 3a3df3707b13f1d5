use crate::{Card, Hand};

/// Output side of a front-end. `visible` lists the only positions whose
/// faces may be shown; everything else renders as a card back, whatever
/// the discovery flags say. Discovery is what a player has seen and must
/// remember, not what stays on screen.
pub trait Display {
    fn show_hand(&mut self, hand: &Hand, visible: &[usize]);
    fn show_drawn_card(&mut self, card: Card);
}

/// Blocking one-line input. `None` means the source closed.
pub trait InputSource {
    fn read_token(&mut self, prompt: &str) -> Option<String>;
}

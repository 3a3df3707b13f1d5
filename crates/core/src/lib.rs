//! Kobo rules and turn resolution. No IO or platform concerns in this crate.

pub mod action;
pub mod actor;
pub mod cards;
pub mod config;
pub mod deck;
pub mod effects;
pub mod events;
pub mod hand;
pub mod human;
pub mod opponent;
pub mod protocol;
pub mod rng;
pub mod round;
pub mod ui;

pub use action::*;
pub use actor::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use effects::*;
pub use events::*;
pub use hand::*;
pub use human::*;
pub use opponent::*;
pub use protocol::*;
pub use rng::*;
pub use round::*;
pub use ui::*;

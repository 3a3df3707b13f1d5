use crate::{Decision, Move};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected input line. Callers loop the prompt; this never crosses the
/// round boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid input token")]
pub struct InvalidInputToken;

/// The two word commands of the turn grammar. Matching ignores case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandSet {
    pub pass: String,
    pub kobo: String,
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            pass: "q".to_string(),
            kobo: "k".to_string(),
        }
    }
}

impl CommandSet {
    pub fn is_pass(&self, token: &str) -> bool {
        token.eq_ignore_ascii_case(&self.pass)
    }

    pub fn is_kobo(&self, token: &str) -> bool {
        token.eq_ignore_ascii_case(&self.kobo)
    }

    /// The acceptable-input list shown after a rejected turn line.
    pub fn valid_inputs(&self, hand_size: usize) -> String {
        let mut parts: Vec<String> = (1..=hand_size).map(|i| i.to_string()).collect();
        parts.push(self.pass.clone());
        parts.push(self.kobo.clone());
        parts.join(", ")
    }

    /// Same, for effect-target prompts where the kobo token has no meaning.
    pub fn valid_picks(&self, hand_size: usize) -> String {
        let mut parts: Vec<String> = (1..=hand_size).map(|i| i.to_string()).collect();
        parts.push(self.pass.clone());
        parts.join(", ")
    }
}

/// Parses one turn line: `<action> [<kobo>]`, where the action is a 1-based
/// hand index or the pass command. Indices come back 0-based.
pub fn parse_turn(
    input: &str,
    hand_size: usize,
    commands: &CommandSet,
) -> Result<Decision, InvalidInputToken> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (action, suffix) = match tokens.as_slice() {
        [action] => (*action, None),
        [action, suffix] => (*action, Some(*suffix)),
        _ => return Err(InvalidInputToken),
    };
    let play = parse_action(action, hand_size, commands)?;
    let kobo = match suffix {
        Some(token) if commands.is_kobo(token) => true,
        Some(_) => return Err(InvalidInputToken),
        None => false,
    };
    Ok(Decision { play, kobo })
}

/// Parses an effect-target line: a single 1-based index (0-based in the
/// returned `Some`) or the pass command to decline the effect (`None`).
pub fn parse_pick(
    input: &str,
    hand_size: usize,
    commands: &CommandSet,
) -> Result<Option<usize>, InvalidInputToken> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [token] = tokens.as_slice() else {
        return Err(InvalidInputToken);
    };
    if commands.is_pass(token) {
        return Ok(None);
    }
    parse_index(token, hand_size).map(Some)
}

fn parse_action(
    token: &str,
    hand_size: usize,
    commands: &CommandSet,
) -> Result<Move, InvalidInputToken> {
    if commands.is_pass(token) {
        return Ok(Move::Decline);
    }
    parse_index(token, hand_size).map(Move::Substitute)
}

fn parse_index(token: &str, hand_size: usize) -> Result<usize, InvalidInputToken> {
    // plain digits only, no signs or whitespace tricks
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidInputToken);
    }
    let position: usize = token.parse().map_err(|_| InvalidInputToken)?;
    if position == 0 || position > hand_size {
        return Err(InvalidInputToken);
    }
    Ok(position - 1)
}

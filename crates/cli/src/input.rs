use kobo_core::InputSource;
use std::io::{self, Write};

/// Plain blocking stdin reader. `None` on a closed pipe or read error.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_token(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).ok()? == 0 {
            return None;
        }
        Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}

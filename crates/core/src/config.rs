use serde::{Deserialize, Serialize};

pub const DEFAULT_HAND_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundConfig {
    pub hand_size: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

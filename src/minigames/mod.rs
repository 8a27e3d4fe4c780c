//! Side games sharing the session's determinism rules
//!
//! - `letters`: press the highlighted letter, A to Z in shuffled order
//! - `numbers`: pop numbered bubbles 1 to 10 in order
//!
//! Both are pure bookkeeping driven by discrete input events stamped with a
//! millisecond clock supplied by the caller. Shuffles and placements come
//! from a seeded `Pcg32`, so a seed and an event sequence replay exactly.

pub mod letters;
pub mod numbers;

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

pub use letters::{LetterGame, PressResult};
pub use numbers::{Bubble, ClickResult, NumberGame};

/// Round lifecycle shared by both side games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the start button
    NotStarted,
    InProgress,
    /// Every target hit; the final time is fixed
    Finished,
}

/// RNG for one round: each round of a game draws from its own stream
fn round_rng(seed: u64, round: u64) -> Pcg32 {
    Pcg32::new(seed, round.wrapping_mul(2).wrapping_add(1))
}


//! Letter typing game
//!
//! The 26 letters are shuffled when a round starts. The player must press the
//! highlighted one; a correct press moves on to the next, a wrong letter is
//! flagged for `WRONG_PRESS_MS` so a view can tint that key.

use log::{debug, info};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::{RoundPhase, round_rng};

/// How long a wrong key stays flagged
pub const WRONG_PRESS_MS: u64 = 2000;

const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressResult {
    Correct,
    /// The last letter; carries the round time
    Finished { elapsed_ms: u64 },
    Wrong,
    /// Not a letter, or no round in progress
    Ignored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterGame {
    seed: u64,
    rounds_started: u64,
    phase: RoundPhase,
    order: Vec<char>,
    index: usize,
    started_at: u64,
    final_ms: Option<u64>,
    /// Wrong letters and the time their flag clears
    wrong: Vec<(char, u64)>,
}

impl LetterGame {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rounds_started: 0,
            phase: RoundPhase::NotStarted,
            order: ALPHABET.to_vec(),
            index: 0,
            started_at: 0,
            final_ms: None,
            wrong: Vec::new(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Start a round. Only valid before the first round or after one finished.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.phase == RoundPhase::InProgress {
            return false;
        }
        let mut rng = round_rng(self.seed, self.rounds_started);
        self.rounds_started += 1;
        self.order = ALPHABET.to_vec();
        self.order.shuffle(&mut rng);
        self.index = 0;
        self.started_at = now_ms;
        self.final_ms = None;
        self.wrong.clear();
        self.phase = RoundPhase::InProgress;
        info!("Letter round {} started", self.rounds_started);
        true
    }

    /// Letter the player must press next
    pub fn target(&self) -> Option<char> {
        match self.phase {
            RoundPhase::InProgress => self.order.get(self.index).copied(),
            _ => None,
        }
    }

    pub fn order(&self) -> &[char] {
        &self.order
    }

    pub fn correct_count(&self) -> usize {
        self.index
    }

    pub fn press(&mut self, key: char, now_ms: u64) -> PressResult {
        self.expire_wrong(now_ms);
        if self.phase != RoundPhase::InProgress || !key.is_ascii_alphabetic() {
            return PressResult::Ignored;
        }
        let key = key.to_ascii_uppercase();
        if Some(key) != self.target() {
            debug!("Wrong letter {key}");
            self.wrong.retain(|(c, _)| *c != key);
            self.wrong.push((key, now_ms + WRONG_PRESS_MS));
            return PressResult::Wrong;
        }

        self.index += 1;
        if self.index < self.order.len() {
            return PressResult::Correct;
        }
        let elapsed_ms = now_ms.saturating_sub(self.started_at);
        self.final_ms = Some(elapsed_ms);
        self.phase = RoundPhase::Finished;
        info!("Letter round finished in {elapsed_ms} ms");
        PressResult::Finished { elapsed_ms }
    }

    /// Whether `key` is still flagged from a wrong press
    pub fn is_flagged(&self, key: char, now_ms: u64) -> bool {
        let key = key.to_ascii_uppercase();
        self.wrong
            .iter()
            .any(|&(c, until)| c == key && now_ms < until)
    }

    pub fn expire_wrong(&mut self, now_ms: u64) {
        self.wrong.retain(|&(_, until)| now_ms < until);
    }

    /// Running time while in progress, the frozen time once finished
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.phase {
            RoundPhase::NotStarted => 0,
            RoundPhase::InProgress => now_ms.saturating_sub(self.started_at),
            RoundPhase::Finished => self.final_ms.unwrap_or(0),
        }
    }
}

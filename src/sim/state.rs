//! Session state and core simulation types
//!
//! A `Session` is a plain value: the frame step takes it by `&mut` and
//! nothing else holds game state.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::level::{self, Level, Platform};
use super::rect::Rect;
use crate::config::SessionConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, first frame not yet run
    NotStarted,
    /// Active gameplay
    InProgress,
    /// Ran out of lives (terminal)
    GameOver,
    /// Cleared the last level (terminal)
    Won,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "NotStarted",
            GamePhase::InProgress => "InProgress",
            GamePhase::GameOver => "GameOver",
            GamePhase::Won => "Won",
        }
    }
}

/// Things that happened during a frame, for audio/effects hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    Landed,
    EnemyStomped { id: u32 },
    ActorHit { lives: u32 },
    Pitfall { lives: u32 },
    CoinCollected { id: u32 },
    BoostStarted { until: u64 },
    BoostExpired,
    /// `level` is the level that was just cleared
    LevelCleared { level: u32 },
    GameOver { score: u64 },
    Won { score: u64 },
    Quit,
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    GameOver,
    Quit,
}

/// Read-only per-frame view for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub actor: Rect,
    pub score: u64,
    pub lives: u32,
    pub coins: u32,
    pub boosted: bool,
}

/// Final numbers for the summary screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub outcome: Outcome,
    pub score: u64,
    /// Last level played
    pub level: u32,
    pub coins: u32,
    pub frames: u64,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub config: SessionConfig,
    /// 1-based; goes one past the last level when the game is won
    pub level_index: u32,
    pub actor: Actor,
    pub level: Level,
    pub phase: GamePhase,
    /// Frames simulated while in progress
    pub frame: u64,
    /// Set by a quit request; no frame runs afterwards
    pub quit_requested: bool,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let level = level::build(1).unwrap_or_else(|| Level::flat(1));
        Self {
            actor: Actor::new(config.starting_lives),
            config,
            level_index: 1,
            level,
            phase: GamePhase::NotStarted,
            frame: 0,
            quit_requested: false,
        }
    }

    /// True while frames should keep being fed to `tick`
    pub fn is_running(&self) -> bool {
        !self.phase.is_terminal() && !self.quit_requested
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.level.platforms
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            phase: self.phase,
            level: self.level.index,
            actor: self.actor.rect,
            score: self.actor.score,
            lives: self.actor.lives,
            coins: self.actor.coins_collected,
            boosted: self.actor.boost_until.is_some(),
        }
    }

    /// Final numbers once the session has ended (terminal phase or quit)
    pub fn summary(&self) -> Option<Summary> {
        let outcome = match self.phase {
            GamePhase::Won => Outcome::Won,
            GamePhase::GameOver => Outcome::GameOver,
            _ if self.quit_requested => Outcome::Quit,
            _ => return None,
        };
        Some(Summary {
            outcome,
            score: self.actor.score,
            level: self.level.index,
            coins: self.actor.coins_collected,
            frames: self.frame,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

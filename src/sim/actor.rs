//! The player-controlled physics body

use serde::{Deserialize, Serialize};

use super::collision::{self, EnemyContact, VerticalContact};
use super::level::Platform;
use super::patroller::Patroller;
use super::rect::{Entity, Rect};
use crate::consts::*;

/// Result of one actor update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorStep {
    pub vertical: VerticalContact,
    pub enemy: Option<EnemyContact>,
}

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
    /// Vertical velocity (px/frame, positive is down). Zero means grounded.
    pub vel_y: f32,
    /// Current horizontal speed (base or boosted)
    pub speed: f32,
    pub lives: u32,
    pub score: u64,
    pub coins_collected: u32,
    /// Frame at which the active speed boost ends
    #[serde(default)]
    pub boost_until: Option<u64>,
}

impl Actor {
    pub fn new(lives: u32) -> Self {
        Self {
            rect: Self::spawn_rect(),
            vel_y: 0.0,
            speed: PLAYER_SPEED,
            lives,
            score: 0,
            coins_collected: 0,
            boost_until: None,
        }
    }

    fn spawn_rect() -> Rect {
        Rect::new(SPAWN_X, SPAWN_Y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Grounded means vertical velocity was zeroed by a surface
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.vel_y == 0.0
    }

    /// Start a jump if grounded; airborne requests are dropped
    pub fn jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.vel_y = JUMP_VELOCITY;
        true
    }

    /// Back to the spawn point, at rest
    pub fn respawn(&mut self) {
        self.rect = Self::spawn_rect();
        self.vel_y = 0.0;
    }

    /// Remove one life, never going below zero. Returns lives left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Speed up until `now + BOOST_DURATION_FRAMES`; a second star extends it
    pub fn start_boost(&mut self, now: u64) {
        self.speed = PLAYER_SPEED * BOOST_MULTIPLIER;
        self.boost_until = Some(now + BOOST_DURATION_FRAMES);
    }

    /// Drop the boost if it has run out. Returns true on the frame it expires.
    pub fn expire_boost(&mut self, now: u64) -> bool {
        match self.boost_until {
            Some(until) if now >= until => {
                self.clear_boost();
                true
            }
            _ => false,
        }
    }

    pub fn clear_boost(&mut self) {
        self.speed = PLAYER_SPEED;
        self.boost_until = None;
    }

    /// Horizontal displacement for the held keys; right wins a tie
    pub fn horizontal_delta(&self, left: bool, right: bool) -> f32 {
        if right {
            self.speed
        } else if left {
            -self.speed
        } else {
            0.0
        }
    }

    /// Advance one frame: horizontal pass, vertical pass, then enemies
    ///
    /// A stomp removes the enemy, scores, and bounces; any other enemy
    /// contact costs a life and respawns. Only the first overlapping enemy
    /// is handled per frame.
    pub fn update(
        &mut self,
        left: bool,
        right: bool,
        platforms: &[Platform],
        enemies: &mut Vec<Patroller>,
    ) -> ActorStep {
        let dx = self.horizontal_delta(left, right);
        collision::resolve_horizontal(&mut self.rect, dx, platforms);
        let vertical = collision::resolve_vertical(&mut self.rect, &mut self.vel_y, platforms);

        let enemy = collision::enemy_contact(&self.rect, self.vel_y, enemies);
        match enemy {
            Some(EnemyContact::Stomp { index, id }) => {
                enemies.remove(index);
                self.score += STOMP_SCORE;
                self.vel_y = JUMP_VELOCITY;
                log::debug!("Stomped enemy {}", id);
            }
            Some(EnemyContact::Hit { id, .. }) => {
                let lives = self.lose_life();
                self.respawn();
                log::debug!("Hit by enemy {}, {} lives left", id, lives);
            }
            None => {}
        }

        ActorStep { vertical, enemy }
    }
}

impl Entity for Actor {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

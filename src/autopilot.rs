//! Demo autopilot
//!
//! Plays the game from a `Session` snapshot: heads for the nearest remaining
//! coin (then the star), climbs toward targets above it by jumping onto the
//! next ledge from the side, and throws in the occasional random hop so runs
//! with different seeds diverge. Same seed and same session give the same
//! inputs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::CompletionPolicy;
use crate::consts::*;
use crate::sim::{Platform, Session, TickInput};

/// Horizontal distance to a ledge at which the autopilot jumps for it
const LEDGE_JUMP_DISTANCE: f32 = 40.0;
/// Dead zone around the target's x
const ARRIVE_DISTANCE: f32 = 4.0;
/// Chance per grounded frame of a random hop
const HOP_CHANCE: f64 = 0.01;
/// Frames pushing without moving before forcing a jump
const STUCK_FRAMES: u32 = 3;

/// Seeded input generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    last_x: f32,
    stuck_frames: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_x: f32::NAN,
            stuck_frames: 0,
        }
    }

    /// Where the autopilot wants to go next
    pub fn target(session: &Session) -> Option<Vec2> {
        let from = session.actor.rect.center();
        let nearest = |points: &mut dyn Iterator<Item = Vec2>| {
            points.min_by(|a, b| {
                a.distance_squared(from)
                    .partial_cmp(&b.distance_squared(from))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        };

        let level = &session.level;
        nearest(&mut level.coins.iter().map(|c| c.rect.center()))
            .or_else(|| match session.config.completion {
                // Stars only boost; the enemies still have to go
                CompletionPolicy::ClearAll => {
                    nearest(&mut level.enemies.iter().map(|e| e.rect.center()))
                }
                CompletionPolicy::AdvanceOnPickup => None,
            })
            .or_else(|| nearest(&mut level.advance.iter().map(|s| s.rect.center())))
    }

    /// The ledge to climb onto on the way to `target`, if it is above us
    fn stepping_stone<'a>(session: &'a Session, target: Vec2) -> Option<&'a Platform> {
        let body = session.actor.rect;
        if target.y >= body.top() {
            return None;
        }
        let feet = body.bottom();
        let reach = crate::jump_height();
        session
            .platforms()
            .iter()
            .filter(|p| p.rect.top() < feet && feet - p.rect.top() <= reach)
            .min_by(|a, b| {
                let da = (a.rect.center().x - target.x).abs();
                let db = (b.rect.center().x - target.x).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Decide this frame's input
    pub fn next_input(&mut self, session: &Session) -> TickInput {
        let Some(target) = Self::target(session) else {
            return TickInput::default();
        };

        let actor = &session.actor;
        let body = actor.rect;
        let center = body.center();
        let grounded = actor.is_grounded();

        let (aim_x, mut jump) = match Self::stepping_stone(session, target) {
            Some(ledge) => {
                let ledge = ledge.rect;
                let under = body.right() > ledge.left() && body.left() < ledge.right();
                if under && grounded {
                    // Walk out to the nearer side before jumping
                    let out_left = ledge.left() - PLAYER_WIDTH;
                    let out_right = ledge.right() + PLAYER_WIDTH;
                    let aim = if (center.x - out_left).abs() <= (center.x - out_right).abs() {
                        out_left
                    } else {
                        out_right
                    };
                    (aim, false)
                } else {
                    let gap = (ledge.left() - body.right()).max(body.left() - ledge.right());
                    (ledge.center().x, grounded && gap < LEDGE_JUMP_DISTANCE)
                }
            }
            None => (target.x, grounded && target.y < body.top() && (target.x - center.x).abs() < PLAYER_WIDTH),
        };

        let dx = aim_x - center.x;
        let right = dx > ARRIVE_DISTANCE;
        let left = dx < -ARRIVE_DISTANCE;

        let moved = (body.x - self.last_x).abs() > f32::EPSILON;
        self.stuck_frames = if (left || right) && !moved {
            self.stuck_frames + 1
        } else {
            0
        };
        self.last_x = body.x;

        if grounded && (self.stuck_frames >= STUCK_FRAMES || self.rng.random_bool(HOP_CHANCE)) {
            jump = true;
        }

        TickInput {
            left,
            right,
            jump,
            quit: false,
        }
    }
}

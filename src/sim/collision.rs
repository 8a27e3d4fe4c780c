//! Axis-separated collision resolution
//!
//! Horizontal and vertical motion are resolved in two independent passes so
//! the actor can't slip diagonally through a platform corner. Platforms are
//! visited in iteration order and each intersecting one snaps the actor; when
//! several overlap at once the first one in the list wins for that axis, not
//! the nearest.

use super::level::Platform;
use super::patroller::Patroller;
use super::rect::Rect;
use crate::consts::*;

/// What the vertical pass ran into this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// Still airborne (or no vertical motion was blocked)
    None,
    /// Came down onto a platform top
    Landed,
    /// Hit a platform underside or the top of the screen
    Ceiling,
}

/// Outcome of touching an enemy (`index` into the enemy list, `id` of the enemy)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    /// Fell onto the enemy's top
    Stomp { index: usize, id: u32 },
    /// Any other overlap
    Hit { index: usize, id: u32 },
}

/// Move `rect` by `dx` and push it out of any platform it ran into, then keep
/// it on screen.
pub fn resolve_horizontal(rect: &mut Rect, dx: f32, platforms: &[Platform]) {
    rect.x += dx;

    for platform in platforms {
        if !rect.intersects(&platform.rect) {
            continue;
        }
        if dx > 0.0 {
            rect.set_right(platform.rect.left());
        } else if dx < 0.0 {
            rect.set_left(platform.rect.right());
        }
    }

    rect.clamp_horizontal(SCREEN_WIDTH);
}

/// Apply gravity, move `rect` by the new vertical velocity, and snap it to
/// the surface it hit.
///
/// Gravity is added every frame, grounded or not: a resting actor sinks
/// slightly into its platform and is snapped back out, which is what leaves
/// `vel_y` at exactly zero. The bottom of the screen is left open; falling
/// past it is the caller's pitfall check.
pub fn resolve_vertical(rect: &mut Rect, vel_y: &mut f32, platforms: &[Platform]) -> VerticalContact {
    *vel_y += GRAVITY;
    rect.y += *vel_y;

    let mut contact = VerticalContact::None;
    for platform in platforms {
        if !rect.intersects(&platform.rect) {
            continue;
        }
        if *vel_y > 0.0 {
            rect.set_bottom(platform.rect.top());
            *vel_y = 0.0;
            contact = VerticalContact::Landed;
        } else if *vel_y < 0.0 {
            rect.set_top(platform.rect.bottom());
            *vel_y = 0.0;
            contact = VerticalContact::Ceiling;
        }
    }

    if rect.top() < 0.0 || (rect.top() == 0.0 && *vel_y < 0.0) {
        rect.set_top(0.0);
        *vel_y = 0.0;
        contact = VerticalContact::Ceiling;
    }

    contact
}

/// True when a falling body's bottom edge is within `STOMP_TOLERANCE` of the
/// enemy's top edge (inclusive).
#[inline]
pub fn is_stomp(body: &Rect, vel_y: f32, enemy: &Rect) -> bool {
    vel_y > 0.0 && body.bottom() - enemy.top() <= STOMP_TOLERANCE
}

/// Classify contact with the first enemy overlapping `body`
pub fn enemy_contact(body: &Rect, vel_y: f32, enemies: &[Patroller]) -> Option<EnemyContact> {
    let index = enemies.iter().position(|e| body.intersects(&e.rect))?;
    let enemy = &enemies[index];
    if is_stomp(body, vel_y, &enemy.rect) {
        Some(EnemyContact::Stomp { index, id: enemy.id })
    } else {
        Some(EnemyContact::Hit { index, id: enemy.id })
    }
}

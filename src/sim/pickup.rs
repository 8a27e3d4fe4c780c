//! Collectible pickups

use serde::{Deserialize, Serialize};

use super::rect::{Entity, Rect};
use crate::consts::*;

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Adds to score and coin count
    Coin,
    /// The level's advance pickup
    Star,
}

impl PickupKind {
    /// Side length of the pickup's square body
    pub fn size(self) -> f32 {
        match self {
            PickupKind::Coin => COIN_SIZE,
            PickupKind::Star => STAR_SIZE,
        }
    }
}

/// A static pickup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub rect: Rect,
}

impl Pickup {
    pub fn new(id: u32, kind: PickupKind, x: f32, y: f32) -> Self {
        let size = kind.size();
        Self {
            id,
            kind,
            rect: Rect::new(x, y, size, size),
        }
    }
}

impl Entity for Pickup {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Remove every pickup overlapping `collector`, returning what was taken
///
/// Remaining pickups keep their order.
pub fn collect_overlapping(pickups: &mut Vec<Pickup>, collector: &impl Entity) -> Vec<Pickup> {
    let bounds = collector.bounds();
    let (taken, kept): (Vec<_>, Vec<_>) = pickups
        .drain(..)
        .partition(|p| p.rect.intersects(&bounds));
    *pickups = kept;
    taken
}

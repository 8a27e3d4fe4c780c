//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only (no wall clock)
//! - Stable iteration order (platforms and entities in layout order)
//! - No rendering, audio, or platform dependencies

pub mod actor;
pub mod collision;
pub mod level;
pub mod patroller;
pub mod pickup;
pub mod rect;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorStep};
pub use collision::{EnemyContact, VerticalContact, enemy_contact, is_stomp};
pub use level::{Level, Platform, build as build_level};
pub use patroller::{Direction, Patroller};
pub use pickup::{Pickup, PickupKind};
pub use rect::{Entity, Rect};
pub use state::{FrameSnapshot, GameEvent, GamePhase, Outcome, Session, Summary};
pub use tick::{TickInput, tick};

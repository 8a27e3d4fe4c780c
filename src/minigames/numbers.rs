//! Number clicking game
//!
//! Ten bubbles numbered 1 to 10 are scattered over the field without
//! overlapping. Clicking the active bubble pops it; popped bubbles fade out
//! over a few frames and are then removed.

use glam::Vec2;
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{RoundPhase, round_rng};

pub const FIELD_WIDTH: f32 = 1280.0;
pub const FIELD_HEIGHT: f32 = 960.0;
pub const BUBBLE_RADIUS: f32 = 40.0;
pub const BUBBLE_COUNT: u32 = 10;
/// Gap to the field edge; the vertical band is inset further for the HUD
const MARGIN: i32 = 50;
const HUD_INSET: i32 = 100;
const MIN_SPACING: f32 = BUBBLE_RADIUS * 2.0 + 5.0;
const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;
const FADE_STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub number: u32,
    pub center: Vec2,
    /// 255 while live; counts down once popped
    pub alpha: u8,
    pub fading: bool,
}

impl Bubble {
    fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= BUBBLE_RADIUS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    Popped { number: u32 },
    /// The tenth bubble; carries the round time
    Finished { elapsed_ms: u64 },
    Missed,
    Ignored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberGame {
    seed: u64,
    rounds_started: u64,
    phase: RoundPhase,
    bubbles: Vec<Bubble>,
    active: u32,
    started_at: u64,
    final_ms: Option<u64>,
}

/// Scatter `BUBBLE_COUNT` bubbles, keeping centers `MIN_SPACING` apart.
/// A bubble that finds no free spot keeps its last candidate.
fn place_bubbles(rng: &mut impl Rng) -> Vec<Bubble> {
    let r = BUBBLE_RADIUS as i32;
    let x_range = (MARGIN + r)..=(FIELD_WIDTH as i32 - MARGIN - r);
    let y_range = (MARGIN + r + HUD_INSET)..=(FIELD_HEIGHT as i32 - MARGIN - r - HUD_INSET);

    let mut bubbles: Vec<Bubble> = Vec::with_capacity(BUBBLE_COUNT as usize);
    for number in 1..=BUBBLE_COUNT {
        let mut center = Vec2::ZERO;
        let mut placed = false;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            center = Vec2::new(
                rng.random_range(x_range.clone()) as f32,
                rng.random_range(y_range.clone()) as f32,
            );
            if bubbles
                .iter()
                .all(|b| b.center.distance(center) >= MIN_SPACING)
            {
                placed = true;
                break;
            }
        }
        if !placed {
            warn!("No free spot for bubble {number}, overlapping");
        }
        bubbles.push(Bubble {
            number,
            center,
            alpha: u8::MAX,
            fading: false,
        });
    }
    bubbles
}

impl NumberGame {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rounds_started: 0,
            phase: RoundPhase::NotStarted,
            bubbles: Vec::new(),
            active: 1,
            started_at: 0,
            final_ms: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Number that must be clicked next
    pub fn active(&self) -> u32 {
        self.active
    }

    pub fn popped_count(&self) -> u32 {
        self.active - 1
    }

    /// Start a round; only from `NotStarted` (see `play_again`)
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.phase != RoundPhase::NotStarted {
            return false;
        }
        let mut rng = round_rng(self.seed, self.rounds_started);
        self.rounds_started += 1;
        self.bubbles = place_bubbles(&mut rng);
        self.active = 1;
        self.started_at = now_ms;
        self.final_ms = None;
        self.phase = RoundPhase::InProgress;
        info!("Number round {} started", self.rounds_started);
        true
    }

    pub fn click(&mut self, point: Vec2, now_ms: u64) -> ClickResult {
        if self.phase != RoundPhase::InProgress {
            return ClickResult::Ignored;
        }
        let active = self.active;
        let Some(bubble) = self
            .bubbles
            .iter_mut()
            .find(|b| b.number == active && !b.fading)
        else {
            return ClickResult::Missed;
        };
        if !bubble.contains(point) {
            return ClickResult::Missed;
        }

        bubble.fading = true;
        if active < BUBBLE_COUNT {
            self.active += 1;
            return ClickResult::Popped { number: active };
        }
        self.active += 1;
        let elapsed_ms = now_ms.saturating_sub(self.started_at);
        self.final_ms = Some(elapsed_ms);
        self.phase = RoundPhase::Finished;
        info!("Number round finished in {elapsed_ms} ms");
        ClickResult::Finished { elapsed_ms }
    }

    /// Per-frame fade of popped bubbles
    pub fn update(&mut self) {
        for bubble in self.bubbles.iter_mut().filter(|b| b.fading) {
            bubble.alpha = bubble.alpha.saturating_sub(FADE_STEP);
        }
        self.bubbles.retain(|b| !b.fading || b.alpha > 0);
    }

    /// Back to `NotStarted` after a finished round
    pub fn play_again(&mut self) -> bool {
        if self.phase != RoundPhase::Finished {
            return false;
        }
        self.phase = RoundPhase::NotStarted;
        self.bubbles.clear();
        self.active = 1;
        self.final_ms = None;
        true
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.phase {
            RoundPhase::NotStarted => 0,
            RoundPhase::InProgress => now_ms.saturating_sub(self.started_at),
            RoundPhase::Finished => self.final_ms.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(game: &NumberGame, number: u32) -> Vec2 {
        game.bubbles()
            .iter()
            .find(|b| b.number == number)
            .unwrap()
            .center
    }

    fn started(seed: u64) -> NumberGame {
        let mut game = NumberGame::new(seed);
        assert!(game.start(1000));
        game
    }

    #[test]
    fn test_bubbles_inside_band_and_spaced() {
        for seed in 0..20 {
            let game = started(seed);
            let bubbles = game.bubbles();
            assert_eq!(bubbles.len(), BUBBLE_COUNT as usize);
            for (i, a) in bubbles.iter().enumerate() {
                assert_eq!(a.number, i as u32 + 1);
                assert!(a.center.x >= 90.0 && a.center.x <= 1190.0);
                assert!(a.center.y >= 190.0 && a.center.y <= 770.0);
                for b in &bubbles[i + 1..] {
                    assert!(a.center.distance(b.center) >= MIN_SPACING);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(started(7).bubbles(), started(7).bubbles());
    }

    #[test]
    fn test_click_before_start_is_ignored() {
        let mut game = NumberGame::new(1);
        assert_eq!(game.click(Vec2::new(100.0, 200.0), 0), ClickResult::Ignored);
    }

    #[test]
    fn test_only_active_bubble_pops() {
        let mut game = started(3);
        let second = center_of(&game, 2);
        assert_eq!(game.click(second, 1100), ClickResult::Missed);

        let first = center_of(&game, 1);
        let edge = first + Vec2::new(BUBBLE_RADIUS, 0.0);
        assert_eq!(game.click(edge, 1200), ClickResult::Popped { number: 1 });
        assert_eq!(game.active(), 2);
        assert_eq!(game.popped_count(), 1);
    }

    #[test]
    fn test_click_outside_radius_misses() {
        let mut game = started(3);
        let first = center_of(&game, 1);
        let outside = first + Vec2::new(BUBBLE_RADIUS + 1.0, 0.0);
        assert_eq!(game.click(outside, 1100), ClickResult::Missed);
        assert_eq!(game.active(), 1);
    }

    #[test]
    fn test_popped_bubble_fades_then_disappears() {
        let mut game = started(4);
        let first = center_of(&game, 1);
        game.click(first, 1100);

        game.update();
        let bubble = game.bubbles().iter().find(|b| b.number == 1).unwrap();
        assert!(bubble.fading);
        assert_eq!(bubble.alpha, 250);

        for _ in 0..50 {
            game.update();
        }
        assert!(game.bubbles().iter().all(|b| b.number != 1));
        assert_eq!(game.bubbles().len(), 9);
        assert!(game.bubbles().iter().all(|b| b.alpha == u8::MAX));
    }

    #[test]
    fn test_tenth_pop_finishes_round() {
        let mut game = started(5);
        for number in 1..BUBBLE_COUNT {
            let center = center_of(&game, number);
            assert_eq!(game.click(center, 2000), ClickResult::Popped { number });
        }
        let last = center_of(&game, BUBBLE_COUNT);
        assert_eq!(
            game.click(last, 4500),
            ClickResult::Finished { elapsed_ms: 3500 }
        );
        assert_eq!(game.phase(), RoundPhase::Finished);
        assert_eq!(game.elapsed_ms(99_999), 3500);
        assert_eq!(game.click(last, 5000), ClickResult::Ignored);
    }

    #[test]
    fn test_play_again_resets_to_not_started() {
        let mut game = started(6);
        assert!(!game.play_again());
        assert!(!game.start(0));

        for number in 1..=BUBBLE_COUNT {
            let center = center_of(&game, number);
            game.click(center, 2000);
        }
        assert!(game.play_again());
        assert_eq!(game.phase(), RoundPhase::NotStarted);
        assert!(game.bubbles().is_empty());
        assert_eq!(game.active(), 1);

        let first_layout: Vec<Vec2> = started(6).bubbles().iter().map(|b| b.center).collect();
        assert!(game.start(10_000));
        let second_layout: Vec<Vec2> = game.bubbles().iter().map(|b| b.center).collect();
        assert_ne!(first_layout, second_layout);
    }
}

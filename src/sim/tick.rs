//! Fixed-cadence frame step
//!
//! One call to `tick` is one atomic frame: input snapshot, actor physics and
//! collision, patrol motion, then pickup/pitfall/level-clear transitions.

use super::collision::{EnemyContact, VerticalContact};
use super::level;
use super::pickup::collect_overlapping;
use super::state::{GameEvent, GamePhase, Session};
use crate::config::CompletionPolicy;
use crate::consts::*;

/// Input for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left key held this frame
    pub left: bool,
    /// Right key held this frame
    pub right: bool,
    /// Jump pressed this frame (not queued if airborne)
    pub jump: bool,
    /// Quit requested
    pub quit: bool,
}

/// Advance the session by one frame, returning what happened
///
/// Terminal sessions are left untouched. A quit request is honored before any
/// physics runs, so the last committed frame stays intact.
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    if input.quit {
        if !session.quit_requested {
            log::info!("Quit requested at frame {}", session.frame);
        }
        session.quit_requested = true;
        return vec![GameEvent::Quit];
    }

    if !session.is_running() {
        return Vec::new();
    }

    let mut events = Vec::new();

    if session.phase == GamePhase::NotStarted {
        session.phase = GamePhase::InProgress;
        log::info!("Session started on level {}", session.level_index);
        events.push(GameEvent::Started);
    }

    session.frame += 1;
    let now = session.frame;

    if session.actor.expire_boost(now) {
        events.push(GameEvent::BoostExpired);
    }

    if input.jump && session.actor.jump() {
        events.push(GameEvent::Jumped);
    }

    let was_falling = session.actor.vel_y > 0.0;
    let step = session.actor.update(
        input.left,
        input.right,
        &session.level.platforms,
        &mut session.level.enemies,
    );

    if step.vertical == VerticalContact::Landed && was_falling {
        events.push(GameEvent::Landed);
    }

    match step.enemy {
        Some(EnemyContact::Stomp { id, .. }) => {
            events.push(GameEvent::EnemyStomped { id });
        }
        Some(EnemyContact::Hit { .. }) => {
            let lives = session.actor.lives;
            events.push(GameEvent::ActorHit { lives });
            if lives == 0 {
                game_over(session, &mut events);
                return events;
            }
        }
        None => {}
    }

    for enemy in &mut session.level.enemies {
        enemy.update();
    }

    // Pickups
    for coin in collect_overlapping(&mut session.level.coins, &session.actor) {
        session.actor.coins_collected += 1;
        session.actor.score += COIN_SCORE;
        events.push(GameEvent::CoinCollected { id: coin.id });
    }

    let mut cleared = false;
    if !collect_overlapping(&mut session.level.advance, &session.actor).is_empty() {
        match session.config.completion {
            CompletionPolicy::AdvanceOnPickup => cleared = true,
            CompletionPolicy::ClearAll => {
                session.actor.start_boost(now);
                events.push(GameEvent::BoostStarted {
                    until: now + BOOST_DURATION_FRAMES,
                });
            }
        }
    }

    // Pitfall
    if session.actor.rect.top() >= SCREEN_HEIGHT {
        let lives = session.actor.lose_life();
        session.actor.respawn();
        log::debug!("Pitfall, {} lives left", lives);
        events.push(GameEvent::Pitfall { lives });
        if lives == 0 {
            game_over(session, &mut events);
            return events;
        }
    }

    if session.config.completion == CompletionPolicy::ClearAll && session.level.is_cleared_out() {
        cleared = true;
    }

    if cleared {
        advance_level(session, &mut events);
    }

    events
}

fn game_over(session: &mut Session, events: &mut Vec<GameEvent>) {
    session.phase = GamePhase::GameOver;
    log::info!(
        "Game over on level {} with score {}",
        session.level_index,
        session.actor.score
    );
    events.push(GameEvent::GameOver {
        score: session.actor.score,
    });
}

/// Move to the next level, or finish the game after the last one
fn advance_level(session: &mut Session, events: &mut Vec<GameEvent>) {
    let cleared = session.level_index;
    events.push(GameEvent::LevelCleared { level: cleared });
    session.level_index += 1;

    match level::build(session.level_index) {
        Some(next) => {
            log::info!("Level {} cleared, starting level {}", cleared, session.level_index);
            session.level = next;
            session.actor.respawn();
            session.actor.clear_boost();
        }
        None => {
            session.phase = GamePhase::Won;
            log::info!("All levels cleared with score {}", session.actor.score);
            events.push(GameEvent::Won {
                score: session.actor.score,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::sim::level::Level;
    use crate::sim::patroller::{Direction, Patroller};
    use crate::sim::pickup::{Pickup, PickupKind};

    fn idle() -> TickInput {
        TickInput::default()
    }

    /// Put the actor at rest on the ledge holding the current level's star
    fn stand_on_star(session: &mut Session) {
        let star = session.level.advance[0].rect;
        let floor = session
            .level
            .platforms
            .iter()
            .filter(|p| {
                p.rect.left() <= star.left()
                    && p.rect.right() >= star.left() + PLAYER_WIDTH
                    && p.rect.top() >= star.bottom()
            })
            .map(|p| p.rect.top())
            .fold(f32::INFINITY, f32::min);
        session.actor.rect.x = star.x;
        session.actor.rect.set_bottom(floor);
        session.actor.vel_y = 0.0;
    }

    /// Session on a ground-only level with the actor standing at `x`
    fn flat_session(config: SessionConfig, x: f32) -> Session {
        let mut session = Session::new(config);
        session.level = Level::flat(1);
        session.actor.rect.x = x;
        session.actor.rect.set_bottom(GROUND_Y);
        session
    }

    #[test]
    fn test_first_tick_starts_session() {
        let mut session = Session::default();
        let events = tick(&mut session, &idle());
        assert_eq!(events.first(), Some(&GameEvent::Started));
        assert_eq!(session.phase, GamePhase::InProgress);
        assert_eq!(session.frame, 1);

        let events = tick(&mut session, &idle());
        assert!(!events.contains(&GameEvent::Started));
    }

    #[test]
    fn test_quit_commits_no_partial_frame() {
        let mut session = Session::default();
        for _ in 0..5 {
            tick(&mut session, &idle());
        }
        let before = session.snapshot();

        let quit = TickInput {
            quit: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut session, &quit), vec![GameEvent::Quit]);
        assert!(!session.is_running());

        let after = session.snapshot();
        assert_eq!(after.frame, before.frame);
        assert_eq!(after.actor, before.actor);

        // Nothing runs after a quit
        assert!(tick(&mut session, &idle()).is_empty());
        assert_eq!(session.frame, before.frame);
        assert_eq!(session.summary().unwrap().outcome, crate::sim::Outcome::Quit);
    }

    #[test]
    fn test_patrollers_move_every_frame() {
        let mut session = Session::default();
        let start: Vec<f32> = session.level.enemies.iter().map(|e| e.rect.x).collect();
        tick(&mut session, &idle());
        for (enemy, x) in session.level.enemies.iter().zip(start) {
            assert_eq!(enemy.rect.x, x + PATROLLER_SPEED);
        }
    }

    #[test]
    fn test_coin_collection() {
        let mut session = flat_session(SessionConfig::default(), 50.0);
        session
            .level
            .coins
            .push(Pickup::new(9, PickupKind::Coin, 55.0, GROUND_Y - 30.0));

        let events = tick(&mut session, &idle());
        assert!(events.contains(&GameEvent::CoinCollected { id: 9 }));
        assert!(session.level.coins.is_empty());
        assert_eq!(session.actor.coins_collected, 1);
        assert_eq!(session.actor.score, COIN_SCORE);
    }

    #[test]
    fn test_stomp_reports_enemy() {
        let mut session = flat_session(SessionConfig::default(), 100.0);
        session
            .level
            .enemies
            .push(Patroller::new(4, 100.0, GROUND_Y - PATROLLER_SIZE));
        session.actor.rect.set_bottom(GROUND_Y - PATROLLER_SIZE - 2.0);
        session.actor.vel_y = 3.0;

        let events = tick(&mut session, &idle());
        assert!(events.contains(&GameEvent::EnemyStomped { id: 4 }));
        assert!(session.level.enemies.is_empty());
        assert_eq!(session.actor.score, STOMP_SCORE);
        assert_eq!(session.actor.vel_y, JUMP_VELOCITY);
    }

    #[test]
    fn test_enemy_hit_on_last_life_is_game_over() {
        let config = SessionConfig {
            starting_lives: 1,
            ..Default::default()
        };
        let mut session = flat_session(config, 50.0);
        let mut enemy = Patroller::new(4, 70.0, GROUND_Y - PATROLLER_SIZE);
        enemy.direction = Direction::Left;
        session.level.enemies.push(enemy);

        let events = tick(&mut session, &idle());
        assert!(events.contains(&GameEvent::ActorHit { lives: 0 }));
        assert!(events.contains(&GameEvent::GameOver { score: 0 }));
        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(session.level.enemies.len(), 1);
    }

    #[test]
    fn test_pitfall_life_loss_and_game_over() {
        let mut session = Session::default();
        session.level = Level::flat(1);
        session.level.platforms.clear();

        for expected_lives in (0..STARTING_LIVES).rev() {
            let mut fell = false;
            for _ in 0..100 {
                let events = tick(&mut session, &idle());
                if events.contains(&GameEvent::Pitfall { lives: expected_lives }) {
                    fell = true;
                    break;
                }
            }
            assert!(fell, "expected pitfall down to {expected_lives} lives");
            assert_eq!(session.actor.lives, expected_lives);
            assert_eq!((session.actor.rect.x, session.actor.rect.y), (SPAWN_X, SPAWN_Y));
            assert_eq!(session.actor.vel_y, 0.0);
        }

        assert_eq!(session.phase, GamePhase::GameOver);
        let frozen = session.snapshot();
        for _ in 0..10 {
            assert!(tick(&mut session, &idle()).is_empty());
        }
        assert_eq!(session.snapshot().actor, frozen.actor);
        assert_eq!(session.frame, frozen.frame);
        assert_eq!(session.summary().unwrap().outcome, crate::sim::Outcome::GameOver);
    }

    #[test]
    fn test_level_progression_to_win() {
        let mut session = Session::default();
        tick(&mut session, &idle());

        for index in 1..=MAX_LEVEL {
            assert_eq!(session.level_index, index);
            stand_on_star(&mut session);
            let events = tick(&mut session, &idle());
            assert!(events.contains(&GameEvent::LevelCleared { level: index }));

            if index < MAX_LEVEL {
                let expected = level::build(index + 1).unwrap();
                assert_eq!(session.level_index, index + 1);
                assert_eq!(session.level.index, index + 1);
                assert_eq!(session.level.platforms, expected.platforms);
                assert_eq!(session.level.enemies.len(), expected.enemies.len());
                assert_eq!(session.level.coins.len(), expected.coins.len());
                assert_eq!(session.level.advance.len(), 1);
                assert_eq!((session.actor.rect.x, session.actor.rect.y), (SPAWN_X, SPAWN_Y));
            } else {
                assert!(events.contains(&GameEvent::Won { score: session.actor.score }));
            }
        }

        assert_eq!(session.phase, GamePhase::Won);
        let frame = session.frame;
        let rect = session.actor.rect;
        let held = TickInput {
            right: true,
            jump: true,
            ..Default::default()
        };
        assert!(tick(&mut session, &held).is_empty());
        assert_eq!(session.frame, frame);
        assert_eq!(session.actor.rect, rect);

        let summary = session.summary().unwrap();
        assert_eq!(summary.outcome, crate::sim::Outcome::Won);
        assert_eq!(summary.level, MAX_LEVEL);
    }

    #[test]
    fn test_clear_all_star_boosts_instead_of_advancing() {
        let config = SessionConfig {
            completion: CompletionPolicy::ClearAll,
            ..Default::default()
        };
        let mut session = flat_session(config, 50.0);
        session
            .level
            .coins
            .push(Pickup::new(1, PickupKind::Coin, 700.0, GROUND_Y - 30.0));
        session
            .level
            .advance
            .push(Pickup::new(2, PickupKind::Star, 55.0, GROUND_Y - 30.0));

        let events = tick(&mut session, &idle());
        assert!(events.contains(&GameEvent::BoostStarted {
            until: 1 + BOOST_DURATION_FRAMES
        }));
        assert_eq!(session.level_index, 1);
        assert_eq!(session.actor.speed, PLAYER_SPEED * BOOST_MULTIPLIER);

        // Boosted walk covers the boosted distance
        let x = session.actor.rect.x;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut session, &right);
        assert_eq!(session.actor.rect.x, x + PLAYER_SPEED * BOOST_MULTIPLIER);

        // Expires exactly on its frame
        let mut expired_at = None;
        for _ in 0..BOOST_DURATION_FRAMES {
            if tick(&mut session, &idle()).contains(&GameEvent::BoostExpired) {
                expired_at = Some(session.frame);
                break;
            }
        }
        assert_eq!(expired_at, Some(1 + BOOST_DURATION_FRAMES));
        assert_eq!(session.actor.speed, PLAYER_SPEED);

        // Last coin gone: the level clears
        session.level.coins.clear();
        let events = tick(&mut session, &idle());
        assert!(events.contains(&GameEvent::LevelCleared { level: 1 }));
        assert_eq!(session.level_index, 2);
    }

    #[test]
    fn test_advance_on_pickup_ignores_remaining_coins() {
        let mut session = Session::default();
        assert!(!session.level.coins.is_empty());
        stand_on_star(&mut session);
        tick(&mut session, &idle());
        assert_eq!(session.level_index, 2);
    }

    #[test]
    fn test_determinism() {
        // Two sessions fed the same inputs end up identical
        let mut a = Session::default();
        let mut b = Session::default();

        for frame in 0..600u32 {
            let input = TickInput {
                right: frame % 200 < 150,
                left: frame % 200 >= 170,
                jump: frame % 37 == 0,
                quit: false,
            };
            let ea = tick(&mut a, &input);
            let eb = tick(&mut b, &input);
            assert_eq!(ea, eb);
        }

        assert_eq!(a.frame, b.frame);
        assert_eq!(a.actor.rect, b.actor.rect);
        assert_eq!(a.actor.score, b.actor.score);
        assert_eq!(a.level_index, b.level_index);
    }
}

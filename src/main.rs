//! Platform Hop entry point
//!
//! Native headless runner: loads an optional session config, lets the
//! autopilot play until the session ends or the frame cap is hit, and prints
//! the final summary as JSON. Drawing, audio, and frame pacing belong to a
//! presentation layer and aren't part of this binary.
//!
//! Usage: `platform-hop [CONFIG.json] [--policy NAME] [--print-config]
//! [--game letters|numbers]`

use std::path::Path;
use std::process::ExitCode;

use platform_hop::minigames::{ClickResult, LetterGame, NumberGame, PressResult};
use platform_hop::sim::{GameEvent, Session, TickInput, tick};
use platform_hop::{Autopilot, CompletionPolicy, SessionConfig};

#[derive(Debug, Default)]
struct Args {
    config_path: Option<String>,
    policy: Option<CompletionPolicy>,
    print_config: bool,
    game: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--policy" => {
                let name = iter.next().ok_or("--policy needs a value")?;
                let policy = CompletionPolicy::from_str(&name)
                    .ok_or_else(|| format!("unknown completion policy '{}'", name))?;
                args.policy = Some(policy);
            }
            "--print-config" => args.print_config = true,
            "--game" => args.game = Some(iter.next().ok_or("--game needs a value")?),
            flag if flag.starts_with("--") => return Err(format!("unknown option '{}'", flag)),
            _ => args.config_path = Some(arg),
        }
    }
    Ok(args)
}

/// Headless letter round with an occasional wrong key
fn run_letters(seed: u64) {
    let mut game = LetterGame::new(seed);
    let mut now = 0;
    game.start(now);
    while let Some(target) = game.target() {
        now += 250;
        if now % 1250 == 0 {
            let slip = if target == 'Z' { 'A' } else { 'Z' };
            game.press(slip, now);
            now += 250;
        }
        if let PressResult::Finished { elapsed_ms } = game.press(target, now) {
            println!("Letters finished in {} ms", elapsed_ms);
        }
    }
}

fn run_numbers(seed: u64) {
    let mut game = NumberGame::new(seed);
    let mut now = 0;
    game.start(now);
    while let Some(bubble) = game
        .bubbles()
        .iter()
        .find(|b| b.number == game.active() && !b.fading)
        .copied()
    {
        now += 400;
        game.update();
        if let ClickResult::Finished { elapsed_ms } = game.click(bubble.center, now) {
            println!("Numbers finished in {} ms", elapsed_ms);
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Platform Hop (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut config = match &args.config_path {
        Some(path) => SessionConfig::load(Path::new(path)),
        None => SessionConfig::default(),
    };
    if let Some(policy) = args.policy {
        config.completion = policy;
    }

    if args.print_config {
        match config.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to encode config: {}", e),
        }
        return ExitCode::SUCCESS;
    }

    match args.game.as_deref() {
        None | Some("platform") => {}
        Some("letters") => {
            run_letters(config.autopilot_seed);
            return ExitCode::SUCCESS;
        }
        Some("numbers") => {
            run_numbers(config.autopilot_seed);
            return ExitCode::SUCCESS;
        }
        Some(other) => {
            eprintln!("unknown game '{}'", other);
            return ExitCode::FAILURE;
        }
    }
    log::info!(
        "Completion policy: {}, lives: {}, seed: {}",
        config.completion.as_str(),
        config.starting_lives,
        config.autopilot_seed
    );

    let max_frames = config.max_frames;
    let mut pilot = Autopilot::new(config.autopilot_seed);
    let mut session = Session::new(config);

    while session.is_running() {
        let input = if max_frames > 0 && session.frame >= max_frames {
            log::info!("Frame cap {} reached", max_frames);
            TickInput {
                quit: true,
                ..Default::default()
            }
        } else {
            pilot.next_input(&session)
        };

        for event in tick(&mut session, &input) {
            match event {
                GameEvent::LevelCleared { level } => {
                    println!("Level {} cleared (score {})", level, session.actor.score)
                }
                GameEvent::ActorHit { lives } | GameEvent::Pitfall { lives } => {
                    println!("Lost a life ({} left)", lives)
                }
                _ => log::trace!("frame {}: {:?}", session.frame, event),
            }
        }
    }

    log::info!(
        "Session ended in phase {} after {} frames",
        session.phase.as_str(),
        session.frame
    );

    match session.summary() {
        Some(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to encode summary: {}", e),
        },
        None => log::warn!("Session ended without a summary"),
    }
    ExitCode::SUCCESS
}

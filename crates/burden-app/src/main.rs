//! Headless BURDEN session driver.
//!
//! Starts a session, steers the player toward the nearest symbiote, and
//! prints a snapshot line once a second until every burden is collected.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use glam::Vec2;

use burden_app::game_loop::spawn_game_loop;
use burden_app::state::GameLoopCommand;
use burden_core::commands::PlayerCommand;
use burden_core::enums::GamePhase;
use burden_core::state::SessionSnapshot;
use burden_sim::engine::SimConfig;

const SESSION_TIMEOUT: Duration = Duration::from_secs(300);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let latest_snapshot: Arc<Mutex<Option<SessionSnapshot>>> = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(SimConfig::default(), Arc::clone(&latest_snapshot));

    if cmd_tx
        .send(GameLoopCommand::Player(PlayerCommand::StartSession))
        .is_err()
    {
        tracing::error!("game loop thread unavailable");
        return;
    }

    let started = Instant::now();
    let mut last_print = Instant::now();

    loop {
        std::thread::sleep(Duration::from_millis(50));

        let snapshot = match latest_snapshot.lock() {
            Ok(lock) => lock.clone(),
            Err(_) => break,
        };
        let Some(snapshot) = snapshot else {
            continue;
        };

        if snapshot.phase == GamePhase::Complete {
            tracing::info!(
                ticks = snapshot.time.tick,
                burdens = snapshot.player.burden_count,
                "all burdens collected"
            );
            break;
        }
        if started.elapsed() > SESSION_TIMEOUT {
            tracing::warn!("session timed out");
            break;
        }

        // Autopilot: walk at the nearest remaining symbiote.
        let direction = steer(&snapshot);
        if cmd_tx
            .send(GameLoopCommand::Player(PlayerCommand::SetMoveInput {
                direction,
            }))
            .is_err()
        {
            break;
        }

        if last_print.elapsed() >= Duration::from_secs(1) {
            last_print = Instant::now();
            match serde_json::to_string(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(error) => tracing::error!(%error, "snapshot serialization failed"),
            }
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}

/// Unit vector from the player toward the nearest symbiote root, or zero
/// when nothing is left to walk at.
fn steer(snapshot: &SessionSnapshot) -> Vec2 {
    let player = snapshot.player.position;
    snapshot
        .symbiotes
        .iter()
        .map(|view| view.position - player)
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
        .map(|to_target| to_target.normalize_or_zero())
        .unwrap_or(Vec2::ZERO)
}

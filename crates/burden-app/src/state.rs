//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use burden_core::commands::PlayerCommand;
use burden_core::state::SessionSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The game loop thread owns the engine; everything the host sees goes
/// through here:
/// - `mpsc::Sender` wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that does not exist before the loop
///   is spawned
/// - `Arc<Mutex<...>>` for the latest snapshot, shared with the thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` until the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

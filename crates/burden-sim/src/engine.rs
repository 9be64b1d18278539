//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the burden registry, and
//! the occlusion map; it processes player commands, runs all systems, and
//! produces `SessionSnapshot`s. Completely headless, enabling
//! deterministic testing.
//!
//! Two cadences drive the simulation: the logic tick (variable `dt`,
//! passed to `tick`) and a fixed-rate physics tick for line-of-sight
//! queries, derived from an accumulator over logic time.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use burden_core::commands::PlayerCommand;
use burden_core::components::MoveIntent;
use burden_core::config::SymbioteTuning;
use burden_core::constants::{PHYSICS_DT, SESSION_SYMBIOTE_COUNT};
use burden_core::enums::GamePhase;
use burden_core::events::GameEvent;
use burden_core::state::SessionSnapshot;
use burden_core::types::SimTime;

use burden_world::OcclusionMap;

use crate::registry::BurdenRegistry;
use crate::systems;
use crate::world_setup;
use crate::world_setup::SetupError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for the spawn scatter. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f32,
    /// Behavior knobs shared by every symbiote in the session.
    pub tuning: SymbioteTuning,
    /// Symbiotes spawned by StartSession.
    pub symbiote_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            tuning: SymbioteTuning::default(),
            symbiote_count: SESSION_SYMBIOTE_COUNT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f32,
    rng: ChaCha8Rng,
    tuning: SymbioteTuning,
    symbiote_count: usize,
    registry: BurdenRegistry,
    occlusion: OcclusionMap,
    next_symbiote_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    physics_accumulator: f32,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tuning: config.tuning,
            symbiote_count: config.symbiote_count,
            registry: BurdenRegistry::new(),
            occlusion: OcclusionMap::new(),
            next_symbiote_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            physics_accumulator: 0.0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one logic tick of duration `dt` and
    /// return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> SessionSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);

            // The last burden was collected.
            if self.registry.is_empty() {
                self.phase = GamePhase::Complete;
                tracing::info!(tick = self.time.tick, "session complete");
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, &self.time, self.phase, events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn registry(&self) -> &BurdenRegistry {
        &self.registry
    }

    /// Static obstacles for the line-of-sight gate.
    pub fn occlusion_mut(&mut self) -> &mut OcclusionMap {
        &mut self.occlusion
    }

    /// Spawn an additional symbiote at a chosen position. Part of the
    /// scene-bootstrap surface; requires an active session.
    pub fn spawn_symbiote(&mut self, position: Vec2) -> Result<hecs::Entity, SetupError> {
        world_setup::spawn_symbiote(
            &mut self.world,
            &mut self.registry,
            &self.tuning,
            position,
            world_setup::default_body_nodes(),
            &mut self.next_symbiote_id,
        )
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Move the player directly (for tests; gameplay goes through
    /// SetMoveInput).
    #[cfg(test)]
    pub fn set_player_position(&mut self, position: Vec2) {
        use burden_core::components::Player;
        use burden_core::types::Transform2;
        for (_entity, (_player, transform)) in
            self.world.query_mut::<(&Player, &mut Transform2)>()
        {
            transform.position = position;
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::Complete) {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SetMoveInput { direction } => {
                for (_entity, intent) in self.world.query_mut::<&mut MoveIntent>() {
                    intent.direction = direction.clamp_length_max(1.0);
                }
            }
        }
    }

    fn start_session(&mut self) {
        self.world.clear();
        self.registry.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.next_symbiote_id = 0;
        self.physics_accumulator = 0.0;

        match world_setup::setup_session(
            &mut self.world,
            &mut self.registry,
            &mut self.rng,
            &self.tuning,
            self.symbiote_count,
            &mut self.next_symbiote_id,
        ) {
            Ok(()) => {
                self.phase = GamePhase::Active;
                self.time = SimTime::default();
                tracing::info!(symbiotes = self.registry.len(), "session started");
            }
            Err(error) => {
                // Fatal configuration error: refuse to run degraded.
                self.world.clear();
                self.registry.clear();
                self.phase = GamePhase::Idle;
                tracing::error!(%error, "session setup failed");
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Player movement integration.
        systems::player::run(&mut self.world, dt);
        // 2. Symbiote state machines (consume the stale LOS slot; handle
        //    terminations from the previous tick).
        systems::symbiote::run(
            &mut self.world,
            &mut self.registry,
            &self.tuning,
            dt,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 3. Collision callbacks: flag-setting only.
        systems::collision::run(&mut self.world, &self.occlusion, &self.tuning);
        // 4. Fixed-rate physics tick: line-of-sight queries.
        if self.tuning.los_gated {
            self.physics_accumulator += dt;
            while self.physics_accumulator >= PHYSICS_DT {
                systems::los::run(&mut self.world, &self.occlusion);
                self.physics_accumulator -= PHYSICS_DT;
            }
        }
        // 5. Cleanup: expire runaway projectiles, despawn terminated.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}

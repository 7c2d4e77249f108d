//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the match context (terrain, tanks, projectiles and
//! the particle world), processes player commands, runs all systems, and
//! produces `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use barrage_core::commands::PlayerCommand;
use barrage_core::constants::*;
use barrage_core::enums::{GamePhase, HeldControl};
use barrage_core::events::GameEvent;
use barrage_core::state::GameStateSnapshot;
use barrage_core::types::{Playfield, SimTime};
use barrage_core::weapons;
use barrage_terrain::Terrain;

use crate::controls::HeldInput;
use crate::match_state::MatchState;
use crate::projectile::Projectile;
use crate::systems;
use crate::turn::TurnController;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial playfield width.
    pub width: f64,
    /// Initial playfield height.
    pub height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// The simulation engine. Owns the match and all sim state.
pub struct SimulationEngine {
    time: SimTime,
    playfield: Playfield,
    terrain: Terrain,
    state: MatchState,
    turn: TurnController,
    hold: HeldInput,
    projectiles: Vec<Projectile>,
    particles: World,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine and lay out the first match.
    pub fn new(config: SimConfig) -> Self {
        let playfield = Playfield {
            width: config.width.max(1.0),
            height: config.height.max(1.0),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let terrain = world_setup::generate_terrain(&playfield, &mut rng);
        let mut state = MatchState::default();
        world_setup::reset_match(&mut state, &terrain, &playfield);

        Self {
            time: SimTime::default(),
            playfield,
            terrain,
            state,
            turn: TurnController::default(),
            hold: HeldInput::default(),
            projectiles: Vec::new(),
            particles: World::new(),
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        // Repeats fall due before new input so a fresh press waits a full interval.
        if self.state.phase == GamePhase::Aiming {
            if let Some(step) = self.hold.tick() {
                self.apply_held(step);
            }
        }
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            &self.playfield,
            &self.terrain,
            &self.state,
            &self.projectiles,
            &self.particles,
            self.turn.settle_pending(),
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Tanks, turn owner, scores and outcome.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Get a read-only reference to the particle world.
    pub fn particles(&self) -> &World {
        &self.particles
    }

    /// Mutable match state (for scripting test scenarios).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Replace the terrain and re-seat both tanks on it (for tests needing flat ground).
    #[cfg(test)]
    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
        for player in self.state.players.iter_mut() {
            world_setup::snap_to_ground(player, &self.terrain);
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
        let aiming = self.state.phase == GamePhase::Aiming;
        match command {
            PlayerCommand::SetAngle { value } => {
                if aiming {
                    self.state.active_mut().angle = value.clamp(0, MAX_ANGLE);
                }
            }
            PlayerCommand::SetPower { value } => {
                if aiming {
                    self.state.active_mut().power = value.clamp(0, MAX_POWER);
                }
            }
            PlayerCommand::SelectWeapon { index } => {
                if aiming && index < weapons::catalog().len() {
                    self.state.active_mut().weapon_index = index;
                }
            }
            PlayerCommand::AdjustAngle { delta } => {
                if aiming {
                    self.adjust_angle(delta);
                }
            }
            PlayerCommand::AdjustPower { delta } => {
                if aiming {
                    self.adjust_power(delta);
                }
            }
            PlayerCommand::Move { direction } => {
                if aiming {
                    self.move_active(direction);
                }
            }
            PlayerCommand::StartHold { control } => {
                if aiming {
                    if let Some(step) = self.hold.press(control) {
                        self.apply_held(step);
                    }
                }
            }
            PlayerCommand::StopHold => {
                self.hold.release();
            }
            PlayerCommand::Fire => {
                if aiming {
                    self.fire();
                }
            }
            PlayerCommand::Restart => {
                self.restart();
            }
            PlayerCommand::Resize { width, height } => {
                if width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0 {
                    self.playfield = Playfield { width, height };
                    if self.terrain.is_empty() {
                        self.terrain = world_setup::generate_terrain(&self.playfield, &mut self.rng);
                        world_setup::reset_match(&mut self.state, &self.terrain, &self.playfield);
                    }
                }
            }
        }
    }

    fn adjust_angle(&mut self, delta: i32) {
        let player = self.state.active_mut();
        player.angle = player.angle.saturating_add(delta).clamp(0, MAX_ANGLE);
    }

    fn adjust_power(&mut self, delta: i32) {
        let player = self.state.active_mut();
        player.power = player.power.saturating_add(delta).clamp(0, MAX_POWER);
    }

    /// One movement step for the active tank. Costs fuel; blocked at the edges.
    fn move_active(&mut self, direction: i32) {
        let step = direction.signum();
        if step == 0 {
            return;
        }
        let max_x = self.playfield.width - MOVE_EDGE_MARGIN;
        let player = self.state.active_mut();
        if player.fuel <= 0.0 {
            return;
        }
        let target = player.position.x + step as f64 * MOVE_SPEED;
        if target < MOVE_EDGE_MARGIN || target > max_x {
            return;
        }
        player.position.x = target;
        player.fuel = (player.fuel - MOVE_FUEL_COST).max(0.0);
        world_setup::snap_to_ground(player, &self.terrain);
    }

    fn apply_held(&mut self, control: HeldControl) {
        match control {
            HeldControl::AngleUp => self.adjust_angle(1),
            HeldControl::AngleDown => self.adjust_angle(-1),
            HeldControl::PowerUp => self.adjust_power(1),
            HeldControl::PowerDown => self.adjust_power(-1),
            HeldControl::MoveLeft => self.move_active(-1),
            HeldControl::MoveRight => self.move_active(1),
        }
    }

    fn fire(&mut self) {
        self.hold.release();
        self.state.phase = GamePhase::Firing;

        let shot = systems::ballistics::launch(self.state.active());
        log::debug!(
            "{} fires {} (angle {}, power {})",
            self.state.turn.name(),
            shot.weapon.name,
            self.state.active().angle,
            self.state.active().power
        );
        self.events.push(GameEvent::ShotFired {
            player: self.state.turn,
            weapon_id: shot.weapon.id.to_string(),
            x: shot.position.x,
            y: shot.position.y,
        });
        self.projectiles.push(shot);
    }

    fn restart(&mut self) {
        self.hold.release();
        self.turn.cancel_settle();
        self.projectiles.clear();
        systems::cleanup::clear(&mut self.particles);
        self.terrain = world_setup::generate_terrain(&self.playfield, &mut self.rng);
        world_setup::reset_match(&mut self.state, &self.terrain, &self.playfield);
        log::info!("match restarted");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Projectiles (flight, impact, explosions)
        systems::ballistics::run(
            &mut self.projectiles,
            &mut self.terrain,
            &self.playfield,
            &mut self.state,
            &mut self.turn,
            &mut self.particles,
            &mut self.rng,
            &mut self.events,
        );
        // 2. Particles
        systems::movement::run(&mut self.particles, &self.terrain);
        systems::cleanup::run(&mut self.particles, &mut self.despawn_buffer);
        // 3. Tanks dropping into craters
        let falling = systems::tank_gravity::run(&mut self.state, &self.terrain);
        // 4. Settle delay and turn handover
        let motion = !self.projectiles.is_empty() || falling;
        self.turn.update(&mut self.state, motion, &mut self.events);
        // 5. Victory confetti
        if self
            .state
            .outcome
            .and_then(|outcome| outcome.winner())
            .is_some()
        {
            systems::particles::spawn_celebration(
                &mut self.particles,
                &mut self.rng,
                &self.playfield,
            );
        }
    }
}

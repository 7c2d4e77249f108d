//! Simulation constants and tuning parameters.
//!
//! Distances are playfield units (one terrain sample per unit), velocities
//! are units per tick.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Default playfield width when no viewport size is supplied.
pub const DEFAULT_WIDTH: f64 = 1280.0;

/// Default playfield height when no viewport size is supplied.
pub const DEFAULT_HEIGHT: f64 = 720.0;

// --- Terrain generation ---

/// Base ground line as a fraction of playfield height.
pub const TERRAIN_BASE_FRACTION: f64 = 0.5;

/// Low-frequency hill component.
pub const TERRAIN_FREQ_1: f64 = 0.003;
pub const TERRAIN_AMP_1: f64 = 100.0;

/// Second, shorter hill component.
pub const TERRAIN_FREQ_2: f64 = 0.01;
pub const TERRAIN_AMP_2: f64 = 50.0;

/// Upper bound (exclusive) of uniform per-sample jitter.
pub const TERRAIN_NOISE: f64 = 5.0;

/// Box blur radius applied after generation.
pub const TERRAIN_SMOOTH_RADIUS: usize = 2;

// --- Physics ---

/// Base gravity applied to projectile vertical velocity each tick.
pub const GRAVITY: f64 = 0.4;

/// Fire power is scaled by this before becoming muzzle speed.
pub const POWER_SCALE: f64 = 0.3;

/// Barrel length; projectiles spawn at the turret tip.
pub const TURRET_LENGTH: f64 = 20.0;

/// Vertical energy retained (and inverted) on a bounce.
pub const BOUNCE_RESTITUTION: f64 = -0.6;

/// Horizontal damping on a bounce.
pub const BOUNCE_FRICTION: f64 = 0.8;

/// Height above the surface a bouncing projectile is lifted to.
pub const BOUNCE_LIFT: f64 = 2.0;

/// Downward travel per tick while digging.
pub const DIG_RATE: f64 = 3.0;

/// Accumulated dig depth that forces detonation (strictly exceeded).
pub const DIG_LIMIT: f64 = 100.0;

// --- Tanks ---

pub const TANK_WIDTH: f64 = 30.0;
pub const TANK_HEIGHT: f64 = 15.0;

/// Fall speed of a tank whose ground was carved away.
pub const TANK_FALL_SPEED: f64 = 2.0;

/// Horizontal travel per movement step.
pub const MOVE_SPEED: f64 = 2.0;

/// Fuel cost per movement step.
pub const MOVE_FUEL_COST: f64 = 1.0;

/// Tanks may not move closer than this to either playfield edge.
pub const MOVE_EDGE_MARGIN: f64 = 10.0;

/// Tank spawn inset from either playfield edge.
pub const TANK_SPAWN_INSET: f64 = 100.0;

pub const MAX_FUEL: f64 = 200.0;
pub const MAX_HEALTH: i32 = 100;
pub const MAX_POWER: i32 = 100;
pub const MAX_ANGLE: i32 = 180;

pub const DEFAULT_POWER: i32 = 50;
pub const PLAYER_ONE_ANGLE: i32 = 45;
pub const PLAYER_TWO_ANGLE: i32 = 135;

// --- Explosions ---

/// Extra reach added to a blast radius when testing whether a tank is hit.
pub const HITBOX_MARGIN: f64 = 20.0;

/// Crater depth multiplier for the terrain-only weapon.
pub const DIRT_MOVER_CARVE: f64 = 1.5;

/// Radius of an impact with no originating weapon.
pub const GENERIC_BLAST_RADIUS: f64 = 60.0;

/// Damage of an impact with no originating weapon.
pub const GENERIC_BLAST_DAMAGE: i32 = 20;

/// Sub-munitions released by a cluster weapon.
pub const CLUSTER_FRAGMENTS: usize = 5;

/// Fragments spawn this far above the impact point.
pub const CLUSTER_SPAWN_LIFT: f64 = 10.0;

/// Full width of the random horizontal fragment velocity.
pub const CLUSTER_SPREAD: f64 = 15.0;

/// Fragment upward velocity is `-(U[0, POP_RANGE) + POP_MIN)`.
pub const CLUSTER_POP_MIN: f64 = 5.0;
pub const CLUSTER_POP_RANGE: f64 = 10.0;

pub const FRAGMENT_RADIUS: f64 = 20.0;
pub const FRAGMENT_DAMAGE: i32 = 5;

// --- Turn flow ---

/// Completed turns after which the match is decided by score (5 per player).
pub const TURN_LIMIT: u32 = 10;

/// Delay after all motion stops before the turn advances.
pub const SETTLE_DELAY_MS: f64 = 1000.0;

/// Held angle/power controls repeat at this interval.
pub const ADJUST_REPEAT_MS: f64 = 50.0;

/// Held movement repeats at this interval.
pub const MOVE_REPEAT_MS: f64 = 16.0;

// --- Particles (cosmetic) ---

pub const PARTICLE_GRAVITY: f64 = 0.1;
pub const PARTICLE_BOUNCE_GRAVITY: f64 = 0.2;
pub const PARTICLE_BOUNCE_RESTITUTION: f64 = -0.5;
pub const PARTICLE_BOUNCE_FRICTION: f64 = 0.8;
pub const PARTICLE_DEFAULT_DECAY: f64 = 0.02;

pub const VOLCANO_PARTICLES: usize = 30;

/// Celebration particles spawned per tick once a winner exists.
pub const CELEBRATION_PARTICLES: usize = 5;

/// Convert a millisecond duration into whole ticks (rounded up, at least 1).
pub fn ms_to_ticks(ms: f64) -> u32 {
    ((ms * TICK_RATE as f64 / 1000.0).ceil() as u32).max(1)
}

//! Weapon catalog and per-weapon behaviour rules.
//!
//! Every behavioural difference between weapons is carried as catalog data
//! (kind, debris class), so no system branches on weapon identity.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Behaviour class of a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    Standard,
    /// Falls faster.
    Heavy,
    /// Flies flatter and deals full damage anywhere inside its reach.
    Fast,
    /// Moves dirt, never damages tanks.
    TerrainOnly,
    /// Splits into fragments on impact.
    Cluster,
    /// Skips off the ground this many times before exploding.
    Bouncer(u32),
    /// Burrows into the ground before exploding.
    Digger,
    /// Erupts in a cosmetic fountain of lava on impact.
    Volcano,
    /// Negative damage: restores health, leaves terrain alone.
    Heal,
}

/// What happens when a projectile reaches the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundContact {
    StartDigging,
    Bounce,
    Explode,
}

/// Extra effect of an explosion beyond carving and damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryEffect {
    None,
    Cluster,
    Volcano,
}

/// Size class of an explosion's debris cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Debris {
    Normal,
    /// A few slow sparks.
    Puff,
    /// A wide spray of dirt.
    Spray,
    /// A dense, long-lived cloud behind a full-screen flash.
    Mushroom,
}

/// Cosmetic debris parameters for an explosion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBurst {
    pub count: usize,
    /// Full width of the random velocity range on each axis.
    pub speed: f64,
    /// Base life lost per tick (a small random amount is added per particle).
    pub decay: f64,
    /// Whether a brief full-screen flash accompanies the burst.
    pub flash: bool,
    /// Particles drift without gravity.
    pub anti_gravity: bool,
}

/// Immutable weapon definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weapon {
    pub id: &'static str,
    pub name: &'static str,
    pub damage: i32,
    pub radius: f64,
    pub color: &'static str,
    pub kind: WeaponKind,
    pub debris: Debris,
}

/// Index of the default weapon.
pub const STANDARD: usize = 0;

static CATALOG: [Weapon; 10] = [
    Weapon {
        id: "standard",
        name: "Standard Shell",
        damage: 30,
        radius: 40.0,
        color: "#fff",
        kind: WeaponKind::Standard,
        debris: Debris::Normal,
    },
    Weapon {
        id: "big_shot",
        name: "Big Shot",
        damage: 40,
        radius: 80.0,
        color: "#ffaa00",
        kind: WeaponKind::Heavy,
        debris: Debris::Normal,
    },
    Weapon {
        id: "sniper",
        name: "Sniper",
        damage: 50,
        radius: 20.0,
        color: "#ff0000",
        kind: WeaponKind::Fast,
        debris: Debris::Puff,
    },
    Weapon {
        id: "dirt_mover",
        name: "Dirt Mover",
        damage: 10,
        radius: 120.0,
        color: "#8B4513",
        kind: WeaponKind::TerrainOnly,
        debris: Debris::Spray,
    },
    Weapon {
        id: "nuke",
        name: "Nuke",
        damage: 60,
        radius: 150.0,
        color: "#00ff00",
        kind: WeaponKind::Standard,
        debris: Debris::Mushroom,
    },
    Weapon {
        id: "heal",
        name: "Repair Kit",
        damage: -30,
        radius: 40.0,
        color: "#00ffff",
        kind: WeaponKind::Heal,
        debris: Debris::Normal,
    },
    Weapon {
        id: "cluster",
        name: "Cluster Bomb",
        damage: 10,
        radius: 30.0,
        color: "#ff00ff",
        kind: WeaponKind::Cluster,
        debris: Debris::Normal,
    },
    Weapon {
        id: "bouncer",
        name: "Leap Frog",
        damage: 35,
        radius: 40.0,
        color: "#88ff88",
        kind: WeaponKind::Bouncer(1),
        debris: Debris::Normal,
    },
    Weapon {
        id: "digger",
        name: "Digger",
        damage: 30,
        radius: 30.0,
        color: "#aaaaaa",
        kind: WeaponKind::Digger,
        debris: Debris::Normal,
    },
    Weapon {
        id: "volcano",
        name: "Volcano",
        damage: 15,
        radius: 30.0,
        color: "#ff5500",
        kind: WeaponKind::Volcano,
        debris: Debris::Normal,
    },
];

/// The full, ordered weapon list.
pub fn catalog() -> &'static [Weapon] {
    &CATALOG
}

/// Look up a weapon by catalog index.
pub fn get(index: usize) -> Option<&'static Weapon> {
    CATALOG.get(index)
}

impl WeaponKind {
    /// Scale applied to base gravity while airborne.
    pub fn gravity_multiplier(self) -> f64 {
        match self {
            WeaponKind::Heavy => 1.5,
            WeaponKind::Fast => 0.5,
            _ => 1.0,
        }
    }

    /// Bounce budget a freshly fired projectile starts with.
    pub fn initial_bounces(self) -> u32 {
        match self {
            WeaponKind::Bouncer(n) => n,
            _ => 0,
        }
    }

    /// Resolve ground contact for a projectile of this kind.
    pub fn ground_contact(self, digging: bool, bounces_left: u32) -> GroundContact {
        match self {
            WeaponKind::Digger if !digging => GroundContact::StartDigging,
            WeaponKind::Bouncer(_) if bounces_left > 0 => GroundContact::Bounce,
            _ => GroundContact::Explode,
        }
    }
}

impl Weapon {
    /// Stand-in for impacts that carry no weapon.
    pub fn generic_impact() -> Self {
        Self {
            id: "impact",
            name: "Impact",
            damage: GENERIC_BLAST_DAMAGE,
            radius: GENERIC_BLAST_RADIUS,
            color: "#fff",
            kind: WeaponKind::Standard,
            debris: Debris::Normal,
        }
    }

    /// Crater shape factor, or `None` when the weapon leaves terrain intact.
    pub fn carve_factor(&self) -> Option<f64> {
        match self.kind {
            WeaponKind::Heal => None,
            WeaponKind::TerrainOnly => Some(DIRT_MOVER_CARVE),
            _ => Some(1.0),
        }
    }

    pub fn applies_damage(&self) -> bool {
        self.kind != WeaponKind::TerrainOnly
    }

    /// Whether damage scales down with distance from the impact.
    pub fn has_falloff(&self) -> bool {
        self.kind != WeaponKind::Fast
    }

    pub fn secondary_effect(&self) -> SecondaryEffect {
        match self.kind {
            WeaponKind::Cluster => SecondaryEffect::Cluster,
            WeaponKind::Volcano => SecondaryEffect::Volcano,
            _ => SecondaryEffect::None,
        }
    }

    /// Sub-munition carried by cluster fragments. Cannot cluster again.
    pub fn fragment(&self) -> Weapon {
        Weapon {
            id: self.id,
            name: "MiniBomb",
            damage: FRAGMENT_DAMAGE,
            radius: FRAGMENT_RADIUS,
            color: self.color,
            kind: WeaponKind::Standard,
            debris: Debris::Normal,
        }
    }

    pub fn particle_burst(&self) -> ParticleBurst {
        let mut burst = ParticleBurst {
            count: 20,
            speed: 10.0,
            decay: PARTICLE_DEFAULT_DECAY,
            flash: false,
            anti_gravity: self.kind == WeaponKind::Heal,
        };
        match self.debris {
            Debris::Normal => {}
            Debris::Puff => {
                burst.count = 10;
                burst.speed = 5.0;
            }
            Debris::Spray => {
                burst.count = 50;
                burst.speed = 15.0;
            }
            Debris::Mushroom => {
                burst.count = 100;
                burst.speed = 25.0;
                burst.decay = 0.01;
                burst.flash = true;
            }
        }
        burst
    }
}

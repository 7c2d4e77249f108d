//! Terrain system for BARRAGE.
//!
//! A destructible heightfield: procedural generation, height queries,
//! and crater deformation.

pub use barrage_core as core;

pub mod heightfield;


pub use heightfield::Terrain;

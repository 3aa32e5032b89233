//! BadMan Kombat - combat core of a 2D fighting game
//!
//! Frame-stepped combat resolution (hitstun, blockstun, combos, chip damage,
//! super meter) and a time-windowed input buffer that recognizes special and
//! super moves from directional motions.

pub mod combat;
pub mod core;
pub mod duel;
pub mod input;
pub mod moves;

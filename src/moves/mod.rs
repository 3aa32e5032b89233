//! Move data: frame data tables, special/super descriptors and rosters

pub mod descriptor;
pub mod frame_data;
pub mod roster;

pub use descriptor::{MoveDescriptor, MoveEffect, MoveFrames, ProjectileSpec, SpecialMove, SuperMove};
pub use frame_data::{FrameData, FrameDataTable};
pub use roster::{MoveSet, Roster};

//! Static hunt reference tables.
//!
//! Zone names, A-rank marks grouped by expansion and the registered spawn
//! points per zone. Everything here is compiled in and never mutated, so
//! the tables can be read from any task without synchronisation.

mod marks;
mod spawnpoints;
mod zones;

pub use marks::{HuntMark, find_mark_in, marks_for, mob_id};
pub use spawnpoints::{Point, spawnpoints};
pub use zones::{ZONES, zone_id};

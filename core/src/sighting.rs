use crate::hunt_data::Point;

/// A hunt mark seen in a particular zone instance, already snapped to a
/// registered spawn point.
#[derive(Debug, Clone, PartialEq)]
pub struct Sighting {
    /// Canonical mark name from the reference tables
    pub name: &'static str,
    pub pos: Point,
    /// Turtle zone id, 0 when the zone name was not recognised
    pub zone: u32,
    /// 1 for the base instance, 2..=6 for numbered instances
    pub instance: u32,
}

impl Sighting {
    pub fn key(&self) -> SightingKey {
        SightingKey {
            name: self.name,
            instance: self.instance,
        }
    }
}

/// Identity of a tracked sighting. Only the latest sighting per key is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SightingKey {
    pub name: &'static str,
    pub instance: u32,
}

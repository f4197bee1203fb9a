//! Snapping noisy map-link coordinates to registered spawn points.

use crate::hunt_data::{Point, spawnpoints};

/// Closest registered spawn point in `zone_id` to `raw`, by Manhattan distance.
///
/// Zones without registered points resolve to [`Point::ZERO`]. On an exact
/// tie the point listed first in the table wins.
pub fn closest_spawnpoint(zone_id: u32, raw: Point) -> Point {
    closest_in(spawnpoints(zone_id), raw)
}

fn closest_in(candidates: &[Point], raw: Point) -> Point {
    let mut closest: Option<(Point, f64)> = None;
    for candidate in candidates {
        let distance = candidate.manhattan(&raw);
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((*candidate, distance));
        }
    }
    closest.map(|(point, _)| point).unwrap_or(Point::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt_data::zone_id;

    #[test]
    fn test_picks_nearest_candidate() {
        let candidates = [Point::new(10.0, 10.0), Point::new(20.0, 20.0), Point::new(30.0, 5.0)];
        assert_eq!(closest_in(&candidates, Point::new(19.1, 21.4)), Point::new(20.0, 20.0));
        assert_eq!(closest_in(&candidates, Point::new(28.0, 9.0)), Point::new(30.0, 5.0));
    }

    #[test]
    fn test_uses_manhattan_not_euclidean() {
        // Euclidean would prefer (3, 3): sqrt(18) < 5
        let candidates = [Point::new(3.0, 3.0), Point::new(0.0, 5.0)];
        assert_eq!(closest_in(&candidates, Point::new(0.0, 0.0)), Point::new(0.0, 5.0));
    }

    #[test]
    fn test_tie_keeps_first_in_table_order() {
        let candidates = [Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        assert_eq!(closest_in(&candidates, Point::ZERO), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_unknown_zone_resolves_to_origin() {
        assert_eq!(closest_spawnpoint(0, Point::new(12.3, 4.5)), Point::ZERO);
    }

    #[test]
    fn test_resolution_is_stable_and_registered() {
        let zone = zone_id("Shaaloani").unwrap();
        let raw = Point::new(123.4, 56.7);
        let first = closest_spawnpoint(zone, raw);
        assert_eq!(first, closest_spawnpoint(zone, raw));
        assert!(spawnpoints(zone).contains(&first));
    }
}

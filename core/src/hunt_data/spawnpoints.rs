use phf::phf_map;

/// A map coordinate, either reported in a log line or registered as a
/// spawn point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance, which is what the spawn snapping uses.
    pub fn manhattan(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Zone id -> registered spawn points, in table order.
// TODO: replace these coordinates with surveyed spawn locations; every table
// below is placeholder data shaped like a real zone.
static SPAWNPOINTS: phf::Map<u32, &'static [Point]> = phf_map! {
    // Coerthas Western Highlands
    397u32 => &[
        p(36.9, 32.8), p(9.7, 6.7), p(18.5, 8.1), p(23.8, 34.3), p(34.1, 23.9),
        p(31.6, 6.0), p(15.7, 17.5), p(22.5, 20.8), p(13.1, 12.2), p(28.9, 22.5),
    ],
    // The Dravanian Forelands
    398u32 => &[
        p(9.9, 9.6), p(6.7, 25.2), p(18.8, 29.0), p(7.3, 7.6), p(16.1, 12.5),
        p(37.8, 34.2), p(15.4, 20.5), p(6.9, 28.4), p(24.0, 28.4), p(7.8, 23.4),
    ],
    // The Dravanian Hinterlands
    399u32 => &[
        p(9.2, 19.5), p(32.8, 34.2), p(22.6, 37.0), p(11.8, 16.1), p(18.1, 26.0),
        p(36.9, 22.2), p(24.0, 37.7), p(31.6, 12.2), p(34.3, 31.4), p(23.6, 33.5),
    ],
    // The Churning Mists
    400u32 => &[
        p(14.0, 9.8), p(11.8, 12.6), p(32.7, 20.8), p(8.2, 21.5), p(17.4, 34.9),
        p(29.2, 10.4), p(11.8, 17.6), p(8.1, 8.0), p(32.0, 35.5), p(26.7, 20.4),
    ],
    // The Sea of Clouds
    401u32 => &[
        p(6.6, 36.4), p(27.7, 14.0), p(7.0, 25.4), p(12.1, 28.2), p(23.8, 36.7),
        p(22.4, 36.1), p(21.3, 13.5), p(19.8, 15.4), p(36.2, 8.1), p(21.6, 30.6),
    ],
    // Azys Lla
    402u32 => &[
        p(13.6, 12.9), p(11.3, 30.3), p(37.6, 12.7), p(15.9, 19.8), p(12.8, 11.2),
        p(25.5, 12.0), p(20.2, 32.5), p(11.5, 28.3), p(36.4, 28.7), p(33.2, 12.9),
    ],
    // Idyllshire
    478u32 => &[
        p(6.3, 6.8), p(7.4, 5.2), p(5.6, 8.9), p(8.7, 7.5),
    ],
    // Lakeland
    813u32 => &[
        p(16.0, 10.7), p(26.2, 8.2), p(22.6, 17.3), p(7.8, 21.7), p(7.2, 19.4),
        p(8.2, 8.8), p(19.2, 31.6), p(9.8, 12.9), p(25.5, 35.4), p(23.9, 18.3),
    ],
    // Kholusia
    814u32 => &[
        p(36.3, 7.4), p(32.6, 15.0), p(10.5, 9.7), p(15.6, 31.3), p(11.6, 24.0),
        p(25.8, 17.5), p(23.0, 7.9), p(7.8, 12.4), p(27.1, 19.3), p(15.7, 24.2),
    ],
    // Amh Araeng
    815u32 => &[
        p(20.0, 15.3), p(30.6, 27.7), p(13.6, 23.8), p(22.3, 33.1), p(28.6, 14.9),
        p(36.4, 9.7), p(19.0, 29.5), p(10.7, 21.2), p(7.2, 26.7), p(29.7, 23.8),
    ],
    // Il Mheg
    816u32 => &[
        p(33.1, 15.7), p(27.6, 24.4), p(24.0, 20.1), p(32.0, 35.3), p(20.7, 26.6),
        p(7.9, 27.7), p(26.1, 36.8), p(31.5, 14.8), p(18.0, 26.7), p(6.7, 20.3),
    ],
    // The Rak'tika Greatwood
    817u32 => &[
        p(11.2, 9.6), p(7.8, 29.8), p(10.0, 13.7), p(18.1, 33.0), p(8.5, 19.9),
        p(23.0, 33.4), p(31.4, 32.8), p(14.6, 18.9), p(17.1, 33.4), p(35.7, 10.7),
    ],
    // The Tempest
    818u32 => &[
        p(11.5, 13.2), p(13.2, 21.0), p(24.3, 14.1), p(6.1, 19.0), p(17.4, 23.6),
        p(35.5, 27.4), p(22.0, 25.1), p(27.0, 7.7), p(33.9, 30.2), p(33.1, 30.7),
    ],
    // Labyrinthos
    956u32 => &[
        p(18.2, 18.4), p(9.2, 25.7), p(7.9, 8.1), p(12.5, 11.0), p(16.5, 7.6),
        p(6.0, 10.7), p(9.1, 17.3), p(6.8, 33.1), p(25.0, 10.6), p(13.8, 16.8),
    ],
    // Thavnair
    957u32 => &[
        p(17.3, 9.8), p(32.3, 36.8), p(20.4, 21.0), p(8.7, 9.2), p(16.6, 14.2),
        p(31.7, 11.0), p(6.7, 35.5), p(22.4, 10.5), p(22.8, 6.8), p(22.4, 36.3),
    ],
    // Garlemald
    958u32 => &[
        p(32.8, 27.6), p(14.1, 17.4), p(11.2, 29.9), p(22.5, 30.2), p(16.2, 12.9),
        p(31.2, 36.5), p(32.4, 31.0), p(31.4, 28.9), p(13.0, 22.0), p(17.0, 6.9),
    ],
    // Mare Lamentorum
    959u32 => &[
        p(6.9, 14.7), p(14.0, 27.5), p(35.7, 19.9), p(35.0, 36.6), p(35.6, 17.3),
        p(12.8, 13.0), p(12.1, 12.3), p(25.3, 33.9), p(32.1, 20.9), p(26.2, 30.8),
    ],
    // Ultima Thule
    960u32 => &[
        p(8.6, 26.5), p(34.2, 30.3), p(29.3, 20.8), p(11.5, 30.5), p(16.3, 30.8),
        p(36.1, 18.3), p(18.4, 35.4), p(28.5, 11.3), p(9.9, 10.7), p(34.1, 31.0),
    ],
    // Elpis
    961u32 => &[
        p(10.5, 31.6), p(36.4, 26.4), p(16.9, 23.0), p(10.1, 6.4), p(36.1, 26.1),
        p(22.3, 34.9), p(19.4, 33.0), p(31.6, 12.5), p(13.8, 15.1), p(13.5, 24.2),
    ],
    // Urqopacha
    1187u32 => &[
        p(14.0, 19.0), p(10.1, 34.2), p(17.0, 20.2), p(24.1, 34.0), p(19.0, 34.4),
        p(21.6, 22.5), p(22.2, 6.6), p(19.6, 11.7), p(6.1, 30.8), p(11.3, 20.7),
    ],
    // Kozama'uka
    1188u32 => &[
        p(28.5, 23.3), p(16.1, 22.1), p(23.2, 30.3), p(9.3, 23.4), p(13.7, 14.6),
        p(29.9, 21.7), p(23.4, 29.6), p(34.3, 19.7), p(25.0, 21.7), p(21.9, 27.5),
    ],
    // Yak T'el
    1189u32 => &[
        p(20.0, 22.5), p(20.8, 35.2), p(27.7, 33.2), p(35.2, 14.0), p(23.3, 35.2),
        p(32.0, 10.3), p(9.8, 19.7), p(8.2, 13.5), p(8.3, 26.8), p(30.3, 33.8),
    ],
    // Shaaloani
    1190u32 => &[
        p(10.8, 28.2), p(26.5, 10.4), p(33.4, 36.0), p(12.8, 35.5), p(18.3, 21.1),
        p(36.7, 31.8), p(11.0, 19.4), p(22.0, 16.5), p(12.1, 15.9), p(28.4, 6.6),
    ],
    // Heritage Found
    1191u32 => &[
        p(23.2, 19.7), p(6.6, 16.3), p(25.3, 21.9), p(8.0, 36.5), p(30.4, 36.1),
        p(9.2, 14.2), p(7.2, 30.1), p(14.4, 10.0), p(19.1, 34.3), p(31.4, 14.0),
    ],
    // Living Memory
    1192u32 => &[
        p(10.6, 34.5), p(23.7, 27.7), p(8.8, 7.8), p(27.3, 19.2), p(8.2, 35.1),
        p(25.7, 30.9), p(8.6, 32.5), p(8.1, 32.7), p(20.1, 16.5), p(23.1, 34.7),
    ],
};

/// Registered spawn points for a zone; empty for unknown zones.
pub fn spawnpoints(zone_id: u32) -> &'static [Point] {
    SPAWNPOINTS.get(&zone_id).copied().unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt_data::ZONES;

    #[test]
    fn test_every_zone_has_spawnpoints() {
        for (name, id) in ZONES.entries() {
            assert!(!spawnpoints(*id).is_empty(), "{name} has no spawn points");
        }
    }

    #[test]
    fn test_unknown_zone_has_none() {
        assert!(spawnpoints(0).is_empty());
        assert!(spawnpoints(9999).is_empty());
    }
}

use phf::phf_map;

/// Zone name as it appears in a map link -> territory id, which is what
/// Turtle uses as its zone id.
pub static ZONES: phf::Map<&'static str, u32> = phf_map! {
    // Heavensward
    "Coerthas Western Highlands" => 397,
    "The Dravanian Forelands" => 398,
    "The Dravanian Hinterlands" => 399,
    "The Churning Mists" => 400,
    "The Sea of Clouds" => 401,
    "Azys Lla" => 402,
    "Idyllshire" => 478,
    // Shadowbringers
    "Lakeland" => 813,
    "Kholusia" => 814,
    "Amh Araeng" => 815,
    "Il Mheg" => 816,
    "The Rak'tika Greatwood" => 817,
    "The Tempest" => 818,
    // Endwalker
    "Labyrinthos" => 956,
    "Thavnair" => 957,
    "Garlemald" => 958,
    "Mare Lamentorum" => 959,
    "Ultima Thule" => 960,
    "Elpis" => 961,
    // Dawntrail
    "Urqopacha" => 1187,
    "Kozama'uka" => 1188,
    "Yak T'el" => 1189,
    "Shaaloani" => 1190,
    "Heritage Found" => 1191,
    "Living Memory" => 1192,
};

/// Resolve a zone name, `None` when the zone is not tracked.
pub fn zone_id(name: &str) -> Option<u32> {
    ZONES.get(name).copied()
}

use scouter_types::Expansion;

/// An A-rank hunt mark and its Turtle mob id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuntMark {
    pub name: &'static str,
    pub id: u32,
}

const fn mark(name: &'static str, id: u32) -> HuntMark {
    HuntMark { name, id }
}

// TODO: check the mob ids against Turtle's mob table; only the names are sourced
static HEAVENSWARD: &[HuntMark] = &[
    mark("Mirka", 37),
    mark("Lyuba", 38),
    mark("Pylraster", 39),
    mark("Lord of the Wyverns", 40),
    mark("Slipkinx Steeljoints", 41),
    mark("Stolas", 42),
    mark("Bune", 43),
    mark("Agathos", 44),
    mark("Enkelados", 45),
    mark("Sisiutl", 46),
    mark("Campacti", 47),
    mark("Stench Blossom", 48),
];

static SHADOWBRINGERS: &[HuntMark] = &[
    mark("Nariphon", 1),
    mark("Nuckelavee", 2),
    mark("Li'l Murderer", 3),
    mark("Huracan", 4),
    mark("Maliktender", 5),
    mark("Sugaar", 6),
    mark("The Mudman", 7),
    mark("O Poorest Pauldia", 8),
    mark("Grassman", 9),
    mark("Supay", 10),
    mark("Rusalka", 11),
    mark("Baal", 12),
];

static ENDWALKER: &[HuntMark] = &[
    mark("Storsie", 13),
    mark("Hulder", 14),
    mark("Yilan", 15),
    mark("Sugriva", 16),
    mark("Minerva", 17),
    mark("Aegeiros", 18),
    mark("Mousse Princess", 19),
    mark("Lunatender Queen", 20),
    mark("Arch-Eta", 21),
    mark("Fan Ail", 22),
    mark("Petalodus", 23),
    mark("Gurangatch", 24),
];

static DAWNTRAIL: &[HuntMark] = &[
    mark("Nechuciho", 25),
    mark("Queen Hawk", 26),
    mark("The Raintriller", 27),
    mark("Pkuucha", 28),
    mark("Starcrier", 29),
    mark("Rrax Yity'a", 30),
    mark("Yehehetoaua'pyo", 31),
    mark("Keheniheyamewi", 32),
    mark("Heshuala", 33),
    mark("Urna Variabilis", 34),
    mark("Sally the Sweeper", 35),
    mark("Cat's Eye", 36),
];

/// Marks belonging to one expansion, in table order.
pub fn marks_for(expansion: Expansion) -> &'static [HuntMark] {
    match expansion {
        Expansion::Heavensward => HEAVENSWARD,
        Expansion::Shadowbringers => SHADOWBRINGERS,
        Expansion::Endwalker => ENDWALKER,
        Expansion::Dawntrail => DAWNTRAIL,
    }
}

fn all_marks() -> impl Iterator<Item = &'static HuntMark> {
    Expansion::ALL.into_iter().flat_map(marks_for)
}

/// Turtle mob id for a mark name.
pub fn mob_id(name: &str) -> Option<u32> {
    all_marks().find(|m| m.name == name).map(|m| m.id)
}

/// First known mark whose name occurs anywhere in `message`.
pub fn find_mark_in(message: &str) -> Option<&'static str> {
    all_marks().find(|m| message.contains(m.name)).map(|m| m.name)
}

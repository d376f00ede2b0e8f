//! The content catalog: the ten lockable tables and their canonical items.
//!
//! Skills and Equipment are tiered: each item carries an integer tier that
//! only ever grows. The other eight tables are binary: an item is either
//! locked or unlocked.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Highest tier a skill can reach.
pub const SKILL_TIER_MAX: u32 = 10;

/// Highest tier an equipment slot can reach.
pub const EQUIPMENT_TIER_MAX: u32 = 9;

/// One of the ten categories of lockable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// Skill tiers, each tier raising the skill's level cap.
    Skills,
    /// Equipment slot tiers.
    Equipment,
    /// Map areas outside the starting region.
    Regions,
    /// Transport networks and teleports.
    Mobility,
    /// Spellbooks, prayers, and similar power.
    Arcana,
    /// Player-owned house features.
    Housing,
    /// Shop categories.
    Merchants,
    /// Minigames.
    Minigames,
    /// Bosses and raids.
    Bosses,
    /// Storage containers.
    Storage,
}

impl TableKind {
    /// All tables, in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Skills,
            Self::Equipment,
            Self::Regions,
            Self::Mobility,
            Self::Arcana,
            Self::Housing,
            Self::Merchants,
            Self::Minigames,
            Self::Bosses,
            Self::Storage,
        ]
    }

    /// Parse a table name. Accepts display names, save-document keys, and
    /// a few legacy aliases (`power`, `poh`, `gear`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "skills" | "skill" => Some(Self::Skills),
            "equipment" | "gear" | "slots" => Some(Self::Equipment),
            "regions" | "region" | "areas" => Some(Self::Regions),
            "mobility" | "transport" => Some(Self::Mobility),
            "arcana" | "power" => Some(Self::Arcana),
            "housing" | "poh" | "house" => Some(Self::Housing),
            "merchants" | "merchant" | "shops" => Some(Self::Merchants),
            "minigames" | "minigame" => Some(Self::Minigames),
            "bosses" | "boss" => Some(Self::Bosses),
            "storage" => Some(Self::Storage),
            _ => None,
        }
    }

    /// Key used for this table in the persisted document.
    pub fn key(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Equipment => "equipment",
            Self::Regions => "regions",
            Self::Mobility => "mobility",
            Self::Arcana => "arcana",
            Self::Housing => "housing",
            Self::Merchants => "merchants",
            Self::Minigames => "minigames",
            Self::Bosses => "bosses",
            Self::Storage => "storage",
        }
    }

    /// Canonical item list for this table.
    pub fn items(self) -> &'static [&'static str] {
        match self {
            Self::Skills => SKILLS,
            Self::Equipment => EQUIPMENT_SLOTS,
            Self::Regions => REGIONS.as_slice(),
            Self::Mobility => MOBILITY,
            Self::Arcana => ARCANA,
            Self::Housing => HOUSING,
            Self::Merchants => MERCHANTS,
            Self::Minigames => MINIGAMES,
            Self::Bosses => BOSSES,
            Self::Storage => STORAGE,
        }
    }

    /// Look up the canonical spelling of an item, ignoring case.
    pub fn find_item(self, name: &str) -> Option<&'static str> {
        let wanted = name.trim();
        self.items()
            .iter()
            .copied()
            .find(|item| item.eq_ignore_ascii_case(wanted))
    }

    /// Whether `name` is exactly one of this table's items.
    pub fn contains(self, name: &str) -> bool {
        self.items().contains(&name)
    }

    /// The maximum tier for tiered tables, `None` for binary tables.
    pub fn max_tier(self) -> Option<u32> {
        match self {
            Self::Skills => Some(SKILL_TIER_MAX),
            Self::Equipment => Some(EQUIPMENT_TIER_MAX),
            _ => None,
        }
    }

    /// Whether items in this table carry a tier instead of a locked flag.
    pub fn is_tiered(self) -> bool {
        self.max_tier().is_some()
    }

    /// Whether unlocks from this table look up a wiki thumbnail.
    pub fn wants_wiki_image(self) -> bool {
        matches!(
            self,
            Self::Regions | Self::Bosses | Self::Minigames | Self::Storage
        )
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skills => write!(f, "Skills"),
            Self::Equipment => write!(f, "Equipment"),
            Self::Regions => write!(f, "Regions"),
            Self::Mobility => write!(f, "Mobility"),
            Self::Arcana => write!(f, "Arcana"),
            Self::Housing => write!(f, "Housing"),
            Self::Merchants => write!(f, "Merchants"),
            Self::Minigames => write!(f, "Minigames"),
            Self::Bosses => write!(f, "Bosses"),
            Self::Storage => write!(f, "Storage"),
        }
    }
}

/// Level cap granted by a skill tier.
///
/// Tier 0 caps at 1, tier 10 at 99, anything between at `tier * 10`.
pub fn level_cap(tier: u32) -> u32 {
    match tier {
        0 => 1,
        t if t >= SKILL_TIER_MAX => 99,
        t => t * 10,
    }
}

/// The regions pool: every group flattened, first occurrence wins.
static REGIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut out: Vec<&'static str> = Vec::new();
    for (_, areas) in REGION_GROUPS {
        for area in *areas {
            if !out.contains(area) {
                out.push(*area);
            }
        }
    }
    out
});

/// Parent region group of an area, if it belongs to one.
pub fn region_group(area: &str) -> Option<&'static str> {
    REGION_GROUPS
        .iter()
        .find(|(_, areas)| areas.contains(&area))
        .map(|(group, _)| *group)
}

/// Skills, in stats-panel order.
pub const SKILLS: &[&str] = &[
    "Attack", "Hitpoints", "Mining", "Strength", "Agility", "Smithing", "Defence", "Herblore",
    "Fishing", "Ranged", "Thieving", "Cooking", "Prayer", "Crafting", "Firemaking", "Magic",
    "Fletching", "Woodcutting", "Runecraft", "Slayer", "Farming", "Construction", "Hunter",
    "Sailing",
];

/// Worn equipment slots.
pub const EQUIPMENT_SLOTS: &[&str] = &[
    "Head", "Cape", "Neck", "Ammo", "Weapon", "Body", "Shield", "Legs", "Gloves", "Boots",
    "Ring",
];

/// Transport networks and teleport methods.
pub const MOBILITY: &[&str] = &[
    "Spirit Trees", "Fairy Rings", "Gnome Gliders", "Charter Ships", "Teleport Tablets",
    "Jewelry Teleports", "Canoes", "Balloon Transport", "Mine Carts", "Magic Carpets",
    "Wilderness Obelisks", "Minigame Teleports",
];

/// Spellbooks, prayers, and other combat power.
pub const ARCANA: &[&str] = &[
    "Ancient Magicks", "Lunar Spellbook", "Arceuus Spellbook", "Protection Prayers", "Piety",
    "Rigour", "Augury", "Preserve", "High Alchemy", "Thralls", "Vengeance", "Bones to Peaches",
    "Charge", "Dwarf Cannon",
];

/// Player-owned house rooms and fixtures.
pub const HOUSING: &[&str] = &[
    "Costume Room", "Chapel (Altars)", "Portal Chamber", "Portal Nexus",
    "Superior Garden (Pools)", "Achievement Gallery (Jewelry)", "Study (Lecterns)",
    "Workshop (Repair)", "Kitchen (Shelves)", "Menagerie (Pets)", "Quest Hall (Glory)",
    "Combat Room (Dummy)",
];

/// Shop categories.
pub const MERCHANTS: &[&str] = &[
    "General Stores", "Magic & Runes", "Archery & Ranged", "Melee Weaponry",
    "Platebody & Armour", "Food & Provisions", "Crafting Supplies", "Farming & Herblore",
    "Clothing & Vanity", "Slayer Masters", "Mining & Smithing",
];

/// Storage containers.
pub const STORAGE: &[&str] = &[
    "Looting Bag", "Rune Pouch", "Seed Box", "Herb Sack", "Gem Bag", "Coal Bag", "Fish Barrel",
    "Tackle Box", "Bolt Pouch", "Plank Sack", "Huntsman's Kit", "Log Basket",
];

/// Boss encounters, raids included.
pub const BOSSES: &[&str] = &[
    "Chambers of Xeric", "Theatre of Blood", "Tombs of Amascut", "The Gauntlet",
    "The Nightmare", "Phosani's Nightmare", "Nex", "Corporeal Beast", "General Graardor",
    "Commander Zilyana", "Kree'arra", "K'ril Tsutsaroth", "Abyssal Sire", "Alchemical Hydra",
    "Cerberus", "Grotesque Guardians", "Kraken", "Skotizo", "Thermonuclear Smoke Devil",
    "Araxxor", "Artio", "Callisto", "Calvar'ion", "Chaos Elemental", "Chaos Fanatic",
    "Crazy Archaeologist", "Scorpia", "Spindel", "Venenatis", "Vet'ion", "Vorkath", "Galvek",
    "The Hueycoatl", "Moons of Peril", "Fortis Colosseum", "Duke Sucellus", "The Leviathan",
    "The Whisperer", "Vardorvis", "Barrows Brothers", "Bryophyta", "Dagannoth Kings",
    "Deranged Archaeologist", "Giant Mole", "Hespori", "Kalphite Queen", "King Black Dragon",
    "Mimic", "Obor", "Phantom Muspah", "Sarachnis", "Scurrius", "Zulrah", "Wintertodt",
    "Tempoross", "Zalcano", "TzHaar Fight Cave", "Inferno", "TzHaar-Ket-Rak's Challenges",
];

/// Minigames and activities.
pub const MINIGAMES: &[&str] = &[
    "Shooting Stars", "Barbarian Assault", "Bounty Hunter", "Castle Wars", "Clan Wars",
    "Emir's Arena", "Intelligence Gathering", "Last Man Standing", "Mage Arena",
    "Nightmare Zone", "Pest Control", "Soul Wars", "Temple Trekking", "TzHaar Fight Pit",
    "Archery Competition", "Blast Furnace", "Brimhaven Agility Arena", "Fishing Trawler",
    "Giants' Foundry", "Gnome Ball", "Gnome Restaurant", "Guardians of the Rift",
    "Hallowed Sepulchre", "Impetuous Impulses", "Mage Training Arena", "Mahogany Homes",
    "Mastering Mixology", "Mess", "Pyramid Plunder", "Rogues' Den", "Sorceress's Garden",
    "Stealing Artefacts", "Tithe Farm", "Trouble Brewing", "Vale Totems", "Volcanic Mine",
    "Shades of Mort'ton", "Tai Bwo Wannai Cleanup", "Warriors' Guild", "Burthorpe Games Room",
    "Forestry", "Rat Pits", "Tears of Guthix",
];

/// Misthalin areas open from the start; never part of the region pool.
pub const STARTING_AREAS: &[&str] = &[
    "Varrock", "Lumbridge", "Draynor Village", "Wizards' Tower", "Edgeville",
    "Barbarian Village", "Digsite", "Silvarea", "Paterdomus",
];

/// Unlockable areas grouped by their parent region.
pub const REGION_GROUPS: &[(&str, &[&str])] = &[
    (
        "Asgarnia",
        &[
            "Falador", "Port Sarim", "Rimmington", "Taverley", "Burthorpe", "Warriors' Guild",
            "Heroes' Guild", "Crafting Guild", "Dwarven Mine", "Ice Mountain",
            "Asgarnian Ice Dungeon", "Motherlode Mine", "Goblin Village", "Mudskipper Point",
            "Void Knights' Outpost", "Entrana",
        ],
    ),
    (
        "Kandarin",
        &[
            "East Ardougne", "West Ardougne", "Catherby", "Seers' Village", "Camelot",
            "Yanille", "Port Khazard", "Hemenster", "Fishing Guild", "Ranging Guild",
            "Legends' Guild", "Tree Gnome Stronghold", "Gnome Village", "Witchaven",
            "Piscatoris Fishing Colony", "Feldip Hills", "Baxtorian Falls", "Otto's Grotto",
            "Barbarian Outpost", "Fight Arena",
        ],
    ),
    (
        "Karamja",
        &[
            "Musa Point", "Brimhaven", "Tai Bwo Wannai", "Shilo Village", "Kharazi Jungle",
            "Mor Ul Rek (TzHaar City)", "Crandor",
        ],
    ),
    (
        "Kharidian Desert",
        &[
            "Al Kharid", "Duel Arena / PvP Arena", "Shantay Pass", "Pollnivneach", "Nardah",
            "Sophanem", "Menaphos", "Bandit Camp", "Bedabin Camp", "Ruins of Uzer",
            "Mage Training Arena", "Agility Pyramid", "Giants' Plateau", "Kalphite Lair",
        ],
    ),
    (
        "Morytania",
        &[
            "Canifis", "Port Phasmatys", "Mort'ton", "Barrows", "Burgh de Rott", "Meiyerditch",
            "Darkmeyer", "Slepe", "Ver Sinhaza", "Fenkenstrain's Castle", "Slayer Tower",
            "Mort Myre Swamp", "Haunted Mine", "Haunted Woods", "Harmony Island",
            "Mos Le'Harmless", "Braindeath Island", "Dragontooth Island",
        ],
    ),
    (
        "Fremennik",
        &[
            "Rellekka", "Neitiznot", "Jatizso", "Miscellania & Etceteria", "Waterbirth Island",
            "Lunar Isle", "Mountain Camp", "Lighthouse", "Keldagrim",
        ],
    ),
    (
        "Tirannwn",
        &[
            "Prifddinas", "Lletya", "Tyras Camp", "Elf Camp", "Isafdar", "Zul-Andra", "Arandar",
            "Gwenith", "Iorwerth Camp",
        ],
    ),
    (
        "Wilderness",
        &[
            "Ferox Enclave", "Wilderness Volcano", "Chaos Temple", "Rogues' Castle",
            "Lava Maze", "Bandit Camp", "Dark Warriors' Fortress", "Graveyard of Shadows",
            "Forgotten Cemetery", "Resource Area", "Mage Arena", "Scorpia's Cave",
            "Fountain of Rune", "Wilderness God Wars Dungeon",
        ],
    ),
    (
        "Kourend & Kebos",
        &[
            "Kourend Castle", "Hosidius", "Piscarilius", "Shayzien", "Lovakengj", "Arceuus",
            "Kebos Lowlands", "Molch", "Farming Guild", "Woodcutting Guild",
            "Mount Quidamortem", "Mount Karuulm", "Catacombs of Kourend", "Land's End",
            "Wintertodt Camp",
        ],
    ),
    (
        "Varlamore",
        &[
            "Civitas illa Fortis", "Avium Savannah", "Cam Torum", "Ralos' Rise", "Darkfrost",
            "Hunter's Guild", "Aldarin", "The Stranglewood",
        ],
    ),
    (
        "Islands & Others",
        &[
            "Fossil Island", "Ape Atoll", "Zanaris", "Tutorial Island",
        ],
    ),
    (
        "The Open Seas",
        &[
            "Pandemonium", "The Great Conch", "The Little Pearl", "Drumstick Isle",
            "Ledger Island", "Brittle Island", "Vatricos Island", "Laguna Auror",
            "Chin Champa Island", "Doggos Island", "Splinter Island", "Chard Island",
            "Grimstone", "Isle of Bones", "Minotaur's Rest", "The Pincers", "Barracuda Trials",
            "Crabclaw Isle", "Isle of Souls (Expanded)",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(TableKind::Skills.items().len(), 24);
        assert_eq!(TableKind::Equipment.items().len(), 11);
        assert_eq!(TableKind::Mobility.items().len(), 12);
        assert_eq!(TableKind::Arcana.items().len(), 14);
        assert_eq!(TableKind::Housing.items().len(), 12);
        assert_eq!(TableKind::Merchants.items().len(), 11);
        assert_eq!(TableKind::Storage.items().len(), 12);
        assert_eq!(TableKind::Bosses.items().len(), 59);
        assert_eq!(TableKind::Minigames.items().len(), 43);
    }

    #[test]
    fn regions_are_deduplicated() {
        let regions = TableKind::Regions.items();
        assert_eq!(regions.len(), 152);
        let camps = regions.iter().filter(|r| **r == "Bandit Camp").count();
        assert_eq!(camps, 1);
        assert_eq!(region_group("Bandit Camp"), Some("Kharidian Desert"));
    }

    #[test]
    fn starting_areas_not_in_pool() {
        for area in STARTING_AREAS {
            assert!(!TableKind::Regions.contains(area), "{area}");
        }
    }

    #[test]
    fn parse_tables() {
        assert_eq!(TableKind::parse("Skills"), Some(TableKind::Skills));
        assert_eq!(TableKind::parse("power"), Some(TableKind::Arcana));
        assert_eq!(TableKind::parse("POH"), Some(TableKind::Housing));
        assert_eq!(TableKind::parse("boss"), Some(TableKind::Bosses));
        assert_eq!(TableKind::parse("nothing"), None);
        for table in TableKind::all() {
            assert_eq!(TableKind::parse(table.key()), Some(*table));
            assert_eq!(TableKind::parse(&table.to_string()), Some(*table));
        }
    }

    #[test]
    fn find_item_ignores_case() {
        assert_eq!(TableKind::Bosses.find_item("zulrah"), Some("Zulrah"));
        assert_eq!(TableKind::Bosses.find_item("Castle Wars"), None);
    }

    #[test]
    fn tiers() {
        assert_eq!(TableKind::Skills.max_tier(), Some(10));
        assert_eq!(TableKind::Equipment.max_tier(), Some(9));
        assert!(!TableKind::Bosses.is_tiered());
    }

    #[test]
    fn level_caps() {
        assert_eq!(level_cap(0), 1);
        assert_eq!(level_cap(1), 10);
        assert_eq!(level_cap(7), 70);
        assert_eq!(level_cap(9), 90);
        assert_eq!(level_cap(10), 99);
    }

    #[test]
    fn wiki_image_tables() {
        assert!(TableKind::Bosses.wants_wiki_image());
        assert!(!TableKind::Skills.wants_wiki_image());
    }
}

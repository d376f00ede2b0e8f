//! The drop-source rate table.
//!
//! Each source has a success percentage for the Key roll and a rare
//! percentage for the Omni-Key sub-roll that follows a success.

use std::fmt;

/// Rare chance for a Grandmaster quest.
pub const GRANDMASTER_QUEST_RARE: u32 = 20;

/// Rare chance for an Elite diary.
pub const ELITE_DIARY_RARE: u32 = 10;

/// Rare chance for every other label, free-form ones included.
pub const DEFAULT_RARE: u32 = 2;

/// Label used for collection-log rolls.
pub const COLLECTION_LOG_LABEL: &str = "Collection Log Slot";

/// An activity with a fixed reward rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropSource {
    /// Novice quest.
    NoviceQuest,
    /// Intermediate quest.
    IntermediateQuest,
    /// Experienced quest.
    ExperiencedQuest,
    /// Master quest.
    MasterQuest,
    /// Grandmaster quest.
    GrandmasterQuest,
    /// Easy combat achievement.
    EasyCombatAchievement,
    /// Medium combat achievement.
    MediumCombatAchievement,
    /// Hard combat achievement.
    HardCombatAchievement,
    /// Elite combat achievement.
    EliteCombatAchievement,
    /// Master combat achievement.
    MasterCombatAchievement,
    /// Grandmaster combat achievement.
    GrandmasterCombatAchievement,
    /// A new collection-log slot.
    CollectionLog,
    /// Easy achievement diary.
    EasyDiary,
    /// Medium achievement diary.
    MediumDiary,
    /// Hard achievement diary.
    HardDiary,
    /// Elite achievement diary.
    EliteDiary,
    /// A completed slayer task.
    SlayerTask,
    /// Beginner clue scroll.
    BeginnerClue,
    /// Easy clue scroll.
    EasyClue,
    /// Medium clue scroll.
    MediumClue,
    /// Hard clue scroll.
    HardClue,
    /// Elite clue scroll.
    EliteClue,
    /// Master clue scroll.
    MasterClue,
}

impl DropSource {
    /// All sources, in rate-table order.
    pub fn all() -> &'static [Self] {
        &[
            Self::NoviceQuest,
            Self::IntermediateQuest,
            Self::ExperiencedQuest,
            Self::MasterQuest,
            Self::GrandmasterQuest,
            Self::EasyCombatAchievement,
            Self::MediumCombatAchievement,
            Self::HardCombatAchievement,
            Self::EliteCombatAchievement,
            Self::MasterCombatAchievement,
            Self::GrandmasterCombatAchievement,
            Self::CollectionLog,
            Self::EasyDiary,
            Self::MediumDiary,
            Self::HardDiary,
            Self::EliteDiary,
            Self::SlayerTask,
            Self::BeginnerClue,
            Self::EasyClue,
            Self::MediumClue,
            Self::HardClue,
            Self::EliteClue,
            Self::MasterClue,
        ]
    }

    /// The label written to the log.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoviceQuest => "Novice Quest",
            Self::IntermediateQuest => "Intermediate Quest",
            Self::ExperiencedQuest => "Experienced Quest",
            Self::MasterQuest => "Master Quest",
            Self::GrandmasterQuest => "Grandmaster Quest",
            Self::EasyCombatAchievement => "Easy Combat Achievement",
            Self::MediumCombatAchievement => "Medium Combat Achievement",
            Self::HardCombatAchievement => "Hard Combat Achievement",
            Self::EliteCombatAchievement => "Elite Combat Achievement",
            Self::MasterCombatAchievement => "Master Combat Achievement",
            Self::GrandmasterCombatAchievement => "Grandmaster Combat Achievement",
            Self::CollectionLog => COLLECTION_LOG_LABEL,
            Self::EasyDiary => "Easy Diary",
            Self::MediumDiary => "Medium Diary",
            Self::HardDiary => "Hard Diary",
            Self::EliteDiary => "Elite Diary",
            Self::SlayerTask => "Slayer Task",
            Self::BeginnerClue => "Beginner Clue Scroll",
            Self::EasyClue => "Easy Clue Scroll",
            Self::MediumClue => "Medium Clue Scroll",
            Self::HardClue => "Hard Clue Scroll",
            Self::EliteClue => "Elite Clue Scroll",
            Self::MasterClue => "Master Clue Scroll",
        }
    }

    /// Success percentage for the Key roll.
    pub fn threshold(self) -> u32 {
        match self {
            Self::NoviceQuest => 25,
            Self::IntermediateQuest => 50,
            Self::ExperiencedQuest => 75,
            Self::MasterQuest | Self::GrandmasterQuest => 100,
            Self::EasyCombatAchievement => 2,
            Self::MediumCombatAchievement => 5,
            Self::HardCombatAchievement => 10,
            Self::EliteCombatAchievement => 25,
            Self::MasterCombatAchievement => 50,
            Self::GrandmasterCombatAchievement => 100,
            Self::CollectionLog => 5,
            Self::EasyDiary => 33,
            Self::MediumDiary => 66,
            Self::HardDiary | Self::EliteDiary => 100,
            Self::SlayerTask => 20,
            Self::BeginnerClue => 5,
            Self::EasyClue => 10,
            Self::MediumClue => 20,
            Self::HardClue => 35,
            Self::EliteClue => 65,
            Self::MasterClue => 100,
        }
    }

    /// Rare (Omni-Key) percentage after a success.
    pub fn rare_chance(self) -> u32 {
        rare_chance_for_label(self.label())
    }

    /// Parse a source. Case, dashes, and underscores are ignored, and
    /// `ca`, `clue`, `slayer`, and `clog` work as short forms.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let expanded = match normalized.as_str() {
            "slayer" => "slayer task".to_string(),
            "clog" | "collection log" => COLLECTION_LOG_LABEL.to_lowercase(),
            other => {
                if let Some(tier) = other.strip_suffix(" ca") {
                    format!("{tier} combat achievement")
                } else if let Some(tier) = other.strip_suffix(" clue") {
                    format!("{tier} clue scroll")
                } else {
                    other.to_string()
                }
            }
        };
        Self::all()
            .iter()
            .copied()
            .find(|source| source.label().to_lowercase() == expanded)
    }

    /// Look a source up by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }
}

impl fmt::Display for DropSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rare percentage for any roll label: 20 for a Grandmaster quest, 10 for
/// an Elite diary, 2 for everything else.
pub fn rare_chance_for_label(label: &str) -> u32 {
    match label {
        "Grandmaster Quest" => GRANDMASTER_QUEST_RARE,
        "Elite Diary" => ELITE_DIARY_RARE,
        _ => DEFAULT_RARE,
    }
}

/// Key-roll threshold for reaching a skill level: `ceil(level / 3)`.
pub fn level_up_threshold(level: u32) -> u32 {
    level.div_ceil(3).clamp(1, 100)
}

/// Label for a skill level-up roll.
pub fn level_up_label(skill: &str, level: u32) -> String {
    format!("{skill} Level {level}")
}

/// One line per source: label, success chance, rare chance.
pub fn describe_rates() -> String {
    DropSource::all()
        .iter()
        .map(|s| format!("{}: {}% (rare {}%)\n", s.label(), s.threshold(), s.rare_chance()))
        .collect()
}

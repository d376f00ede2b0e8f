//! Skill level-ups.
//!
//! Levelling an unlocked skill raises its displayed level by one, rolls for a
//! Key at `ceil(level / 3)`, and pays a Chaos Key whenever the total level
//! crosses a multiple of 50.

use fl_core::{Currency, GameState, LogEntry, TableKind};
use log::info;

use crate::draw::Draw;
use crate::error::{EngineError, EngineResult};
use crate::rates::{level_up_label, level_up_threshold};
use crate::roll::{RollReport, resolve};

/// Total-level interval that pays a Chaos Key.
pub const MILESTONE_INTERVAL: u32 = 50;

/// Result of a level-up attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelUp {
    /// The skill is already at the cap of its tier. Nothing happened.
    AtCap {
        /// The capped level.
        level: u32,
    },
    /// The level went up and a roll was made.
    Raised(LevelUpReport),
}

/// What a successful level-up did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpReport {
    /// Canonical skill name.
    pub skill: &'static str,
    /// The new level.
    pub level: u32,
    /// The Key roll made for the new level.
    pub roll: RollReport,
    /// Total level reached, when it crossed a milestone.
    pub milestone: Option<u32>,
}

/// Raise `skill` by one level.
pub fn level_up(state: &mut GameState, draw: &mut dyn Draw, skill: &str) -> EngineResult<LevelUp> {
    let Some(skill) = TableKind::Skills.find_item(skill) else {
        return Err(EngineError::UnknownSkill(skill.to_string()));
    };
    if !state.unlocks.is_unlocked(TableKind::Skills, skill) {
        return Err(EngineError::SkillLocked(skill.to_string()));
    }

    let current = state.unlocks.level(skill);
    if current >= state.unlocks.skill_cap(skill) {
        return Ok(LevelUp::AtCap { level: current });
    }

    let previous_total = state.unlocks.total_level();
    let level = state.unlocks.set_level(skill, current + 1);
    let total = state.unlocks.total_level();

    let roll = resolve(
        state,
        draw,
        &level_up_label(skill, level),
        level_up_threshold(level),
    )?;

    let milestone = if total / MILESTONE_INTERVAL > previous_total / MILESTONE_INTERVAL {
        state.wallet.credit(Currency::ChaosKey, 1);
        state.journal.append(
            LogEntry::ritual("Total Level Milestone!")
                .with_details(format!("Level {total} reached. +1 Chaos Key awarded!")),
        );
        info!("total level milestone at {total}");
        Some(total)
    } else {
        None
    };

    Ok(LevelUp::Raised(LevelUpReport {
        skill,
        level,
        roll,
        milestone,
    }))
}

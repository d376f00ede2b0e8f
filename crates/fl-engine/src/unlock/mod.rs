//! Unlock pool selection and commit.
//!
//! Selection picks what to unlock and what it costs without touching state.
//! The result is staged as a [`PendingUnlock`] and only [`commit`] debits the
//! currency and applies the unlock.

pub mod pending;

use std::fmt;

use fl_core::{Currency, GameState, TableKind, UnlockChange, UnlockRecord};
use log::{debug, info};

use crate::draw::{Draw, pick};
use crate::error::{EngineError, EngineResult};

pub use pending::{ImageRequest, PendingUnlock, static_image, wiki_title};

/// Skill tier from which the next tier costs two Keys.
pub const DOUBLE_COST_FROM_TIER: u32 = 7;

/// The currency an unlock is paid with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCost {
    /// Regular Keys: 1, or 2 for skill tiers 8 to 10.
    Keys(u32),
    /// One Omni-Key.
    SpecialKey,
    /// One Chaos Key.
    ChaosKey,
}

impl UnlockCost {
    /// Currency debited on commit.
    pub fn currency(self) -> Currency {
        match self {
            Self::Keys(_) => Currency::Key,
            Self::SpecialKey => Currency::SpecialKey,
            Self::ChaosKey => Currency::ChaosKey,
        }
    }

    /// Amount debited on commit.
    pub fn amount(self) -> u32 {
        match self {
            Self::Keys(n) => n,
            Self::SpecialKey | Self::ChaosKey => 1,
        }
    }
}

impl fmt::Display for UnlockCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keys(1) => write!(f, "1 Key"),
            Self::Keys(n) => write!(f, "{n} Keys"),
            Self::SpecialKey => write!(f, "1 Omni-Key"),
            Self::ChaosKey => write!(f, "1 Chaos Key"),
        }
    }
}

/// A chosen item and its price, not yet paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Table the item belongs to.
    pub table: TableKind,
    /// Canonical item name.
    pub item: &'static str,
    /// What committing will cost.
    pub cost: UnlockCost,
}

/// Keys needed to unlock the next tier of `item` (or the item itself).
pub fn key_cost(record: &UnlockRecord, table: TableKind, item: &str) -> u32 {
    if table == TableKind::Skills && record.tier(table, item) >= DOUBLE_COST_FROM_TIER {
        2
    } else {
        1
    }
}

/// Items a Key spend could draw right now, given the Key balance.
pub fn key_pool(state: &GameState, table: TableKind) -> Vec<&'static str> {
    let keys = state.wallet.keys();
    state
        .unlocks
        .eligible(table)
        .into_iter()
        .filter(|item| key_cost(&state.unlocks, table, item) <= keys)
        .collect()
}

/// Draw a random eligible item from `table`, paid in Keys.
pub fn select_for_key_unlock(
    state: &GameState,
    draw: &mut dyn Draw,
    table: TableKind,
) -> EngineResult<Selection> {
    let available = state.wallet.keys();
    if available == 0 {
        return Err(EngineError::InsufficientKeys {
            needed: 1,
            available,
        });
    }
    if !state.unlocks.can_unlock(table) {
        return Err(EngineError::TableExhausted(table));
    }

    let pool = key_pool(state, table);
    let Some(item) = pick(draw, &pool).copied() else {
        return Err(EngineError::TierNeedsTwoKeys);
    };
    let cost = UnlockCost::Keys(key_cost(&state.unlocks, table, item));
    debug!("key unlock drew {item} from {} candidates in {table}", pool.len());
    Ok(Selection { table, item, cost })
}

/// Choose a specific item, paid with an Omni-Key.
pub fn select_for_special_unlock(
    state: &GameState,
    table: TableKind,
    item: &str,
) -> EngineResult<Selection> {
    if state.wallet.special_keys() == 0 {
        return Err(EngineError::InsufficientSpecialKeys);
    }
    let Some(canonical) = table.find_item(item) else {
        return Err(EngineError::UnknownItem {
            table,
            item: item.to_string(),
        });
    };
    if !state.unlocks.is_eligible(table, canonical) {
        return Err(EngineError::ItemNotEligible {
            table,
            item: canonical.to_string(),
        });
    }
    Ok(Selection {
        table,
        item: canonical,
        cost: UnlockCost::SpecialKey,
    })
}

/// Draw a random table, then a random item in it, paid with a Chaos Key.
///
/// Only tables with at least one eligible item take part in the table draw.
/// A table that turns out empty is dropped and the table draw repeats, so
/// the loop runs at most once per table.
pub fn select_for_chaos_unlock(state: &GameState, draw: &mut dyn Draw) -> EngineResult<Selection> {
    if state.wallet.chaos_keys() == 0 {
        return Err(EngineError::InsufficientChaosKeys);
    }

    let mut tables: Vec<TableKind> = TableKind::all()
        .iter()
        .copied()
        .filter(|table| state.unlocks.can_unlock(*table))
        .collect();

    loop {
        let Some(table) = pick(draw, &tables).copied() else {
            return Err(EngineError::NothingLeftToUnlock);
        };
        let pool = state.unlocks.eligible(table);
        match pick(draw, &pool).copied() {
            Some(item) => {
                debug!("chaos unlock drew {item} from {table}");
                return Ok(Selection {
                    table,
                    item,
                    cost: UnlockCost::ChaosKey,
                });
            }
            None => tables.retain(|t| *t != table),
        }
    }
}

/// Pay for and apply a selection.
///
/// Funds and eligibility are checked again first; a selection that is no
/// longer valid is refused and nothing changes.
pub fn commit(state: &mut GameState, selection: &Selection) -> EngineResult<UnlockChange> {
    let Selection { table, item, cost } = *selection;

    if !state.unlocks.is_eligible(table, item) {
        return Err(EngineError::ItemNotEligible {
            table,
            item: item.to_string(),
        });
    }
    let available = state.wallet.balance(cost.currency());
    if available < cost.amount() {
        return Err(match cost {
            UnlockCost::Keys(needed) => EngineError::InsufficientKeys { needed, available },
            UnlockCost::SpecialKey => EngineError::InsufficientSpecialKeys,
            UnlockCost::ChaosKey => EngineError::InsufficientChaosKeys,
        });
    }

    state.wallet.debit(cost.currency(), cost.amount());
    let change = state.unlocks.apply(table, item);
    info!("unlocked {item} in {table} for {cost}");
    Ok(change)
}

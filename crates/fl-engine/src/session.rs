//! The game session.
//!
//! `FateSession` owns the state aggregate and is its only writer. Every
//! action is one method call: it checks preconditions, mutates the state,
//! logs, and queues a [`GameEvent`].

use std::mem;

use fl_core::document;
use fl_core::{GameState, TableKind, UnlockChange};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::draw::{Draw, RngDraw};
use crate::error::{EngineError, EngineResult};
use crate::event::GameEvent;
use crate::level::{self, LevelUp};
use crate::lookup::{ImageLookup, StatsSource};
use crate::rates::DropSource;
use crate::ritual::{Ritual, RitualEffect};
use crate::roll::{self, RollReport};
use crate::stats::Statistics;
use crate::store::StateStore;
use crate::sync::{self, StatsSnapshot, SyncDiff, SyncPlan, SyncReport};
use crate::unlock::{self, PendingUnlock, Selection};

struct PendingSync {
    player: String,
    diff: SyncDiff,
    snapshot: StatsSnapshot,
}

/// A single-writer game session.
pub struct FateSession {
    state: GameState,
    draw: Box<dyn Draw>,
    config: EngineConfig,
    pending: Option<PendingUnlock>,
    pending_sync: Option<PendingSync>,
    events: Vec<GameEvent>,
    recovered: bool,
}

impl FateSession {
    /// A session over a fresh game.
    pub fn new(config: EngineConfig) -> Self {
        let state = GameState::new(config.starting_keys);
        Self::with_state(state, config)
    }

    /// A session over an existing state.
    pub fn with_state(state: GameState, config: EngineConfig) -> Self {
        let draw = Box::new(RngDraw::new(config.seed));
        Self {
            state,
            draw,
            config,
            pending: None,
            pending_sync: None,
            events: Vec::new(),
            recovered: false,
        }
    }

    /// Replace the draw source.
    pub fn with_draw(mut self, draw: impl Draw + 'static) -> Self {
        self.draw = Box::new(draw);
        self
    }

    /// Load from a store. A missing document starts a fresh game; a
    /// malformed one is logged and also starts a fresh game.
    pub fn load(store: &dyn StateStore, config: EngineConfig) -> EngineResult<Self> {
        let mut recovered = false;
        let state = match store.load()? {
            Some(text) => match document::from_json(&text) {
                Ok(state) => state,
                Err(e) => {
                    warn!("save document unreadable, starting fresh: {e}");
                    recovered = true;
                    GameState::new(config.starting_keys)
                }
            },
            None => {
                debug!("no save document, starting fresh");
                GameState::new(config.starting_keys)
            }
        };
        let mut session = Self::with_state(state, config);
        session.recovered = recovered;
        Ok(session)
    }

    /// Whether [`load`](Self::load) found an unreadable document and
    /// started a fresh game in its place.
    pub fn recovered(&self) -> bool {
        self.recovered
    }

    /// Write the state to a store.
    pub fn save(&self, store: &dyn StateStore) -> EngineResult<()> {
        store.save(&self.export_json()?)
    }

    /// The state aggregate.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The unlock waiting for confirmation.
    pub fn pending(&self) -> Option<&PendingUnlock> {
        self.pending.as_ref()
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Roll for a fixed-rate activity.
    pub fn roll_source(&mut self, source: DropSource) -> EngineResult<RollReport> {
        self.roll(source.label(), source.threshold())
    }

    /// Roll for an activity given by label, looked up in the rate table.
    pub fn roll_label(&mut self, label: &str) -> EngineResult<RollReport> {
        let source =
            DropSource::parse(label).ok_or_else(|| EngineError::UnknownSource(label.to_string()))?;
        self.roll_source(source)
    }

    /// Roll for a free-form label against an explicit threshold.
    pub fn roll(&mut self, label: &str, threshold: u32) -> EngineResult<RollReport> {
        let report = roll::resolve(&mut self.state, self.draw.as_mut(), label, threshold)?;
        self.push_roll(&report);
        Ok(report)
    }

    /// Perform a ritual at the altar.
    pub fn perform_ritual(&mut self, ritual: Ritual) -> EngineResult<RitualEffect> {
        let effect = ritual.perform(&mut self.state)?;
        self.events.push(GameEvent::RitualPerformed(ritual));
        Ok(effect)
    }

    /// Level a skill up, rolling for the new level.
    pub fn level_up(&mut self, skill: &str) -> EngineResult<LevelUp> {
        let result = level::level_up(&mut self.state, self.draw.as_mut(), skill)?;
        if let LevelUp::Raised(report) = &result {
            self.push_roll(&report.roll);
            self.events.push(GameEvent::LevelRaised {
                skill: report.skill.to_string(),
                level: report.level,
            });
            if let Some(total) = report.milestone {
                self.events.push(GameEvent::MilestoneReached(total));
            }
        }
        Ok(result)
    }

    /// Stage a random unlock from `table`, paid in Keys.
    pub fn stage_key_unlock(&mut self, table: TableKind) -> EngineResult<&PendingUnlock> {
        self.ensure_nothing_pending()?;
        let selection = unlock::select_for_key_unlock(&self.state, self.draw.as_mut(), table)?;
        Ok(self.stage(selection))
    }

    /// Stage a chosen unlock, paid with an Omni-Key.
    pub fn stage_special_unlock(
        &mut self,
        table: TableKind,
        item: &str,
    ) -> EngineResult<&PendingUnlock> {
        self.ensure_nothing_pending()?;
        let selection = unlock::select_for_special_unlock(&self.state, table, item)?;
        Ok(self.stage(selection))
    }

    /// Stage a random unlock from a random table, paid with a Chaos Key.
    pub fn stage_chaos_unlock(&mut self) -> EngineResult<&PendingUnlock> {
        self.ensure_nothing_pending()?;
        let selection = unlock::select_for_chaos_unlock(&self.state, self.draw.as_mut())?;
        Ok(self.stage(selection))
    }

    /// Apply a thumbnail to the pending unlock if it is still the one the
    /// lookup was issued for. Returns whether it was applied.
    pub fn apply_image(&mut self, pending_id: Uuid, url: impl Into<String>) -> bool {
        let applied = self
            .pending
            .as_mut()
            .is_some_and(|p| p.apply_image(pending_id, url.into()));
        if applied {
            self.events.push(GameEvent::ImageResolved(pending_id));
        } else {
            debug!("discarding stale image for {pending_id}");
        }
        applied
    }

    /// Run the pending unlock's thumbnail lookup, if it wants one. Lookup
    /// failures leave the unlock without an image.
    pub fn enrich_pending(&mut self, lookup: &dyn ImageLookup) -> bool {
        let Some(request) = self.pending.as_ref().and_then(PendingUnlock::image_request) else {
            return false;
        };
        match lookup.thumbnail(&request.title) {
            Ok(Some(url)) => self.apply_image(request.pending_id, url),
            Ok(None) => false,
            Err(e) => {
                warn!("image lookup for \"{}\" failed: {e}", request.title);
                false
            }
        }
    }

    /// Pay for and apply the pending unlock. On failure the unlock stays
    /// staged.
    pub fn confirm_unlock(&mut self) -> EngineResult<UnlockChange> {
        let Some(pending) = self.pending.as_ref() else {
            return Err(EngineError::NoPendingUnlock);
        };
        let selection = pending.selection;
        let change = unlock::commit(&mut self.state, &selection)?;
        self.pending = None;
        self.events.push(GameEvent::UnlockCommitted {
            table: selection.table,
            item: selection.item.to_string(),
            change: change.clone(),
        });
        Ok(change)
    }

    /// Fetch stats for `player` and work out what a sync would do. A first
    /// sync records the baseline right away.
    pub fn prepare_sync(
        &mut self,
        source: &dyn StatsSource,
        player: &str,
    ) -> EngineResult<SyncPlan> {
        let snapshot = source.fetch(player)?;
        let first_sync = !self.state.sync.has_baseline()
            || self.state.sync.player.as_deref() != Some(player);
        if first_sync {
            sync::record_baseline(&mut self.state.sync, player, &snapshot);
            self.pending_sync = None;
            info!("recorded stats baseline for {player}");
            self.events.push(GameEvent::SyncCompleted { rolls: 0 });
            return Ok(SyncPlan::Baseline);
        }

        let diff = SyncDiff::compute(&self.state.sync, &snapshot);
        if diff.is_empty() {
            return Err(EngineError::NothingToSync);
        }
        self.pending_sync = Some(PendingSync {
            player: player.to_string(),
            diff: diff.clone(),
            snapshot,
        });
        Ok(SyncPlan::Changes(diff))
    }

    /// Replay the prepared sync.
    pub fn confirm_sync(&mut self) -> EngineResult<SyncReport> {
        let Some(pending) = self.pending_sync.take() else {
            return Err(EngineError::NothingToSync);
        };
        let report = sync::replay(
            &mut self.state,
            self.draw.as_mut(),
            &pending.player,
            &pending.diff,
            &pending.snapshot,
        )?;
        for roll in &report.rolls {
            self.push_roll(roll);
        }
        info!(
            "sync for {} made {} rolls, +{} Keys",
            pending.player,
            report.rolls.len(),
            report.keys_gained
        );
        self.events.push(GameEvent::SyncCompleted {
            rolls: report.rolls.len(),
        });
        Ok(report)
    }

    /// Luck statistics over the whole log.
    pub fn statistics(&self) -> Statistics {
        Statistics::from_journal(&self.state.journal)
    }

    /// Start over from the initial state.
    pub fn reset(&mut self) {
        self.replace_state(GameState::new(self.config.starting_keys));
        info!("progress reset");
    }

    /// The state as a save document.
    pub fn export_json(&self) -> EngineResult<String> {
        Ok(document::to_json(&self.state)?)
    }

    /// Replace the state with an imported document. A malformed document
    /// is refused and the current state is kept.
    pub fn import_json(&mut self, text: &str) -> EngineResult<()> {
        let state = document::from_json(text)?;
        self.replace_state(state);
        info!("imported save document");
        Ok(())
    }

    fn replace_state(&mut self, state: GameState) {
        self.state = state;
        self.pending = None;
        self.pending_sync = None;
        self.events.push(GameEvent::StateReplaced);
    }

    fn ensure_nothing_pending(&self) -> EngineResult<()> {
        match &self.pending {
            Some(pending) => Err(EngineError::UnlockAlreadyPending(pending.item().to_string())),
            None => Ok(()),
        }
    }

    fn stage(&mut self, selection: Selection) -> &PendingUnlock {
        let pending = PendingUnlock::new(selection, &self.config.wiki_base);
        debug!("staged {} from {} ({})", pending.item(), pending.table(), pending.cost());
        self.events.push(GameEvent::UnlockStaged {
            id: pending.id,
            table: pending.table(),
            item: pending.item().to_string(),
        });
        self.pending.insert(pending)
    }

    fn push_roll(&mut self, report: &RollReport) {
        self.events.push(GameEvent::RollResolved {
            source: report.source.clone(),
            roll: report.roll,
            threshold: report.threshold,
            outcome: report.outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ScriptedDraw;
    use crate::lookup::{LookupError, NoLookup};
    use crate::roll::RollOutcome;
    use crate::store::MemoryStore;
    use fl_core::{Currency, RitualBuff};
    use std::collections::BTreeMap;

    fn session(values: &[u32]) -> FateSession {
        FateSession::new(EngineConfig::default().with_seed(1))
            .with_draw(ScriptedDraw::new(values.iter().copied()))
    }

    struct FixedStats(StatsSnapshot);

    impl StatsSource for FixedStats {
        fn fetch(&self, _player: &str) -> Result<StatsSnapshot, LookupError> {
            Ok(self.0.clone())
        }
    }

    struct Offline;

    impl StatsSource for Offline {
        fn fetch(&self, player: &str) -> Result<StatsSnapshot, LookupError> {
            Err(LookupError::Unavailable(player.to_string()))
        }
    }

    fn stats(levels: &[(&str, u32)], clog: u32) -> FixedStats {
        FixedStats(StatsSnapshot {
            skills: levels.iter().map(|(s, l)| (s.to_string(), *l)).collect::<BTreeMap<_, _>>(),
            collection_log: clog,
        })
    }

    #[test]
    fn fresh_session() {
        let s = session(&[]);
        assert_eq!(s.state().wallet.keys(), 3);
        assert!(s.pending().is_none());
        assert_eq!(s.statistics().total_rolls, 0);
    }

    #[test]
    fn roll_by_label() {
        let mut s = session(&[15, 100]);
        let report = s.roll_label("slayer").unwrap();
        assert_eq!(report.outcome, RollOutcome::Success { keys: 1 });
        assert_eq!(s.state().wallet.keys(), 4);
        assert!(matches!(
            s.drain_events().as_slice(),
            [GameEvent::RollResolved { roll: 15, threshold: 20, .. }]
        ));
        assert!(s.drain_events().is_empty());
        assert!(matches!(
            s.roll_label("raid"),
            Err(EngineError::UnknownSource(_))
        ));
    }

    #[test]
    fn greed_then_roll() {
        let mut s = session(&[10, 100]);
        s.state.wallet.fate = fl_core::FatePoints::new(20);
        s.perform_ritual(Ritual::Greed).unwrap();
        assert_eq!(s.state().buff, RitualBuff::Greed);
        let report = s.roll_source(DropSource::SlayerTask).unwrap();
        assert_eq!(report.outcome, RollOutcome::Success { keys: 2 });
        assert_eq!(s.state().wallet.keys(), 5);
        assert_eq!(s.state().buff, RitualBuff::None);
    }

    #[test]
    fn stage_then_confirm() {
        let mut s = session(&[1]);
        let pending = s.stage_key_unlock(TableKind::Bosses).unwrap();
        assert_eq!(pending.item(), "Chambers of Xeric");
        assert!(pending.image_request().is_some());
        // Staging spends nothing.
        assert_eq!(s.state().wallet.keys(), 3);

        let change = s.confirm_unlock().unwrap();
        assert_eq!(change, UnlockChange::Unlocked);
        assert_eq!(s.state().wallet.keys(), 2);
        assert!(s.pending().is_none());
        assert!(
            s.state()
                .unlocks
                .is_unlocked(TableKind::Bosses, "Chambers of Xeric")
        );
    }

    #[test]
    fn second_stage_refused_while_pending() {
        let mut s = session(&[1, 1]);
        s.stage_key_unlock(TableKind::Regions).unwrap();
        assert!(matches!(
            s.stage_key_unlock(TableKind::Bosses),
            Err(EngineError::UnlockAlreadyPending(_))
        ));
    }

    #[test]
    fn confirm_without_pending() {
        let mut s = session(&[]);
        assert!(matches!(
            s.confirm_unlock(),
            Err(EngineError::NoPendingUnlock)
        ));
    }

    #[test]
    fn failed_confirm_keeps_pending() {
        let mut s = session(&[1]);
        s.state.wallet.credit(Currency::SpecialKey, 1);
        s.stage_special_unlock(TableKind::Bosses, "Zulrah").unwrap();
        assert!(s.state.wallet.debit(Currency::SpecialKey, 1));
        assert!(matches!(
            s.confirm_unlock(),
            Err(EngineError::InsufficientSpecialKeys)
        ));
        assert!(s.pending().is_some());
    }

    #[test]
    fn image_enrichment_checks_identity() {
        let mut s = session(&[1]);
        let id = s.stage_key_unlock(TableKind::Bosses).unwrap().id;
        assert!(!s.apply_image(Uuid::new_v4(), "https://stale.png"));
        assert_eq!(s.pending().and_then(|p| p.image.clone()), None);

        let lookup = |title: &str| Ok::<_, LookupError>(Some(format!("https://wiki/{title}.png")));
        assert!(s.enrich_pending(&lookup));
        assert_eq!(
            s.pending().and_then(|p| p.image.clone()).as_deref(),
            Some("https://wiki/Chambers of Xeric.png")
        );
        assert!(s.drain_events().contains(&GameEvent::ImageResolved(id)));
    }

    #[test]
    fn failed_lookup_is_harmless() {
        let mut s = session(&[1]);
        s.stage_key_unlock(TableKind::Storage).unwrap();
        let failing = |_: &str| -> Result<Option<String>, LookupError> {
            Err(LookupError::Unavailable("offline".into()))
        };
        assert!(!s.enrich_pending(&failing));
        assert!(!s.enrich_pending(&NoLookup));
        assert!(s.pending().and_then(|p| p.image.clone()).is_some());
        s.confirm_unlock().unwrap();
    }

    #[test]
    fn chaos_unlock_through_session() {
        let mut s = session(&[1, 1]);
        s.state.wallet.credit(Currency::ChaosKey, 1);
        let pending = s.stage_chaos_unlock().unwrap();
        assert_eq!(pending.table(), TableKind::Skills);
        assert_eq!(pending.item(), "Attack");
        s.confirm_unlock().unwrap();
        assert_eq!(s.state().wallet.chaos_keys(), 0);
        assert_eq!(s.state().unlocks.tier(TableKind::Skills, "Attack"), 1);
    }

    #[test]
    fn level_up_emits_events() {
        let mut s = session(&[100]);
        s.state.unlocks.apply(TableKind::Skills, "Attack");
        s.level_up("Attack").unwrap();
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::LevelRaised {
            skill: "Attack".to_string(),
            level: 2
        }));
    }

    #[test]
    fn first_sync_records_baseline_only() {
        let mut s = session(&[]);
        let plan = s
            .prepare_sync(&stats(&[("Attack", 40)], 12), "Zezima")
            .unwrap();
        assert_eq!(plan, SyncPlan::Baseline);
        assert!(s.state().journal.is_empty());
        assert_eq!(s.state().sync.tracked_levels.get("Attack"), Some(&40));
        assert!(matches!(s.confirm_sync(), Err(EngineError::NothingToSync)));
    }

    #[test]
    fn sync_replays_gains() {
        let mut s = session(&[]);
        s.prepare_sync(&stats(&[("Attack", 40)], 12), "Zezima").unwrap();
        let plan = s
            .prepare_sync(&stats(&[("Attack", 42)], 13), "Zezima")
            .unwrap();
        let SyncPlan::Changes(diff) = plan else {
            panic!("expected changes");
        };
        assert_eq!(diff.roll_count(), 3);

        let report = s.confirm_sync().unwrap();
        assert_eq!(report.rolls.len(), 3);
        assert_eq!(s.state().journal.rolls().count(), 3);
        assert!(matches!(
            s.prepare_sync(&stats(&[("Attack", 42)], 13), "Zezima"),
            Err(EngineError::NothingToSync)
        ));
    }

    #[test]
    fn sync_fetch_failure_changes_nothing() {
        let mut s = session(&[]);
        let before = s.state().clone();
        assert!(matches!(
            s.prepare_sync(&Offline, "Zezima"),
            Err(EngineError::Lookup(_))
        ));
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn import_replaces_state() {
        let mut s = session(&[]);
        s.import_json(r#"{"keys": 9, "unlocks": {"content": ["Zulrah", "Castle Wars"]}}"#)
            .unwrap();
        assert_eq!(s.state().wallet.keys(), 9);
        assert_eq!(s.state().unlocks.unlocked(TableKind::Bosses), ["Zulrah"]);
        assert_eq!(
            s.state().unlocks.unlocked(TableKind::Minigames),
            ["Castle Wars"]
        );
    }

    #[test]
    fn malformed_import_keeps_state() {
        let mut s = session(&[]);
        s.import_json(r#"{"keys": 9}"#).unwrap();
        let before = s.state().clone();
        assert!(s.import_json("{ not json").is_err());
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut s = session(&[1]);
        s.stage_key_unlock(TableKind::Regions).unwrap();
        s.confirm_unlock().unwrap();
        s.reset();
        assert_eq!(s.state(), &GameState::default());
        assert!(s.pending().is_none());
    }

    #[test]
    fn save_and_load() {
        let store = MemoryStore::default();
        let mut s = session(&[50, 100]);
        s.roll("Attack Level 50", 17).unwrap();
        s.save(&store).unwrap();

        let loaded = FateSession::load(&store, EngineConfig::default()).unwrap();
        assert_eq!(loaded.state().wallet.fate.value(), 1);
        assert_eq!(loaded.state().journal.len(), 1);
    }

    #[test]
    fn unreadable_save_starts_fresh() {
        let store = MemoryStore::with_document("garbage");
        let s = FateSession::load(&store, EngineConfig::default().with_starting_keys(5)).unwrap();
        assert_eq!(s.state().wallet.keys(), 5);
        assert!(s.recovered());
    }

    #[test]
    fn readable_save_is_not_recovered() {
        let store = MemoryStore::with_document(r#"{"keys": 4}"#);
        let s = FateSession::load(&store, EngineConfig::default()).unwrap();
        assert_eq!(s.state().wallet.keys(), 4);
        assert!(!s.recovered());
        let fresh = FateSession::load(&MemoryStore::default(), EngineConfig::default()).unwrap();
        assert!(!fresh.recovered());
    }
}

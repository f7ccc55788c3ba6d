//! Undo/Redo history of card snapshots.
//!
//! History is a linear list of full `CardSettings` snapshots plus a cursor
//! pointing at the entry currently shown. `current` may run ahead of the
//! cursor entry while a live (debounced) edit is in progress; it is only
//! recorded when an immediate update or [`HistoryStore::commit`] happens.
//!
//! Invariants: `history` is never empty, `cursor < history.len()`,
//! `can_undo() == (cursor > 0)`, `can_redo() == (cursor < len - 1)`.

use cf_core::model::{CardSettings, CardUpdate};

/// Default maximum number of snapshots kept.
pub const DEFAULT_MAX_DEPTH: usize = 200;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    current: CardSettings,
    history: Vec<CardSettings>,
    cursor: usize,
    /// Maximum number of snapshots, including the oldest one.
    max_depth: usize,
}

impl HistoryStore {
    pub fn new(initial: CardSettings) -> Self {
        Self::with_capacity(initial, DEFAULT_MAX_DEPTH)
    }

    /// A store keeping at most `max_depth` snapshots (at least one).
    pub fn with_capacity(initial: CardSettings, max_depth: usize) -> Self {
        let initial = initial.normalized();
        let max_depth = max_depth.max(1);
        let mut history = Vec::with_capacity(max_depth.min(64));
        history.push(initial.clone());
        Self {
            current: initial,
            history,
            cursor: 0,
            max_depth,
        }
    }

    pub fn current(&self) -> &CardSettings {
        &self.current
    }

    pub fn history(&self) -> &[CardSettings] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; the initial snapshot is never dropped.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether `current` differs from the snapshot at the cursor.
    pub fn has_uncommitted(&self) -> bool {
        self.current != self.history[self.cursor]
    }

    /// Merge `patch` onto `current`. When `immediate`, the result becomes a
    /// new history entry and any redo tail is discarded.
    pub fn update(&mut self, patch: &CardUpdate, immediate: bool) -> &CardSettings {
        let next = self.current.apply(patch);
        self.set(next, immediate)
    }

    /// Replace `current` wholesale (e.g. after an import).
    pub fn set(&mut self, settings: CardSettings, immediate: bool) -> &CardSettings {
        self.current = settings;
        if immediate {
            self.push_current();
        }
        &self.current
    }

    /// Record the live `current` as a history entry. Does nothing when it
    /// already matches the cursor entry. Returns whether an entry was added.
    pub fn commit(&mut self) -> bool {
        if !self.has_uncommitted() {
            return false;
        }
        self.push_current();
        true
    }

    fn push_current(&mut self) {
        self.history.truncate(self.cursor + 1);
        self.history.push(self.current.clone());
        if self.history.len() > self.max_depth {
            self.history.remove(0);
        }
        self.cursor = self.history.len() - 1;
        log::debug!(
            "history commit: {} entries, cursor {}",
            self.history.len(),
            self.cursor
        );
    }

    /// Step back one entry. A no-op returning `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&CardSettings> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.current = self.history[self.cursor].clone();
        log::debug!("undo -> cursor {}", self.cursor);
        Some(&self.current)
    }

    /// Step forward one entry. A no-op returning `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&CardSettings> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.current = self.history[self.cursor].clone();
        log::debug!("redo -> cursor {}", self.cursor);
        Some(&self.current)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(CardSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::model::BorderRadius;
    use pretty_assertions::assert_eq;

    fn opacity(v: f64) -> CardUpdate {
        CardUpdate {
            card_opacity: Some(v),
            ..Default::default()
        }
    }

    #[test]
    fn starts_with_single_entry() {
        let store = HistoryStore::default();
        assert_eq!(store.len(), 1);
        assert_eq!(store.cursor(), 0);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert!(!store.is_empty());
    }

    #[test]
    fn immediate_update_commits() {
        let mut store = HistoryStore::default();
        store.update(&opacity(50.0), true);
        assert_eq!(store.len(), 2);
        assert_eq!(store.cursor(), 1);
        assert!(store.can_undo());
        assert!(!store.can_redo());
        assert_eq!(store.current().card_opacity, 50.0);
    }

    #[test]
    fn live_update_changes_current_only() {
        let mut store = HistoryStore::default();
        let radius = CardUpdate {
            card_border_radius: Some(BorderRadius::uniform(40.0)),
            ..Default::default()
        };
        for _ in 0..5 {
            store.update(&radius, false);
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.current().card_border_radius.top_left, 40.0);
        assert!(store.has_uncommitted());
    }

    #[test]
    fn undo_redo_walk_the_cursor() {
        let mut store = HistoryStore::default();
        store.update(&opacity(10.0), true);
        store.update(&opacity(20.0), true);

        assert_eq!(store.undo().map(|s| s.card_opacity), Some(10.0));
        assert!(store.can_redo());
        assert_eq!(store.undo().map(|s| s.card_opacity), Some(100.0));
        assert_eq!(store.undo(), None);
        assert_eq!(store.redo().map(|s| s.card_opacity), Some(10.0));
        assert_eq!(store.redo().map(|s| s.card_opacity), Some(20.0));
        assert_eq!(store.redo(), None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn undo_discards_live_value() {
        let mut store = HistoryStore::default();
        store.update(&opacity(10.0), true);
        store.update(&opacity(77.0), false);
        store.undo();
        assert_eq!(store.current().card_opacity, 100.0);
        store.redo();
        assert_eq!(store.current().card_opacity, 10.0);
    }

    #[test]
    fn commit_skips_unchanged_current() {
        let mut store = HistoryStore::default();
        assert!(!store.commit());
        store.update(&opacity(60.0), false);
        assert!(store.commit());
        assert_eq!(store.len(), 2);
        assert!(!store.commit());
    }

    #[test]
    fn max_depth_trims_oldest() {
        let mut store = HistoryStore::with_capacity(CardSettings::default(), 3);
        for i in 0..5 {
            store.update(&opacity(i as f64), true);
        }
        assert_eq!(store.len(), 3);
        assert_eq!(store.cursor(), 2);
        let kept: Vec<f64> = store.history().iter().map(|s| s.card_opacity).collect();
        assert_eq!(kept, vec![2.0, 3.0, 4.0]);

        let mut undo_count = 0;
        while store.undo().is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 2);
    }

    #[test]
    fn zero_depth_is_clamped_to_one() {
        let mut store = HistoryStore::with_capacity(CardSettings::default(), 0);
        store.update(&opacity(5.0), true);
        assert_eq!(store.len(), 1);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.current().card_opacity, 5.0);
        assert!(!store.can_undo());
    }
}

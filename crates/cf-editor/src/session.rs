//! One editing session: history, debounce policy, and style output.
//!
//! Every UI action funnels through [`EditorSession::update`]:
//!
//! - **Live** updates (slider drags, color-picker scrubbing) change
//!   `current` right away so the preview follows the pointer, and re-arm
//!   the debounce deadline. When the host calls [`EditorSession::poll`]
//!   after the quiet period, the last live value becomes one undo step.
//! - **Immediate** updates (preset clicks, toggles, end of a gesture)
//!   commit straight away and cancel any pending deadline.

use crate::debounce::{Clock, DEFAULT_DEBOUNCE_MS, Debouncer, SystemClock};
use crate::history::{DEFAULT_MAX_DEPTH, HistoryStore};
use cf_core::export::ExportDocument;
use cf_core::model::{CardSettings, CardUpdate};
use cf_core::presets::Preset;
use cf_core::style::{ResolvedStyle, TextStyles, resolve_style, resolve_text_styles};
use cf_core::{DateTime, Utc};

/// Session tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Maximum number of history snapshots.
    pub max_depth: usize,
    /// Quiet period before a live edit is committed.
    pub debounce_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

pub struct EditorSession<C: Clock = SystemClock> {
    store: HistoryStore,
    debouncer: Debouncer,
    clock: C,
}

impl EditorSession<SystemClock> {
    /// Session on the default card with wall-clock debouncing.
    pub fn with_defaults() -> Self {
        Self::new(
            CardSettings::default(),
            EditorConfig::default(),
            SystemClock::new(),
        )
    }
}

impl<C: Clock> EditorSession<C> {
    pub fn new(initial: CardSettings, config: EditorConfig, clock: C) -> Self {
        Self {
            store: HistoryStore::with_capacity(initial, config.max_depth),
            debouncer: Debouncer::new(config.debounce_ms),
            clock,
        }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn current(&self) -> &CardSettings {
        self.store.current()
    }

    /// Whether a live edit is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn update(&mut self, patch: &CardUpdate, immediate: bool) -> &CardSettings {
        if immediate {
            self.debouncer.cancel();
        } else {
            self.debouncer.arm(self.clock.now_ms());
        }
        self.store.update(patch, immediate)
    }

    /// Commit the pending live edit if its deadline has passed.
    /// Returns whether a history entry was added.
    pub fn poll(&mut self) -> bool {
        if self.debouncer.fire_if_due(self.clock.now_ms()) {
            self.store.commit()
        } else {
            false
        }
    }

    /// Commit the pending live edit now, regardless of the deadline.
    pub fn flush(&mut self) -> bool {
        if self.debouncer.cancel() {
            self.store.commit()
        } else {
            false
        }
    }

    /// Undo drops any pending live edit and steps back from the last
    /// committed entry. At the oldest entry nothing changes and a pending
    /// edit stays armed.
    pub fn undo(&mut self) -> Option<&CardSettings> {
        if !self.store.can_undo() {
            return None;
        }
        self.debouncer.cancel();
        self.store.undo()
    }

    pub fn redo(&mut self) -> Option<&CardSettings> {
        if !self.store.can_redo() {
            return None;
        }
        self.debouncer.cancel();
        self.store.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    pub fn apply_preset(&mut self, preset: Preset) -> &CardSettings {
        log::debug!("apply preset {}", preset.name());
        self.update(&preset.update(), true)
    }

    /// Replace the whole card (e.g. from an imported document) as one
    /// undoable step.
    pub fn replace(&mut self, settings: CardSettings) -> &CardSettings {
        self.debouncer.cancel();
        self.store.set(settings.normalized(), true)
    }

    pub fn style(&self) -> ResolvedStyle {
        resolve_style(self.store.current())
    }

    pub fn text_styles(&self) -> TextStyles {
        resolve_text_styles(self.store.current())
    }

    pub fn export(&self, at: DateTime<Utc>) -> ExportDocument {
        ExportDocument::new(self.store.current().clone(), at)
    }
}

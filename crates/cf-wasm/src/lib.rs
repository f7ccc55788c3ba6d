//! WASM bridge for CF — exposes the card editing session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded by the editor UI.
//! Values cross the boundary as JSON strings in the same camelCase shape
//! the UI already uses for its card objects.

use cf_core::export::{ExportDocument, export_filename};
use cf_core::model::{CardSettings, CardUpdate};
use cf_core::presets::{GRADIENT_SWATCHES, Preset, random_card, randomize_style};
use cf_core::{DateTime, Utc};
use cf_editor::debounce::Clock;
use cf_editor::session::{EditorConfig, EditorSession};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Milliseconds since the Unix epoch.
fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Debounce clock backed by `Date.now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        now_ms()
    }
}

fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_ms() as i64).unwrap_or_default()
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn decode_patch(json: &str) -> Result<CardUpdate, String> {
    CardUpdate::from_json(json).map_err(|e| {
        log::warn!("rejected card update: {e}");
        format!("invalid card update: {e}")
    })
}

fn decode_settings(json: &str) -> Result<CardSettings, String> {
    CardSettings::from_json(json).map_err(|e| {
        log::warn!("rejected card settings: {e}");
        format!("invalid card settings: {e}")
    })
}

fn decode_export(json: &str) -> Result<ExportDocument, String> {
    ExportDocument::from_json(json).map_err(|e| {
        log::warn!("rejected import: {e}");
        e.to_string()
    })
}

#[derive(Serialize)]
struct PresetInfo {
    name: &'static str,
    description: &'static str,
}

/// The main WASM-facing editor controller.
///
/// Holds one editing session and the random source for shuffle actions.
/// The host calls `poll()` from its animation frame or a timer so debounced
/// live edits get committed.
#[wasm_bindgen]
pub struct CardEditor {
    session: EditorSession<JsClock>,
    rng: StdRng,
}

#[wasm_bindgen]
impl CardEditor {
    /// Editor on the default card.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_settings(CardSettings::default())
    }

    /// Editor starting from a saved card (JSON).
    pub fn from_settings_json(json: &str) -> Result<CardEditor, JsValue> {
        decode_settings(json)
            .map(Self::with_settings)
            .map_err(|e| JsValue::from_str(&e))
    }

    // ─── Updates ─────────────────────────────────────────────────────────

    /// Merge a JSON patch. Live (`immediate == false`) patches are
    /// committed later by `poll()` or `flush()`.
    pub fn update(&mut self, patch_json: &str, immediate: bool) -> Result<(), JsValue> {
        let patch = decode_patch(patch_json).map_err(|e| JsValue::from_str(&e))?;
        self.session.update(&patch, immediate);
        Ok(())
    }

    /// Returns true if a pending live edit was committed.
    pub fn poll(&mut self) -> bool {
        self.session.poll()
    }

    pub fn flush(&mut self) -> bool {
        self.session.flush()
    }

    /// Returns true if the card changed.
    pub fn undo(&mut self) -> bool {
        self.session.undo().is_some()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    // ─── Presets & shuffles ──────────────────────────────────────────────

    /// Apply a named preset. Returns false for an unknown name.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        match Preset::from_name(name) {
            Some(preset) => {
                self.session.apply_preset(preset);
                true
            }
            None => false,
        }
    }

    /// Apply one of the gradient builder swatches by index.
    pub fn apply_swatch(&mut self, index: usize) -> bool {
        match GRADIENT_SWATCHES.get(index) {
            Some(swatch) => {
                self.session.update(&swatch.update(), true);
                true
            }
            None => false,
        }
    }

    pub fn randomize(&mut self) {
        let patch = randomize_style(&mut self.rng);
        self.session.update(&patch, true);
    }

    pub fn random_card(&mut self) {
        let patch = random_card(&mut self.rng);
        self.session.update(&patch, true);
    }

    // ─── Output ──────────────────────────────────────────────────────────

    pub fn settings_json(&self) -> String {
        to_json(self.session.current())
    }

    pub fn style_json(&self) -> String {
        to_json(&self.session.style())
    }

    pub fn text_styles_json(&self) -> String {
        to_json(&self.session.text_styles())
    }

    /// CSS declaration block for "copy CSS".
    pub fn style_css(&self) -> String {
        self.session.style().to_css()
    }

    /// `[{ name, description }]` for the presets panel.
    pub fn presets_json() -> String {
        let list: Vec<PresetInfo> = Preset::ALL
            .iter()
            .map(|p| PresetInfo {
                name: p.name(),
                description: p.description(),
            })
            .collect();
        to_json(&list)
    }

    /// `[{ name, from, to }]` for the gradient builder.
    pub fn swatches_json() -> String {
        let list: Vec<serde_json::Value> = GRADIENT_SWATCHES
            .iter()
            .map(|s| serde_json::json!({ "name": s.name, "from": s.from, "to": s.to }))
            .collect();
        to_json(&list)
    }

    // ─── Export / import ─────────────────────────────────────────────────

    pub fn export_json(&self) -> Result<String, JsValue> {
        self.session
            .export(now_utc())
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn export_filename(&self) -> String {
        export_filename(now_utc())
    }

    /// Load an exported document as one undoable step.
    pub fn import_json(&mut self, json: &str) -> Result<(), JsValue> {
        let doc = decode_export(json).map_err(|e| JsValue::from_str(&e))?;
        log::debug!("imported card \"{}\" (v{})", doc.card.title, doc.version);
        self.session.replace(doc.card);
        Ok(())
    }
}

impl CardEditor {
    fn with_settings(initial: CardSettings) -> Self {
        Self {
            session: EditorSession::new(initial, EditorConfig::default(), JsClock),
            rng: StdRng::seed_from_u64(now_ms()),
        }
    }
}

impl Default for CardEditor {
    fn default() -> Self {
        Self::new()
    }
}

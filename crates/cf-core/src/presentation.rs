//! Presentation and slide records, plus the ordering rules shared by the
//! storage layer and the slide sidebar.
//!
//! Slides of one presentation are unique in `position` and are always
//! handed out sorted ascending by it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default)]
    pub collaborators: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: u32,
    pub presentation_id: u32,
    pub title: String,
    /// Opaque content blob owned by the rendering layer.
    #[serde(default)]
    pub content: serde_json::Value,
    pub position: u32,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn visible_by_default() -> bool {
    true
}

/// Stable ascending sort by position.
pub fn sort_slides(slides: &mut [Slide]) {
    slides.sort_by_key(|s| s.position);
}

/// Position for a slide appended at the end.
pub fn next_position(slides: &[Slide]) -> u32 {
    slides
        .iter()
        .map(|s| s.position)
        .max()
        .map_or(0, |p| p + 1)
}

/// Whether every position is distinct.
pub fn positions_are_unique(slides: &[Slide]) -> bool {
    let mut seen: Vec<u32> = slides.iter().map(|s| s.position).collect();
    seen.sort_unstable();
    seen.windows(2).all(|w| w[0] != w[1])
}

/// Move the slide at index `from` to index `to` (indices into the
/// position-sorted list), then renumber positions `0..n`.
///
/// Indices past the end are clamped to the last slot. Returns `false` and
/// leaves `slides` sorted but otherwise untouched when `from` is out of
/// range.
pub fn move_slide(slides: &mut Vec<Slide>, from: usize, to: usize, now: DateTime<Utc>) -> bool {
    sort_slides(slides);
    if from >= slides.len() {
        return false;
    }
    let to = to.min(slides.len() - 1);
    let slide = slides.remove(from);
    slides.insert(to, slide);
    renumber(slides, now);
    log::debug!("moved slide {from} -> {to}");
    true
}

/// Reassign positions `0..n` in current order, touching `updated_at` only
/// where the position actually changed.
pub fn renumber(slides: &mut [Slide], now: DateTime<Utc>) {
    for (i, slide) in slides.iter_mut().enumerate() {
        let pos = i as u32;
        if slide.position != pos {
            slide.position = pos;
            slide.updated_at = now;
        }
    }
}

/// Case-insensitive title search, preserving order.
pub fn filter_slides<'a>(slides: &'a [Slide], query: &str) -> Vec<&'a Slide> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return slides.iter().collect();
    }
    slides
        .iter()
        .filter(|s| s.title.to_lowercase().contains(&query))
        .collect()
}

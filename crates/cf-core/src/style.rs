//! Style resolver: `CardSettings` → ready-to-render style descriptor.
//!
//! Pure and total. Every numeric input that is not finite resolves to the
//! field's default, so the output never carries `NaN`. Colors go through
//! [`Rgb::from_hex_or_fallback`]. Nothing is clamped here apart from the two
//! blur radii, which CSS rejects when negative.

use crate::model::{CardSettings, RadiusUnit, Rgb, TextAlign, finite_or};
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Fully resolved visual style of a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub width: f64,
    pub height: f64,
    pub background: String,
    /// Uniform radius taken from the top-left corner.
    pub border_radius: f64,
    pub border_radius_unit: RadiusUnit,
    pub box_shadow: String,
    pub opacity: f64,
    pub transform: String,
    pub filter: String,
}

impl ResolvedStyle {
    /// Emit as a CSS declaration block, one property per line.
    pub fn to_css(&self) -> String {
        format!(
            "width: {}px;\nheight: {}px;\nbackground: {};\nborder-radius: {}{};\n\
             box-shadow: {};\nopacity: {};\ntransform: {};\nfilter: {};\n",
            self.width,
            self.height,
            self.background,
            self.border_radius,
            self.border_radius_unit.as_str(),
            self.box_shadow,
            self.opacity,
            self.transform,
            self.filter,
        )
    }
}

/// Resolve a card's box style.
pub fn resolve_style(settings: &CardSettings) -> ResolvedStyle {
    let d = CardSettings::default();
    let radius = &settings.card_border_radius;

    ResolvedStyle {
        width: finite_or(settings.card_width, d.card_width),
        height: finite_or(settings.card_height, d.card_height),
        background: resolve_background(settings),
        border_radius: finite_or(radius.top_left, d.card_border_radius.top_left),
        border_radius_unit: radius.unit,
        box_shadow: resolve_box_shadow(settings),
        opacity: finite_or(settings.card_opacity, d.card_opacity) / 100.0,
        transform: join(&transform_functions(settings)),
        filter: join(&filter_functions(settings)),
    }
}

fn rgba(c: Rgb, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, alpha)
}

/// Two-stop linear gradient when `bg_gradient_to` is set and non-empty,
/// flat fill otherwise.
pub fn resolve_background(settings: &CardSettings) -> String {
    let d = CardSettings::default();
    let from = Rgb::from_hex_or_fallback(&settings.bg_gradient_from);

    match settings.bg_gradient_to.as_deref().filter(|s| !s.is_empty()) {
        Some(to_hex) => {
            let to = Rgb::from_hex_or_fallback(to_hex);
            let angle = finite_or(settings.gradient_angle, d.gradient_angle);
            let from_alpha = finite_or(settings.bg_opacity_from, d.bg_opacity_from) / 100.0;
            let to_alpha = finite_or(settings.bg_opacity_to, d.bg_opacity_to) / 100.0;
            format!(
                "linear-gradient({angle}deg, {}, {})",
                rgba(from, from_alpha),
                rgba(to, to_alpha)
            )
        }
        None => rgba(
            from,
            finite_or(settings.card_opacity, d.card_opacity) / 100.0,
        ),
    }
}

/// `[inset ]x y blur spread rgba(...)`, all lengths in px.
pub fn resolve_box_shadow(settings: &CardSettings) -> String {
    let d = CardSettings::default();
    let s = &settings.shadow_settings;
    let ds = &d.shadow_settings;
    let color = Rgb::from_hex_or_fallback(&settings.shadow_color);

    let x = finite_or(s.x, ds.x);
    let y = finite_or(s.y, ds.y);
    let blur = finite_or(s.blur, ds.blur).max(0.0);
    let spread = finite_or(s.spread, ds.spread);
    let opacity = finite_or(settings.shadow_opacity, d.shadow_opacity);

    format!(
        "{}{x}px {y}px {blur}px {spread}px {}",
        if s.inset { "inset " } else { "" },
        rgba(color, opacity)
    )
}

// ─── Function lists ──────────────────────────────────────────────────────

/// One CSS transform function. Order in the list is significant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformFn {
    Rotate(f64),
    ScaleX(f64),
    ScaleY(f64),
}

impl fmt::Display for TransformFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformFn::Rotate(deg) => write!(f, "rotate({deg}deg)"),
            TransformFn::ScaleX(s) => write!(f, "scaleX({s})"),
            TransformFn::ScaleY(s) => write!(f, "scaleY({s})"),
        }
    }
}

/// One CSS filter function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterFn {
    Blur(f64),
    Brightness(f64),
    Contrast(f64),
    Saturate(f64),
}

impl fmt::Display for FilterFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterFn::Blur(px) => write!(f, "blur({px}px)"),
            FilterFn::Brightness(p) => write!(f, "brightness({p}%)"),
            FilterFn::Contrast(p) => write!(f, "contrast({p}%)"),
            FilterFn::Saturate(p) => write!(f, "saturate({p}%)"),
        }
    }
}

/// Rotation first, then X and Y scale.
pub fn transform_functions(settings: &CardSettings) -> SmallVec<[TransformFn; 3]> {
    let d = CardSettings::default();
    smallvec::smallvec![
        TransformFn::Rotate(finite_or(settings.rotation, d.rotation)),
        TransformFn::ScaleX(finite_or(settings.scale_x, d.scale_x)),
        TransformFn::ScaleY(finite_or(settings.scale_y, d.scale_y)),
    ]
}

/// Blur, brightness, contrast, saturation, in that order.
pub fn filter_functions(settings: &CardSettings) -> SmallVec<[FilterFn; 4]> {
    let d = CardSettings::default();
    smallvec::smallvec![
        FilterFn::Blur(finite_or(settings.blur, d.blur).max(0.0)),
        FilterFn::Brightness(finite_or(settings.brightness, d.brightness)),
        FilterFn::Contrast(finite_or(settings.contrast, d.contrast)),
        FilterFn::Saturate(finite_or(settings.saturation, d.saturation)),
    ]
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// ─── Typography ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    /// px
    pub font_size: f64,
    pub font_weight: String,
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyles {
    pub title: TextStyle,
    pub description: TextStyle,
}

pub fn resolve_text_styles(settings: &CardSettings) -> TextStyles {
    let d = CardSettings::default();
    TextStyles {
        title: TextStyle {
            font_family: settings.title_font.clone(),
            font_size: finite_or(settings.title_size, d.title_size),
            font_weight: settings.title_weight.clone(),
            text_align: settings.title_align,
        },
        description: TextStyle {
            font_family: settings.description_font.clone(),
            font_size: finite_or(settings.description_size, d.description_size),
            font_weight: settings.description_weight.clone(),
            text_align: settings.description_align,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BorderRadius, ShadowSettings};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_card_resolves_to_solid_fill() {
        let style = resolve_style(&CardSettings::default());
        assert_eq!(style.background, "rgba(59, 130, 246, 1)");
        assert_eq!(style.width, 300.0);
        assert_eq!(style.height, 200.0);
        assert_eq!(style.border_radius, 12.0);
        assert_eq!(style.box_shadow, "0px 10px 20px 0px rgba(0, 0, 0, 0.25)");
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.transform, "rotate(0deg) scaleX(1) scaleY(1)");
        assert_eq!(
            style.filter,
            "blur(0px) brightness(100%) contrast(100%) saturate(100%)"
        );
    }

    #[test]
    fn gradient_uses_angle_and_stop_alphas() {
        let s = CardSettings {
            bg_gradient_from: "#ec4899".into(),
            bg_gradient_to: Some("#8b5cf6".into()),
            bg_opacity_from: 70.0,
            bg_opacity_to: 14.0,
            gradient_angle: 45.0,
            ..Default::default()
        };
        assert_eq!(
            resolve_background(&s),
            "linear-gradient(45deg, rgba(236, 72, 153, 0.7), rgba(139, 92, 246, 0.14))"
        );
    }

    #[test]
    fn solid_fill_uses_card_opacity() {
        let s = CardSettings {
            card_opacity: 85.0,
            ..Default::default()
        };
        assert_eq!(resolve_background(&s), "rgba(59, 130, 246, 0.85)");
    }

    #[test]
    fn cleared_second_stop_is_solid_fill() {
        let patch = crate::model::CardUpdate::from_json(r#"{"bgGradientTo": ""}"#).unwrap();
        let s = CardSettings::default().apply(&patch);
        assert_eq!(s.bg_gradient_to.as_deref(), Some(""));
        assert_eq!(resolve_background(&s), "rgba(59, 130, 246, 1)");
    }

    #[test]
    fn malformed_colors_fall_back() {
        let s = CardSettings {
            bg_gradient_from: "rgba(255,255,255,0.15)".into(),
            shadow_color: "black".into(),
            ..Default::default()
        };
        let style = resolve_style(&s);
        assert_eq!(style.background, "rgba(82, 48, 145, 1)");
        assert!(style.box_shadow.ends_with("rgba(82, 48, 145, 0.25)"));
    }

    #[test]
    fn inset_shadow_and_negative_spread() {
        let s = CardSettings {
            shadow_settings: ShadowSettings {
                inset: true,
                ..ShadowSettings::new(0.0, 4.0, -6.0, -1.0)
            },
            shadow_opacity: 0.08,
            ..Default::default()
        };
        assert_eq!(
            resolve_box_shadow(&s),
            "inset 0px 4px 0px -1px rgba(0, 0, 0, 0.08)"
        );
    }

    #[test]
    fn transform_order_is_rotate_then_scale() {
        let s = CardSettings {
            rotation: -7.5,
            scale_x: 1.25,
            scale_y: 0.5,
            ..Default::default()
        };
        assert_eq!(
            resolve_style(&s).transform,
            "rotate(-7.5deg) scaleX(1.25) scaleY(0.5)"
        );
    }

    #[test]
    fn non_finite_numbers_resolve_to_defaults() {
        let s = CardSettings {
            card_width: f64::NAN,
            card_opacity: f64::INFINITY,
            rotation: f64::NAN,
            brightness: f64::NAN,
            blur: f64::NEG_INFINITY,
            card_border_radius: BorderRadius::uniform(f64::NAN),
            ..Default::default()
        };
        let style = resolve_style(&s);
        assert_eq!(style.width, 300.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.border_radius, 12.0);
        assert_eq!(style.transform, "rotate(0deg) scaleX(1) scaleY(1)");
        assert_eq!(
            style.filter,
            "blur(0px) brightness(100%) contrast(100%) saturate(100%)"
        );
        assert!(!style.to_css().contains("NaN"));
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let s = CardSettings {
            card_width: 1200.0,
            brightness: 250.0,
            ..Default::default()
        };
        let style = resolve_style(&s);
        assert_eq!(style.width, 1200.0);
        assert!(style.filter.contains("brightness(250%)"));
    }

    #[test]
    fn css_block_carries_radius_unit() {
        let mut s = CardSettings::default();
        s.card_border_radius.unit = RadiusUnit::Rem;
        s.card_border_radius.top_left = 1.5;
        let css = resolve_style(&s).to_css();
        assert!(css.contains("border-radius: 1.5rem;\n"));
        assert!(css.starts_with("width: 300px;\nheight: 200px;\n"));
    }

    #[test]
    fn text_styles_follow_settings() {
        let s = CardSettings {
            title_font: "Georgia".into(),
            title_weight: "700".into(),
            description_align: TextAlign::Justify,
            ..Default::default()
        };
        let styles = resolve_text_styles(&s);
        assert_eq!(styles.title.font_family, "Georgia");
        assert_eq!(styles.title.font_size, 18.0);
        assert_eq!(styles.title.font_weight, "700");
        assert_eq!(styles.description.text_align, TextAlign::Justify);
    }
}

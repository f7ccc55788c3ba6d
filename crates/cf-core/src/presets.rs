//! Named presets and randomized style patches.
//!
//! Presets are fixed clusters of fields applied together. The randomizers
//! take any `rand::Rng`, so callers decide where randomness comes from
//! (a seeded `StdRng` in tests, a clock-seeded one in the browser bridge).

use crate::model::{BorderRadius, CardUpdate, ShadowSettings};
use rand::Rng;
use rand::seq::IndexedRandom;

// ─── Named presets ───────────────────────────────────────────────────────

/// Built-in style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Glassmorphism,
    NeonGlow,
    GradientDream,
    MinimalClean,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Glassmorphism,
        Preset::NeonGlow,
        Preset::GradientDream,
        Preset::MinimalClean,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Glassmorphism => "Glassmorphism",
            Preset::NeonGlow => "Neon Glow",
            Preset::GradientDream => "Gradient Dream",
            Preset::MinimalClean => "Minimal Clean",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Glassmorphism => "Modern frosted glass",
            Preset::NeonGlow => "Vibrant and energetic",
            Preset::GradientDream => "Smooth color transitions",
            Preset::MinimalClean => "Simple and elegant",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The patch this preset applies.
    pub fn update(&self) -> CardUpdate {
        match self {
            // The rgba() stops are not hex colors and render with the
            // fallback color.
            Preset::Glassmorphism => CardUpdate {
                bg_gradient_from: Some("rgba(255,255,255,0.15)".into()),
                bg_gradient_to: Some(Some("rgba(255,255,255,0.05)".into())),
                card_border_radius: Some(BorderRadius::uniform(20.0)),
                enable_hover_effects: Some(true),
                card_opacity: Some(85.0),
                shadow_color: Some("#000000".into()),
                shadow_opacity: Some(0.1),
                shadow_settings: Some(ShadowSettings::new(0.0, 8.0, 32.0, 0.0)),
                ..Default::default()
            },
            Preset::NeonGlow => CardUpdate {
                bg_gradient_from: Some("#8b5cf6".into()),
                bg_gradient_to: Some(Some("#3b82f6".into())),
                card_opacity: Some(100.0),
                shadow_color: Some("#8b5cf6".into()),
                shadow_opacity: Some(0.4),
                shadow_settings: Some(ShadowSettings::new(0.0, 0.0, 25.0, 2.0)),
                enable_animations: Some(true),
                title_font: Some("Georgia".into()),
                title_weight: Some("700".into()),
                card_border_radius: Some(BorderRadius::uniform(16.0)),
                ..Default::default()
            },
            Preset::GradientDream => CardUpdate {
                bg_gradient_from: Some("#ec4899".into()),
                bg_gradient_to: Some(Some("#8b5cf6".into())),
                card_opacity: Some(100.0),
                card_border_radius: Some(BorderRadius::uniform(16.0)),
                gradient_angle: Some(45.0),
                shadow_color: Some("#000000".into()),
                shadow_opacity: Some(0.15),
                shadow_settings: Some(ShadowSettings::new(0.0, 6.0, 12.0, 0.0)),
                ..Default::default()
            },
            Preset::MinimalClean => CardUpdate {
                bg_gradient_from: Some("#f3f4f6".into()),
                bg_gradient_to: Some(Some("#e5e7eb".into())),
                card_opacity: Some(100.0),
                card_border_radius: Some(BorderRadius::uniform(8.0)),
                shadow_color: Some("#000000".into()),
                shadow_opacity: Some(0.08),
                shadow_settings: Some(ShadowSettings::new(0.0, 4.0, 6.0, -1.0)),
                ..Default::default()
            },
        }
    }
}

// ─── Gradient swatches ───────────────────────────────────────────────────

/// A named two-stop gradient offered by the gradient builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSwatch {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

impl GradientSwatch {
    pub fn update(&self) -> CardUpdate {
        CardUpdate {
            bg_gradient_from: Some(self.from.into()),
            bg_gradient_to: Some(Some(self.to.into())),
            ..Default::default()
        }
    }
}

pub const GRADIENT_SWATCHES: [GradientSwatch; 6] = [
    GradientSwatch { name: "Royal Blue to Purple", from: "#667eea", to: "#764ba2" },
    GradientSwatch { name: "Pink to Red", from: "#f093fb", to: "#f5576c" },
    GradientSwatch { name: "Sky Blue to Cyan", from: "#4facfe", to: "#00f2fe" },
    GradientSwatch { name: "Green to Mint", from: "#43e97b", to: "#38f9d7" },
    GradientSwatch { name: "Rose to Gold", from: "#fa709a", to: "#fee140" },
    GradientSwatch { name: "Aqua to Light Pink", from: "#a8edea", to: "#fed6e3" },
];

// ─── Randomization ───────────────────────────────────────────────────────

/// Candidate stops for [`randomize_style`].
pub const RANDOM_PALETTE: [&str; 14] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dda0dd", "#98d8c8",
    "#f8a5c2", "#6a89cc", "#f5cd79", "#f78fb3", "#ff7f50", "#ffdab9", "#b2f7ef",
];

pub const RANDOM_TITLES: [&str; 5] = [
    "Creative Card",
    "Modern Design",
    "Elegant Style",
    "Dynamic Card",
    "Innovative UI",
];

pub const RANDOM_DESCRIPTIONS: [&str; 4] = [
    "Beautiful and responsive design",
    "Crafted with precision and care",
    "Designed for maximum impact",
    "Built for the future of web",
];

/// Pick two distinct entries from `candidates`. Needs at least two.
pub fn pick_distinct_pair<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[&'a str],
) -> Option<(&'a str, &'a str)> {
    if candidates.len() < 2 {
        return None;
    }
    let from = rng.random_range(0..candidates.len());
    // Draw from the remaining n-1 slots, skipping `from`
    let mut to = rng.random_range(0..candidates.len() - 1);
    if to >= from {
        to += 1;
    }
    Some((candidates[from], candidates[to]))
}

/// "Randomize Style": distinct palette stops, angle, slight tilt, uniform
/// radius, and a mostly-opaque card.
pub fn randomize_style<R: Rng + ?Sized>(rng: &mut R) -> CardUpdate {
    let (from, to) = pick_distinct_pair(rng, &RANDOM_PALETTE).unwrap_or(("#ff6b6b", "#4ecdc4"));
    let radius = rng.random_range(5..50) as f64;

    CardUpdate {
        bg_gradient_from: Some(from.to_string()),
        bg_gradient_to: Some(Some(to.to_string())),
        gradient_angle: Some(rng.random_range(0..360) as f64),
        rotation: Some(rng.random_range(-10..10) as f64),
        card_border_radius: Some(BorderRadius::uniform(radius)),
        card_opacity: Some(rng.random_range(80..100) as f64),
        ..Default::default()
    }
}

/// Uniform 24-bit color as `#rrggbb`.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=0xFF_FFFFu32))
}

/// "Generate random card": sample title, description, and two free colors.
pub fn random_card<R: Rng + ?Sized>(rng: &mut R) -> CardUpdate {
    let title = RANDOM_TITLES.choose(rng).copied().unwrap_or(RANDOM_TITLES[0]);
    let description = RANDOM_DESCRIPTIONS
        .choose(rng)
        .copied()
        .unwrap_or(RANDOM_DESCRIPTIONS[0]);

    let from = random_hex_color(rng);
    let mut to = random_hex_color(rng);
    while to == from {
        to = random_hex_color(rng);
    }

    CardUpdate {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        bg_gradient_from: Some(from),
        bg_gradient_to: Some(Some(to)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardSettings, Rgb};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn preset_lookup_by_name() {
        assert_eq!(Preset::from_name("neon glow"), Some(Preset::NeonGlow));
        assert_eq!(Preset::from_name(" Minimal Clean "), Some(Preset::MinimalClean));
        assert_eq!(Preset::from_name("Brutalist"), None);
    }

    #[test]
    fn every_preset_sets_a_coherent_cluster() {
        for preset in Preset::ALL {
            let update = preset.update();
            assert!(update.bg_gradient_from.is_some(), "{}", preset.name());
            assert!(update.card_border_radius.is_some(), "{}", preset.name());
            assert!(update.shadow_settings.is_some(), "{}", preset.name());
        }
    }

    #[test]
    fn neon_glow_applies_typography() {
        let next = CardSettings::default().apply(&Preset::NeonGlow.update());
        assert_eq!(next.title_font, "Georgia");
        assert_eq!(next.title_weight, "700");
        assert!(next.enable_animations);
        assert_eq!(next.bg_gradient_to.as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn swatches_are_valid_hex() {
        for swatch in GRADIENT_SWATCHES {
            assert!(Rgb::from_hex(swatch.from).is_some(), "{}", swatch.name);
            assert!(Rgb::from_hex(swatch.to).is_some(), "{}", swatch.name);
        }
    }

    #[test]
    fn distinct_pair_needs_two_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_distinct_pair(&mut rng, &["#000000"]), None);
        assert_eq!(
            pick_distinct_pair(&mut rng, &["#000000", "#ffffff"]).map(|(a, b)| a != b),
            Some(true)
        );
    }

    #[test]
    fn randomize_is_reproducible_with_a_seed() {
        let a = randomize_style(&mut StdRng::seed_from_u64(42));
        let b = randomize_style(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn randomize_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let u = randomize_style(&mut rng);
            let from = u.bg_gradient_from.clone().unwrap();
            let to = u.bg_gradient_to.clone().flatten().unwrap();
            assert_ne!(from, to);
            assert!(RANDOM_PALETTE.contains(&from.as_str()));
            assert!(RANDOM_PALETTE.contains(&to.as_str()));

            let angle = u.gradient_angle.unwrap();
            assert!((0.0..360.0).contains(&angle));
            let rotation = u.rotation.unwrap();
            assert!((-10.0..10.0).contains(&rotation));
            let radius = u.card_border_radius.unwrap();
            assert!(radius.is_uniform());
            assert!((5.0..50.0).contains(&radius.top_left));
            let opacity = u.card_opacity.unwrap();
            assert!((80.0..100.0).contains(&opacity));
        }
    }

    #[test]
    fn random_card_fills_text_and_colors() {
        let mut rng = StdRng::seed_from_u64(3);
        let u = random_card(&mut rng);
        assert!(RANDOM_TITLES.contains(&u.title.as_deref().unwrap()));
        assert!(RANDOM_DESCRIPTIONS.contains(&u.description.as_deref().unwrap()));
        let from = u.bg_gradient_from.unwrap();
        assert!(Rgb::from_hex(&from).is_some());
        assert_eq!(from.len(), 7);
    }
}

//! Card settings data model.
//!
//! `CardSettings` is the fully-populated description of one card's look.
//! `CardUpdate` is the sparse patch form used by every mutating UI action:
//! the same fields, each optional, merged shallowly onto the current value.
//! Nested objects (`cardBorderRadius`, `shadowSettings`) are replaced whole,
//! never merged corner-by-corner.

use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// 8-bit RGB triple decoded from a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color used when a hex string fails to decode.
pub const FALLBACK_RGB: Rgb = Rgb::new(82, 48, 145);

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (case-insensitive, leading `#` optional).
    /// Shorthand and alpha forms are rejected.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        if bytes.len() != 6 {
            return None;
        }
        let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
        let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
        let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
        Some(Self::new(r, g, b))
    }

    /// Like [`Rgb::from_hex`], degrading to [`FALLBACK_RGB`].
    pub fn from_hex_or_fallback(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(FALLBACK_RGB)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Border radius ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadiusUnit {
    #[default]
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "rem")]
    Rem,
}

impl RadiusUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiusUnit::Px => "px",
            RadiusUnit::Percent => "%",
            RadiusUnit::Em => "em",
            RadiusUnit::Rem => "rem",
        }
    }
}

/// Four independently settable corners sharing one unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderRadius {
    #[serde(deserialize_with = "lenient::number")]
    pub top_left: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub top_right: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub bottom_left: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub bottom_right: f64,
    pub unit: RadiusUnit,
}

impl BorderRadius {
    /// Same radius on every corner, in px.
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
            unit: RadiusUnit::Px,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_left == self.bottom_left
            && self.top_left == self.bottom_right
    }

    fn normalized(self) -> Self {
        let d = Self::default();
        Self {
            top_left: finite_or(self.top_left, d.top_left),
            top_right: finite_or(self.top_right, d.top_right),
            bottom_left: finite_or(self.bottom_left, d.bottom_left),
            bottom_right: finite_or(self.bottom_right, d.bottom_right),
            unit: self.unit,
        }
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self::uniform(12.0)
    }
}

// ─── Shadow ──────────────────────────────────────────────────────────────

/// Box-shadow geometry in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    #[serde(deserialize_with = "lenient::number")]
    pub x: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub y: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub blur: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub spread: f64,
    pub inset: bool,
}

impl ShadowSettings {
    pub const fn new(x: f64, y: f64, blur: f64, spread: f64) -> Self {
        Self {
            x,
            y,
            blur,
            spread,
            inset: false,
        }
    }

    fn normalized(self) -> Self {
        let d = Self::default();
        Self {
            x: finite_or(self.x, d.x),
            y: finite_or(self.y, d.y),
            blur: finite_or(self.blur, d.blur),
            spread: finite_or(self.spread, d.spread),
            inset: self.inset,
        }
    }
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self::new(0.0, 10.0, 20.0, 0.0)
    }
}

// ─── Typography ──────────────────────────────────────────────────────────

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

// ─── Card settings ───────────────────────────────────────────────────────

/// The full set of visual properties describing one card.
///
/// Always fully populated. Deserialization fills missing fields from
/// [`CardSettings::default`] and accepts numeric strings (`"320"`) wherever a
/// number is expected; call [`CardSettings::normalized`] (or use
/// [`CardSettings::from_json`]) to replace unparseable numbers with defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSettings {
    pub title: String,
    pub description: String,

    pub bg_gradient_from: String,
    /// `None` renders a solid fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient_to: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub bg_opacity_from: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub bg_opacity_to: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub gradient_angle: f64,

    #[serde(deserialize_with = "lenient::number")]
    pub card_opacity: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub card_width: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub card_height: f64,
    pub card_border_radius: BorderRadius,

    pub shadow_settings: ShadowSettings,
    pub shadow_color: String,
    #[serde(deserialize_with = "lenient::number")]
    pub shadow_opacity: f64,

    pub title_font: String,
    #[serde(deserialize_with = "lenient::number")]
    pub title_size: f64,
    pub title_weight: String,
    pub title_align: TextAlign,
    pub description_font: String,
    #[serde(deserialize_with = "lenient::number")]
    pub description_size: f64,
    pub description_weight: String,
    pub description_align: TextAlign,

    #[serde(deserialize_with = "lenient::number")]
    pub rotation: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub scale_x: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub scale_y: f64,

    #[serde(deserialize_with = "lenient::number")]
    pub blur: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub brightness: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub contrast: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub saturation: f64,

    pub enable_hover_effects: bool,
    pub enable_animations: bool,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            title: "Modern Card".into(),
            description: "Live preview with real-time updates".into(),
            bg_gradient_from: "#3b82f6".into(),
            bg_gradient_to: None,
            bg_opacity_from: 100.0,
            bg_opacity_to: 100.0,
            gradient_angle: 135.0,
            card_opacity: 100.0,
            card_width: 300.0,
            card_height: 200.0,
            card_border_radius: BorderRadius::default(),
            shadow_settings: ShadowSettings::default(),
            shadow_color: "#000000".into(),
            shadow_opacity: 0.25,
            title_font: "Inter".into(),
            title_size: 18.0,
            title_weight: "600".into(),
            title_align: TextAlign::Left,
            description_font: "Inter".into(),
            description_size: 14.0,
            description_weight: "400".into(),
            description_align: TextAlign::Left,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            blur: 0.0,
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
            enable_hover_effects: false,
            enable_animations: false,
        }
    }
}

macro_rules! merge_fields {
    ($next:ident, $update:ident; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = &$update.$field {
                $next.$field = value.clone();
            }
        )*
    };
}

impl CardSettings {
    /// Decode from JSON, defaulting missing and unparseable fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }

    /// Produce a new value with every field present in `update` replacing
    /// the corresponding field here. Nested structs are replaced whole.
    pub fn apply(&self, update: &CardUpdate) -> Self {
        let mut next = self.clone();
        merge_fields!(next, update;
            title,
            description,
            bg_gradient_from,
            bg_gradient_to,
            bg_opacity_from,
            bg_opacity_to,
            gradient_angle,
            card_opacity,
            card_width,
            card_height,
            card_border_radius,
            shadow_settings,
            shadow_color,
            shadow_opacity,
            title_font,
            title_size,
            title_weight,
            title_align,
            description_font,
            description_size,
            description_weight,
            description_align,
            rotation,
            scale_x,
            scale_y,
            blur,
            brightness,
            contrast,
            saturation,
            enable_hover_effects,
            enable_animations,
        );
        next.normalized()
    }

    /// Replace every non-finite number with its default.
    pub fn normalized(self) -> Self {
        let d = Self::default();
        Self {
            bg_opacity_from: finite_or(self.bg_opacity_from, d.bg_opacity_from),
            bg_opacity_to: finite_or(self.bg_opacity_to, d.bg_opacity_to),
            gradient_angle: finite_or(self.gradient_angle, d.gradient_angle),
            card_opacity: finite_or(self.card_opacity, d.card_opacity),
            card_width: finite_or(self.card_width, d.card_width),
            card_height: finite_or(self.card_height, d.card_height),
            card_border_radius: self.card_border_radius.normalized(),
            shadow_settings: self.shadow_settings.normalized(),
            shadow_opacity: finite_or(self.shadow_opacity, d.shadow_opacity),
            title_size: finite_or(self.title_size, d.title_size),
            description_size: finite_or(self.description_size, d.description_size),
            rotation: finite_or(self.rotation, d.rotation),
            scale_x: finite_or(self.scale_x, d.scale_x),
            scale_y: finite_or(self.scale_y, d.scale_y),
            blur: finite_or(self.blur, d.blur),
            brightness: finite_or(self.brightness, d.brightness),
            contrast: finite_or(self.contrast, d.contrast),
            saturation: finite_or(self.saturation, d.saturation),
            ..self
        }
    }
}

/// `value` if finite, otherwise `default`.
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() { value } else { default }
}

// ─── Sparse update ───────────────────────────────────────────────────────

/// A sparse patch over [`CardSettings`]. Absent fields leave the current
/// value untouched.
///
/// `bg_gradient_to` is doubly optional: `Some(None)` (JSON `null`) clears the
/// second stop, switching the card to a solid fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient_from: Option<String>,
    #[serde(
        deserialize_with = "lenient::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub bg_gradient_to: Option<Option<String>>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub bg_opacity_from: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub bg_opacity_to: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub gradient_angle: Option<f64>,

    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_opacity: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_width: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_border_radius: Option<BorderRadius>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_settings: Option<ShadowSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub shadow_opacity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font: Option<String>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub title_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_font: Option<String>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub description_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_align: Option<TextAlign>,

    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub scale_x: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub scale_y: Option<f64>,

    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub blur: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub brightness: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub contrast: Option<f64>,
    #[serde(
        deserialize_with = "lenient::opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub saturation: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_hover_effects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_animations: Option<bool>,
}

impl CardUpdate {
    /// Decode a JSON patch. Numeric fields that fail to parse are dropped
    /// from the patch rather than rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ─── Lenient decoding ────────────────────────────────────────────────────

/// Deserializers that accept both JSON numbers and numeric strings, as
/// persisted records store numbers as text.
mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    fn parse(raw: Raw) -> Option<f64> {
        let n = match raw {
            Raw::Number(n) => Some(n),
            Raw::Text(s) => s.trim().parse::<f64>().ok(),
            Raw::Other(_) => None,
        };
        n.filter(|n| n.is_finite())
    }

    /// Unparseable input becomes NaN; `normalized()` swaps it for the default.
    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(parse(Raw::deserialize(deserializer)?).unwrap_or(f64::NAN))
    }

    pub fn opt_number<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Ok(parse(Raw::deserialize(deserializer)?))
    }

    /// Present-but-null maps to `Some(None)`; absence is handled by `default`.
    pub fn double_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Option<String>>, D::Error> {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}

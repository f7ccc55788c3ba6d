pub mod export;
pub mod model;
pub mod presentation;
pub mod presets;
pub mod style;

pub use export::{EXPORT_VERSION, ExportDocument, ExportError, export_filename};
pub use model::*;
pub use presets::{GRADIENT_SWATCHES, GradientSwatch, Preset, random_card, randomize_style};
pub use style::{ResolvedStyle, TextStyle, TextStyles, resolve_style, resolve_text_styles};

// Re-export chrono types so downstream crates don't need a direct dependency
pub use chrono::{DateTime, Utc};

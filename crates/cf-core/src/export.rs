//! Export document: the current card plus a timestamp and format version,
//! serialized as pretty JSON for download, and parsed back on import.

use crate::model::CardSettings;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format version written into every export.
pub const EXPORT_VERSION: &str = "2.0.0";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported export version \"{found}\" (expected {})", EXPORT_VERSION)]
    UnsupportedVersion { found: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub card: CardSettings,
    /// RFC 3339 with millisecond precision.
    pub timestamp: String,
    pub version: String,
}

impl ExportDocument {
    pub fn new(card: CardSettings, at: DateTime<Utc>) -> Self {
        Self {
            card,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an export. Documents from another major version are rejected;
    /// the card itself is normalized like any other decoded settings.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let mut doc: ExportDocument = serde_json::from_str(json)?;
        if major(&doc.version) != major(EXPORT_VERSION) {
            return Err(ExportError::UnsupportedVersion { found: doc.version });
        }
        doc.card = doc.card.normalized();
        Ok(doc)
    }
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

/// Download file name for an export taken at `at`.
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!("card-editor-pro-{}.json", at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_718_000_000_123).unwrap()
    }

    #[test]
    fn export_carries_version_and_timestamp() {
        let doc = ExportDocument::new(CardSettings::default(), at());
        assert_eq!(doc.version, "2.0.0");
        assert_eq!(doc.timestamp, "2024-06-10T06:13:20.123Z");
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"bgGradientFrom\": \"#3b82f6\""));
    }

    #[test]
    fn export_then_import_preserves_card() {
        let card = CardSettings {
            title: "Launch".into(),
            bg_gradient_to: Some("#8b5cf6".into()),
            rotation: 12.5,
            ..Default::default()
        };
        let json = ExportDocument::new(card.clone(), at()).to_json().unwrap();
        let back = ExportDocument::from_json(&json).unwrap();
        assert_eq!(back.card, card);
    }

    #[test]
    fn import_rejects_other_major_version() {
        let json = r#"{"card": {}, "timestamp": "x", "version": "1.4.0"}"#;
        match ExportDocument::from_json(json) {
            Err(ExportError::UnsupportedVersion { found }) => assert_eq!(found, "1.4.0"),
            other => panic!("expected version error, got {other:?}"),
        }
    }

    #[test]
    fn import_rejects_malformed_json() {
        assert!(matches!(
            ExportDocument::from_json("{not json"),
            Err(ExportError::Json(_))
        ));
    }

    #[test]
    fn filename_uses_millis() {
        assert_eq!(export_filename(at()), "card-editor-pro-1718000000123.json");
    }
}

//! Report configuration: which sections to build, in what order, and whether
//! each section lists what's left.
//!
//! Settings are plain RON. Every key is optional:
//!
//! ```ron
//! (
//!     sections: [GrandpaEvaluation, CommunityCenter, Money],
//!     list_outstanding: false,
//! )
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::SectionId;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckupSettings {
    /// Report order. Repeated ids are ignored after their first appearance.
    pub sections: Vec<SectionId>,
    /// When false, sections carry no "what's left" lists.
    pub list_outstanding: bool,
}

impl Default for CheckupSettings {
    fn default() -> Self {
        Self {
            sections: SectionId::ALL.to_vec(),
            list_outstanding: true,
        }
    }
}

impl CheckupSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_ron_str(&text)?;
        info!(
            "[Settings] Loaded {} ({} section(s)).",
            path.display(),
            settings.ordered_sections().len()
        );
        Ok(settings)
    }

    /// The configured sections with repeats dropped.
    pub fn ordered_sections(&self) -> Vec<SectionId> {
        let mut seen = Vec::with_capacity(self.sections.len());
        for id in &self.sections {
            if !seen.contains(id) {
                seen.push(*id);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_every_section() {
        let settings = CheckupSettings::default();
        assert_eq!(settings.ordered_sections(), SectionId::ALL.to_vec());
        assert!(settings.list_outstanding);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let settings = CheckupSettings::from_ron_str("(list_outstanding: false)").unwrap();
        assert!(!settings.list_outstanding);
        assert_eq!(settings.sections.len(), SectionId::ALL.len());

        let settings = CheckupSettings::from_ron_str("()").unwrap();
        assert_eq!(settings, CheckupSettings::default());
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let settings =
            CheckupSettings::from_ron_str("(sections: [Money, Summary, Money, Museum, Summary])")
                .unwrap();
        assert_eq!(
            settings.ordered_sections(),
            vec![SectionId::Money, SectionId::Summary, SectionId::Museum]
        );
    }

    #[test]
    fn test_unknown_section_is_a_parse_error() {
        let err = CheckupSettings::from_ron_str("(sections: [Fishin])").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CheckupSettings::load(Path::new("/nonexistent/checkup.ron")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}

//! Report configuration
//!
//! Loaded from a TOML file at process start and passed down by value —
//! no global state. Covers the store location, the output folder, and
//! the research-type → template table that used to live as a hardcoded
//! dictionary in the legacy tool.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no template configured for research type \"{0}\"")]
    UnknownResearchType(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Measurement-store directory (sled database).
    pub store_path: PathBuf,
    /// Where finished reports and placeholder snapshots land.
    pub output_dir: PathBuf,
    /// Directory holding the document templates.
    pub templates_dir: PathBuf,
    /// Research-type tag → template file name.
    pub templates: BTreeMap<String, String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        // The template table from the legacy tool; operators override it
        // in the TOML file when template sets differ per field office.
        let templates = [
            ("КВД", "KVD.docx"),
            ("КВД_Заполярка", "KVD_Zapolyarka.docx"),
            ("КВД_Оренбург", "KVD_Orenburg.docx"),
            ("КВД_Оренбург_газ", "KVD_Orenburg_gas.docx"),
            ("КВД_Хантос", "KVD_Khantos.docx"),
            ("КВД_ННГ", "KVD_NNG.docx"),
            ("КВД+ИД", "KVD_ID.docx"),
            ("КСД", "KSD.docx"),
            ("КПД", "KPD.docx"),
            ("КПД+ИД", "KPD_ID.docx"),
            ("ГРП", "GRP.docx"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            store_path: PathBuf::from("measurements.db"),
            output_dir: PathBuf::from("reports"),
            templates_dir: PathBuf::from("templates"),
            templates,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file, or defaults when `path` is
    /// `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), templates = config.templates.len(), "config loaded");
        Ok(config)
    }

    /// Resolve the template path for a research-type tag. An unknown
    /// type is a configuration error and aborts the run.
    pub fn template_for(&self, research_type: &str) -> Result<PathBuf, ConfigError> {
        self.templates
            .get(research_type)
            .map(|name| self.templates_dir.join(name))
            .ok_or_else(|| ConfigError::UnknownResearchType(research_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_legacy_template_table() {
        let config = ReportConfig::default();
        assert!(config.template_for("КВД").is_ok());
        assert!(config.template_for("КСД").is_ok());
        assert!(config.template_for("ГРП").is_ok());
        assert!(matches!(
            config.template_for("неизвестно"),
            Err(ConfigError::UnknownResearchType(_))
        ));
    }

    #[test]
    fn toml_overrides_parse() {
        let toml_str = r#"
store_path = "/data/store"
output_dir = "/data/out"
templates_dir = "/data/templates"

[templates]
"КВД" = "custom_kvd.docx"
"#;
        let config: ReportConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.template_for("КВД").unwrap(),
            PathBuf::from("/data/templates/custom_kvd.docx")
        );
        // The override table replaces the default one entirely.
        assert!(config.template_for("КСД").is_err());
    }
}

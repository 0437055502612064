//! Rule tables: legacy stop codes, route colors and headsign merge classes.
//!
//! Built-in defaults cover the current feed. A JSON file can replace any of
//! the three tables without touching the resolver or normalizer; tables the
//! file omits keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::headsign::MergeTable;
use crate::resolve::LegacyStopCodes;

pub use crate::metadata::RouteColors;

/// Errors loading or saving a rules file.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// Reading or writing the file failed
    #[error("rules file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid rules JSON (including malformed colors)
    #[error("rules JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A merge class whose canonical label is not one of its members
    #[error("merge class for route {route_id} is inconsistent: {canonical:?} is not a member")]
    InvalidMergeClass { route_id: i64, canonical: String },
}

/// All static data the transform consults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    pub legacy_stop_codes: LegacyStopCodes,
    pub route_colors: RouteColors,
    pub merge_classes: MergeTable,
}

impl RuleTables {
    /// Load tables from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_json(&contents)?;

        info!(
            path = %path.display(),
            legacy_stop_codes = tables.legacy_stop_codes.len(),
            route_colors = tables.route_colors.len(),
            merge_classes = tables.merge_classes.iter().count(),
            "loaded rule tables"
        );
        Ok(tables)
    }

    /// Parse tables from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let tables: RuleTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Save tables as pretty-printed JSON.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RulesError> {
        let path = path.as_ref();
        let io_err = |source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(io_err)?;
        Ok(())
    }

    /// Every merge class must contain its canonical label.
    pub fn validate(&self) -> Result<(), RulesError> {
        match self.merge_classes.iter().find(|(_, class)| !class.is_consistent()) {
            Some((route_id, class)) => Err(RulesError::InvalidMergeClass {
                route_id,
                canonical: class.canonical.clone(),
            }),
            None => Ok(()),
        }
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! regime configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{
    IrtTable, RegimeConfig, RegimeMetadata, TaxTableConfig, TaxTableFile,
};

/// Loads and provides access to the payroll regime configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query regime metadata and the tax table in
/// force on a given date.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/angola/
/// ├── regime.yaml          # Regime metadata
/// └── tables/
///     └── 2024-01-01.yaml  # Tax table effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/angola").unwrap();
///
/// // Resolve the table in force on a pay date
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let table = loader.table_for(date).unwrap();
/// println!("Dependent deduction: {}", table.irt().dependent_deduction());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RegimeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Every table file is validated as it is parsed; a malformed bracket
    /// table fails the whole load.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/angola")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any bracket table fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/angola")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load regime.yaml
        let regime_path = path.join("regime.yaml");
        let metadata = Self::load_yaml::<RegimeMetadata>(&regime_path)?;

        // Load all table files from the tables directory
        let tables_dir = path.join("tables");
        let tables = Self::load_tables(&tables_dir)?;

        info!(
            country = %metadata.country,
            versions = tables.len(),
            "Loaded payroll regime configuration"
        );

        let config = RegimeConfig::new(metadata, tables);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all table files from the tables directory.
    fn load_tables(tables_dir: &Path) -> EngineResult<Vec<TaxTableConfig>> {
        let tables_dir_str = tables_dir.display().to_string();

        if !tables_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: tables_dir_str,
            });
        }

        let entries = fs::read_dir(tables_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<TaxTableFile>(&path)?;
                let irt = IrtTable::new(file.irt.dependent_deduction, file.irt.brackets)?;
                debug!(
                    file = %path.display(),
                    effective_date = %file.effective_date,
                    "Loaded tax table version"
                );
                tables.push(TaxTableConfig::new(
                    file.effective_date,
                    irt,
                    file.inss,
                    file.overtime,
                    file.termination,
                ));
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", tables_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying regime configuration.
    pub fn config(&self) -> &RegimeConfig {
        &self.config
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        self.config.regime()
    }

    /// Resolves the tax table version in force on the given date.
    ///
    /// The method finds the most recent table with an effective date on or
    /// before the given date.
    ///
    /// # Arguments
    ///
    /// * `date` - The date for which to resolve the table
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/angola")?;
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let table = loader.table_for(date)?;
    /// println!("INSS ceiling: {}", table.inss().ceiling);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn table_for(&self, date: NaiveDate) -> EngineResult<&TaxTableConfig> {
        self.config.table_for(date)
    }
}

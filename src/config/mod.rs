//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load a payroll regime from YAML
//! files, including regime metadata and date-versioned tax tables (IRT
//! brackets, INSS rates, overtime surcharges, and termination rules).
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/angola").unwrap();
//! println!("Loaded regime: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    InssRates, IrtSection, IrtTable, OvertimeRates, RegimeConfig, RegimeMetadata, TaxBracket,
    TaxTableConfig, TaxTableFile, TerminationRules,
};

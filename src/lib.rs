//! Payroll Calculation Engine for Angolan Labour and Tax Law
//!
//! This crate provides pure, deterministic payroll calculations for Angola:
//! progressive IRT (labour income tax) resolution, INSS social-security
//! contribution splitting, net salary composition, overtime and 13th-month
//! valuation, and termination settlements, driven by a versioned YAML
//! configuration of the statutory tables.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod money;

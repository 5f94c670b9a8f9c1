//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod adjustment;
mod contribution;
mod payslip;
mod termination;
mod thirteenth;

pub use adjustment::{AdjustmentImpact, AdjustmentInput};
pub use contribution::InssContribution;
pub use payslip::{PayslipInput, SalaryBreakdown};
pub use termination::{TerminationInput, TerminationSettlement, TerminationType};
pub use thirteenth::ThirteenthSalary;

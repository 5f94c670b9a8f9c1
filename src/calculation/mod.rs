//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for Angolan
//! payroll, including progressive IRT assessment, the INSS contribution
//! split with its ceiling, net salary composition, overtime surcharges,
//! the thirteenth month salary, termination settlements with their
//! service period measurement, and salary adjustment simulation.

mod adjustment;
mod inss;
mod irt;
mod net_salary;
mod overtime;
mod service_period;
mod termination;
mod thirteenth;

pub use adjustment::simulate_salary_adjustment;
pub use inss::calculate_inss;
pub use irt::{IrtAssessment, calculate_irt, calculate_irt_assessment};
pub use net_salary::calculate_net_salary;
pub use overtime::{OvertimeKind, calculate_overtime_pay};
pub use service_period::{ServicePeriod, calculate_service_period};
pub use termination::calculate_termination_settlement;
pub use thirteenth::calculate_thirteenth_salary;

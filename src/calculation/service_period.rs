//! Service period measurement between hire and termination dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Completed years and residual months of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePeriod {
    /// Full calendar years completed.
    pub years: u32,
    /// Months completed beyond the last full year, always below 12.
    pub months: u32,
}

impl ServicePeriod {
    /// Total completed months of service.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

/// Measures completed service between hire and termination.
///
/// A month counts as completed only once the day of month of the hire
/// date is reached again, so 15 January to 14 February is zero months
/// and 15 January to 15 February is one.
///
/// # Arguments
///
/// * `hire_date` - First day of employment
/// * `termination_date` - Last day of employment
///
/// # Returns
///
/// The completed [`ServicePeriod`], or
/// [`EngineError::InvalidServicePeriod`] when the termination date is
/// not after the hire date.
pub fn calculate_service_period(
    hire_date: NaiveDate,
    termination_date: NaiveDate,
) -> EngineResult<ServicePeriod> {
    if termination_date <= hire_date {
        return Err(EngineError::InvalidServicePeriod {
            hire_date,
            termination_date,
        });
    }

    let mut total_months = (termination_date.year() - hire_date.year()) * 12
        + (termination_date.month() as i32 - hire_date.month() as i32);
    if termination_date.day() < hire_date.day() {
        total_months -= 1;
    }
    let total_months = total_months.max(0) as u32;

    Ok(ServicePeriod {
        years: total_months / 12,
        months: total_months % 12,
    })
}

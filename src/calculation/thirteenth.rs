//! Thirteenth month salary (Christmas subsidy).

use rust_decimal::Decimal;

use crate::config::TaxTableConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::ThirteenthSalary;
use crate::money::round_half_up;

use super::inss::calculate_inss;
use super::irt::calculate_irt;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes the thirteenth month salary with its two-instalment split.
///
/// The gross accrues at one twelfth of the base salary per month worked
/// in the year. IRT and the worker INSS share are assessed on the gross
/// under the normal monthly rules. The first instalment is half the
/// gross paid untaxed mid-year; the second settles the remainder after
/// deductions, so the instalments always sum to the net.
///
/// # Arguments
///
/// * `base_salary` - Monthly base salary
/// * `months_worked` - Months worked in the calendar year, 1 to 12
/// * `table` - The tax table in force on the payment date
///
/// # Returns
///
/// The itemised [`ThirteenthSalary`], or an error for a negative salary
/// or a month count outside 1 to 12.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::calculate_thirteenth_salary;
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/angola")?;
/// let table = loader.table_for(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())?;
///
/// let thirteenth = calculate_thirteenth_salary(Decimal::from(600000), 12, table)?;
/// println!("Second instalment: {}", thirteenth.second_installment);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_thirteenth_salary(
    base_salary: Decimal,
    months_worked: u32,
    table: &TaxTableConfig,
) -> EngineResult<ThirteenthSalary> {
    if base_salary < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "base_salary".to_string(),
            value: base_salary,
        });
    }
    if months_worked == 0 || months_worked > 12 {
        return Err(EngineError::InvalidInput {
            field: "months_worked".to_string(),
            message: format!("must be between 1 and 12, got {months_worked}"),
        });
    }

    let gross = round_half_up(base_salary / MONTHS_PER_YEAR * Decimal::from(months_worked));
    let irt = calculate_irt(gross, 0, table.irt())?;
    let inss_worker = calculate_inss(gross, table.inss().worker_rate_percent, table.inss())?.worker;
    let net = gross - inss_worker - irt;

    let first_installment = round_half_up(gross / Decimal::TWO);
    // Remainder settles the deductions, keeping the instalments equal to net.
    let second_installment = gross - first_installment - inss_worker - irt;

    Ok(ThirteenthSalary {
        months_worked,
        gross,
        irt,
        inss_worker,
        net,
        first_installment,
        second_installment,
    })
}

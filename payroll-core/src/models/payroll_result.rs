use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SchemeCode;

/// Full gross-to-net breakdown for one month's compensation.
///
/// Recomputed from scratch on every input change; callers display it or
/// copy `gross_salary`/`net_salary` back into form state, but never patch
/// individual fields.
///
/// `gross_salary`, `net_salary`, `income_tax` and the contribution amounts
/// are rounded to two decimals for display. `contribution_base` and
/// `taxable_base` keep full precision so the breakdown can show the exact
/// intermediates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Base salary plus all primes.
    pub gross_salary: Decimal,
    /// Base salary plus contribution-eligible primes (unrounded).
    pub contribution_base: Decimal,
    /// Base salary plus taxable primes, less employee contributions,
    /// floored at zero (unrounded).
    pub taxable_base: Decimal,
    /// Per-scheme employee contributions, enabled schemes only, in
    /// CNSS, AMO, CMIR, RCAR order.
    pub employee_contributions: Vec<(SchemeCode, Decimal)>,
    /// Sum of `employee_contributions`.
    pub total_contributions: Decimal,
    /// Monthly income tax (IR) withheld.
    pub income_tax: Decimal,
    /// `gross_salary - total_contributions - income_tax`.
    pub net_salary: Decimal,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ContributionScheme, PrimeItem};

/// One contract's compensation snapshot, as read from the hosting form.
///
/// The engine only ever reads this; it is rebuilt by the caller on every
/// relevant field change. Invalid in-progress values (a negative base
/// salary, a negative prime amount) are tolerated and clamped downstream
/// rather than rejected, so the calculation stays total while the user is
/// still typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub base_salary: Decimal,
    pub primes: Vec<PrimeItem>,
    pub schemes: Vec<ContributionScheme>,
    /// Whether income tax (IR) withholding applies to this contract.
    pub ir_applicable: bool,
}

impl SalaryInput {
    /// A bare input: the given base salary, no primes, the statutory
    /// scheme table with everything disabled, IR on.
    pub fn new(base_salary: Decimal) -> Self {
        Self {
            base_salary,
            primes: Vec::new(),
            schemes: ContributionScheme::statutory_defaults(),
            ir_applicable: true,
        }
    }
}

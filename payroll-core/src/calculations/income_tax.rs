//! Progressive income tax (IR) withholding.
//!
//! The IR is assessed on annual income but withheld monthly: the monthly
//! taxable base is annualized (× 12), run through the progressive
//! schedule, and the annual tax divided back by 12. The statutory schedule
//! is:
//!
//! | Annual taxable income | Marginal rate |
//! |-----------------------|---------------|
//! | ≤ 30 000              | 0%            |
//! | 30 000 – 50 000       | 10%           |
//! | 50 000 – 60 000       | 20%           |
//! | 60 000 – 80 000       | 30%           |
//! | 80 000 – 180 000      | 34%           |
//! | > 180 000             | 38%           |
//!
//! The schedule is plain data (threshold + marginal rate per row) and the
//! tax is accumulated slice by slice, so a statutory change to the
//! thresholds, the rates or the row count is a table edit, not a code
//! change. Slices accumulate at full precision; rounding happens once, on
//! the final monthly figure.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::calculations::IncomeTaxSchedule;
//!
//! let schedule = IncomeTaxSchedule::moroccan_ir();
//!
//! // 5129.30 × 12 = 61 551.60 annual: 2 000 + 2 000 + 30% of 1 551.60
//! assert_eq!(schedule.monthly_tax(dec!(5129.30), true), dec!(372.12));
//! // IR not applicable on this contract
//! assert_eq!(schedule.monthly_tax(dec!(5129.30), false), dec!(0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::TaxBracket;

/// Errors raised while building a custom tax schedule.
///
/// Only construction can fail; once built, a schedule computes a tax for
/// every input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxScheduleError {
    /// The schedule has no brackets at all.
    #[error("tax schedule has no brackets")]
    Empty,

    /// A bracket's upper bound does not exceed the previous one's.
    #[error("bracket bounds out of order at {0}")]
    OutOfOrder(Decimal),

    /// A marginal rate is negative.
    #[error("negative marginal rate {0}")]
    NegativeRate(Decimal),

    /// An unbounded bracket appears before the final position.
    #[error("unbounded bracket is not last")]
    UnboundedNotLast,
}

/// An ordered progressive tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl IncomeTaxSchedule {
    /// Builds a schedule from ordered brackets.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxScheduleError`] when the table is empty, the
    /// bounds are not strictly increasing, a rate is negative, or an
    /// unbounded bracket is followed by another row.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, IncomeTaxScheduleError> {
        if brackets.is_empty() {
            return Err(IncomeTaxScheduleError::Empty);
        }

        let mut previous_upper: Option<Decimal> = None;
        for (i, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO {
                return Err(IncomeTaxScheduleError::NegativeRate(bracket.rate));
            }
            match bracket.upper_annual {
                Some(upper) => {
                    if previous_upper.is_some_and(|p| upper <= p) {
                        return Err(IncomeTaxScheduleError::OutOfOrder(upper));
                    }
                    previous_upper = Some(upper);
                }
                None if i + 1 < brackets.len() => {
                    return Err(IncomeTaxScheduleError::UnboundedNotLast);
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// The statutory Moroccan IR schedule.
    pub fn moroccan_ir() -> Self {
        let brackets = vec![
            TaxBracket::bounded(Decimal::from(30_000), Decimal::ZERO),
            TaxBracket::bounded(Decimal::from(50_000), Decimal::new(10, 2)),
            TaxBracket::bounded(Decimal::from(60_000), Decimal::new(20, 2)),
            TaxBracket::bounded(Decimal::from(80_000), Decimal::new(30, 2)),
            TaxBracket::bounded(Decimal::from(180_000), Decimal::new(34, 2)),
            TaxBracket::unbounded(Decimal::new(38, 2)),
        ];
        // The statutory table is well-formed by construction.
        Self { brackets }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Monthly IR withheld on `monthly_taxable_base`.
    ///
    /// Returns zero when IR does not apply to the contract or the base is
    /// zero or negative. The result is rounded to two decimals; all
    /// intermediate slices keep full precision.
    pub fn monthly_tax(
        &self,
        monthly_taxable_base: Decimal,
        ir_applicable: bool,
    ) -> Decimal {
        if !ir_applicable || monthly_taxable_base <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let annual = monthly_taxable_base * Decimal::from(12);
        let annual_tax = self.annual_tax(annual);

        round_half_up(annual_tax / Decimal::from(12))
    }

    /// Accumulates the marginal tax over every filled bracket slice.
    fn annual_tax(
        &self,
        annual_income: Decimal,
    ) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;

        for bracket in &self.brackets {
            let slice_top = match bracket.upper_annual {
                Some(upper) => annual_income.min(upper),
                None => annual_income,
            };
            if slice_top <= lower {
                break;
            }
            tax += (slice_top - lower) * bracket.rate;
            lower = slice_top;
        }

        tax
    }
}

impl Default for IncomeTaxSchedule {
    fn default() -> Self {
        Self::moroccan_ir()
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive income-tax schedule.
///
/// A bracket covers annual taxable income from the previous row's upper
/// bound (exclusive) up to `upper_annual` (inclusive); the final bracket
/// has `upper_annual` of `None` and is unbounded. Tax is computed by
/// accumulating `rate` over each filled slice, never by per-bracket lookup
/// tables, so schedules with a different row count need no code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper annual-income bound of this bracket, `None` for the top one.
    pub upper_annual: Option<Decimal>,
    /// Marginal rate applied to the slice, as a fraction (`0.10` = 10%).
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn bounded(
        upper_annual: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_annual: Some(upper_annual),
            rate,
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_annual: None,
            rate,
        }
    }
}

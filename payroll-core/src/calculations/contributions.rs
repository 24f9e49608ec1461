//! Employee social-contribution calculations.
//!
//! Every enabled scheme withholds `base × employee_rate / 100` from the
//! shared contribution base; there is no per-scheme base override. The
//! employer-side rate never enters the net-salary computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::{ContributionScheme, SchemeCode};

/// Employee contributions withheld for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    /// Amount per enabled scheme, in CNSS, AMO, CMIR, RCAR order.
    /// Disabled schemes are omitted.
    pub per_scheme: Vec<(SchemeCode, Decimal)>,
    /// Sum of the per-scheme amounts.
    pub total: Decimal,
}

impl ContributionBreakdown {
    pub fn empty() -> Self {
        Self {
            per_scheme: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Amount withheld for one scheme, zero when absent.
    pub fn amount_for(&self, code: SchemeCode) -> Decimal {
        self.per_scheme
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, amount)| *amount)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Computes the employee contributions on `contribution_base`.
///
/// Per-scheme amounts are rounded to two decimals (each scheme is settled
/// in cents on the payslip) and the total is the sum of the rounded
/// amounts, so the breakdown always adds up exactly. A negative base or
/// rate degrades to zero. Input order of `schemes` does not matter; the
/// output is always in the fixed presentation order.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::calculate_contributions;
/// use payroll_core::models::{ContributionScheme, SchemeCode};
///
/// let mut schemes = ContributionScheme::statutory_defaults();
/// schemes[0].enabled = true; // CNSS at 4.48%
///
/// let breakdown = calculate_contributions(dec!(5500), &schemes);
///
/// assert_eq!(breakdown.amount_for(SchemeCode::Cnss), dec!(246.40));
/// assert_eq!(breakdown.total, dec!(246.40));
/// ```
pub fn calculate_contributions(
    contribution_base: Decimal,
    schemes: &[ContributionScheme],
) -> ContributionBreakdown {
    let base = clamp_non_negative(contribution_base);
    let mut breakdown = ContributionBreakdown::empty();

    for code in SchemeCode::ALL {
        let Some(scheme) = schemes.iter().find(|s| s.code == code && s.enabled) else {
            continue;
        };
        let rate = clamp_non_negative(scheme.employee_rate_pct);
        let amount = round_half_up(base * rate / Decimal::ONE_HUNDRED);
        breakdown.per_scheme.push((code, amount));
        breakdown.total += amount;
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn enabled(
        code: SchemeCode,
        employee_rate_pct: Decimal,
    ) -> ContributionScheme {
        ContributionScheme {
            code,
            enabled: true,
            employee_rate_pct,
            employer_rate_pct: dec!(0),
        }
    }

    #[test]
    fn no_enabled_scheme_means_zero_total() {
        let schemes = ContributionScheme::statutory_defaults();

        let breakdown = calculate_contributions(dec!(5000), &schemes);

        assert_eq!(breakdown.per_scheme, vec![]);
        assert_eq!(breakdown.total, dec!(0));
    }

    #[test]
    fn enabled_schemes_share_the_same_base() {
        let schemes = vec![
            enabled(SchemeCode::Cnss, dec!(4.48)),
            enabled(SchemeCode::Amo, dec!(2.26)),
        ];

        let breakdown = calculate_contributions(dec!(5500), &schemes);

        assert_eq!(breakdown.amount_for(SchemeCode::Cnss), dec!(246.40));
        assert_eq!(breakdown.amount_for(SchemeCode::Amo), dec!(124.30));
        assert_eq!(breakdown.total, dec!(370.70));
    }

    #[test]
    fn disabled_schemes_are_omitted_from_the_breakdown() {
        let mut schemes = ContributionScheme::statutory_defaults();
        schemes[1].enabled = true; // AMO only

        let breakdown = calculate_contributions(dec!(1000), &schemes);

        assert_eq!(breakdown.per_scheme, vec![(SchemeCode::Amo, dec!(22.60))]);
        assert_eq!(breakdown.amount_for(SchemeCode::Cnss), dec!(0));
    }

    #[test]
    fn output_order_is_fixed_regardless_of_input_order() {
        let schemes = vec![
            enabled(SchemeCode::Rcar, dec!(20.00)),
            enabled(SchemeCode::Cnss, dec!(4.48)),
        ];

        let breakdown = calculate_contributions(dec!(1000), &schemes);

        let codes: Vec<SchemeCode> = breakdown.per_scheme.iter().map(|(c, _)| *c).collect();
        assert_eq!(codes, vec![SchemeCode::Cnss, SchemeCode::Rcar]);
    }

    #[test]
    fn per_scheme_amounts_are_rounded_to_cents() {
        let schemes = vec![enabled(SchemeCode::Cnss, dec!(4.48))];

        let breakdown = calculate_contributions(dec!(5000.333), &schemes);

        // 5000.333 × 4.48% = 224.0149184
        assert_eq!(breakdown.amount_for(SchemeCode::Cnss), dec!(224.01));
    }

    #[test]
    fn negative_base_degrades_to_zero() {
        let schemes = vec![enabled(SchemeCode::Cnss, dec!(4.48))];

        let breakdown = calculate_contributions(dec!(-5000), &schemes);

        assert_eq!(breakdown.total, dec!(0));
    }

    #[test]
    fn negative_rate_degrades_to_zero() {
        let schemes = vec![enabled(SchemeCode::Cnss, dec!(-4.48))];

        let breakdown = calculate_contributions(dec!(5000), &schemes);

        assert_eq!(breakdown.per_scheme, vec![(SchemeCode::Cnss, dec!(0.00))]);
        assert_eq!(breakdown.total, dec!(0.00));
    }
}

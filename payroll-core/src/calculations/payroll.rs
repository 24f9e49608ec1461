//! Gross-to-net payroll assembly.
//!
//! Ties the prime classification, contribution and income-tax steps
//! together into the single pipeline the contract form re-runs on every
//! input change:
//!
//! 1. classify the primes into total / taxable / contribution-eligible sums
//! 2. `gross = base + total primes`
//! 3. `contribution base = base + contribution-eligible primes`
//! 4. withhold employee contributions on that base
//! 5. `taxable base = max(0, base + taxable primes − contributions)`
//! 6. withhold monthly IR on the taxable base
//! 7. `net = gross − contributions − IR`
//!
//! The whole pipeline is a pure, total function of the input snapshot: no
//! I/O, no state, and a result for every input including half-typed or
//! negative values, which degrade to zero. Validation (required fields,
//! positive amounts) belongs to the form layer upstream.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::calculations::compute_payroll;
//! use payroll_core::models::{PrimeItem, SalaryInput};
//!
//! let mut input = SalaryInput::new(dec!(5000));
//! input.primes.push(PrimeItem::new("Prime d'ancienneté", dec!(500), true, true));
//! input.schemes[0].enabled = true; // CNSS 4.48%
//! input.schemes[1].enabled = true; // AMO 2.26%
//!
//! let result = compute_payroll(&input);
//!
//! assert_eq!(result.gross_salary, dec!(5500.00));
//! assert_eq!(result.total_contributions, dec!(370.70));
//! assert_eq!(result.income_tax, dec!(372.12));
//! assert_eq!(result.net_salary, dec!(4757.18));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{clamp_non_negative, max, round_half_up};
use crate::calculations::contributions::calculate_contributions;
use crate::calculations::income_tax::IncomeTaxSchedule;
use crate::calculations::primes::classify_primes;
use crate::models::{PayrollResult, SalaryInput};

/// Gross-to-net calculator for one contract snapshot.
///
/// Holds the tax schedule to withhold under; [`Default`] uses the
/// statutory Moroccan IR table. Cheap enough (linear in primes + schemes)
/// to re-run on every keystroke without debouncing.
#[derive(Debug, Clone, Default)]
pub struct PayrollCalculator {
    schedule: IncomeTaxSchedule,
}

impl PayrollCalculator {
    pub fn new(schedule: IncomeTaxSchedule) -> Self {
        Self { schedule }
    }

    /// Computes the full breakdown for one input snapshot.
    ///
    /// Total and side-effect-free: identical snapshots produce identical
    /// results, and no input makes it panic or error.
    pub fn calculate(
        &self,
        input: &SalaryInput,
    ) -> PayrollResult {
        let base_salary = clamp_non_negative(input.base_salary);
        let primes = classify_primes(&input.primes);

        let gross_salary = base_salary + primes.total;
        let contribution_base = base_salary + primes.contribution_eligible;

        let contributions = calculate_contributions(contribution_base, &input.schemes);

        let taxable_base = max(
            base_salary + primes.taxable - contributions.total,
            Decimal::ZERO,
        );
        let income_tax = self.schedule.monthly_tax(taxable_base, input.ir_applicable);

        let net_salary = round_half_up(gross_salary - contributions.total - income_tax);

        debug!(
            gross = %gross_salary,
            contributions = %contributions.total,
            tax = %income_tax,
            net = %net_salary,
            "payroll computed"
        );

        PayrollResult {
            gross_salary: round_half_up(gross_salary),
            contribution_base,
            taxable_base,
            employee_contributions: contributions.per_scheme,
            total_contributions: contributions.total,
            income_tax,
            net_salary,
        }
    }
}

/// Runs the calculation under the statutory IR schedule.
///
/// Convenience entry point for callers that do not carry a custom
/// schedule.
pub fn compute_payroll(input: &SalaryInput) -> PayrollResult {
    PayrollCalculator::default().calculate(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{PrimeItem, SchemeCode};

    fn scenario_input() -> SalaryInput {
        let mut input = SalaryInput::new(dec!(5000));
        input
            .primes
            .push(PrimeItem::new("Prime d'ancienneté", dec!(500), true, true));
        input.schemes[0].enabled = true; // CNSS 4.48%
        input.schemes[1].enabled = true; // AMO 2.26%
        input
    }

    #[test]
    fn all_zero_input_yields_all_zero_result() {
        let input = SalaryInput {
            base_salary: dec!(0),
            primes: vec![],
            schemes: vec![],
            ir_applicable: false,
        };

        let result = compute_payroll(&input);

        assert_eq!(result.gross_salary, dec!(0));
        assert_eq!(result.total_contributions, dec!(0));
        assert_eq!(result.income_tax, dec!(0));
        assert_eq!(result.net_salary, dec!(0));
    }

    #[test]
    fn no_primes_no_schemes_no_ir_passes_base_through() {
        let mut input = SalaryInput::new(dec!(5000));
        input.ir_applicable = false;

        let result = compute_payroll(&input);

        assert_eq!(result.gross_salary, dec!(5000.00));
        assert_eq!(result.net_salary, dec!(5000.00));
    }

    #[test]
    fn full_scenario_breakdown() {
        let result = compute_payroll(&scenario_input());

        assert_eq!(result.gross_salary, dec!(5500.00));
        assert_eq!(result.contribution_base, dec!(5500));
        assert_eq!(
            result.employee_contributions,
            vec![
                (SchemeCode::Cnss, dec!(246.40)),
                (SchemeCode::Amo, dec!(124.30)),
            ]
        );
        assert_eq!(result.total_contributions, dec!(370.70));
        assert_eq!(result.taxable_base, dec!(5129.30));
        assert_eq!(result.income_tax, dec!(372.12));
        assert_eq!(result.net_salary, dec!(4757.18));
    }

    #[test]
    fn non_cotisable_taxable_prime_raises_taxable_but_not_contribution_base() {
        let mut input = scenario_input();
        let baseline = compute_payroll(&input);

        input
            .primes
            .push(PrimeItem::new("Prime exceptionnelle", dec!(800), true, false));
        let result = compute_payroll(&input);

        assert_eq!(result.gross_salary, baseline.gross_salary + dec!(800));
        assert_eq!(result.contribution_base, baseline.contribution_base);
        assert_eq!(result.total_contributions, baseline.total_contributions);
        assert_eq!(result.taxable_base, baseline.taxable_base + dec!(800));
    }

    #[test]
    fn raising_base_salary_never_lowers_gross_contributions_or_net() {
        let mut lower = scenario_input();
        let mut higher = scenario_input();
        lower.base_salary = dec!(6000);
        higher.base_salary = dec!(6500);

        let low = compute_payroll(&lower);
        let high = compute_payroll(&higher);

        assert!(high.gross_salary >= low.gross_salary);
        assert!(high.total_contributions >= low.total_contributions);
        assert!(high.net_salary >= low.net_salary);
    }

    #[test]
    fn identical_snapshots_yield_identical_results() {
        let input = scenario_input();

        let first = compute_payroll(&input);
        let second = compute_payroll(&input);

        assert_eq!(first, second);
    }

    #[test]
    fn display_amounts_carry_exactly_two_decimals() {
        let mut input = SalaryInput::new(dec!(5000.333));
        input.ir_applicable = false;
        input.schemes[0].enabled = true; // CNSS 4.48%

        let result = compute_payroll(&input);

        assert_eq!(result.gross_salary, dec!(5000.33));
        // 5000.333 × 4.48% = 224.0149184 → 224.01 withheld
        assert_eq!(result.total_contributions, dec!(224.01));
        assert_eq!(result.net_salary, dec!(4776.32));
    }

    #[test]
    fn negative_base_salary_degrades_to_zero() {
        let mut input = scenario_input();
        input.base_salary = dec!(-5000);

        let result = compute_payroll(&input);

        assert_eq!(result.gross_salary, dec!(500.00));
        assert_eq!(result.contribution_base, dec!(500));
    }

    #[test]
    fn contributions_cannot_push_taxable_base_below_zero() {
        let mut input = SalaryInput::new(dec!(100));
        input.schemes[3].enabled = true;
        input.schemes[3].employee_rate_pct = dec!(150);

        let result = compute_payroll(&input);

        assert_eq!(result.taxable_base, dec!(0));
        assert_eq!(result.income_tax, dec!(0));
    }

    #[test]
    fn net_invariant_holds_for_the_scenario() {
        let result = compute_payroll(&scenario_input());

        assert_eq!(
            result.net_salary,
            result.gross_salary - result.total_contributions - result.income_tax
        );
    }
}

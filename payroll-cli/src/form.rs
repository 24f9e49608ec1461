//! Contract-form state hosting the payroll engine.
//!
//! The form owns the editable compensation fields and two read-only
//! display fields, `salary_brut` and `salary_net`. Every mutator snapshots
//! the current state into a [`SalaryInput`] and re-runs the calculator, so
//! the display fields always reflect the latest edit — a pure function
//! re-run on input change, with no subscription machinery. The display
//! fields are never treated as authoritative payroll data; anything sent
//! downstream is recomputed from the snapshot first.

use payroll_core::models::{
    ContributionScheme, PayrollResult, PrimeItem, SalaryInput, SchemeCode,
};
use payroll_core::{IncomeTaxSchedule, PayrollCalculator};
use rust_decimal::Decimal;

/// In-progress contract compensation form.
#[derive(Debug, Clone)]
pub struct ContractForm {
    base_salary: Decimal,
    primes: Vec<PrimeItem>,
    schemes: Vec<ContributionScheme>,
    ir_applicable: bool,
    calculator: PayrollCalculator,
    result: PayrollResult,
}

impl ContractForm {
    /// An empty form: zero base salary, no primes, statutory scheme table
    /// all disabled, IR on.
    pub fn new() -> Self {
        Self::with_schedule(IncomeTaxSchedule::moroccan_ir())
    }

    /// A form withholding under a custom tax schedule.
    pub fn with_schedule(schedule: IncomeTaxSchedule) -> Self {
        let calculator = PayrollCalculator::new(schedule);
        let result = calculator.calculate(&SalaryInput::new(Decimal::ZERO));
        Self {
            base_salary: Decimal::ZERO,
            primes: Vec::new(),
            schemes: ContributionScheme::statutory_defaults(),
            ir_applicable: true,
            calculator,
            result,
        }
    }

    // --- editable fields -------------------------------------------------

    pub fn set_base_salary(
        &mut self,
        amount: Decimal,
    ) {
        self.base_salary = amount;
        self.recompute();
    }

    pub fn add_prime(
        &mut self,
        prime: PrimeItem,
    ) {
        self.primes.push(prime);
        self.recompute();
    }

    /// Removes the prime line at `index`; out-of-range indexes are a
    /// no-op (the row was already gone).
    pub fn remove_prime(
        &mut self,
        index: usize,
    ) {
        if index < self.primes.len() {
            self.primes.remove(index);
            self.recompute();
        }
    }

    pub fn set_prime_amount(
        &mut self,
        index: usize,
        amount: Decimal,
    ) {
        if let Some(prime) = self.primes.get_mut(index) {
            prime.amount = amount;
            self.recompute();
        }
    }

    pub fn set_scheme_enabled(
        &mut self,
        code: SchemeCode,
        enabled: bool,
    ) {
        if let Some(scheme) = self.schemes.iter_mut().find(|s| s.code == code) {
            scheme.enabled = enabled;
            self.recompute();
        }
    }

    pub fn set_scheme_rate(
        &mut self,
        code: SchemeCode,
        employee_rate_pct: Decimal,
    ) {
        if let Some(scheme) = self.schemes.iter_mut().find(|s| s.code == code) {
            scheme.employee_rate_pct = employee_rate_pct;
            self.recompute();
        }
    }

    pub fn set_ir_applicable(
        &mut self,
        applicable: bool,
    ) {
        self.ir_applicable = applicable;
        self.recompute();
    }

    // --- read-only display fields ----------------------------------------

    /// Gross salary display field.
    pub fn salary_brut(&self) -> Decimal {
        self.result.gross_salary
    }

    /// Net salary display field.
    pub fn salary_net(&self) -> Decimal {
        self.result.net_salary
    }

    /// Full breakdown behind the display fields.
    pub fn result(&self) -> &PayrollResult {
        &self.result
    }

    pub fn primes(&self) -> &[PrimeItem] {
        &self.primes
    }

    pub fn schemes(&self) -> &[ContributionScheme] {
        &self.schemes
    }

    /// The current state as an engine input snapshot.
    pub fn snapshot(&self) -> SalaryInput {
        SalaryInput {
            base_salary: self.base_salary,
            primes: self.primes.clone(),
            schemes: self.schemes.clone(),
            ir_applicable: self.ir_applicable,
        }
    }

    fn recompute(&mut self) {
        self.result = self.calculator.calculate(&self.snapshot());
    }
}

impl Default for ContractForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_form_displays_zero() {
        let form = ContractForm::new();

        assert_eq!(form.salary_brut(), dec!(0));
        assert_eq!(form.salary_net(), dec!(0));
    }

    #[test]
    fn editing_base_salary_updates_display_fields() {
        let mut form = ContractForm::new();
        form.set_ir_applicable(false);

        form.set_base_salary(dec!(5000));

        assert_eq!(form.salary_brut(), dec!(5000.00));
        assert_eq!(form.salary_net(), dec!(5000.00));
    }

    #[test]
    fn every_edit_recomputes_from_the_latest_snapshot() {
        let mut form = ContractForm::new();
        form.set_base_salary(dec!(5000));
        form.add_prime(PrimeItem::new("Prime d'ancienneté", dec!(500), true, true));
        form.set_scheme_enabled(SchemeCode::Cnss, true);
        form.set_scheme_enabled(SchemeCode::Amo, true);

        assert_eq!(form.salary_brut(), dec!(5500.00));
        assert_eq!(form.salary_net(), dec!(4757.18));
    }

    #[test]
    fn removing_a_prime_restores_the_previous_figures() {
        let mut form = ContractForm::new();
        form.set_ir_applicable(false);
        form.set_base_salary(dec!(4000));
        form.add_prime(PrimeItem::new("Prime de panier", dec!(300), false, false));

        form.remove_prime(0);

        assert_eq!(form.salary_brut(), dec!(4000.00));
    }

    #[test]
    fn out_of_range_prime_edits_are_ignored() {
        let mut form = ContractForm::new();
        form.set_ir_applicable(false);
        form.set_base_salary(dec!(4000));

        form.remove_prime(5);
        form.set_prime_amount(5, dec!(100));

        assert_eq!(form.salary_brut(), dec!(4000.00));
    }

    #[test]
    fn disabling_a_scheme_drops_its_withholding() {
        let mut form = ContractForm::new();
        form.set_ir_applicable(false);
        form.set_base_salary(dec!(5000));
        form.set_scheme_enabled(SchemeCode::Cnss, true);
        assert_eq!(form.salary_net(), dec!(4776.00));

        form.set_scheme_enabled(SchemeCode::Cnss, false);

        assert_eq!(form.salary_net(), dec!(5000.00));
    }

    #[test]
    fn rate_edits_flow_into_the_breakdown() {
        let mut form = ContractForm::new();
        form.set_ir_applicable(false);
        form.set_base_salary(dec!(1000));
        form.set_scheme_enabled(SchemeCode::Rcar, true);

        form.set_scheme_rate(SchemeCode::Rcar, dec!(10));

        assert_eq!(form.result().total_contributions, dec!(100.00));
    }
}

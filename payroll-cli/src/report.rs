//! Plain-text rendering of a payroll breakdown.

use payroll_core::models::PayrollResult;

/// Renders the full gross-to-net breakdown as aligned text lines.
pub fn render_breakdown(result: &PayrollResult) -> String {
    let mut out = String::new();

    push_line(&mut out, "Salaire brut", &format!("{}", result.gross_salary));
    push_line(
        &mut out,
        "Base de cotisation",
        &format!("{}", result.contribution_base),
    );

    for (code, amount) in &result.employee_contributions {
        push_line(&mut out, &format!("  {}", code.as_str()), &format!("{amount}"));
    }
    push_line(
        &mut out,
        "Total cotisations",
        &format!("{}", result.total_contributions),
    );

    push_line(&mut out, "Base imposable", &format!("{}", result.taxable_base));
    push_line(&mut out, "IR retenu", &format!("{}", result.income_tax));
    push_line(&mut out, "Salaire net", &format!("{}", result.net_salary));

    out
}

fn push_line(
    out: &mut String,
    label: &str,
    value: &str,
) {
    out.push_str(&format!("{label:<22} {value:>14}\n"));
}

#[cfg(test)]
mod tests {
    use payroll_core::compute_payroll;
    use payroll_core::models::{PrimeItem, SalaryInput};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn breakdown_lists_enabled_schemes_between_gross_and_net() {
        let mut input = SalaryInput::new(dec!(5000));
        input
            .primes
            .push(PrimeItem::new("Prime d'ancienneté", dec!(500), true, true));
        input.schemes[0].enabled = true;
        input.schemes[1].enabled = true;

        let text = render_breakdown(&compute_payroll(&input));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Salaire brut"));
        assert!(lines[0].ends_with("5500.00"));
        assert!(lines[2].trim_start().starts_with("CNSS"));
        assert!(lines[2].ends_with("246.40"));
        assert!(lines[3].trim_start().starts_with("AMO"));
        assert!(lines[6].starts_with("Salaire net"));
        assert!(lines[6].ends_with("4757.18"));
    }

    #[test]
    fn disabled_schemes_do_not_appear() {
        let input = SalaryInput::new(dec!(3000));

        let text = render_breakdown(&compute_payroll(&input));

        assert!(!text.contains("CNSS"));
        assert!(!text.contains("RCAR"));
    }
}

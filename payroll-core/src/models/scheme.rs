use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Social-security and retirement contribution schemes.
///
/// Each scheme can be enabled independently on a contract and carries its
/// own employee/employer rates. Breakdown output always lists schemes in
/// the order CNSS, AMO, CMIR, RCAR (see [`SchemeCode::ALL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemeCode {
    /// Caisse Nationale de Sécurité Sociale.
    Cnss,
    /// Assurance Maladie Obligatoire.
    Amo,
    /// Caisse Mutuelle Interprofessionnelle de Retraite.
    Cmir,
    /// Régime Collectif d'Allocation de Retraite.
    Rcar,
}

impl SchemeCode {
    /// Fixed presentation order for contribution breakdowns.
    pub const ALL: [SchemeCode; 4] = [Self::Cnss, Self::Amo, Self::Cmir, Self::Rcar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cnss => "CNSS",
            Self::Amo => "AMO",
            Self::Cmir => "CMIR",
            Self::Rcar => "RCAR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CNSS" => Some(Self::Cnss),
            "AMO" => Some(Self::Amo),
            "CMIR" => Some(Self::Cmir),
            "RCAR" => Some(Self::Rcar),
            _ => None,
        }
    }
}

/// A contribution scheme as configured on one contract.
///
/// Rates are percentages (`4.48` means 4.48%). Only the employee rate
/// participates in the net-salary computation; the employer rate is kept
/// for display. Rate fields are meaningful only while `enabled` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionScheme {
    pub code: SchemeCode,
    pub enabled: bool,
    pub employee_rate_pct: Decimal,
    pub employer_rate_pct: Decimal,
}

impl ContributionScheme {
    /// A disabled scheme carrying the statutory reference rates, ready to
    /// be switched on.
    pub fn disabled(code: SchemeCode) -> Self {
        let (employee, employer) = statutory_rates(code);
        Self {
            code,
            enabled: false,
            employee_rate_pct: employee,
            employer_rate_pct: employer,
        }
    }

    /// An enabled scheme at the statutory reference rates.
    pub fn at_statutory_rate(code: SchemeCode) -> Self {
        Self {
            enabled: true,
            ..Self::disabled(code)
        }
    }

    /// The full default scheme table, all disabled, in presentation order.
    ///
    /// This is the single source for the statutory reference rates; the
    /// calculation layer never hard-codes them.
    pub fn statutory_defaults() -> Vec<ContributionScheme> {
        SchemeCode::ALL.iter().map(|c| Self::disabled(*c)).collect()
    }
}

/// Statutory reference rates, employee/employer, in percent.
fn statutory_rates(code: SchemeCode) -> (Decimal, Decimal) {
    match code {
        SchemeCode::Cnss => (Decimal::new(448, 2), Decimal::new(898, 2)),
        SchemeCode::Amo => (Decimal::new(226, 2), Decimal::new(226, 2)),
        SchemeCode::Cmir => (Decimal::new(600, 2), Decimal::new(600, 2)),
        SchemeCode::Rcar => (Decimal::new(2000, 2), Decimal::new(2000, 2)),
    }
}

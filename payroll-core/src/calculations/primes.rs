//! Prime classification: partitions a contract's bonus lines by their
//! taxable / contribution-eligible flags and sums each subset.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::clamp_non_negative;
use crate::models::PrimeItem;

/// Sums of the prime subsets feeding the gross, taxable and contribution
/// bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeTotals {
    /// Every prime, regardless of flags.
    pub total: Decimal,
    /// Primes flagged taxable.
    pub taxable: Decimal,
    /// Primes flagged subject to contributions.
    pub contribution_eligible: Decimal,
}

/// Classifies and sums a contract's primes.
///
/// Each item counts toward `total`; items flagged `taxable` also count
/// toward `taxable`, items flagged `subject_to_contributions` also count
/// toward `contribution_eligible`. The two flags are independent, so one
/// item may appear in both subsets or in neither. Negative amounts degrade
/// to zero; there is no error path.
pub fn classify_primes(primes: &[PrimeItem]) -> PrimeTotals {
    let mut totals = PrimeTotals {
        total: Decimal::ZERO,
        taxable: Decimal::ZERO,
        contribution_eligible: Decimal::ZERO,
    };

    for prime in primes {
        let amount = clamp_non_negative(prime.amount);
        totals.total += amount;
        if prime.taxable {
            totals.taxable += amount;
        }
        if prime.subject_to_contributions {
            totals.contribution_eligible += amount;
        }
    }

    totals
}

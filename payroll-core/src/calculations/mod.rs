//! Payroll calculation modules.
//!
//! The pipeline runs leaves-first: prime classification, then employee
//! contributions, then progressive income tax, assembled by the payroll
//! calculator into a full gross-to-net breakdown.

pub mod common;
pub mod contributions;
pub mod income_tax;
pub mod payroll;
pub mod primes;

pub use contributions::{ContributionBreakdown, calculate_contributions};
pub use income_tax::{IncomeTaxSchedule, IncomeTaxScheduleError};
pub use payroll::{PayrollCalculator, compute_payroll};
pub use primes::{PrimeTotals, classify_primes};

pub mod calculations;
pub mod models;

pub use calculations::{IncomeTaxSchedule, PayrollCalculator, compute_payroll};
pub use models::*;

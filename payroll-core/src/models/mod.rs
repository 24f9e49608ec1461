mod payroll_result;
mod prime;
mod salary_input;
mod scheme;
mod tax_bracket;

pub use payroll_result::PayrollResult;
pub use prime::{PrimeItem, PrimeType};
pub use salary_input::SalaryInput;
pub use scheme::{ContributionScheme, SchemeCode};
pub use tax_bracket::TaxBracket;

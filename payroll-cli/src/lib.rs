pub mod form;
pub mod report;

pub use form::ContractForm;
pub use report::render_breakdown;

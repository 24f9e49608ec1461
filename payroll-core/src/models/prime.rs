use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry describing one kind of prime (bonus/allowance).
///
/// Catalog entries only pre-fill a newly added [`PrimeItem`]; once the item
/// exists its own flags are authoritative and the catalog is not consulted
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeType {
    pub id: i32,
    pub label: String,
    pub category: String,
    pub description: Option<String>,
    pub taxable: bool,
    pub subject_to_contributions: bool,
}

/// One bonus line on a contract.
///
/// `taxable` controls whether the amount enters the taxable base;
/// `subject_to_contributions` controls whether it enters the contribution
/// base. Both default from the catalog but remain independently editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeItem {
    /// Catalog id this item was created from, if any.
    pub type_id: Option<i32>,
    pub label: String,
    pub amount: Decimal,
    pub taxable: bool,
    pub subject_to_contributions: bool,
}

impl PrimeItem {
    /// Creates an ad-hoc prime with no catalog backing.
    pub fn new(
        label: impl Into<String>,
        amount: Decimal,
        taxable: bool,
        subject_to_contributions: bool,
    ) -> Self {
        Self {
            type_id: None,
            label: label.into(),
            amount,
            taxable,
            subject_to_contributions,
        }
    }

    /// Creates a prime pre-filled from a catalog entry.
    pub fn from_type(
        prime_type: &PrimeType,
        amount: Decimal,
    ) -> Self {
        Self {
            type_id: Some(prime_type.id),
            label: prime_type.label.clone(),
            amount,
            taxable: prime_type.taxable,
            subject_to_contributions: prime_type.subject_to_contributions,
        }
    }
}

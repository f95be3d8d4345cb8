//! Folds per-type totals into the income/expense summary.

use serde::{Deserialize, Serialize};

use crate::transaction::{EXPENSE, INCOME};

/// The sum of `amount` for all matching transactions of one type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeTotal {
    /// The transaction type, e.g. "income".
    pub type_: String,
    /// The sum of the amounts.
    pub total: f64,
}

/// Total income and expenses, and the difference between them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all income transactions.
    pub total_income: f64,
    /// The sum of all expense transactions.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub balance: f64,
}

impl Summary {
    /// Build a summary from per-type totals.
    ///
    /// Types other than [INCOME] and [EXPENSE] are ignored. Missing types
    /// count as zero.
    pub fn from_totals(totals: impl IntoIterator<Item = TypeTotal>) -> Self {
        let (total_income, total_expenses) =
            totals
                .into_iter()
                .fold((0.0, 0.0), |(income, expenses), type_total| {
                    match type_total.type_.as_str() {
                        INCOME => (type_total.total, expenses),
                        EXPENSE => (income, type_total.total),
                        _ => (income, expenses),
                    }
                });

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}

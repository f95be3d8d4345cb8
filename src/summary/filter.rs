//! Builds the parameterized `WHERE` clause for the summary query.

use serde::Deserialize;

/// The optional filters accepted by the summary endpoint.
///
/// Empty values are treated the same as missing ones.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryFilter {
    /// Only include transactions in this category.
    pub category: Option<String>,
    /// Only include transactions on or after this date (inclusive).
    pub start_date: Option<String>,
    /// Only include transactions on or before this date (inclusive).
    pub end_date: Option<String>,
}

/// A single condition on the transactions table.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `category = ?`
    CategoryEquals(String),
    /// `date >= ?`
    DateOnOrAfter(String),
    /// `date <= ?`
    DateOnOrBefore(String),
}

impl Predicate {
    fn sql(&self) -> &'static str {
        match self {
            Predicate::CategoryEquals(_) => "category = ?",
            Predicate::DateOnOrAfter(_) => "date >= ?",
            Predicate::DateOnOrBefore(_) => "date <= ?",
        }
    }

    fn into_param(self) -> String {
        match self {
            Predicate::CategoryEquals(value)
            | Predicate::DateOnOrAfter(value)
            | Predicate::DateOnOrBefore(value) => value,
        }
    }
}

/// A `WHERE` clause body and the values bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    /// SQL with one `?` per entry in `params`.
    pub sql: String,
    /// The values for the placeholders in `sql`.
    pub params: Vec<String>,
}

impl SummaryFilter {
    /// The predicates for the filters that were given, in the order category,
    /// start date, end date.
    pub fn predicates(&self) -> Vec<Predicate> {
        [
            non_empty(&self.category).map(Predicate::CategoryEquals),
            non_empty(&self.start_date).map(Predicate::DateOnOrAfter),
            non_empty(&self.end_date).map(Predicate::DateOnOrBefore),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Fold the predicates into a single clause joined with `AND`.
    ///
    /// The clause always starts with a predicate that is true, so it is valid
    /// even when no filters were given.
    pub fn where_clause(&self) -> WhereClause {
        self.predicates().into_iter().fold(
            WhereClause {
                sql: "1 = 1".to_owned(),
                params: Vec::new(),
            },
            |mut clause, predicate| {
                clause.sql.push_str(" AND ");
                clause.sql.push_str(predicate.sql());
                clause.params.push(predicate.into_param());
                clause
            },
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|value| !value.is_empty())
}

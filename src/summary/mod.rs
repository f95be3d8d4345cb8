//! Aggregate totals over the transactions table.
//!
//! The summary is computed by the store with a grouped sum, then folded into
//! income, expenses and balance.

mod core;
mod endpoint;
mod filter;

pub use core::{Summary, TypeTotal};
pub use endpoint::get_summary_endpoint;
pub use filter::{Predicate, SummaryFilter, WhereClause};

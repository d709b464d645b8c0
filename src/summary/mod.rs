//! Income and expense totals over an optionally filtered set of transactions.

mod endpoint;
mod filter;

pub use endpoint::{Summary, SummaryQuery, get_summary, get_summary_endpoint};
pub use filter::{Predicate, SummaryFilter};

//! Builds the `WHERE` clause for the summary query.

use super::SummaryQuery;

/// A condition a transaction must meet to be included in a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Dated on or after a `YYYY-MM-DD` date.
    StartDate,
    /// Dated on or before a `YYYY-MM-DD` date.
    EndDate,
    /// In exactly this category.
    Category,
}

impl Predicate {
    /// The SQL for the predicate, reading its value from the numbered
    /// parameter `placeholder`.
    ///
    /// Dates are compared as strings, which orders correctly only for
    /// zero-padded `YYYY-MM-DD` dates.
    fn to_sql(self, placeholder: usize) -> String {
        match self {
            Predicate::StartDate => format!("date >= ?{placeholder}"),
            Predicate::EndDate => format!("date <= ?{placeholder}"),
            Predicate::Category => format!("category = ?{placeholder}"),
        }
    }
}

/// Accumulates the predicates of a summary filter along with their values.
///
/// Values are only ever bound as parameters. With no predicates the filter
/// matches every transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryFilter {
    conditions: Vec<(Predicate, String)>,
}

impl SummaryFilter {
    /// A filter that matches every transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `predicate` with `value`, unless `value` is absent or empty.
    pub fn with(mut self, predicate: Predicate, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            self.conditions.push((predicate, value.to_owned()));
        }

        self
    }

    /// Whether the filter has no predicates.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The `WHERE` clause joining every predicate with `AND`, or an empty
    /// string if there are none.
    ///
    /// Placeholders are numbered from 1 in the order predicates were added,
    /// matching [SummaryFilter::parameters].
    pub fn where_clause(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let predicates = self
            .conditions
            .iter()
            .enumerate()
            .map(|(index, (predicate, _))| predicate.to_sql(index + 1))
            .collect::<Vec<_>>();

        format!("WHERE {}", predicates.join(" AND "))
    }

    /// The values to bind to the placeholders in [SummaryFilter::where_clause].
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().map(|(_, value)| value.as_str())
    }
}

impl From<&SummaryQuery> for SummaryFilter {
    fn from(query: &SummaryQuery) -> Self {
        SummaryFilter::new()
            .with(Predicate::StartDate, query.start_date.as_deref())
            .with(Predicate::EndDate, query.end_date.as_deref())
            .with(Predicate::Category, query.category.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use crate::summary::SummaryQuery;

    use super::{Predicate, SummaryFilter};

    #[test]
    fn empty_filter_has_no_where_clause() {
        let filter = SummaryFilter::new();

        assert!(filter.is_empty());
        assert_eq!(filter.where_clause(), "");
        assert_eq!(filter.parameters().count(), 0);
    }

    #[test]
    fn single_predicate() {
        let filter = SummaryFilter::new().with(Predicate::Category, Some("rent"));

        assert_eq!(filter.where_clause(), "WHERE category = ?1");
        assert_eq!(filter.parameters().collect::<Vec<_>>(), vec!["rent"]);
    }

    #[test]
    fn all_predicates_joined_with_and() {
        let query = SummaryQuery {
            start_date: Some("2024-01-01".to_owned()),
            end_date: Some("2024-01-31".to_owned()),
            category: Some("food".to_owned()),
        };

        let filter = SummaryFilter::from(&query);

        assert_eq!(
            filter.where_clause(),
            "WHERE date >= ?1 AND date <= ?2 AND category = ?3"
        );
        assert_eq!(
            filter.parameters().collect::<Vec<_>>(),
            vec!["2024-01-01", "2024-01-31", "food"]
        );
    }

    #[test]
    fn placeholders_follow_present_predicates() {
        let query = SummaryQuery {
            start_date: None,
            end_date: Some("2024-01-31".to_owned()),
            category: Some("food".to_owned()),
        };

        let filter = SummaryFilter::from(&query);

        assert_eq!(filter.where_clause(), "WHERE date <= ?1 AND category = ?2");
    }

    #[test]
    fn empty_values_are_skipped() {
        let query = SummaryQuery {
            start_date: Some(String::new()),
            end_date: None,
            category: Some(String::new()),
        };

        assert!(SummaryFilter::from(&query).is_empty());
    }

    #[test]
    fn values_never_appear_in_sql() {
        let injection = "x' OR '1'='1";
        let filter = SummaryFilter::new().with(Predicate::Category, Some(injection));

        assert!(!filter.where_clause().contains(injection));
        assert_eq!(filter.parameters().collect::<Vec<_>>(), vec![injection]);
    }
}

//! Search predicates over logged entries.
use std::fmt;

use chrono::NaiveDate;

use crate::format_minutes;

/// One way of narrowing down the entries table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFilter {
    /// Employee name contains the text, ignoring ASCII case
    Name(String),
    /// Employee name is exactly this one, as picked from the list of names
    Employee(String),
    /// Logged on exactly this day
    Date(NaiveDate),
    /// Logged between the two days, both included
    DateRange { start: NaiveDate, end: NaiveDate },
    /// Took exactly this many minutes
    Duration(u32),
    /// Name, task or note contains the text, ignoring ASCII case
    Keyword(String),
}

impl fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryFilter::Name(name) => write!(f, "name \"{}\"", name),
            EntryFilter::Employee(name) => write!(f, "employee \"{}\"", name),
            EntryFilter::Date(date) => write!(f, "date {}", date),
            EntryFilter::DateRange { start, end } => write!(f, "dates {} to {}", start, end),
            EntryFilter::Duration(minutes) => write!(f, "time spent {}", format_minutes(*minutes)),
            EntryFilter::Keyword(keyword) => write!(f, "keyword \"{}\"", keyword),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_filter() {
        let day = NaiveDate::from_ymd_opt(2017, 9, 22).unwrap();
        assert_eq!(EntryFilter::Name("Ann".into()).to_string(), "name \"Ann\"");
        assert_eq!(
            EntryFilter::Employee("Ann".into()).to_string(),
            "employee \"Ann\""
        );
        assert_eq!(EntryFilter::Date(day).to_string(), "date 2017-09-22");
        assert_eq!(
            EntryFilter::DateRange { start: day, end: day }.to_string(),
            "dates 2017-09-22 to 2017-09-22"
        );
        assert_eq!(EntryFilter::Duration(30).to_string(), "time spent 30 minutes");
        assert_eq!(EntryFilter::Keyword("db".into()).to_string(), "keyword \"db\"");
    }
}

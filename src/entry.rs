//! Core data structures for the worklog application.
//!
//! An [`Entry`] is one logged piece of work. A [`NewEntry`] is the same data
//! before the database has assigned it an id.
use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents a single logged task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Database-assigned identifier, never reused
    pub id: i64,
    /// Employee name
    pub name: String,
    /// What was worked on
    pub task: String,
    /// Day the work was done
    pub date: NaiveDate,
    /// Time spent, in minutes
    pub minutes: u32,
    /// Optional free-form note
    pub note: Option<String>,
}

/// An entry that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub task: String,
    pub date: NaiveDate,
    pub minutes: u32,
    pub note: Option<String>,
}

impl NewEntry {
    /// Creates an entry dated today (local time)
    pub fn today(name: String, task: String, minutes: u32, note: Option<String>) -> Self {
        NewEntry {
            name,
            task,
            date: Local::now().date_naive(),
            minutes,
            note: normalize_note(note),
        }
    }

    /// Attaches the stored id, producing the persisted form
    pub fn with_id(self, id: i64) -> Entry {
        Entry {
            id,
            name: self.name,
            task: self.task,
            date: self.date,
            minutes: self.minutes,
            note: normalize_note(self.note),
        }
    }
}

/// Blank notes are stored as no note at all
pub fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Human readable duration, e.g. "1 minute" or "45 minutes"
pub fn format_minutes(minutes: u32) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", minutes)
    }
}

impl Entry {
    /// Multi-line description with dates rendered in `date_format`
    pub fn describe(&self, date_format: &str) -> String {
        let mut lines = vec![
            format!("Date:     {}", self.date.format(date_format)),
            format!("Employee: {}", self.name),
            format!("Task:     {}", self.task),
            format!("Time:     {}", format_minutes(self.minutes)),
        ];
        if let Some(note) = &self.note {
            lines.push(format!("Note:     {}", note));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(crate::DEFAULT_DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_note_becomes_none() {
        let entry = NewEntry::today("Ann".into(), "Filing".into(), 5, Some("   ".into()));
        assert_eq!(entry.note, None);
        assert_eq!(entry.date, Local::now().date_naive());
    }

    #[test]
    fn display_skips_missing_note() {
        let entry = NewEntry {
            name: "Ann".into(),
            task: "Filing".into(),
            date: NaiveDate::from_ymd_opt(2017, 9, 22).unwrap(),
            minutes: 1,
            note: None,
        }
        .with_id(7);

        let text = entry.to_string();
        assert!(text.contains("Date:     2017-09-22"));
        assert!(text.contains("Time:     1 minute"));
        assert!(!text.contains("Note:"));
    }
}

//! One-at-a-time navigation over a search result.

use crate::Entry;

/// Cursor over a non-empty, ordered list of matching entries.
///
/// Moving past either end is a no-op: the cursor is clamped, it never wraps.
#[derive(Debug, Clone)]
pub struct EntryBrowser {
    entries: Vec<Entry>,
    index: usize,
}

impl EntryBrowser {
    /// Returns `None` when there is nothing to browse
    pub fn new(entries: Vec<Entry>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries, index: 0 })
        }
    }

    pub fn current(&self) -> &Entry {
        &self.entries[self.index]
    }

    /// 1-based position of the current entry
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.entries.len()
    }

    /// Advances one entry. Returns false when already at the last one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Steps back one entry. Returns false when already at the first one.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::NewEntry;

    fn entries(count: i64) -> Vec<Entry> {
        (1..=count)
            .map(|id| {
                NewEntry {
                    name: format!("Employee {id}"),
                    task: "Testing".into(),
                    date: NaiveDate::from_ymd_opt(2017, 9, 22).unwrap(),
                    minutes: id as u32,
                    note: None,
                }
                .with_id(id)
            })
            .collect()
    }

    #[test]
    fn empty_result_has_no_browser() {
        assert!(EntryBrowser::new(Vec::new()).is_none());
    }

    #[test]
    fn next_is_clamped_at_the_end() {
        let mut browser = EntryBrowser::new(entries(2)).unwrap();
        assert_eq!(browser.current().id, 1);
        assert!(browser.next());
        assert_eq!(browser.current().id, 2);
        assert!(!browser.next());
        assert!(!browser.next());
        assert_eq!(browser.current().id, 2);
        assert_eq!(browser.position(), 2);
    }

    #[test]
    fn previous_is_clamped_at_the_start() {
        let mut browser = EntryBrowser::new(entries(3)).unwrap();
        assert!(!browser.previous());
        assert_eq!(browser.position(), 1);
        browser.next();
        browser.next();
        assert!(browser.previous());
        assert_eq!(browser.current().id, 2);
        assert_eq!(browser.len(), 3);
    }

    #[test]
    fn single_entry_is_both_first_and_last() {
        let mut browser = EntryBrowser::new(entries(1)).unwrap();
        assert!(browser.is_first() && browser.is_last());
        assert!(!browser.next());
        assert!(!browser.previous());
    }
}

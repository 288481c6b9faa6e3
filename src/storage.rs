use std::{fs, path::Path};

use chrono::NaiveDate;
use log::{debug, error, info, trace};
use rusqlite::{params, types::ToSql, Connection, OptionalExtension, Row};

use crate::{like_pattern, normalize_note, Entry, EntryFilter, NewEntry, Result, WorkLogError};

const CREATE_ENTRIES: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
  id       INTEGER PRIMARY KEY AUTOINCREMENT,
  name     TEXT NOT NULL,
  task     TEXT NOT NULL,
  date     TEXT NOT NULL,
  minutes  INTEGER NOT NULL CHECK (minutes >= 0),
  note     TEXT
);
"#;

const INDEX_ENTRIES_DATE: &str = "CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);";

const SELECT_ENTRY: &str = "SELECT id, name, task, date, minutes, note FROM entries";

/// Manages the entries table.
pub struct EntryStorage {
    conn: Connection,
}

impl EntryStorage {
    /// Opens (or creates) the database file at `path` and makes sure the
    /// schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        info!("Opening entry database at {}", path.display());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                debug!("Database directory does not exist, creating: {}", parent.display());
                fs::create_dir_all(parent).map_err(|e| {
                    error!("Failed to create database directory: {}", e);
                    WorkLogError::DirectoryError {
                        path: parent.to_path_buf(),
                    }
                })?;
            }
        }

        let conn = Connection::open(path)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        trace!("Journal mode: {}", mode);
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::with_connection(conn)
    }

    /// Opens a throwaway database that lives only as long as the returned value
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(CREATE_ENTRIES)?;
        conn.execute_batch(INDEX_ENTRIES_DATE)?;
        debug!("Entries schema ready");
        Ok(Self { conn })
    }

    /// Persists a new entry and returns it with its assigned id
    pub fn insert_entry(&self, entry: &NewEntry) -> Result<Entry> {
        let entry = NewEntry {
            note: normalize_note(entry.note.clone()),
            ..entry.clone()
        };
        self.conn.execute(
            "INSERT INTO entries (name, task, date, minutes, note) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![entry.name, entry.task, entry.date, entry.minutes, entry.note],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("Saved entry {} for {}", id, entry.name);
        Ok(entry.with_id(id))
    }

    /// Retrieves an entry by id
    pub fn get_entry(&self, id: i64) -> Result<Option<Entry>> {
        debug!("Retrieving entry by ID: {}", id);
        let entry = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_ENTRY),
                [id],
                entry_from_row,
            )
            .optional()?;
        Ok(entry)
    }

    /// Overwrites every field of a stored entry in one statement
    pub fn update_entry(&self, entry: &Entry) -> Result<()> {
        info!("Updating entry: {}", entry.id);
        let changed = self.conn.execute(
            "UPDATE entries SET name = ?1, task = ?2, date = ?3, minutes = ?4, note = ?5 WHERE id = ?6",
            params![
                entry.name,
                entry.task,
                entry.date,
                entry.minutes,
                entry.note,
                entry.id
            ],
        )?;

        if changed == 0 {
            error!("Cannot update entry {}: Entry not found", entry.id);
            return Err(WorkLogError::EntryNotFound { id: entry.id });
        }
        Ok(())
    }

    /// Removes an entry permanently
    pub fn delete_entry(&self, id: i64) -> Result<()> {
        info!("Deleting entry: {}", id);
        let changed = self.conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;

        if changed == 0 {
            error!("Cannot delete entry {}: Entry not found", id);
            return Err(WorkLogError::EntryNotFound { id });
        }
        Ok(())
    }

    pub fn count_entries(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Every entry, oldest first
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        self.query_entries(&format!("{} ORDER BY date, id", SELECT_ENTRY), &[])
    }

    /// Entries matching `filter`, ordered by date and then id
    pub fn find_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        info!("Searching entries by {}", filter);

        let (condition, params): (&str, Vec<Box<dyn ToSql>>) = match filter {
            EntryFilter::Name(name) => (
                r"name LIKE ?1 ESCAPE '\'",
                vec![Box::new(like_pattern(name))],
            ),
            EntryFilter::Employee(name) => ("name = ?1", vec![Box::new(name.clone())]),
            EntryFilter::Date(date) => ("date = ?1", vec![Box::new(*date)]),
            EntryFilter::DateRange { start, end } => {
                ("date BETWEEN ?1 AND ?2", vec![Box::new(*start), Box::new(*end)])
            }
            EntryFilter::Duration(minutes) => ("minutes = ?1", vec![Box::new(*minutes)]),
            EntryFilter::Keyword(keyword) => (
                r"(name LIKE ?1 ESCAPE '\' OR task LIKE ?1 ESCAPE '\' OR note LIKE ?1 ESCAPE '\')",
                vec![Box::new(like_pattern(keyword))],
            ),
        };

        let sql = format!("{} WHERE {} ORDER BY date, id", SELECT_ENTRY, condition);
        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
        let entries = self.query_entries(&sql, &param_refs)?;

        info!("Found {} entries matching {}", entries.len(), filter);
        Ok(entries)
    }

    /// Employee names in use, alphabetical
    pub fn distinct_names(&self) -> Result<Vec<String>> {
        self.query_column("SELECT DISTINCT name FROM entries ORDER BY name COLLATE NOCASE")
    }

    /// Days that have at least one entry, oldest first
    pub fn distinct_dates(&self) -> Result<Vec<NaiveDate>> {
        self.query_column("SELECT DISTINCT date FROM entries ORDER BY date")
    }

    /// Durations that have been logged, shortest first
    pub fn distinct_durations(&self) -> Result<Vec<u32>> {
        self.query_column("SELECT DISTINCT minutes FROM entries ORDER BY minutes")
    }

    fn query_entries(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Entry>> {
        trace!("Running query: {}", sql);
        let mut stmt = self.conn.prepare(sql)?;
        let entries = stmt
            .query_map(params, entry_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    fn query_column<T: rusqlite::types::FromSql>(&self, sql: &str) -> Result<Vec<T>> {
        trace!("Running query: {}", sql);
        let mut stmt = self.conn.prepare(sql)?;
        let values = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<T>, _>>()?;
        Ok(values)
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        name: row.get(1)?,
        task: row.get(2)?,
        date: row.get(3)?,
        minutes: row.get(4)?,
        note: row.get(5)?,
    })
}

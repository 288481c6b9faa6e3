//! CLI module for the worklog application
//!
//! This module drives the interactive menus (and the one-shot subcommands)
//! on top of the entry storage.
use std::io::{BufRead, Write};

use console::{style, Term};
use log::{debug, info};

use crate::{
    date_example, format_minutes, normalize_note, parse_date, parse_minutes, require_text,
    BrowseChoice, Commands, Config, EditChoice, Entry, EntryBrowser, EntryFilter, EntryStorage,
    MainChoice, Navigation, NewEntry, Prompter, Result, SearchChoice, SearchKind, WorkLogError,
    BROWSE_MENU, EDIT_MENU, MAIN_MENU, SEARCH_MENU,
};

/// CLI Application handler - runs the menus and talks to the EntryStorage
pub struct App<R, W> {
    /// The entry storage backend
    storage: EntryStorage,

    /// Application configuration
    config: Config,

    /// Console input/output
    prompt: Prompter<R, W>,

    /// Messages shown at the top of the next screen
    notices: Vec<String>,

    /// Whether `output` is the terminal and may be cleared between screens
    clear_screen: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Create a new CLI application reading answers from `input` and writing to `output`
    pub fn new(storage: EntryStorage, config: Config, input: R, output: W) -> Self {
        Self {
            storage,
            config,
            prompt: Prompter::new(input, output),
            notices: Vec::new(),
            clear_screen: false,
        }
    }

    /// Clears the terminal before each screen. Only for an App writing to stdout.
    pub fn with_screen_clearing(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn storage(&self) -> &EntryStorage {
        &self.storage
    }

    pub fn output(&self) -> &W {
        self.prompt.output()
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Menu => self.run_menus(),
            Commands::Add {
                name,
                task,
                minutes,
                note,
                date,
            } => self.add_from_args(name, task, minutes, note, date),
            Commands::List { limit, json } => self.list_entries(limit, json),
        }
    }

    /// Runs the menus until the user quits or the input ends
    pub fn run_menus(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(WorkLogError::InputClosed) => {
                debug!("Input closed, leaving the menus");
                self.flush_notices()
            }
            other => other,
        }
    }

    /// Add / search / quit
    pub fn main_menu(&mut self) -> Result<()> {
        loop {
            self.show_screen("WORK LOG")?;
            self.prompt.say(MAIN_MENU)?;

            let navigation = match self.prompt.choose::<MainChoice>("> ")? {
                MainChoice::Add => self.add_entry()?,
                MainChoice::Search => self.search_menu()?,
                MainChoice::Quit => Navigation::Quit,
            };

            if navigation == Navigation::Quit {
                self.flush_notices()?;
                self.prompt.say("Goodbye!")?;
                info!("User quit");
                return Ok(());
            }
        }
    }

    /// Asks for the fields of a new entry and stores it, dated today
    pub fn add_entry(&mut self) -> Result<Navigation> {
        self.show_screen("ADD ENTRY")?;

        let name = self
            .prompt
            .ask_with("Employee name: ", |s| require_text(s, "Employee name"))?;
        let task = self.prompt.ask_with("Task: ", |s| require_text(s, "Task"))?;
        let minutes = self
            .prompt
            .ask_with("Time spent (minutes): ", parse_minutes)?;
        let note = if self.prompt.confirm("Add a note? [y/N]: ")? {
            Some(self.prompt.ask("Note: ")?)
        } else {
            None
        };

        let entry = self
            .storage
            .insert_entry(&NewEntry::today(name, task, minutes, note))?;
        self.notice(format!("Entry #{} saved.", entry.id));
        Ok(Navigation::MainMenu)
    }

    /// Lets the user pick a filter, then browses its matches
    pub fn search_menu(&mut self) -> Result<Navigation> {
        if self.storage.count_entries()? == 0 {
            self.notice("There are no entries to search yet.");
            return Ok(Navigation::MainMenu);
        }

        self.show_screen("SEARCH ENTRIES")?;
        self.prompt.say(SEARCH_MENU)?;

        let filter = match self.prompt.choose::<SearchChoice>("> ")? {
            SearchChoice::By(kind) => self.basic_search(kind)?,
            SearchChoice::Keyword => EntryFilter::Keyword(
                self.prompt
                    .ask_with("Keyword: ", |s| require_text(s, "Keyword"))?,
            ),
            SearchChoice::MainMenu => return Ok(Navigation::MainMenu),
            SearchChoice::Quit => return Ok(Navigation::Quit),
        };

        self.targeted_search(&filter)
    }

    /// Asks the follow-up question for `kind` and turns the answer into a filter
    pub fn basic_search(&mut self, kind: SearchKind) -> Result<EntryFilter> {
        let date_format = self.config.date_format.clone();
        let example = date_example(&date_format);

        match kind {
            SearchKind::Name => {
                let names = self.storage.distinct_names()?;
                self.prompt.say("Employees:")?;
                for (i, name) in names.iter().enumerate() {
                    self.prompt.say(format!("  {}) {}", i + 1, name))?;
                }

                // A picked number means that employee only; typed text is a substring
                self.prompt.ask_with(
                    "Pick a number or type part of a name: ",
                    |s| match pick(s, &names) {
                        Some(name) => Ok(EntryFilter::Employee(name.clone())),
                        None => require_text(s, "Name").map(EntryFilter::Name),
                    },
                )
            }
            SearchKind::Date => {
                let dates = self.storage.distinct_dates()?;
                self.prompt.say("Dates with entries:")?;
                for (i, date) in dates.iter().enumerate() {
                    self.prompt
                        .say(format!("  {}) {}", i + 1, date.format(&date_format)))?;
                }

                let date = self.prompt.ask_with(
                    &format!("Pick a number or enter a date (e.g. {}): ", example),
                    |s| match pick(s, &dates) {
                        Some(date) => Ok(*date),
                        None => parse_date(s, &date_format),
                    },
                )?;
                Ok(EntryFilter::Date(date))
            }
            SearchKind::Range => loop {
                let start = self.prompt.ask_with(
                    &format!("Start date (e.g. {}): ", example),
                    |s| parse_date(s, &date_format),
                )?;
                let end = self.prompt.ask_with(
                    &format!("End date (e.g. {}): ", example),
                    |s| parse_date(s, &date_format),
                )?;

                if end < start {
                    self.prompt
                        .say("The end date must not be before the start date.")?;
                    continue;
                }
                break Ok(EntryFilter::DateRange { start, end });
            },
            SearchKind::Duration => {
                let durations = self
                    .storage
                    .distinct_durations()?
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                self.prompt
                    .say(format!("Logged durations (minutes): {}", durations))?;

                let minutes = self
                    .prompt
                    .ask_with("Time spent (minutes): ", parse_minutes)?;
                Ok(EntryFilter::Duration(minutes))
            }
        }
    }

    /// Pages through the entries matching `filter`, one at a time
    pub fn targeted_search(&mut self, filter: &EntryFilter) -> Result<Navigation> {
        let entries = self.storage.find_entries(filter)?;
        let Some(mut browser) = EntryBrowser::new(entries) else {
            self.notice(format!("No entries matched {}.", filter));
            return Ok(Navigation::MainMenu);
        };

        loop {
            self.show_screen("SEARCH RESULTS")?;
            self.prompt.say(format!(
                "Entry {} of {} matching {}",
                browser.position(),
                browser.len(),
                filter
            ))?;
            self.show_entry(browser.current())?;
            self.prompt.say(BROWSE_MENU)?;

            match self.prompt.choose::<BrowseChoice>("> ")? {
                BrowseChoice::Next => {
                    if !browser.next() {
                        self.notice("This is the last matching entry.");
                    }
                }
                BrowseChoice::Previous => {
                    if !browser.previous() {
                        self.notice("This is the first matching entry.");
                    }
                }
                BrowseChoice::Edit => return self.edit_entry(browser.current().id),
                BrowseChoice::MainMenu => return Ok(Navigation::MainMenu),
            }
        }
    }

    /// Edits or deletes entry `id`, then returns to the main menu
    pub fn edit_entry(&mut self, id: i64) -> Result<Navigation> {
        let Some(mut entry) = self.storage.get_entry(id)? else {
            self.notice(format!("Entry #{} no longer exists.", id));
            return Ok(Navigation::MainMenu);
        };

        self.show_screen("EDIT ENTRY")?;
        self.show_entry(&entry)?;
        self.prompt.say(EDIT_MENU)?;

        match self.prompt.choose::<EditChoice>("> ")? {
            EditChoice::Edit => {
                self.edit_fields(&mut entry)?;
                self.storage.update_entry(&entry)?;
                self.notice(format!("Entry #{} updated.", id));
            }
            EditChoice::Delete => {
                if self
                    .prompt
                    .confirm("Delete this entry? This cannot be undone. [y/N]: ")?
                {
                    self.storage.delete_entry(id)?;
                    self.notice(format!("Entry #{} deleted.", id));
                } else {
                    self.notice("Deletion cancelled.");
                }
            }
            EditChoice::MainMenu => {}
        }

        Ok(Navigation::MainMenu)
    }

    /// Offers each field in turn; nothing is written until all answers are in
    fn edit_fields(&mut self, entry: &mut Entry) -> Result<()> {
        let date_format = self.config.date_format.clone();

        if self
            .prompt
            .confirm(&format!("Change name ({})? [y/N]: ", entry.name))?
        {
            entry.name = self
                .prompt
                .ask_with("New name: ", |s| require_text(s, "Employee name"))?;
        }

        if self
            .prompt
            .confirm(&format!("Change task ({})? [y/N]: ", entry.task))?
        {
            entry.task = self
                .prompt
                .ask_with("New task: ", |s| require_text(s, "Task"))?;
        }

        if self.prompt.confirm(&format!(
            "Change date ({})? [y/N]: ",
            entry.date.format(&date_format)
        ))? {
            entry.date = self.prompt.ask_with(
                &format!("New date (e.g. {}): ", date_example(&date_format)),
                |s| parse_date(s, &date_format),
            )?;
        }

        if self.prompt.confirm(&format!(
            "Change time spent ({})? [y/N]: ",
            format_minutes(entry.minutes)
        ))? {
            entry.minutes = self
                .prompt
                .ask_with("New time spent (minutes): ", parse_minutes)?;
        }

        if self.prompt.confirm("Change note? [y/N]: ")? {
            entry.note = normalize_note(Some(
                self.prompt.ask("New note (leave empty to remove): ")?,
            ));
        }

        Ok(())
    }

    fn add_from_args(
        &mut self,
        name: String,
        task: String,
        minutes: u32,
        note: Option<String>,
        date: Option<String>,
    ) -> Result<()> {
        let name = require_text(&name, "Employee name")?;
        let task = require_text(&task, "Task")?;

        let mut new_entry = NewEntry::today(name, task, minutes, note);
        if let Some(date) = date {
            new_entry.date = parse_date(&date, &self.config.date_format)?;
        }

        let entry = self.storage.insert_entry(&new_entry)?;
        self.prompt.say(format!("Entry #{} saved.", entry.id))
    }

    /// Prints the most recent `limit` entries (all when 0), oldest first
    fn list_entries(&mut self, limit: usize, json: bool) -> Result<()> {
        let mut entries = self.storage.list_entries()?;
        if limit > 0 && entries.len() > limit {
            entries.drain(..entries.len() - limit);
        }

        if json {
            return self.prompt.say(serde_json::to_string_pretty(&entries)?);
        }

        if entries.is_empty() {
            return self.prompt.say("No entries logged yet.");
        }

        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                self.prompt.say("-".repeat(term_width.min(50)))?;
            }
            self.show_entry(entry)?;
        }

        self.prompt.say(format!(
            "\nFound {} entr{}",
            entries.len(),
            if entries.len() == 1 { "y" } else { "ies" }
        ))
    }

    fn show_entry(&mut self, entry: &Entry) -> Result<()> {
        self.prompt
            .say(style(format!("Entry #{}", entry.id)).bold())?;
        self.prompt.say(entry.describe(&self.config.date_format))
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    fn flush_notices(&mut self) -> Result<()> {
        for notice in std::mem::take(&mut self.notices) {
            self.prompt.say(style(notice).yellow())?;
        }
        Ok(())
    }

    /// Clears the terminal (when enabled), shows pending notices and a title
    fn show_screen(&mut self, title: &str) -> Result<()> {
        if self.clear_screen {
            Term::stdout().clear_screen()?;
        }
        self.flush_notices()?;
        self.prompt.say(style(title).bold())
    }
}

/// Resolves a 1-based menu number to one of `options`
fn pick<'a, T>(answer: &str, options: &'a [T]) -> Option<&'a T> {
    match answer.trim().parse::<usize>() {
        Ok(n) if n >= 1 => options.get(n - 1),
        _ => None,
    }
}

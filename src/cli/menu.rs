//! Menu choices and the text that offers them.
//!
//! Every choice accepts its letter or its full word, in any case.
use std::str::FromStr;

use crate::{Result, WorkLogError};

pub const MAIN_MENU: &str = "[A]dd a new entry\n[S]earch existing entries\n[Q]uit";

pub const SEARCH_MENU: &str = "Find entries by:\n\
    [N]ame\n\
    [D]ate\n\
    [R]ange of dates\n\
    [T]ime spent\n\
    [K]eyword\n\
    [M]ain menu\n\
    [Q]uit";

pub const BROWSE_MENU: &str = "[N]ext  [P]revious  [E]dit  [M]ain menu";

pub const EDIT_MENU: &str = "[E]dit  [D]elete  [M]ain menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Add,
    Search,
    Quit,
}

/// Filter categories that need a follow-up question before searching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Name,
    Date,
    Range,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchChoice {
    By(SearchKind),
    Keyword,
    MainMenu,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseChoice {
    Next,
    Previous,
    Edit,
    MainMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditChoice {
    Edit,
    Delete,
    MainMenu,
}

fn invalid_option(input: &str) -> WorkLogError {
    WorkLogError::invalid_input(format!("'{}' is not a valid option.", input.trim()))
}

impl FromStr for MainChoice {
    type Err = WorkLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" | "add" => Ok(MainChoice::Add),
            "s" | "search" => Ok(MainChoice::Search),
            "q" | "quit" => Ok(MainChoice::Quit),
            _ => Err(invalid_option(s)),
        }
    }
}

impl FromStr for SearchChoice {
    type Err = WorkLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "name" => Ok(SearchChoice::By(SearchKind::Name)),
            "d" | "date" => Ok(SearchChoice::By(SearchKind::Date)),
            "r" | "range" => Ok(SearchChoice::By(SearchKind::Range)),
            "t" | "time" => Ok(SearchChoice::By(SearchKind::Duration)),
            "k" | "keyword" => Ok(SearchChoice::Keyword),
            "m" | "main" => Ok(SearchChoice::MainMenu),
            "q" | "quit" => Ok(SearchChoice::Quit),
            _ => Err(invalid_option(s)),
        }
    }
}

impl FromStr for BrowseChoice {
    type Err = WorkLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "next" => Ok(BrowseChoice::Next),
            "p" | "previous" => Ok(BrowseChoice::Previous),
            "e" | "edit" => Ok(BrowseChoice::Edit),
            "m" | "main" => Ok(BrowseChoice::MainMenu),
            _ => Err(invalid_option(s)),
        }
    }
}

impl FromStr for EditChoice {
    type Err = WorkLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "e" | "edit" => Ok(EditChoice::Edit),
            "d" | "delete" => Ok(EditChoice::Delete),
            "m" | "main" => Ok(EditChoice::MainMenu),
            _ => Err(invalid_option(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_words_in_any_case() {
        assert_eq!("A".parse::<MainChoice>().unwrap(), MainChoice::Add);
        assert_eq!(" search ".parse::<MainChoice>().unwrap(), MainChoice::Search);
        assert_eq!(
            "T".parse::<SearchChoice>().unwrap(),
            SearchChoice::By(SearchKind::Duration)
        );
        assert_eq!("k".parse::<SearchChoice>().unwrap(), SearchChoice::Keyword);
        assert_eq!("Previous".parse::<BrowseChoice>().unwrap(), BrowseChoice::Previous);
        assert_eq!("d".parse::<EditChoice>().unwrap(), EditChoice::Delete);
    }

    #[test]
    fn unknown_choice_names_the_input() {
        match "blah".parse::<SearchChoice>() {
            Err(WorkLogError::InvalidInput { message }) => {
                assert_eq!(message, "'blah' is not a valid option.")
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!("".parse::<BrowseChoice>().is_err());
        assert!("s".parse::<EditChoice>().is_err());
    }
}

//! Dashboard navigation state.
//!
//! Three pages: an intro with headline numbers, a chapter menu, and the
//! analysis page of one chapter. Every transition is driven by a discrete
//! user action.

use std::fmt;
use std::str::FromStr;

/// Analysis chapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chapter {
    /// Race, class and god popularity
    Preferences,
    /// Killers, places and levels of death
    Deaths,
    /// Win rates per race, class and god
    WinRates,
}

impl Chapter {
    pub const ALL: [Chapter; 3] = [Chapter::Preferences, Chapter::Deaths, Chapter::WinRates];

    pub fn title(&self) -> &'static str {
        match self {
            Chapter::Preferences => "Chapter 1: Adventurer Preferences",
            Chapter::Deaths => "Chapter 2: The Record of Deaths",
            Chapter::WinRates => "Chapter 3: Laws of Survival",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Chapter::Preferences => "Which races, classes and gods are loved the most?",
            Chapter::Deaths => "Where, to whom, and why did they die?",
            Chapter::WinRates => "Which combinations bring victory?",
        }
    }

    /// Menu key, 1-based
    pub fn key(&self) -> usize {
        match self {
            Chapter::Preferences => 1,
            Chapter::Deaths => 2,
            Chapter::WinRates => 3,
        }
    }
}

/// Which page is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Intro,
    ChapterSelect,
    Analysis(Chapter),
}

/// A user action on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Open(Chapter),
    Back,
    Quit,
}

/// Error for unrecognised menu input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action '{}'", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "next" | "" => Ok(Action::Next),
            "1" => Ok(Action::Open(Chapter::Preferences)),
            "2" => Ok(Action::Open(Chapter::Deaths)),
            "3" => Ok(Action::Open(Chapter::WinRates)),
            "b" | "back" => Ok(Action::Back),
            "q" | "quit" | "exit" => Ok(Action::Quit),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Apply an action to a page
///
/// **Public** - the whole navigation model
///
/// # Returns
/// The next page, or `None` when the user quits. Actions that make no
/// sense on the current page leave it unchanged.
pub fn transition(page: Page, action: Action) -> Option<Page> {
    let next = match (page, action) {
        (_, Action::Quit) => return None,
        (Page::Intro, Action::Next) => Page::ChapterSelect,
        (Page::ChapterSelect, Action::Open(chapter)) => Page::Analysis(chapter),
        (Page::ChapterSelect, Action::Back) => Page::Intro,
        (Page::Analysis(_), Action::Back) => Page::ChapterSelect,
        (current, _) => current,
    };
    Some(next)
}

/// Actions offered on a page, for the prompt line
pub fn available_actions(page: Page) -> &'static str {
    match page {
        Page::Intro => "[n]ext chapter select, [q]uit",
        Page::ChapterSelect => "[1] preferences, [2] deaths, [3] win rates, [b]ack, [q]uit",
        Page::Analysis(_) => "[b]ack to chapters, [q]uit",
    }
}

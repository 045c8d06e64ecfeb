//! Terminal dashboard: page state and rendering.

pub mod render;
pub mod state;

pub use render::{render_chapter, render_load_failure, render_page};
pub use state::{available_actions, transition, Action, Chapter, Page, UnknownAction};

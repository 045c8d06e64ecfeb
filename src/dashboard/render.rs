//! Page rendering for the terminal dashboard.

use super::state::{available_actions, Chapter, Page};
use crate::aggregator::chapters::{death_tables, preference_tables, win_rate_tables};
use crate::aggregator::summary::summarize;
use crate::output::text;
use crate::parser::crawl_log::Dataset;
use crate::utils::config::AnalysisConfig;
use crate::utils::error::LoadError;
use colored::{Color, Colorize};
use std::fmt::Write as _;

/// Render a whole page
///
/// **Public** - top-level dispatch over the page state
pub fn render_page(page: Page, dataset: &Dataset, config: &AnalysisConfig) -> String {
    let mut out = match page {
        Page::Intro => render_intro(dataset),
        Page::ChapterSelect => render_chapter_select(),
        Page::Analysis(chapter) => render_chapter(chapter, dataset, config),
    };
    let _ = writeln!(out, "\n{}", available_actions(page).dimmed());
    out
}

/// Render one chapter without navigation hints
pub fn render_chapter(chapter: Chapter, dataset: &Dataset, config: &AnalysisConfig) -> String {
    match chapter {
        Chapter::Preferences => render_preferences(dataset, config),
        Chapter::Deaths => render_deaths(dataset, config),
        Chapter::WinRates => render_win_rates(dataset, config),
    }
}

/// Empty-state page shown when the crawl log cannot be loaded
pub fn render_load_failure(error: &LoadError) -> String {
    let hint = match error {
        LoadError::FileNotFound(path) => format!(
            "No crawl log at '{}'. Export one from a game server and pass it with --log.",
            path.display()
        ),
        LoadError::MissingColumn(column) => format!(
            "The crawl log has no '{}' column. Check that it is a full crawl log export.",
            column
        ),
        LoadError::Parse(_) | LoadError::Io(_) => {
            "The crawl log could not be read. Check that it is a valid CSV file.".to_string()
        }
    };

    format!("{} {}\n  {}\n", "✗".red().bold(), error, hint)
}

/// Headline metrics
pub fn render_intro(dataset: &Dataset) -> String {
    let mut out = text::heading("DUNGEON CRAWL: The Archive of Deaths and Glory");

    if dataset.is_empty() {
        let _ = writeln!(out, "  {}", "The crawl log holds no games yet.".dimmed());
        return out;
    }

    out.push_str(&text::summary_block(&summarize(dataset)));
    out
}

/// Chapter menu
pub fn render_chapter_select() -> String {
    let mut out = text::heading("ARCHIVES");
    let _ = writeln!(out, "  Choose the record you wish to study\n");
    for chapter in Chapter::ALL {
        let _ = writeln!(out, "  [{}] {}", chapter.key(), chapter.title().bold());
        let _ = writeln!(out, "      {}", chapter.blurb());
    }
    out
}

fn render_preferences(dataset: &Dataset, config: &AnalysisConfig) -> String {
    let tables = preference_tables(dataset, config);

    let mut out = text::heading(Chapter::Preferences.title());
    out.push_str(&text::share_chart("Race preference", &tables.races, Color::Blue));
    out.push('\n');
    out.push_str(&text::share_chart("Class preference", &tables.classes, Color::Magenta));
    out.push('\n');
    out.push_str(&text::share_chart("God preference", &tables.gods, Color::Green));
    out.push('\n');
    out.push_str(&text::heatmap("God choice by race (% of each race)", &tables.race_gods));
    out
}

fn render_deaths(dataset: &Dataset, config: &AnalysisConfig) -> String {
    let tables = death_tables(dataset, config);

    let mut out = text::heading(Chapter::Deaths.title());
    out.push_str(&text::share_chart("Top 10 causes of death", &tables.killers, Color::Red));
    out.push('\n');

    if tables.one_shots.is_empty() {
        let _ = writeln!(out, "{}", "One-shot kills".bold());
        let _ = writeln!(out, "  {}", "No one-shot kills recorded.".dimmed());
    } else {
        out.push_str(&text::count_chart("One-shot kills", &tables.one_shots, Color::Yellow));
    }
    out.push('\n');
    out.push_str(&text::count_chart("Deaths by place", &tables.places, Color::Red));
    out.push('\n');
    out.push_str(&text::level_histogram("Deaths by experience level", &tables.levels));

    out.push_str(&text::heading("The Lords of Floors"));
    for tier in &tables.floors {
        out.push_str(&text::floor_lords(tier));
        out.push('\n');
    }
    out
}

fn render_win_rates(dataset: &Dataset, config: &AnalysisConfig) -> String {
    let tables = win_rate_tables(dataset, config);

    let mut out = text::heading(Chapter::WinRates.title());
    let _ = writeln!(
        out,
        "  {}\n",
        format!("Categories with fewer than {} games are hidden.", config.min_samples).dimmed()
    );
    out.push_str(&text::win_rate_chart("By race", &tables.races, Color::Cyan));
    out.push('\n');
    out.push_str(&text::win_rate_chart("By class", &tables.classes, Color::Magenta));
    out.push('\n');
    out.push_str(&text::win_rate_chart("By god", &tables.gods, Color::Yellow));
    out
}

//! SVG bar chart output.
//!
//! Renders ranked tables as horizontal bar charts and writes them to disk.

use crate::aggregator::metrics::{CategoryShare, WinRate};
use crate::aggregator::report::Report;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const CHART_WIDTH: usize = 800;
const BAR_HEIGHT: usize = 28;
const LABEL_WIDTH: usize = 220;
const TITLE_HEIGHT: usize = 40;
const VALUE_MARGIN: usize = 70;

/// How bar values are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Percent,
    Count,
}

/// A horizontal bar chart, largest bar first
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub color: &'static str,
    pub format: ValueFormat,
    pub bars: Vec<(String, f64)>,
}

impl BarChart {
    /// Chart of percentages from a frequency table
    pub fn shares(title: &str, color: &'static str, table: &[CategoryShare]) -> Self {
        Self {
            title: title.to_string(),
            color,
            format: ValueFormat::Percent,
            bars: table
                .iter()
                .map(|s| (s.category.clone(), s.percentage))
                .collect(),
        }
    }

    /// Chart of raw counts from a frequency table
    pub fn counts(title: &str, color: &'static str, table: &[CategoryShare]) -> Self {
        Self {
            title: title.to_string(),
            color,
            format: ValueFormat::Count,
            bars: table
                .iter()
                .map(|s| (s.category.clone(), s.count as f64))
                .collect(),
        }
    }

    /// Chart of win rates
    pub fn win_rates(title: &str, color: &'static str, table: &[WinRate]) -> Self {
        Self {
            title: title.to_string(),
            color,
            format: ValueFormat::Percent,
            bars: table
                .iter()
                .map(|w| (w.category.clone(), w.win_rate))
                .collect(),
        }
    }
}

/// Render a bar chart as a standalone SVG document
///
/// **Public** - pure rendering, no I/O
pub fn render_bar_chart(chart: &BarChart) -> String {
    let height = TITLE_HEIGHT + chart.bars.len().max(1) * BAR_HEIGHT + 10;
    let plot_width = CHART_WIDTH - LABEL_WIDTH - VALUE_MARGIN;
    let max_value = chart
        .bars
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);

    let mut svg = String::new();
    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = CHART_WIDTH,
        h = height
    );
    let _ = writeln!(svg, r##"  <rect width="100%" height="100%" fill="#0b0c10"/>"##);
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="26" fill="#ff4d4d" font-family="serif" font-size="20" text-anchor="middle">{}</text>"##,
        CHART_WIDTH / 2,
        escape_xml(&chart.title)
    );

    if chart.bars.is_empty() {
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" fill="#a0a0a0" font-family="sans-serif" font-size="14" text-anchor="middle">No data</text>"##,
            CHART_WIDTH / 2,
            TITLE_HEIGHT + 18
        );
    }

    for (index, (label, value)) in chart.bars.iter().enumerate() {
        let y = TITLE_HEIGHT + index * BAR_HEIGHT;
        let width = if max_value > 0.0 {
            (value / max_value * plot_width as f64).round() as usize
        } else {
            0
        };

        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" fill="#e0e0e0" font-family="sans-serif" font-size="13" text-anchor="end">{}</text>"##,
            LABEL_WIDTH - 8,
            y + 18,
            escape_xml(label)
        );
        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            LABEL_WIDTH,
            y + 4,
            width,
            BAR_HEIGHT - 8,
            chart.color
        );
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" fill="#e0e0e0" font-family="sans-serif" font-size="12">{}</text>"##,
            LABEL_WIDTH + width + 6,
            y + 18,
            format_value(*value, chart.format)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write SVG content to a file
///
/// **Public** - main entry point for SVG output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!("Writing SVG to: {}", output_path.display());

    validate_svg_path(output_path)?;
    super::json::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!("SVG written ({} bytes)", svg_content.len());

    Ok(())
}

/// Write one bar chart per ranked table of a report
///
/// **Public** - used by the report command's `--charts` option
///
/// # Returns
/// Paths of the written files, in chapter order
pub fn write_report_charts(
    report: &Report,
    chart_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, OutputError> {
    let chart_dir = chart_dir.as_ref();

    if chart_dir.is_file() {
        return Err(OutputError::InvalidPath(format!(
            "Chart directory is a file: {}",
            chart_dir.display()
        )));
    }

    let charts = [
        ("race_preference", BarChart::shares("Race preference", "#4a90d9", &report.preferences.races)),
        ("class_preference", BarChart::shares("Class preference", "#9b59b6", &report.preferences.classes)),
        ("god_preference", BarChart::shares("God preference", "#2ecc71", &report.preferences.gods)),
        ("top_killers", BarChart::shares("Top killers", "#e74c3c", &report.deaths.killers)),
        ("one_shot_kills", BarChart::counts("One-shot kills", "#e67e22", &report.deaths.one_shots)),
        ("death_places", BarChart::counts("Deaths by place", "#c0392b", &report.deaths.places)),
        ("race_win_rate", BarChart::win_rates("Win rate by race", "#1abc9c", &report.win_rates.races)),
        ("class_win_rate", BarChart::win_rates("Win rate by class", "#e056fd", &report.win_rates.classes)),
        ("god_win_rate", BarChart::win_rates("Win rate by god", "#f39c12", &report.win_rates.gods)),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (name, chart) in &charts {
        let path = chart_dir.join(format!("{}.svg", name));
        write_svg(&render_bar_chart(chart), &path)?;
        written.push(path);
    }

    info!("✓ {} charts written to: {}", written.len(), chart_dir.display());

    Ok(written)
}

/// Validate output path for SVG
///
/// **Private** - internal validation
fn validate_svg_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(ext) = path.extension() {
        if ext != "svg" {
            debug!("Warning: File does not have .svg extension: {}", path.display());
        }
    }

    Ok(())
}

fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Percent => format!("{:.1}%", value),
        ValueFormat::Count => format!("{}", value.round() as u64),
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn chart() -> BarChart {
        BarChart {
            title: "Top killers".to_string(),
            color: "#e74c3c",
            format: ValueFormat::Percent,
            bars: vec![
                ("orc warrior".to_string(), 40.0),
                ("Sigmund's <ghost>".to_string(), 20.0),
            ],
        }
    }

    #[test]
    fn test_render_bar_chart() {
        let svg = render_bar_chart(&chart());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("40.0%"));
        assert!(svg.contains("Sigmund&apos;s &lt;ghost&gt;"));
        // Largest bar spans the whole plot area
        assert!(svg.contains(&format!(
            r#"width="{}""#,
            CHART_WIDTH - LABEL_WIDTH - VALUE_MARGIN
        )));
    }

    #[test]
    fn test_render_empty_chart() {
        let mut empty = chart();
        empty.bars.clear();
        assert!(render_bar_chart(&empty).contains("No data"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(12.345, ValueFormat::Percent), "12.3%");
        assert_eq!(format_value(7.0, ValueFormat::Count), "7");
    }

    #[test]
    fn test_write_svg() {
        let temp_file = NamedTempFile::new().unwrap();
        write_svg(&render_bar_chart(&chart()), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("orc warrior"));
    }

    #[test]
    fn test_validate_svg_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_svg_path(temp_dir.path()).is_err());
    }
}

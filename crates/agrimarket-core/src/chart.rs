//! Terminal chart rendering for labeled numeric series.
//!
//! Both renderers are total: empty or zero-variance input produces a defined
//! degenerate chart instead of failing.

use std::fmt::Write as _;

/// Renders a labeled series as ASCII art.
pub trait ChartRenderer {
    fn render(&self, series: &[(String, f64)]) -> String;
}

/// Supported chart geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

pub fn renderer_for(kind: ChartKind) -> Box<dyn ChartRenderer> {
    match kind {
        ChartKind::Bar => Box::new(BarChart),
        ChartKind::Line => Box::new(LineChart),
    }
}

const NO_DATA: &str = "No data to display\n";

/// Horizontal bars scaled to the series maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChart;

impl BarChart {
    const MAX_WIDTH: usize = 50;
    const BAR_CHAR: char = '█';
    const LABEL_WIDTH: usize = 20;
}

impl ChartRenderer for BarChart {
    fn render(&self, series: &[(String, f64)]) -> String {
        if series.is_empty() {
            return NO_DATA.to_owned();
        }

        let mut max = series.iter().map(|e| e.1).fold(f64::MIN, f64::max);
        if max == 0.0 {
            max = 1.0;
        }

        let mut out = String::from("\nBar Chart:\n");
        out.push_str(&"-".repeat(60));
        out.push('\n');

        for (label, value) in series {
            let bar_length = ((value / max) * Self::MAX_WIDTH as f64) as usize;
            let bar: String = std::iter::repeat(Self::BAR_CHAR).take(bar_length).collect();
            let label = truncate_label(label, Self::LABEL_WIDTH);
            let _ = writeln!(out, "{label:<20} |{bar} {value:.2}");
        }

        out.push_str(&"-".repeat(60));
        out.push('\n');
        out
    }
}

/// Fixed-geometry line plot with interpolated Y labels and sparse X labels.
///
/// The series is sorted lexicographically by label to approximate a time
/// axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChart;

impl LineChart {
    const HEIGHT: usize = 10;
    const WIDTH: usize = 50;
    const POINT_CHAR: char = '●';
    const LINE_CHAR: char = '─';
    const AXIS_CHAR: char = '│';
    const X_LABEL_EVERY: usize = 5;
}

impl ChartRenderer for LineChart {
    fn render(&self, series: &[(String, f64)]) -> String {
        if series.is_empty() {
            return NO_DATA.to_owned();
        }

        let mut sorted: Vec<(String, f64)> = series.to_vec();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let max = sorted.iter().map(|e| e.1).fold(f64::MIN, f64::max);
        let min = sorted.iter().map(|e| e.1).fold(f64::MAX, f64::min);
        let mut range = max - min;
        if range == 0.0 {
            range = 1.0;
        }

        let mut out = String::from("\nLine Chart:\n");
        let _ = writeln!(out, "Max: {max:.2}, Min: {min:.2}");
        out.push_str(&" ".repeat(20));
        out.push_str("↑\n");

        for row in (0..Self::HEIGHT).rev() {
            let row_fraction = row as f64 / (Self::HEIGHT - 1) as f64;
            let y_value = min + range * row_fraction;
            let _ = write!(out, "{y_value:>10.2} {}", Self::AXIS_CHAR);

            let mut prev_x: i64 = -1;
            for (_, value) in &sorted {
                let normalized = (value - min) / range;
                let x = (normalized * (Self::WIDTH - 1) as f64) as i64;

                if prev_x >= 0 && (x - prev_x).abs() > 1 {
                    for _ in (prev_x.min(x) + 1)..prev_x.max(x) {
                        out.push(Self::LINE_CHAR);
                    }
                }

                if (normalized - row_fraction).abs() < 0.1 {
                    out.push(Self::POINT_CHAR);
                } else {
                    out.push(' ');
                }
                prev_x = x;
            }
            out.push('\n');
        }

        out.push_str(&" ".repeat(12));
        out.push('└');
        for _ in 0..Self::WIDTH {
            out.push(Self::LINE_CHAR);
        }
        out.push('\n');
        out.push_str(&" ".repeat(12));
        for (idx, (label, _)) in sorted.iter().enumerate() {
            if idx % Self::X_LABEL_EVERY == 0 {
                out.extend(label.chars().take(3));
            }
            out.push(' ');
        }
        out.push('\n');

        out
    }
}

fn truncate_label(label: &str, width: usize) -> String {
    if label.chars().count() > width {
        let head: String = label.chars().take(width - 3).collect();
        format!("{head}...")
    } else {
        label.to_owned()
    }
}

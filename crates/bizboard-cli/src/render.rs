//! Plain-text rendering of dashboard panels.

use std::fmt::Write;

use bizboard_widgets::{Chart, Panel, WidgetState};

/// Render all panels, separated by blank lines.
pub fn panels(panels: &[Panel]) -> String {
    panels
        .iter()
        .map(panel)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One panel: a title line, then the chart table and highlights.
pub fn panel(panel: &Panel) -> String {
    let mut out = String::new();
    let status = match &panel.state {
        WidgetState::Ready(_) => "ready".to_string(),
        other => other.to_string(),
    };
    let _ = writeln!(out, "== {} [{status}]", panel.title);
    match &panel.state {
        WidgetState::Ready(chart) => out.push_str(&table(chart)),
        WidgetState::Empty => out.push_str("  (no data)\n"),
        WidgetState::Loading | WidgetState::Error(_) => {}
    }
    out
}

/// Chart points as an aligned table, followed by the highlights.
pub fn table(chart: &Chart) -> String {
    let mut header = vec![String::new()];
    header.extend(chart.series.iter().cloned());

    let rows: Vec<Vec<String>> = chart
        .points
        .iter()
        .map(|point| {
            let mut row = vec![point.key.clone()];
            row.extend(
                chart
                    .series
                    .iter()
                    .map(|s| point.value(s).map(number).unwrap_or_default()),
            );
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    if !rows.is_empty() {
        for row in std::iter::once(&header).chain(rows.iter()) {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, width))| {
                    if i == 0 {
                        format!("{cell:<width$}")
                    } else {
                        format!("{cell:>width$}")
                    }
                })
                .collect();
            let _ = writeln!(out, "  {}", line.join("  ").trim_end());
        }
    }

    if !chart.highlights.is_empty() {
        let highlights: Vec<String> = chart
            .highlights
            .iter()
            .map(|h| format!("{}: {}", h.label, h.unit.format(h.value)))
            .collect();
        let _ = writeln!(out, "  {}", highlights.join(" | "));
    }
    out
}

/// Up to two decimals, trailing zeros trimmed.
pub fn number(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizboard_widgets::{ChartKind, Point, Unit};

    #[test]
    fn test_number() {
        assert_eq!(number(3.0), "3");
        assert_eq!(number(2.50), "2.5");
        assert_eq!(number(1234.567), "1234.57");
        assert_eq!(number(-0.001), "0");
    }

    #[test]
    fn test_table_alignment() {
        let chart = Chart::new(ChartKind::Bar)
            .series(["count"])
            .point(Point::new("2024-01").with("count", 2.0))
            .point(Point::new("2024-02").with("count", 10.0))
            .highlight("Total", 12.0, Unit::Count);

        let text = table(&chart);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "           count");
        assert_eq!(lines[1], "  2024-01      2");
        assert_eq!(lines[2], "  2024-02     10");
        assert_eq!(lines[3], "  Total: 12");
    }

    #[test]
    fn test_empty_and_error_panels() {
        let empty = Panel {
            id: "companies-overview",
            title: "Companies",
            state: WidgetState::Empty,
        };
        assert_eq!(panel(&empty), "== Companies [empty]\n  (no data)\n");

        let failed = Panel {
            id: "win-rate",
            title: "Win rate",
            state: WidgetState::Error("Authentication required".into()),
        };
        assert_eq!(panel(&failed), "== Win rate [error: Authentication required]\n");
    }
}

//! Renderer-neutral chart data.
//!
//! A [`Chart`] is what a widget hands to whatever draws it: the terminal
//! table in the CLI, or JSON for an external charting library.

use std::collections::BTreeMap;

use serde::Serialize;

/// How the points are meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Vertical bars per key
    Bar,
    /// Line over ordered keys
    Line,
    /// Filled line
    Area,
    /// Share of a whole
    Pie,
    /// Bars with stacked series
    Stacked,
    /// Rows, no graphics
    Table,
    /// Headline figures only
    Stat,
}

/// Unit of a value, used only for formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Plain count
    #[default]
    Count,
    /// Money, two decimals
    Currency,
    /// Percentage
    Percent,
    /// Logged time
    Hours,
    /// Number of periods
    Periods,
}

impl Unit {
    /// Format `value` for display.
    pub fn format(self, value: f64) -> String {
        match self {
            Unit::Count | Unit::Periods => format!("{value:.0}"),
            Unit::Currency => format!("{value:.2}"),
            Unit::Percent => format!("{value:.1}%"),
            Unit::Hours => format!("{value:.1}h"),
        }
    }
}

/// One category or period on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    /// Category or period key, e.g. `2024-03` or `sales`
    pub key: String,
    /// Values by series name
    pub values: BTreeMap<String, f64>,
}

impl Point {
    /// Point with no values yet.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: BTreeMap::new(),
        }
    }

    /// Add a value for `series`.
    pub fn with(mut self, series: &str, value: f64) -> Self {
        self.values.insert(series.to_string(), value);
        self
    }

    /// Value for `series`, if set.
    pub fn value(&self, series: &str) -> Option<f64> {
        self.values.get(series).copied()
    }
}

/// A headline figure shown next to the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    /// What the figure is
    pub label: String,
    /// The figure
    pub value: f64,
    /// How to format it
    pub unit: Unit,
}

/// Chart-ready output of a widget load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Suggested rendering
    pub kind: ChartKind,
    /// Series names in display order
    pub series: Vec<String>,
    /// Points in display order
    pub points: Vec<Point>,
    /// Headline figures
    pub highlights: Vec<Highlight>,
}

impl Chart {
    /// Empty chart of `kind`.
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            series: Vec::new(),
            points: Vec::new(),
            highlights: Vec::new(),
        }
    }

    /// Declare the series, in display order.
    pub fn series<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series = names.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a point.
    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Appends points in order.
    pub fn points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.points.extend(points);
        self
    }

    /// Appends a headline figure.
    pub fn highlight(mut self, label: impl Into<String>, value: f64, unit: Unit) -> Self {
        self.highlights.push(Highlight {
            label: label.into(),
            value,
            unit,
        });
        self
    }

    /// The point with `key`.
    pub fn get(&self, key: &str) -> Option<&Point> {
        self.points.iter().find(|p| p.key == key)
    }

    /// Value of the highlight labelled `label`.
    pub fn highlight_value(&self, label: &str) -> Option<f64> {
        self.highlights
            .iter()
            .find(|h| h.label == label)
            .map(|h| h.value)
    }

    /// Point keys in order.
    pub fn keys(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.key.as_str()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let chart = Chart::new(ChartKind::Bar)
            .series(["count"])
            .point(Point::new("a").with("count", 2.0))
            .point(Point::new("b").with("count", 1.0))
            .highlight("Total", 3.0, Unit::Count);

        assert_eq!(chart.keys(), vec!["a", "b"]);
        assert_eq!(chart.get("a").unwrap().value("count"), Some(2.0));
        assert_eq!(chart.highlight_value("Total"), Some(3.0));
        assert_eq!(chart.highlight_value("Missing"), None);
    }

    #[test]
    fn test_unit_format() {
        assert_eq!(Unit::Count.format(3.0), "3");
        assert_eq!(Unit::Currency.format(1234.5), "1234.50");
        assert_eq!(Unit::Percent.format(12.345), "12.3%");
        assert_eq!(Unit::Hours.format(7.25), "7.2h");
    }

    #[test]
    fn test_serializes_kind_snake_case() {
        let json = serde_json::to_value(Chart::new(ChartKind::Stacked)).unwrap();
        assert_eq!(json["kind"], "stacked");
    }
}

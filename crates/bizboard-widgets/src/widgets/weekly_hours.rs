//! Logged hours per ISO week.

use async_trait::async_trait;

use bizboard_aggregate::group::group_by;
use bizboard_aggregate::ratio::{percentage, round_to};
use bizboard_aggregate::window::last_n_sorted;
use bizboard_core::models::TimeEntry;
use bizboard_core::{ListQuery, Result};

use super::week_of;
use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "weekly-hours";

#[derive(Debug, Clone, Copy, Default)]
struct WeekHours {
    billable: f64,
    other: f64,
}

impl WeekHours {
    fn total(&self) -> f64 {
        self.billable + self.other
    }
}

/// Logged hours per ISO week.
#[derive(Debug, Clone)]
pub struct WeeklyHours {
    /// Number of trailing weeks shown.
    pub weeks: usize,
}

impl Default for WeeklyHours {
    fn default() -> Self {
        Self { weeks: 8 }
    }
}

#[async_trait]
impl Widget for WeeklyHours {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Weekly hours"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["time-entries"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let entries = ctx.list_all::<TimeEntry>(&ListQuery::new()).await?;
        Ok(summarize(&entries, self.weeks))
    }
}

/// Billable and other hours per `YYYY-Www`, most recent `weeks`.
pub fn summarize(entries: &[TimeEntry], weeks: usize) -> Option<Chart> {
    let by_week = group_by(
        entries,
        |e| week_of(e.date.as_deref()),
        WeekHours::default,
        |week, e| {
            let hours = e.hours.unwrap_or(0.0);
            if e.billable.unwrap_or(false) {
                week.billable += hours;
            } else {
                week.other += hours;
            }
        },
    );
    if by_week.is_empty() {
        return None;
    }

    let window = last_n_sorted(&by_week, weeks);
    let total: f64 = window.iter().map(|(_, w)| w.total()).sum();
    let billable: f64 = window.iter().map(|(_, w)| w.billable).sum();
    let latest = window.last().map(|(_, w)| w.total()).unwrap_or(0.0);

    let points = window.iter().map(|(week, hours)| {
        Point::new(week.as_str())
            .with("billable", hours.billable)
            .with("other", hours.other)
    });

    Some(
        Chart::new(ChartKind::Stacked)
            .series(["billable", "other"])
            .points(points)
            .highlight("Latest week", latest, Unit::Hours)
            .highlight("Total", total, Unit::Hours)
            .highlight("Billable share", round_to(percentage(billable, total), 1), Unit::Percent),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(date: &str, hours: f64, billable: bool) -> TimeEntry {
        TimeEntry {
            date: Some(date.to_string()),
            hours: Some(hours),
            billable: Some(billable),
            ..Default::default()
        }
    }

    #[test]
    fn test_hours_per_iso_week() {
        let entries = vec![
            // 2024-01-01 is a Monday: week 1
            entry("2024-01-01", 4.0, true),
            entry("2024-01-07", 2.0, false),
            entry("2024-01-08", 6.0, true),
        ];
        let chart = summarize(&entries, 8).unwrap();

        assert_eq!(chart.keys(), vec!["2024-W01", "2024-W02"]);
        assert_eq!(chart.get("2024-W01").unwrap().value("other"), Some(2.0));
        assert_eq!(chart.highlight_value("Latest week"), Some(6.0));
        assert_eq!(chart.highlight_value("Billable share"), Some(83.3));
    }

    #[test]
    fn test_week_keys_across_year_end() {
        // 2021-01-01 belongs to ISO week 53 of 2020
        let chart = summarize(&[entry("2021-01-01", 1.0, true), entry("2020-12-20", 1.0, true)], 8).unwrap();
        assert_eq!(chart.keys(), vec!["2020-W51", "2020-W53"]);
    }

    #[test]
    fn test_window_limits_weeks() {
        let entries: Vec<TimeEntry> = (1..=20)
            .map(|d| entry(&format!("2024-02-{d:02}"), 1.0, false))
            .collect();
        let chart = summarize(&entries, 2).unwrap();
        assert_eq!(chart.points.len(), 2);
    }
}

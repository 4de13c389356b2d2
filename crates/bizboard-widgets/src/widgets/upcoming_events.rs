//! Calendar events in the coming days.

use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use bizboard_aggregate::group::count_by;
use bizboard_aggregate::period::parse_timestamp;
use bizboard_core::models::CalendarEvent;
use bizboard_core::{ListQuery, Result};

use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "upcoming-events";

/// Calendar events in the coming days.
#[derive(Debug, Clone)]
pub struct UpcomingEvents {
    /// Days ahead to look, today included
    pub days: u64,
    /// Events listed individually
    pub limit: usize,
}

impl Default for UpcomingEvents {
    fn default() -> Self {
        Self { days: 14, limit: 10 }
    }
}

#[async_trait]
impl Widget for UpcomingEvents {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Upcoming events"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["calendar-events"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let today = ctx.today();
        let until = today.checked_add_days(Days::new(self.days)).unwrap_or(today);
        let query = ListQuery::new()
            .filter("start", today)
            .filter("end", until);
        let events = ctx.list_all::<CalendarEvent>(&query).await?;
        Ok(summarize(&events, today, self.days, self.limit))
    }
}

/// The first `limit` events from `today` for `days` days, one row each,
/// with the number of events on the same day.
///
/// Events outside the range are dropped even if the backend returned them.
pub fn summarize(events: &[CalendarEvent], today: NaiveDate, days: u64, limit: usize) -> Option<Chart> {
    let until = today.checked_add_days(Days::new(days)).unwrap_or(today);
    let mut upcoming: Vec<(NaiveDate, &CalendarEvent)> = events
        .iter()
        .filter_map(|e| Some((parse_timestamp(e.start.as_deref()?)?, e)))
        .filter(|(day, _)| *day >= today && *day < until)
        .collect();
    if upcoming.is_empty() {
        return None;
    }
    upcoming.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.start.cmp(&b.1.start)));

    let per_day = count_by(&upcoming, |(day, _)| Some(day.to_string()));
    let points = upcoming.iter().take(limit).map(|(day, event)| {
        let title = event.title.as_deref().unwrap_or("(untitled)");
        Point::new(format!("{day} {title}"))
            .with("day_offset", (*day - today).num_days() as f64)
            .with("events_that_day", per_day.get(&day.to_string()).copied().unwrap_or(0) as f64)
    });

    let next_in = (upcoming[0].0 - today).num_days() as f64;

    Some(
        Chart::new(ChartKind::Table)
            .series(["day_offset", "events_that_day"])
            .points(points)
            .highlight("Upcoming", upcoming.len() as f64, Unit::Count)
            .highlight("Busiest day", per_day.values().copied().max().unwrap_or(0) as f64, Unit::Count)
            .highlight("Days until next", next_in, Unit::Count),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn event(title: &str, start: &str) -> CalendarEvent {
        CalendarEvent {
            title: Some(title.to_string()),
            start: Some(start.to_string()),
            ..Default::default()
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sorted_and_counted_per_day() {
        let events = vec![
            event("Review", "2024-06-05T15:00:00Z"),
            event("Standup", "2024-06-03T09:00:00Z"),
            event("Past", "2024-05-30T09:00:00Z"),
            event("Planning", "2024-06-05T09:00:00Z"),
            event("Far", "2024-07-30T09:00:00Z"),
        ];
        let chart = summarize(&events, day(2024, 6, 1), 14, 10).unwrap();

        assert_eq!(
            chart.keys(),
            vec!["2024-06-03 Standup", "2024-06-05 Planning", "2024-06-05 Review"]
        );
        assert_eq!(chart.get("2024-06-05 Review").unwrap().value("events_that_day"), Some(2.0));
        assert_eq!(chart.highlight_value("Upcoming"), Some(3.0));
        assert_eq!(chart.highlight_value("Busiest day"), Some(2.0));
        assert_eq!(chart.highlight_value("Days until next"), Some(2.0));
    }

    #[test]
    fn test_limit_caps_rows_not_counts() {
        let events: Vec<CalendarEvent> = (1..=5).map(|d| event("x", &format!("2024-06-0{d}"))).collect();
        let chart = summarize(&events, day(2024, 6, 1), 14, 2).unwrap();
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.highlight_value("Upcoming"), Some(5.0));
    }

    #[test]
    fn test_nothing_upcoming() {
        let events = vec![event("Past", "2024-01-01"), event("Undated", "soon")];
        assert!(summarize(&events, day(2024, 6, 1), 14, 10).is_none());
    }
}

//! Open tasks and logged hours per active employee.

use std::collections::HashSet;

use async_trait::async_trait;

use bizboard_aggregate::group::{count_by, sum_by};
use bizboard_core::models::{Employee, Task, TimeEntry};
use bizboard_core::{ListQuery, Result};

use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "team-workload";

/// Open tasks and logged hours per employee.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamWorkload;

#[async_trait]
impl Widget for TeamWorkload {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Team workload"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["employees", "tasks", "time-entries"]
    }

    /// The three lists are fetched concurrently; if any fails the whole
    /// widget fails and no partial figures are shown.
    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let query = ListQuery::new();
        let (employees, tasks, entries) = tokio::try_join!(
            ctx.list_all::<Employee>(&query),
            ctx.list_all::<Task>(&query),
            ctx.list_all::<TimeEntry>(&query),
        )?;
        Ok(summarize(&employees, &tasks, &entries))
    }
}

/// One row per active employee, in the order the backend returned them.
pub fn summarize(employees: &[Employee], tasks: &[Task], entries: &[TimeEntry]) -> Option<Chart> {
    let active: Vec<&Employee> = employees
        .iter()
        .filter(|e| e.active() && e.id.is_some())
        .collect();
    if active.is_empty() {
        return None;
    }

    let open_tasks = count_by(tasks.iter().filter(|t| t.is_open()), |t| t.assignee_id.clone());
    let hours = sum_by(entries, |e| e.employee_id.clone(), |e| e.hours.unwrap_or(0.0));

    let mut points = Vec::with_capacity(active.len());
    let mut names = HashSet::new();
    for employee in active {
        let Some(id) = &employee.id else {
            continue;
        };
        let mut name = employee.full_name();
        if !names.insert(name.clone()) {
            name = format!("{name} (#{id})");
        }
        points.push(
            Point::new(name)
                .with("open_tasks", open_tasks.get(id).copied().unwrap_or(0) as f64)
                .with("hours", hours.get(id).copied().unwrap_or(0.0)),
        );
    }

    let total_open: f64 = points.iter().filter_map(|p| p.value("open_tasks")).sum();
    let total_hours: f64 = points.iter().filter_map(|p| p.value("hours")).sum();

    Some(
        Chart::new(ChartKind::Table)
            .series(["open_tasks", "hours"])
            .points(points)
            .highlight("Open tasks", total_open, Unit::Count)
            .highlight("Hours logged", total_hours, Unit::Hours),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bizboard_core::RecordId;
    use bizboard_core::models::TaskStatus;

    fn employee(id: i64, first: &str) -> Employee {
        Employee {
            id: Some(RecordId::from(id)),
            first_name: Some(first.to_string()),
            ..Default::default()
        }
    }

    fn task(assignee: i64, status: TaskStatus) -> Task {
        Task {
            assignee_id: Some(RecordId::from(assignee)),
            status: Some(status),
            ..Default::default()
        }
    }

    fn hours(employee: i64, hours: f64) -> TimeEntry {
        TimeEntry {
            employee_id: Some(RecordId::from(employee)),
            hours: Some(hours),
            ..Default::default()
        }
    }

    #[test]
    fn test_workload_per_employee() {
        let employees = vec![employee(1, "Ada"), employee(2, "Grace")];
        let tasks = vec![
            task(1, TaskStatus::Todo),
            task(1, TaskStatus::Done),
            task(1, TaskStatus::InProgress),
            task(2, TaskStatus::Review),
        ];
        let entries = vec![hours(1, 3.5), hours(2, 8.0), hours(1, 1.5)];

        let chart = summarize(&employees, &tasks, &entries).unwrap();
        assert_eq!(chart.keys(), vec!["Ada", "Grace"]);
        assert_eq!(chart.get("Ada").unwrap().value("open_tasks"), Some(2.0));
        assert_eq!(chart.get("Ada").unwrap().value("hours"), Some(5.0));
        assert_eq!(chart.highlight_value("Open tasks"), Some(3.0));
        assert_eq!(chart.highlight_value("Hours logged"), Some(13.0));
    }

    #[test]
    fn test_duplicate_names_are_disambiguated() {
        let employees = vec![employee(1, "Sam"), employee(2, "Sam")];
        let chart = summarize(&employees, &[], &[]).unwrap();
        assert_eq!(chart.keys(), vec!["Sam", "Sam (#2)"]);
    }

    #[test]
    fn test_string_and_numeric_ids_join() {
        let employees = vec![employee(4, "Lin")];
        let tasks = vec![Task {
            assignee_id: Some(RecordId::new("4")),
            status: Some(TaskStatus::Todo),
            ..Default::default()
        }];
        let entries = vec![TimeEntry {
            employee_id: Some(RecordId::new("4")),
            hours: Some(2.0),
            ..Default::default()
        }];

        let chart = summarize(&employees, &tasks, &entries).unwrap();
        assert_eq!(chart.get("Lin").unwrap().value("open_tasks"), Some(1.0));
        assert_eq!(chart.get("Lin").unwrap().value("hours"), Some(2.0));
    }

    #[test]
    fn test_no_employees_is_empty() {
        assert!(summarize(&[], &[task(1, TaskStatus::Todo)], &[]).is_none());
    }
}

//! Active headcount per department.

use async_trait::async_trait;

use bizboard_aggregate::group::count_by;
use bizboard_aggregate::ratio::{percentage, round_to};
use bizboard_core::models::Employee;
use bizboard_core::{ListQuery, Result};

use super::label_or;
use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "headcount-by-department";

/// Active employees per department.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadcountByDepartment;

#[async_trait]
impl Widget for HeadcountByDepartment {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Headcount by department"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["employees"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let employees = ctx.list_all::<Employee>(&ListQuery::new()).await?;
        Ok(summarize(&employees))
    }
}

/// Inactive employees are excluded from every figure.
pub fn summarize(employees: &[Employee]) -> Option<Chart> {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.active()).collect();
    if active.is_empty() {
        return None;
    }
    let total = active.len() as f64;
    let by_department = count_by(active, |e| Some(label_or(e.department.as_deref(), "Unassigned")));

    let points = by_department.iter().map(|(department, count)| {
        Point::new(department.as_str())
            .with("headcount", *count as f64)
            .with("share", round_to(percentage(*count as f64, total), 1))
    });

    Some(
        Chart::new(ChartKind::Pie)
            .series(["headcount", "share"])
            .points(points)
            .highlight("Active employees", total, Unit::Count)
            .highlight("Departments", by_department.len() as f64, Unit::Count),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn employee(department: &str, active: Option<bool>) -> Employee {
        Employee {
            department: Some(department.to_string()),
            is_active: active,
            ..Default::default()
        }
    }

    #[test]
    fn test_active_only_with_shares() {
        let employees = vec![
            employee("Sales", Some(true)),
            employee("Sales", None),
            employee("Ops", Some(true)),
            employee("Ops", Some(false)),
            employee("", Some(true)),
            employee("Sales", Some(true)),
        ];
        let chart = summarize(&employees).unwrap();

        assert_eq!(chart.keys(), vec!["Ops", "Sales", "Unassigned"]);
        assert_eq!(chart.get("Sales").unwrap().value("headcount"), Some(3.0));
        assert_eq!(chart.get("Sales").unwrap().value("share"), Some(60.0));
        assert_eq!(chart.highlight_value("Active employees"), Some(5.0));
    }

    #[test]
    fn test_all_inactive_is_empty() {
        assert!(summarize(&[employee("Ops", Some(false))]).is_none());
    }
}

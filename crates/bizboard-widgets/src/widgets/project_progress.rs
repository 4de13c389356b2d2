//! Task completion per project.

use async_trait::async_trait;

use bizboard_aggregate::group::{count_by, totals_by};
use bizboard_aggregate::ratio::{percentage, round_to};
use bizboard_core::models::{Project, ProjectStatus, Task, TaskStatus};
use bizboard_core::{ListQuery, Result};

use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "project-progress";

/// Task completion per project.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectProgress;

#[async_trait]
impl Widget for ProjectProgress {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Project progress"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["projects", "tasks"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let query = ListQuery::new();
        let (projects, tasks) = tokio::try_join!(
            ctx.list_all::<Project>(&query),
            ctx.list_all::<Task>(&query),
        )?;
        Ok(summarize(&projects, &tasks))
    }
}

/// Percentage of done tasks for every project that is not cancelled.
///
/// A project without tasks is 0 % complete, or 100 % once marked completed.
pub fn summarize(projects: &[Project], tasks: &[Task]) -> Option<Chart> {
    let projects: Vec<&Project> = projects
        .iter()
        .filter(|p| p.id.is_some() && p.status != Some(ProjectStatus::Cancelled))
        .collect();
    if projects.is_empty() {
        return None;
    }

    let per_project = totals_by(
        tasks,
        |t| t.project_id.clone(),
        |t| if t.status == Some(TaskStatus::Done) { 1.0 } else { 0.0 },
    );

    let progress: Vec<(String, f64, usize)> = projects
        .iter()
        .filter_map(|project| {
            let id = project.id.as_ref()?;
            let name = project.name.clone().unwrap_or_else(|| format!("#{id}"));
            let totals = per_project.get(id).copied().unwrap_or_default();
            let done = if totals.count == 0 && project.status == Some(ProjectStatus::Completed) {
                100.0
            } else {
                percentage(totals.sum, totals.count as f64)
            };
            Some((name, round_to(done, 1), totals.count))
        })
        .collect();

    let average = progress.iter().map(|(_, done, _)| done).sum::<f64>() / progress.len() as f64;
    let by_status = count_by(projects.iter(), |p| Some(p.status.unwrap_or_default()));
    let active = by_status.get(&ProjectStatus::Active).copied().unwrap_or(0);

    let points = progress.into_iter().map(|(name, done, count)| {
        Point::new(name)
            .with("completion", done)
            .with("tasks", count as f64)
    });

    Some(
        Chart::new(ChartKind::Bar)
            .series(["completion", "tasks"])
            .points(points)
            .highlight("Average completion", round_to(average, 1), Unit::Percent)
            .highlight("Active projects", active as f64, Unit::Count),
    )
}

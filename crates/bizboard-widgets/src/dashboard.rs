//! One-shot parallel load of a set of widgets.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;

use crate::host::run_load;
use crate::state::WidgetState;
use crate::widget::{Widget, WidgetContext};

/// A settled widget, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    /// Widget id
    pub id: &'static str,
    /// Widget title
    pub title: &'static str,
    /// Settled state, never `Loading`
    pub state: WidgetState,
}

/// An ordered set of widgets sharing one context.
pub struct Dashboard {
    ctx: WidgetContext,
    widgets: Vec<Arc<dyn Widget>>,
}

impl Dashboard {
    /// Empty dashboard loading through `ctx`.
    pub fn new(ctx: WidgetContext) -> Self {
        Self {
            ctx,
            widgets: Vec::new(),
        }
    }

    /// Appends a widget.
    pub fn with_widget(mut self, widget: Arc<dyn Widget>) -> Self {
        self.widgets.push(widget);
        self
    }

    /// Appends widgets in order.
    pub fn with_widgets(mut self, widgets: impl IntoIterator<Item = Arc<dyn Widget>>) -> Self {
        self.widgets.extend(widgets);
        self
    }

    /// Widget ids in display order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.widgets.iter().map(|w| w.id()).collect()
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether no widget was added.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Load every widget in its own task and wait for all of them.
    ///
    /// Widgets are independent: one failing, or panicking, produces an
    /// `Error` panel for that widget only. Panels come back in the order
    /// the widgets were added.
    pub async fn load_all(&self) -> Vec<Panel> {
        let tasks = self.widgets.iter().map(|widget| {
            let widget = Arc::clone(widget);
            let ctx = self.ctx.clone();
            tokio::spawn(async move { run_load(widget.as_ref(), &ctx).await })
        });

        let results = join_all(tasks).await;
        let panels: Vec<Panel> = self
            .widgets
            .iter()
            .zip(results)
            .map(|(widget, result)| {
                let state = result.unwrap_or_else(|e| {
                    tracing::error!(widget = widget.id(), "Widget task failed: {e}");
                    WidgetState::Error(format!("{} failed unexpectedly", widget.title()))
                });
                Panel {
                    id: widget.id(),
                    title: widget.title(),
                    state,
                }
            })
            .collect();

        let failed = panels.iter().filter(|p| p.state.is_error()).count();
        tracing::info!(widgets = panels.len(), failed, "Dashboard loaded");
        panels
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("widgets", &self.ids())
            .finish()
    }
}

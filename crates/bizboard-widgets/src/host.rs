//! Mounting widgets: cancellable loads, refresh, and user actions.
//!
//! A [`MountedWidget`] owns a root [`CancellationToken`]. Each load runs in
//! its own task under a child token; unmounting (or dropping) cancels the
//! root, and a cancelled load never publishes a state.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use bizboard_client::ApiClient;
use bizboard_core::{Error, Result};

use crate::state::WidgetState;
use crate::widget::{Widget, WidgetContext};

// ============================================================================
// Loading
// ============================================================================

/// Run one load, converting a panic into an `Error` state.
pub(crate) async fn run_load(widget: &dyn Widget, ctx: &WidgetContext) -> WidgetState {
    match AssertUnwindSafe(widget.load(ctx)).catch_unwind().await {
        Ok(result) => WidgetState::from_load(widget.id(), result),
        Err(_) => {
            tracing::error!(widget = widget.id(), "Widget panicked while loading");
            WidgetState::Error(format!("{} failed unexpectedly", widget.title()))
        }
    }
}

fn spawn_load(
    widget: Arc<dyn Widget>,
    ctx: WidgetContext,
    tx: Arc<watch::Sender<WidgetState>>,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(widget = widget.id(), "Load cancelled");
            }
            state = run_load(widget.as_ref(), &ctx) => {
                if token.is_cancelled() {
                    return;
                }
                tracing::debug!(widget = widget.id(), %state, "Load settled");
                tx.send_replace(state);
            }
        }
    })
}

// ============================================================================
// WidgetHost
// ============================================================================

/// Mounts widgets against one shared context.
#[derive(Debug, Clone)]
pub struct WidgetHost {
    ctx: WidgetContext,
}

impl WidgetHost {
    /// Host mounting widgets against `ctx`.
    pub fn new(ctx: WidgetContext) -> Self {
        Self { ctx }
    }

    /// The shared context.
    pub fn context(&self) -> &WidgetContext {
        &self.ctx
    }

    /// Start loading `widget`. Must be called inside a tokio runtime.
    pub fn mount(&self, widget: Arc<dyn Widget>) -> MountedWidget {
        let (tx, _rx) = watch::channel(WidgetState::Loading);
        let tx = Arc::new(tx);
        let root = CancellationToken::new();
        let load = root.child_token();
        let task = spawn_load(
            Arc::clone(&widget),
            self.ctx.clone(),
            Arc::clone(&tx),
            load.clone(),
        );

        tracing::debug!(widget = widget.id(), "Mounted");

        MountedWidget {
            widget,
            ctx: self.ctx.clone(),
            tx,
            root,
            load,
            task: Some(task),
        }
    }
}

// ============================================================================
// MountedWidget
// ============================================================================

/// A widget with a live load task.
///
/// Dropping it cancels any load in flight, like [`unmount`](Self::unmount).
pub struct MountedWidget {
    widget: Arc<dyn Widget>,
    ctx: WidgetContext,
    tx: Arc<watch::Sender<WidgetState>>,
    root: CancellationToken,
    load: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl MountedWidget {
    /// Id of the mounted widget.
    pub fn id(&self) -> &'static str {
        self.widget.id()
    }

    /// Title of the mounted widget.
    pub fn title(&self) -> &'static str {
        self.widget.title()
    }

    /// Current state.
    pub fn state(&self) -> WidgetState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
        self.tx.subscribe()
    }

    /// Wait for the current load to leave `Loading`.
    ///
    /// Returns [`Error::Cancelled`] if the widget is unmounted first.
    pub async fn settled(&self) -> Result<WidgetState> {
        let mut rx = self.subscribe();
        tokio::select! {
            _ = self.root.cancelled() => Err(Error::Cancelled),
            state = rx.wait_for(|s| !s.is_loading()) => {
                state.map(|s| s.clone()).map_err(|_| Error::Cancelled)
            }
        }
    }

    /// Cancel the load in flight and start a new one from `Loading`.
    pub fn refresh(&mut self) {
        self.load.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if self.root.is_cancelled() {
            return;
        }

        self.load = self.root.child_token();
        self.tx.send_replace(WidgetState::Loading);
        self.task = Some(spawn_load(
            Arc::clone(&self.widget),
            self.ctx.clone(),
            Arc::clone(&self.tx),
            self.load.clone(),
        ));
        tracing::debug!(widget = self.widget.id(), "Refreshing");
    }

    /// Run a user-triggered mutation, then refetch from scratch.
    ///
    /// On success the widget's cached lists are invalidated and the widget
    /// reloads; the mutation's result is not merged into the current
    /// chart. On failure the state is left untouched and the error returned.
    pub async fn run_action<F, Fut, T>(&mut self, action: F) -> Result<T>
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if self.root.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let output = action(self.ctx.client().clone()).await.inspect_err(|e| {
            tracing::warn!(widget = self.widget.id(), "Action failed: {e}");
        })?;

        self.ctx.invalidate(self.widget.resources());
        self.refresh();
        Ok(output)
    }

    /// Cancel everything. The last published state stays visible to
    /// existing subscribers.
    pub fn unmount(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if !self.root.is_cancelled() {
            tracing::debug!(widget = self.widget.id(), "Unmounted");
        }
        self.root.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for MountedWidget {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for MountedWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedWidget")
            .field("id", &self.widget.id())
            .field("state", &*self.tx.borrow())
            .field("cancelled", &self.root.is_cancelled())
            .finish()
    }
}

//! Interval-driven notification feed.
//!
//! The only widget that refetches on its own. It owns its interval and
//! stops it when stopped or dropped.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use bizboard_core::models::Notification;
use bizboard_core::{ListQuery, Result};

use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::state::WidgetState;
use crate::widget::WidgetContext;

/// Default polling interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Shortest interval the poller accepts; anything below is raised to it.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Most recent notifications shown in the feed.
pub const FEED_SIZE: usize = 10;

/// Background poll of unread notifications.
pub struct NotificationPoller {
    rx: watch::Receiver<WidgetState>,
    polls: Arc<AtomicU64>,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl NotificationPoller {
    /// Poll unread notifications every `interval`, starting immediately.
    pub fn start(ctx: WidgetContext, interval: Duration) -> Self {
        Self::spawn_with(interval, move || {
            let ctx = ctx.clone();
            async move {
                ctx.client()
                    .notifications()
                    .unread(&ListQuery::new())
                    .await
            }
        })
    }

    /// Poll with an arbitrary fetch function.
    ///
    /// `interval` is raised to [`MIN_INTERVAL`] if shorter.
    pub fn spawn_with<F, Fut>(interval: Duration, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<Notification>>> + Send + 'static,
    {
        if interval < MIN_INTERVAL {
            tracing::warn!(
                requested_ms = interval.as_millis() as u64,
                "Polling interval too short, using {MIN_INTERVAL:?}"
            );
        }
        let interval = interval.max(MIN_INTERVAL);
        let (tx, rx) = watch::channel(WidgetState::Loading);
        let polls = Arc::new(AtomicU64::new(0));
        let token = CancellationToken::new();

        let task = {
            let polls = Arc::clone(&polls);
            let token = token.clone();
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => break,
                        _ = ticker.tick() => {}
                    }
                    let result = tokio::select! {
                        biased;
                        _ = token.cancelled() => break,
                        result = fetch() => result,
                    };
                    let count = polls.fetch_add(1, Ordering::SeqCst) + 1;
                    let state = WidgetState::from_load("notifications", result.map(|n| feed(&n)));
                    tracing::trace!(polls = count, %state, "Notification poll");
                    tx.send_replace(state);
                }
                tracing::debug!("Notification poller stopped");
            })
        };

        tracing::debug!(interval_secs = interval.as_secs_f64(), "Notification poller started");

        Self {
            rx,
            polls,
            token,
            task: Some(task),
        }
    }

    /// Latest published state.
    pub fn state(&self) -> WidgetState {
        self.rx.borrow().clone()
    }

    /// Receiver notified after every poll.
    pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
        self.rx.clone()
    }

    /// Completed polls so far.
    pub fn polls(&self) -> u64 {
        self.polls.load(Ordering::SeqCst)
    }

    /// Stop polling. Idempotent.
    pub fn stop(&self) {
        self.token.cancel();
    }

    /// Whether `stop` was called or the poller dropped.
    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stop and wait for the poll task to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Notification poller task failed: {e}");
            }
        }
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Unread count plus the newest [`FEED_SIZE`] notifications.
///
/// `None` when nothing is unread.
pub fn feed(notifications: &[Notification]) -> Option<Chart> {
    let mut unread: Vec<&Notification> = notifications.iter().filter(|n| n.is_unread()).collect();
    if unread.is_empty() {
        return None;
    }
    // Newest first; ISO timestamps sort lexicographically
    unread.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let points = unread.iter().take(FEED_SIZE).map(|n| {
        let key = n
            .title
            .clone()
            .or_else(|| n.message.clone())
            .unwrap_or_else(|| "(untitled)".to_string());
        Point::new(key)
    });

    Some(
        Chart::new(ChartKind::Table)
            .points(points)
            .highlight("Unread", unread.len() as f64, Unit::Count),
    )
}

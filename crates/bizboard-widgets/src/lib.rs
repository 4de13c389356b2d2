//! Dashboard widgets for the Bizboard backend.
//!
//! A widget fetches one or more resources through the shared
//! [`ApiClient`](bizboard_client::ApiClient), reduces the records with
//! `bizboard-aggregate`, and publishes a [`WidgetState`].
//!
//! # Modules
//!
//! - [`state`]: `Loading` / `Empty` / `Error` / `Ready`
//! - [`chart`]: Renderer-neutral chart data
//! - [`widget`]: The [`Widget`] trait and [`WidgetContext`]
//! - [`cache`]: Keyed query cache with a stale time
//! - [`host`]: Mounting, cancellation, refresh, and actions
//! - [`dashboard`]: Parallel one-shot load of many widgets
//! - [`poller`]: Interval-driven notification feed
//! - [`widgets`]: The concrete widgets and their registry

#![warn(clippy::all)]

pub mod cache;
pub mod chart;
pub mod dashboard;
pub mod host;
pub mod poller;
pub mod state;
pub mod widget;
pub mod widgets;

pub use cache::QueryCache;
pub use chart::{Chart, ChartKind, Highlight, Point, Unit};
pub use dashboard::{Dashboard, Panel};
pub use host::{MountedWidget, WidgetHost};
pub use poller::NotificationPoller;
pub use state::WidgetState;
pub use widget::{Widget, WidgetContext};

//! Widget lifecycle state.

use std::fmt;

use serde::Serialize;

use bizboard_core::Result;

use crate::chart::Chart;

/// What a widget currently shows.
///
/// Every widget starts in `Loading`. A load settles into exactly one of the
/// other three; there is no automatic retry from `Error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum WidgetState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// The fetch succeeded but left nothing to chart.
    Empty,
    /// The fetch failed; carries the message shown to the user.
    Error(String),
    /// Chart data ready to render.
    Ready(Chart),
}

impl WidgetState {
    /// Settle a load result.
    ///
    /// Errors are logged here with the widget id; only the display string
    /// is kept.
    pub fn from_load(widget: &str, result: Result<Option<Chart>>) -> Self {
        match result {
            Ok(Some(chart)) => WidgetState::Ready(chart),
            Ok(None) => WidgetState::Empty,
            Err(e) => {
                tracing::warn!(widget, retryable = e.is_retryable(), "Widget load failed: {e}");
                WidgetState::Error(e.to_string())
            }
        }
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether the fetch failed.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Whether a chart is available.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The chart, when `Ready`.
    pub fn chart(&self) -> Option<&Chart> {
        match self {
            Self::Ready(chart) => Some(chart),
            _ => None,
        }
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Empty => write!(f, "empty"),
            Self::Error(message) => write!(f, "error: {message}"),
            Self::Ready(_) => write!(f, "ready"),
        }
    }
}

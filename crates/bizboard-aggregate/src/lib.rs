//! Client-side aggregation for dashboard widgets.
//!
//! Every function here is pure and makes a single pass over an in-memory
//! slice. Widgets fetch records, then call into this crate to turn them into
//! chart-ready aggregates.
//!
//! # Modules
//!
//! - [`period`]: Lenient timestamp parsing and month/week keys
//! - [`group`]: Group-by-key accumulation
//! - [`ratio`]: Growth rate and percentages
//! - [`window`]: Trailing windows over sorted aggregates
//! - [`forecast`]: Linear extrapolation with a confidence band
//! - [`breakeven`]: Cumulative net and time to break even
//! - [`extremes`]: Min/max by value

#![warn(clippy::all)]

pub mod breakeven;
pub mod extremes;
pub mod forecast;
pub mod group;
pub mod period;
pub mod ratio;
pub mod window;

pub use group::{Totals, count_by, group_by, sum_by, totals_by};
pub use period::{month_key, parse_timestamp, week_key};
pub use ratio::{growth_rate, percentage};
pub use window::last_n;

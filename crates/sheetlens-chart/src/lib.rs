//! # sheetlens-chart
//!
//! Chart metadata read from `xl/charts/chart<N>.xml` parts.
//!
//! Coverage is partial: only scatter, bar, line and pie plots are recognized,
//! and titles and series are extracted on a best-effort basis.

mod chart;
mod series;

pub use chart::{Chart, ChartKind};
pub use series::{CachedValue, DataSeries, SeriesRef};

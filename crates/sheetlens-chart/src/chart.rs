//! Chart types

use crate::series::DataSeries;

/// Recognized plot types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartKind {
    Scatter,
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    /// All recognized kinds, in detection order
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Scatter,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
    ];

    /// Local name of the plot element under `c:plotArea`
    pub fn element_name(self) -> &'static str {
        match self {
            ChartKind::Scatter => "scatterChart",
            ChartKind::Bar => "barChart",
            ChartKind::Line => "lineChart",
            ChartKind::Pie => "pieChart",
        }
    }

    /// Map a plot element's local name to a kind
    ///
    /// Doughnut, bubble, radar, surface and the other plot types return `None`.
    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.element_name() == name)
    }
}

/// Chart metadata
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// Archive entry the chart was read from
    pub part: String,
    /// Plot type; `None` when the plot type is not supported
    pub kind: Option<ChartKind>,
    /// Chart title text
    pub title: Option<String>,
    /// Data series
    pub series: Vec<DataSeries>,
}

impl Chart {
    /// Create a new chart
    pub fn new<S: Into<String>>(part: S, kind: Option<ChartKind>) -> Self {
        Self {
            part: part.into(),
            kind,
            title: None,
            series: Vec::new(),
        }
    }

    /// Add a data series
    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }
}

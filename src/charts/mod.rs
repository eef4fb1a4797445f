//! Chart Rendering Plugins
//!
//! Catalogue of chart renderer types and the registry that records which
//! of them are available. The registry lives in the application container
//! and is filled once during bootstrap.
//!
//! ## Plugin kinds
//!
//! - **Controllers**: one per chart type (bar, line, pie, ...)
//! - **Elements**: drawable primitives used by controllers
//! - **Scales**: axis types
//! - **Plugins**: legend, tooltip, title and friends

mod registry;

pub use registry::{ChartError, ChartRegistry, ChartResult};

use std::fmt;

/// Category a registerable belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegisterableKind {
    Controller,
    Element,
    Scale,
    Plugin,
}

/// A single renderer component that can be registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Registerable {
    // Controllers
    BarController,
    BubbleController,
    DoughnutController,
    LineController,
    PieController,
    PolarAreaController,
    RadarController,
    ScatterController,

    // Elements
    ArcElement,
    LineElement,
    PointElement,
    BarElement,

    // Scales
    CategoryScale,
    LinearScale,
    LogarithmicScale,
    RadialLinearScale,
    TimeScale,
    TimeSeriesScale,

    // Plugins
    Decimation,
    Filler,
    Legend,
    SubTitle,
    Title,
    Tooltip,
}

impl Registerable {
    pub fn kind(&self) -> RegisterableKind {
        use Registerable::*;
        match self {
            BarController | BubbleController | DoughnutController | LineController
            | PieController | PolarAreaController | RadarController | ScatterController => {
                RegisterableKind::Controller
            }
            ArcElement | LineElement | PointElement | BarElement => RegisterableKind::Element,
            CategoryScale | LinearScale | LogarithmicScale | RadialLinearScale | TimeScale
            | TimeSeriesScale => RegisterableKind::Scale,
            Decimation | Filler | Legend | SubTitle | Title | Tooltip => RegisterableKind::Plugin,
        }
    }

    /// Identifier the renderer is registered under
    pub fn id(&self) -> &'static str {
        use Registerable::*;
        match self {
            BarController => "bar",
            BubbleController => "bubble",
            DoughnutController => "doughnut",
            LineController => "line",
            PieController => "pie",
            PolarAreaController => "polarArea",
            RadarController => "radar",
            ScatterController => "scatter",
            ArcElement => "arc",
            LineElement => "line",
            PointElement => "point",
            BarElement => "bar",
            CategoryScale => "category",
            LinearScale => "linear",
            LogarithmicScale => "logarithmic",
            RadialLinearScale => "radialLinear",
            TimeScale => "time",
            TimeSeriesScale => "timeseries",
            Decimation => "decimation",
            Filler => "filler",
            Legend => "legend",
            SubTitle => "subtitle",
            Title => "title",
            Tooltip => "tooltip",
        }
    }
}

impl fmt::Display for Registerable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.kind(), self.id())
    }
}

/// The complete plugin set
pub fn registerables() -> Vec<Registerable> {
    use Registerable::*;
    vec![
        BarController,
        BubbleController,
        DoughnutController,
        LineController,
        PieController,
        PolarAreaController,
        RadarController,
        ScatterController,
        ArcElement,
        LineElement,
        PointElement,
        BarElement,
        CategoryScale,
        LinearScale,
        LogarithmicScale,
        RadialLinearScale,
        TimeScale,
        TimeSeriesScale,
        Decimation,
        Filler,
        Legend,
        SubTitle,
        Title,
        Tooltip,
    ]
}

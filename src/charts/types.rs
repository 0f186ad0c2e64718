//! Chart type, channel role and aggregate enumerations

use serde::{Deserialize, Serialize};

use super::error::ChartError;

/// Chart types with a registered template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Scatter,
    #[default]
    Bar,
    Line,
    Pie,
    Area,
}

impl ChartType {
    /// All chart types in registry order
    pub const ALL: [ChartType; 5] = [
        ChartType::Scatter,
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Area,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Scatter => "scatter",
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Area => "area",
        }
    }

    /// Whether the template plots categories as slices of a whole
    pub fn is_categorical(&self) -> bool {
        matches!(self, ChartType::Pie)
    }

    /// Whether the template orders rows along x
    pub fn is_sequential(&self) -> bool {
        matches!(self, ChartType::Line | ChartType::Area)
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scatter" => Ok(ChartType::Scatter),
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            "area" => Ok(ChartType::Area),
            _ => Err(ChartError::UnsupportedChartType(s.to_string())),
        }
    }
}

/// Visual channel a column can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelRole {
    X,
    Y,
    Color,
    Size,
    Shape,
    Text,
    /// The only plural channel
    Tooltip,
}

impl ChannelRole {
    pub const ALL: [ChannelRole; 7] = [
        ChannelRole::X,
        ChannelRole::Y,
        ChannelRole::Color,
        ChannelRole::Size,
        ChannelRole::Shape,
        ChannelRole::Text,
        ChannelRole::Tooltip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelRole::X => "x",
            ChannelRole::Y => "y",
            ChannelRole::Color => "color",
            ChannelRole::Size => "size",
            ChannelRole::Shape => "shape",
            ChannelRole::Text => "text",
            ChannelRole::Tooltip => "tooltip",
        }
    }
}

impl std::fmt::Display for ChannelRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ChannelRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(ChannelRole::X),
            "y" => Ok(ChannelRole::Y),
            "color" | "colour" => Ok(ChannelRole::Color),
            "size" => Ok(ChannelRole::Size),
            "shape" => Ok(ChannelRole::Shape),
            "text" => Ok(ChannelRole::Text),
            "tooltip" => Ok(ChannelRole::Tooltip),
            _ => Err(format!("Unknown channel role: {}", s)),
        }
    }
}

/// Reduction applied to a channel's field when grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Sum,
    Average,
    Count,
    Min,
    Max,
}

impl Aggregate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Sum => "sum",
            Aggregate::Average => "average",
            Aggregate::Count => "count",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
        }
    }
}

impl std::fmt::Display for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Aggregate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sum" => Ok(Aggregate::Sum),
            "average" | "avg" | "mean" => Ok(Aggregate::Average),
            "count" => Ok(Aggregate::Count),
            "min" => Ok(Aggregate::Min),
            "max" => Ok(Aggregate::Max),
            _ => Err(format!("Unknown aggregate: {}", s)),
        }
    }
}

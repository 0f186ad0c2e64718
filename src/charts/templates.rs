//! Chart template registry
//!
//! A fixed, enumerable catalog. Templates are immutable and looked up by
//! [`ChartType`]; the per-template transform is dispatched by matching on the
//! chart type in [`post_process`](super::postprocess::post_process).

use serde::Serialize;

use super::channels::{ChartChannel, ChartEncoding};
use super::error::ChartResult;
use super::postprocess::post_process;
use super::types::{ChannelRole, ChartType};
use crate::models::{Row, Type};

/// Types recommended for one channel of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub role: ChannelRole,
    pub types: &'static [Type],
}

/// A fixed chart-type definition
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTemplate {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub name: &'static str,
    pub description: &'static str,
    pub supported_channels: &'static [ChannelRole],
    pub recommended_data_types: &'static [Recommendation],
}

const XY_COLOR_TOOLTIP: &[ChannelRole] = &[
    ChannelRole::X,
    ChannelRole::Y,
    ChannelRole::Color,
    ChannelRole::Tooltip,
];

const CATEGORY_RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        role: ChannelRole::X,
        types: &[Type::String],
    },
    Recommendation {
        role: ChannelRole::Y,
        types: &[Type::Number],
    },
    Recommendation {
        role: ChannelRole::Color,
        types: &[Type::String],
    },
];

const SERIES_RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        role: ChannelRole::X,
        types: &[Type::Date, Type::DateTime, Type::Number],
    },
    Recommendation {
        role: ChannelRole::Y,
        types: &[Type::Number],
    },
    Recommendation {
        role: ChannelRole::Color,
        types: &[Type::String],
    },
];

static TEMPLATES: [ChartTemplate; 5] = [
    ChartTemplate {
        chart_type: ChartType::Scatter,
        name: "Scatter Plot",
        description: "Compare two numeric variables",
        supported_channels: &[
            ChannelRole::X,
            ChannelRole::Y,
            ChannelRole::Color,
            ChannelRole::Size,
            ChannelRole::Tooltip,
        ],
        recommended_data_types: &[
            Recommendation {
                role: ChannelRole::X,
                types: &[Type::Number],
            },
            Recommendation {
                role: ChannelRole::Y,
                types: &[Type::Number],
            },
            Recommendation {
                role: ChannelRole::Color,
                types: &[Type::String],
            },
        ],
    },
    ChartTemplate {
        chart_type: ChartType::Bar,
        name: "Bar Chart",
        description: "Compare values across categories",
        supported_channels: XY_COLOR_TOOLTIP,
        recommended_data_types: CATEGORY_RECOMMENDATIONS,
    },
    ChartTemplate {
        chart_type: ChartType::Line,
        name: "Line Chart",
        description: "Show trends over time",
        supported_channels: XY_COLOR_TOOLTIP,
        recommended_data_types: SERIES_RECOMMENDATIONS,
    },
    ChartTemplate {
        chart_type: ChartType::Pie,
        name: "Pie Chart",
        description: "Show proportions of a whole",
        supported_channels: XY_COLOR_TOOLTIP,
        recommended_data_types: CATEGORY_RECOMMENDATIONS,
    },
    ChartTemplate {
        chart_type: ChartType::Area,
        name: "Area Chart",
        description: "Show cumulative values over time",
        supported_channels: XY_COLOR_TOOLTIP,
        recommended_data_types: SERIES_RECOMMENDATIONS,
    },
];

/// All registered templates, in registry order
pub fn all() -> &'static [ChartTemplate] {
    &TEMPLATES
}

/// The template registered for a chart type
pub fn lookup(chart_type: ChartType) -> &'static ChartTemplate {
    match chart_type {
        ChartType::Scatter => &TEMPLATES[0],
        ChartType::Bar => &TEMPLATES[1],
        ChartType::Line => &TEMPLATES[2],
        ChartType::Pie => &TEMPLATES[3],
        ChartType::Area => &TEMPLATES[4],
    }
}

/// Look up a template by name, case-insensitively
pub fn get(name: &str) -> ChartResult<&'static ChartTemplate> {
    name.parse::<ChartType>().map(lookup)
}

impl ChartTemplate {
    /// Whether the template accepts a binding for the role
    pub fn supports(&self, role: ChannelRole) -> bool {
        self.supported_channels.contains(&role)
    }

    /// Recommended types for a role, if the template declares any
    pub fn recommended_types(&self, role: ChannelRole) -> Option<&'static [Type]> {
        self.recommended_data_types
            .iter()
            .find(|r| r.role == role)
            .map(|r| r.types)
    }

    /// Whether a column type suits the role; roles without a hint accept anything
    pub fn recommends(&self, role: ChannelRole, data_type: Type) -> bool {
        self.recommended_types(role)
            .is_none_or(|types| types.contains(&data_type))
    }

    /// Placeholder encoding offered when the template is picked
    pub fn default_encoding(&self) -> ChartEncoding {
        let mut encoding = ChartEncoding {
            x: Some(ChartChannel::new("", Type::String)),
            y: Some(ChartChannel::new("", Type::Number)),
            ..Default::default()
        };
        if self.chart_type == ChartType::Pie {
            encoding.color = Some(ChartChannel::new("", Type::String));
        }
        encoding
    }

    /// Transform rows for rendering with this template
    pub fn post_process(&self, rows: &[Row], encoding: &ChartEncoding) -> Vec<Row> {
        post_process(self.chart_type, rows, encoding)
    }
}

/// A bound column whose type is outside the template's recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationWarning {
    pub role: ChannelRole,
    pub field: String,
    pub actual: Type,
    pub recommended: Vec<Type>,
}

impl std::fmt::Display for RecommendationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let recommended: Vec<&str> = self.recommended.iter().map(|t| t.as_str()).collect();
        write!(
            f,
            "Channel '{}' is bound to '{}' ({}); {} works best with {}",
            self.role,
            self.field,
            self.actual,
            self.role,
            recommended.join(" or ")
        )
    }
}

/// Non-fatal hints for bound channels whose column type is not recommended
pub fn check_recommendations(
    template: &ChartTemplate,
    encoding: &ChartEncoding,
) -> Vec<RecommendationWarning> {
    encoding
        .bound_channels()
        .into_iter()
        .filter(|(role, channel)| !template.recommends(*role, channel.data_type))
        .map(|(role, channel)| RecommendationWarning {
            role,
            field: channel.field.clone(),
            actual: channel.data_type,
            recommended: template
                .recommended_types(role)
                .map(<[Type]>::to_vec)
                .unwrap_or_default(),
        })
        .collect()
}

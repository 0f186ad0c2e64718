//! Chart configuration handed to a renderer

use serde::{Deserialize, Serialize};

use super::channels::ChartEncoding;
use super::templates::{ChartTemplate, lookup};
use super::types::ChartType;
use crate::cardinality::PolicyOptions;
use crate::models::Table;
use crate::pipeline::{PipelineResult, RenderableSeries, compute};

/// Width used by renderers when none is configured
pub const DEFAULT_WIDTH: u32 = 800;
/// Height used by renderers when none is configured
pub const DEFAULT_HEIGHT: u32 = 400;

/// Plot margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20,
            right: 30,
            bottom: 5,
            left: 20,
        }
    }
}

/// The unit handed to a rendering collaborator
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub template: &'static ChartTemplate,
    pub encoding: ChartEncoding,
    pub data: Table,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

impl ChartConfig {
    /// Create a config for a registered chart type
    pub fn new(chart_type: ChartType, encoding: ChartEncoding, data: Table) -> Self {
        Self {
            chart_type,
            template: lookup(chart_type),
            encoding,
            data,
            width: None,
            height: None,
            margin: None,
        }
    }

    /// Set the plot size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the plot margins
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Width, falling back to the renderer default
    pub fn width_or_default(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    /// Height, falling back to the renderer default
    pub fn height_or_default(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    /// Compute the renderable series for this config
    pub fn series(&self, options: &PolicyOptions) -> PipelineResult<RenderableSeries> {
        compute(&self.data, &self.encoding, self.template, options)
    }
}

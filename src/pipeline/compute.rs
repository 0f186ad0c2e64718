//! Series computation

use serde::Serialize;
use tracing::{debug, info, info_span};

use super::error::PipelineResult;
use crate::aggregate::aggregate;
use crate::cardinality::{CardinalityPolicy, PolicyOptions, PolicyOutcome};
use crate::charts::{
    ChartEncoding, ChartTemplate, ChartType, RecommendationWarning, check_recommendations, get,
    lookup,
};
use crate::encoding::EncodingResolver;
use crate::models::{Row, Table};

/// Renderer-ready rows plus fallback, notice and warning metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableSeries {
    /// Chart type the rows were shaped for
    pub chart_type: ChartType,
    pub rows: Vec<Row>,
    /// False while x or y is unbound; rows are then the raw table rows
    pub ready: bool,
    /// Chart type the policy asked to switch to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<ChartType>,
    /// User-facing notices
    pub notices: Vec<String>,
    /// Non-fatal type recommendations
    pub warnings: Vec<RecommendationWarning>,
}

/// Compute the renderable series for a table, encoding and template
///
/// Steps: validate the encoding against the table, aggregate declared
/// channels, post-process for the template, then apply the cardinality
/// policy. With `auto_fallback` a signalled fallback is carried out once.
/// The computation is pure: the same inputs give the same series.
pub fn compute(
    table: &Table,
    encoding: &ChartEncoding,
    template: &ChartTemplate,
    options: &PolicyOptions,
) -> PipelineResult<RenderableSeries> {
    let _span = info_span!(
        "compute_series",
        chart_type = %template.chart_type,
        rows = table.row_count(),
        columns = table.column_count()
    )
    .entered();

    EncodingResolver::new().validate_encoding(table, encoding)?;
    let warnings = check_recommendations(template, encoding);

    if !encoding.is_complete() {
        debug!("x or y unbound, series not ready");
        return Ok(RenderableSeries {
            chart_type: template.chart_type,
            rows: table.rows().to_vec(),
            ready: false,
            fallback: None,
            notices: Vec::new(),
            warnings,
        });
    }

    let policy = CardinalityPolicy::new(options.clone());
    let grouped = aggregate(table.rows(), encoding);
    let outcome = shape(template, &grouped.rows, &grouped.encoding, &policy);

    let series = match outcome.fallback {
        Some(fallback) if options.auto_fallback && fallback != template.chart_type => {
            let fallback_template = lookup(fallback);
            let recomputed = shape(fallback_template, &grouped.rows, &grouped.encoding, &policy);
            info!(from = %template.chart_type, to = %fallback, "Switched to fallback chart");
            RenderableSeries {
                chart_type: fallback,
                rows: recomputed.rows,
                ready: true,
                fallback: Some(fallback),
                notices: outcome.notice.into_iter().collect(),
                warnings: check_recommendations(fallback_template, encoding),
            }
        }
        fallback => RenderableSeries {
            chart_type: template.chart_type,
            rows: outcome.rows,
            ready: true,
            fallback,
            notices: outcome.notice.into_iter().collect(),
            warnings,
        },
    };

    debug!(
        chart_type = %series.chart_type,
        rows = series.rows.len(),
        notices = series.notices.len(),
        "Computed series"
    );
    Ok(series)
}

/// Compute a series for a chart type given by name
pub fn compute_named(
    table: &Table,
    encoding: &ChartEncoding,
    chart_type: &str,
    options: &PolicyOptions,
) -> PipelineResult<RenderableSeries> {
    let template = get(chart_type)?;
    compute(table, encoding, template, options)
}

fn shape(
    template: &ChartTemplate,
    rows: &[Row],
    encoding: &ChartEncoding,
    policy: &CardinalityPolicy,
) -> PolicyOutcome {
    let processed = template.post_process(rows, encoding);
    policy.apply(template.chart_type, &processed)
}

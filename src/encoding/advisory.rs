//! Validation of advisory chart proposals
//!
//! An external advisory service may propose a chart type and an encoding as
//! loosely typed strings. A proposal is accepted only when every channel
//! resolves against the table; otherwise every problem is reported and the
//! whole proposal is rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::error::EncodingError;
use super::resolver::{EncodingResolver, invalid_channel};
use crate::charts::{
    Aggregate, ChannelAssignment, ChannelRole, ChartChannel, ChartEncoding, ChartTemplate,
    ChartType, RecommendationWarning, check_recommendations, lookup,
};
use crate::models::Table;

/// A channel as proposed: a bare field name, a field with an aggregate, or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProposedChannel {
    Field(String),
    Many(Vec<ProposedChannel>),
    Detailed {
        field: String,
        #[serde(default)]
        aggregate: Option<String>,
    },
}

impl ProposedChannel {
    /// Flatten into `(field, aggregate)` pairs
    fn entries(&self) -> Vec<(&str, Option<&str>)> {
        match self {
            ProposedChannel::Field(field) => vec![(field.as_str(), None)],
            ProposedChannel::Detailed { field, aggregate } => {
                vec![(field.as_str(), aggregate.as_deref())]
            }
            ProposedChannel::Many(items) => items.iter().flat_map(|i| i.entries()).collect(),
        }
    }
}

/// A loosely typed `{chartType, encoding}` suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryProposal {
    pub chart_type: String,
    #[serde(default)]
    pub encoding: BTreeMap<String, ProposedChannel>,
}

impl AdvisoryProposal {
    /// Parse a proposal from JSON text
    pub fn from_json(json: &str) -> Result<Self, AdvisoryError> {
        serde_json::from_str(json).map_err(|e| AdvisoryError::Malformed(e.to_string()))
    }
}

/// A proposal that passed validation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedProposal {
    pub chart_type: ChartType,
    #[serde(skip)]
    pub template: &'static ChartTemplate,
    pub encoding: ChartEncoding,
    /// Non-fatal type hints for the accepted bindings
    pub warnings: Vec<RecommendationWarning>,
}

/// Reasons a proposal is not accepted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisoryError {
    /// The proposal is not valid JSON of the expected shape
    #[error("Malformed proposal: {0}")]
    Malformed(String),

    /// The proposed chart type has no registered template
    #[error("Unsupported chart type: '{0}'")]
    UnsupportedChartType(String),

    /// One or more channels did not resolve
    #[error("Proposal rejected: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Rejected(Vec<EncodingError>),
}

impl EncodingResolver {
    /// Validate an advisory proposal against a table
    pub fn validate_proposal(
        &self,
        table: &Table,
        proposal: &AdvisoryProposal,
    ) -> Result<AcceptedProposal, AdvisoryError> {
        let chart_type: ChartType = proposal
            .chart_type
            .parse()
            .map_err(|_| AdvisoryError::UnsupportedChartType(proposal.chart_type.clone()))?;
        let template = lookup(chart_type);

        let mut errors = Vec::new();
        let mut encoding = ChartEncoding::new();

        for (role_name, proposed) in &proposal.encoding {
            let role: ChannelRole = match role_name.parse() {
                Ok(role) => role,
                Err(_) => {
                    errors.push(EncodingError::UnknownRole(role_name.clone()));
                    continue;
                }
            };
            if !template.supports(role) {
                errors.push(EncodingError::UnsupportedChannel { role, chart_type });
                continue;
            }

            let entries = proposed.entries();
            if role != ChannelRole::Tooltip && entries.len() != 1 {
                errors.push(EncodingError::MultipleFields { role });
                continue;
            }

            let mut channels = Vec::with_capacity(entries.len());
            for (field, aggregate) in entries {
                match self.resolve_entry(table, field, aggregate) {
                    Ok(channel) => channels.push(channel),
                    Err(err) => errors.push(err),
                }
            }

            let assignment = match role {
                ChannelRole::Tooltip => ChannelAssignment::Tooltip(channels),
                role => match channels.pop() {
                    Some(channel) => ChannelAssignment::Single { role, channel },
                    None => continue,
                },
            };
            encoding = encoding.apply(assignment);
        }

        if !errors.is_empty() {
            warn!(
                chart_type = %chart_type,
                problems = errors.len(),
                "Rejected advisory proposal"
            );
            return Err(AdvisoryError::Rejected(errors));
        }

        let warnings = check_recommendations(template, &encoding);
        info!(
            chart_type = %chart_type,
            channels = encoding.bound_channels().len(),
            warnings = warnings.len(),
            "Accepted advisory proposal"
        );
        Ok(AcceptedProposal {
            chart_type,
            template,
            encoding,
            warnings,
        })
    }

    fn resolve_entry(
        &self,
        table: &Table,
        field: &str,
        aggregate: Option<&str>,
    ) -> Result<ChartChannel, EncodingError> {
        let aggregate = aggregate
            .map(|name| {
                name.parse::<Aggregate>()
                    .map_err(|_| EncodingError::UnknownAggregate(name.to_string()))
            })
            .transpose()?;
        let column = self
            .find_column(table, field)
            .ok_or_else(|| invalid_channel(table, field))?;
        Ok(ChartChannel::new(column.name.clone(), column.data_type).with_aggregate(aggregate))
    }
}

/// Validate a proposal with the default resolver
pub fn validate_proposal(
    table: &Table,
    proposal: &AdvisoryProposal,
) -> Result<AcceptedProposal, AdvisoryError> {
    EncodingResolver::new().validate_proposal(table, proposal)
}

/// Pick a chart type from a free-text suggestion by keyword
///
/// Keywords are checked in the order pie, scatter, line, area; anything else
/// is a bar chart.
pub fn chart_type_from_suggestion(text: &str) -> ChartType {
    let text = text.to_lowercase();
    [
        ("pie", ChartType::Pie),
        ("scatter", ChartType::Scatter),
        ("line", ChartType::Line),
        ("area", ChartType::Area),
    ]
    .into_iter()
    .find(|(keyword, _)| text.contains(keyword))
    .map(|(_, chart_type)| chart_type)
    .unwrap_or(ChartType::Bar)
}

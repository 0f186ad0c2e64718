//! Encoding resolution against a table

use tracing::debug;

use super::config::ResolverConfig;
use super::error::{EncodingError, EncodingResult};
use crate::charts::{ChannelAssignment, ChannelRole, ChartChannel, ChartEncoding, ChartTemplate};
use crate::models::{Column, Table};

/// Validates and materializes channel bindings against a table's columns
///
/// The resolver never invents a column: a field that does not name a column
/// is rejected, and the caller keeps its previous encoding.
#[derive(Debug, Clone, Default)]
pub struct EncodingResolver {
    config: ResolverConfig,
}

impl EncodingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Find the column a field name refers to
    pub fn find_column<'t>(&self, table: &'t Table, field: &str) -> Option<&'t Column> {
        if let Some(column) = table.column(field) {
            return Some(column);
        }
        if !self.config.case_insensitive {
            return None;
        }
        let mut matches = table
            .columns()
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(field));
        match (matches.next(), matches.next()) {
            (Some(column), None) => Some(column),
            _ => None,
        }
    }

    /// Resolve a field for a role into a channel assignment
    ///
    /// The channel carries the column's real name and inferred type. Tooltip
    /// always resolves to a one-element sequence.
    pub fn resolve(
        &self,
        table: &Table,
        role: ChannelRole,
        field: &str,
    ) -> EncodingResult<ChannelAssignment> {
        let column = self
            .find_column(table, field)
            .ok_or_else(|| invalid_channel(table, field))?;
        let channel = ChartChannel::new(column.name.clone(), column.data_type);
        debug!(role = %role, field = %column.name, data_type = %column.data_type, "Resolved channel");

        Ok(match role {
            ChannelRole::Tooltip => ChannelAssignment::Tooltip(vec![channel]),
            role => ChannelAssignment::Single { role, channel },
        })
    }

    /// Bind a field to a role of a template, returning the new encoding
    ///
    /// The input encoding is never modified; on error it is still the
    /// current state.
    pub fn assign(
        &self,
        table: &Table,
        template: &ChartTemplate,
        encoding: &ChartEncoding,
        role: ChannelRole,
        field: &str,
    ) -> EncodingResult<ChartEncoding> {
        if !template.supports(role) {
            return Err(EncodingError::UnsupportedChannel {
                role,
                chart_type: template.chart_type,
            });
        }
        let assignment = self.resolve(table, role, field)?;
        Ok(encoding.apply(assignment))
    }

    /// Check that every bound field of an encoding names a column
    pub fn validate_encoding(&self, table: &Table, encoding: &ChartEncoding) -> EncodingResult<()> {
        for (_, channel) in encoding.bound_channels() {
            if table.column(&channel.field).is_none() {
                return Err(invalid_channel(table, &channel.field));
            }
        }
        Ok(())
    }
}

pub(super) fn invalid_channel(table: &Table, field: &str) -> EncodingError {
    EncodingError::InvalidChannel {
        field: field.to_string(),
        available: table.column_names().into_iter().map(String::from).collect(),
    }
}

/// Resolve a field for a role with the default resolver
pub fn resolve(table: &Table, role: ChannelRole, field: &str) -> EncodingResult<ChannelAssignment> {
    EncodingResolver::new().resolve(table, role, field)
}

/// Check an encoding against a table with the default resolver
pub fn validate_encoding(table: &Table, encoding: &ChartEncoding) -> EncodingResult<()> {
    EncodingResolver::new().validate_encoding(table, encoding)
}

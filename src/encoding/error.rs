//! Error types for encoding resolution

use thiserror::Error;

use crate::charts::{ChannelRole, ChartType};

/// Errors that can occur while resolving an encoding against a table
///
/// All of them are recoverable: the offending assignment is dropped and the
/// previous encoding stays in effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The field does not name a column of the table
    #[error("Invalid channel: field '{field}' is not a column of the table (available: {})", .available.join(", "))]
    InvalidChannel {
        field: String,
        available: Vec<String>,
    },

    /// The template does not accept bindings for the role
    #[error("Channel '{role}' is not supported by the {chart_type} template")]
    UnsupportedChannel {
        role: ChannelRole,
        chart_type: ChartType,
    },

    /// The role name is not a known channel
    #[error("Unknown channel role: '{0}'")]
    UnknownRole(String),

    /// Several fields were given for a singular role
    #[error("Channel '{role}' takes a single field")]
    MultipleFields { role: ChannelRole },

    /// The aggregate name is not a known reduction
    #[error("Unknown aggregate: '{0}'")]
    UnknownAggregate(String),
}

/// Result type for encoding operations
pub type EncodingResult<T> = Result<T, EncodingError>;

impl EncodingError {
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// The offending field name, if the error is about a field
    pub fn field(&self) -> Option<&str> {
        match self {
            EncodingError::InvalidChannel { field, .. } => Some(field),
            _ => None,
        }
    }
}

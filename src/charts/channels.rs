//! Channels and encodings

use serde::{Deserialize, Serialize};

use super::types::{Aggregate, ChannelRole};
use crate::models::Type;

/// A column bound to a visual channel
///
/// Plain value object: the field is only checked against a table when the
/// encoding is resolved or computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartChannel {
    /// Name of the bound column
    pub field: String,
    /// Type of the bound column
    #[serde(rename = "type")]
    pub data_type: Type,
    /// Optional reduction applied when grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
}

impl ChartChannel {
    pub fn new(field: impl Into<String>, data_type: Type) -> Self {
        Self {
            field: field.into(),
            data_type,
            aggregate: None,
        }
    }

    /// Set the aggregate
    pub fn with_aggregate(mut self, aggregate: Option<Aggregate>) -> Self {
        self.aggregate = aggregate;
        self
    }

    /// An empty field is a placeholder, not a binding
    pub fn is_bound(&self) -> bool {
        !self.field.is_empty()
    }
}

/// The result of resolving one field for one role
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelAssignment {
    /// A singular channel (x, y, color, size, shape, text)
    Single {
        role: ChannelRole,
        channel: ChartChannel,
    },
    /// The whole tooltip sequence
    Tooltip(Vec<ChartChannel>),
}

impl ChannelAssignment {
    pub fn role(&self) -> ChannelRole {
        match self {
            ChannelAssignment::Single { role, .. } => *role,
            ChannelAssignment::Tooltip(_) => ChannelRole::Tooltip,
        }
    }
}

/// Mapping from channel roles to columns for one chart instance
///
/// Encodings are replaced, never edited in place: every change goes through a
/// method that returns a new encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEncoding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<ChartChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<ChartChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ChartChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ChartChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ChartChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<ChartChannel>,
    #[serde(default)]
    pub tooltip: Vec<ChartChannel>,
}

impl ChartEncoding {
    pub fn new() -> Self {
        Self::default()
    }

    /// The channel for a singular role, bound or placeholder
    ///
    /// Tooltip is plural; use the `tooltip` field for it.
    pub fn channel(&self, role: ChannelRole) -> Option<&ChartChannel> {
        match role {
            ChannelRole::X => self.x.as_ref(),
            ChannelRole::Y => self.y.as_ref(),
            ChannelRole::Color => self.color.as_ref(),
            ChannelRole::Size => self.size.as_ref(),
            ChannelRole::Shape => self.shape.as_ref(),
            ChannelRole::Text => self.text.as_ref(),
            ChannelRole::Tooltip => None,
        }
    }

    /// The channel for a singular role, only if it names a field
    pub fn bound(&self, role: ChannelRole) -> Option<&ChartChannel> {
        self.channel(role).filter(|c| c.is_bound())
    }

    fn slot(&mut self, role: ChannelRole) -> Option<&mut Option<ChartChannel>> {
        match role {
            ChannelRole::X => Some(&mut self.x),
            ChannelRole::Y => Some(&mut self.y),
            ChannelRole::Color => Some(&mut self.color),
            ChannelRole::Size => Some(&mut self.size),
            ChannelRole::Shape => Some(&mut self.shape),
            ChannelRole::Text => Some(&mut self.text),
            ChannelRole::Tooltip => None,
        }
    }

    /// Both x and y name a field
    pub fn is_complete(&self) -> bool {
        self.bound(ChannelRole::X).is_some() && self.bound(ChannelRole::Y).is_some()
    }

    /// Every bound channel with its role, tooltip entries last
    pub fn bound_channels(&self) -> Vec<(ChannelRole, &ChartChannel)> {
        let mut channels: Vec<(ChannelRole, &ChartChannel)> = ChannelRole::ALL
            .iter()
            .filter_map(|role| self.bound(*role).map(|c| (*role, c)))
            .collect();
        channels.extend(
            self.tooltip
                .iter()
                .filter(|c| c.is_bound())
                .map(|c| (ChannelRole::Tooltip, c)),
        );
        channels
    }

    /// Whether any singular channel declares an aggregate
    pub fn has_aggregates(&self) -> bool {
        ChannelRole::ALL
            .iter()
            .filter_map(|role| self.bound(*role))
            .any(|c| c.aggregate.is_some())
    }

    /// A new encoding with the assignment applied
    ///
    /// A tooltip assignment replaces the whole tooltip sequence.
    pub fn apply(&self, assignment: ChannelAssignment) -> ChartEncoding {
        let mut next = self.clone();
        match assignment {
            ChannelAssignment::Single { role, channel } => {
                if let Some(slot) = next.slot(role) {
                    *slot = Some(channel);
                }
            }
            ChannelAssignment::Tooltip(channels) => next.tooltip = channels,
        }
        next
    }

    /// A new encoding with the role cleared
    pub fn without(&self, role: ChannelRole) -> ChartEncoding {
        let mut next = self.clone();
        match next.slot(role) {
            Some(slot) => *slot = None,
            None => next.tooltip.clear(),
        }
        next
    }

    /// A new encoding with the aggregate set on a role
    ///
    /// For tooltip the aggregate is set on every tooltip channel. Unset roles
    /// are left untouched.
    pub fn with_aggregate(&self, role: ChannelRole, aggregate: Option<Aggregate>) -> ChartEncoding {
        let mut next = self.clone();
        match next.slot(role) {
            Some(Some(channel)) => channel.aggregate = aggregate,
            Some(None) => {}
            None => {
                for channel in &mut next.tooltip {
                    channel.aggregate = aggregate;
                }
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoding() -> ChartEncoding {
        ChartEncoding::new()
            .apply(ChannelAssignment::Single {
                role: ChannelRole::X,
                channel: ChartChannel::new("region", Type::String),
            })
            .apply(ChannelAssignment::Tooltip(vec![
                ChartChannel::new("a", Type::Number),
                ChartChannel::new("b", Type::Number),
            ]))
    }

    #[test]
    fn test_apply_returns_new_encoding() {
        let base = ChartEncoding::new();
        let next = base.apply(ChannelAssignment::Single {
            role: ChannelRole::Y,
            channel: ChartChannel::new("sales", Type::Number),
        });
        assert!(base.y.is_none());
        assert_eq!(next.y.as_ref().unwrap().field, "sales");
    }

    #[test]
    fn test_tooltip_replaces_sequence() {
        let next = encoding().apply(ChannelAssignment::Tooltip(vec![ChartChannel::new(
            "c",
            Type::String,
        )]));
        assert_eq!(next.tooltip.len(), 1);
        assert_eq!(next.tooltip[0].field, "c");
    }

    #[test]
    fn test_empty_field_is_unbound() {
        let enc = ChartEncoding {
            x: Some(ChartChannel::new("", Type::String)),
            y: Some(ChartChannel::new("v", Type::Number)),
            ..Default::default()
        };
        assert!(enc.bound(ChannelRole::X).is_none());
        assert!(!enc.is_complete());
        assert_eq!(enc.bound_channels().len(), 1);
    }

    #[test]
    fn test_with_aggregate_on_tooltip_sets_all() {
        let next = encoding().with_aggregate(ChannelRole::Tooltip, Some(Aggregate::Sum));
        assert!(next.tooltip.iter().all(|c| c.aggregate == Some(Aggregate::Sum)));
        assert!(!next.has_aggregates());

        let next = next.with_aggregate(ChannelRole::X, Some(Aggregate::Count));
        assert!(next.has_aggregates());
        let next = next.with_aggregate(ChannelRole::Size, Some(Aggregate::Max));
        assert!(next.size.is_none());
    }

    #[test]
    fn test_without() {
        let next = encoding().without(ChannelRole::Tooltip).without(ChannelRole::X);
        assert!(next.tooltip.is_empty());
        assert!(next.x.is_none());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(encoding()).unwrap();
        assert_eq!(json["x"]["type"], "string");
        assert!(json.get("y").is_none());
        assert!(json["x"].get("aggregate").is_none());

        let parsed: ChartEncoding =
            serde_json::from_str(r#"{"y": {"field": "v", "type": "number", "aggregate": "sum"}}"#)
                .unwrap();
        assert_eq!(parsed.y.unwrap().aggregate, Some(Aggregate::Sum));
    }
}

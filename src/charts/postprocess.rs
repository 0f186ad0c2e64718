//! Per-template row transforms
//!
//! Every transform is pure and row-level: rows keep all original fields and
//! gain the keys the template promises to the renderer (`x`/`y`, or
//! `name`/`value` for pie).

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde_json::Value;

use super::channels::ChartEncoding;
use super::types::{ChannelRole, ChartType};
use crate::inference::{parse_number, parse_temporal};
use crate::models::{Row, Type};

/// Transform rows for rendering with the given template
///
/// If x or y is unbound the rows are returned unchanged; callers are expected
/// to hold off rendering until both are set.
pub fn post_process(chart_type: ChartType, rows: &[Row], encoding: &ChartEncoding) -> Vec<Row> {
    let (Some(x), Some(y)) = (
        encoding.bound(ChannelRole::X),
        encoding.bound(ChannelRole::Y),
    ) else {
        return rows.to_vec();
    };

    match chart_type {
        ChartType::Scatter | ChartType::Bar => project(rows, &x.field, &y.field, "x", "y"),
        ChartType::Line | ChartType::Area => {
            let mut projected = project(rows, &x.field, &y.field, "x", "y");
            sort_by_x(&mut projected, x.data_type);
            projected
        }
        ChartType::Pie => project(rows, &x.field, &y.field, "name", "value"),
    }
}

fn project(rows: &[Row], x_field: &str, y_field: &str, x_key: &str, y_key: &str) -> Vec<Row> {
    rows.iter()
        .map(|row| {
            let x = row.get(x_field).cloned().unwrap_or(Value::Null);
            let y = row.get(y_field).cloned().unwrap_or(Value::Null);
            let mut out = row.clone();
            out.insert(x_key.to_string(), x);
            out.insert(y_key.to_string(), y);
            out
        })
        .collect()
}

/// Stable ascending sort on the derived `x` value
fn sort_by_x(rows: &mut [Row], x_type: Type) {
    rows.sort_by_cached_key(|row| SortKey::from_value(row.get("x").unwrap_or(&Value::Null), x_type));
}

/// Total ordering key for a raw cell
///
/// Kinds order as Number < Time < Text < Null.
#[derive(Debug, Clone)]
pub enum SortKey {
    Number(f64),
    Time(NaiveDateTime),
    Text(String),
    Null,
}

impl SortKey {
    /// Build the key for a value bound to a channel of the given type
    ///
    /// Temporal channels try chronological parsing before numeric parsing.
    pub fn from_value(value: &Value, data_type: Type) -> Self {
        match value {
            Value::Null => SortKey::Null,
            Value::Bool(b) => SortKey::Number(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => n.as_f64().map(SortKey::Number).unwrap_or(SortKey::Null),
            Value::String(s) => {
                let temporal = || parse_temporal(s).map(SortKey::Time);
                let numeric = || parse_number(s).map(SortKey::Number);
                let parsed = if data_type.is_temporal() {
                    temporal().or_else(numeric)
                } else {
                    numeric().or_else(temporal)
                };
                parsed.unwrap_or_else(|| SortKey::Text(s.clone()))
            }
            other => SortKey::Text(other.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Time(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Null => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Time(a), SortKey::Time(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

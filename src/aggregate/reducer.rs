//! Grouping and reduction of rows

use std::collections::HashMap;

use serde_json::{Value, json};
use tracing::debug;

use crate::charts::{Aggregate, ChannelRole, ChartChannel, ChartEncoding};
use crate::inference::parse_number;
use crate::models::{Row, Type};

/// Singular roles taking part in grouping, in key order
const GROUP_ROLES: [ChannelRole; 6] = [
    ChannelRole::X,
    ChannelRole::Y,
    ChannelRole::Color,
    ChannelRole::Size,
    ChannelRole::Shape,
    ChannelRole::Text,
];

/// Grouped rows and the encoding that reads them
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub rows: Vec<Row>,
    /// Aggregated channels point at their reduced field and are typed as numbers
    pub encoding: ChartEncoding,
}

/// One reduced output field
#[derive(Debug)]
struct Reduction<'a> {
    field: &'a str,
    aggregate: Aggregate,
    output: String,
}

/// Group rows by the unaggregated channels and reduce the aggregated ones
///
/// Every bound channel without an aggregate (tooltip entries included) is
/// part of the group key, so no bound field is lost. A reduced value keeps
/// its field name unless that field is also a key or is reduced with another
/// aggregate; it is then written to `{field}_{aggregate}` and the returned
/// encoding points at it. Output rows carry only key and reduced fields, in
/// column order, and groups appear in order of first appearance. Without any
/// aggregate rows and encoding are returned unchanged.
pub fn aggregate(rows: &[Row], encoding: &ChartEncoding) -> Aggregation {
    let channels: Vec<&ChartChannel> = GROUP_ROLES
        .iter()
        .filter_map(|role| encoding.bound(*role))
        .chain(encoding.tooltip.iter().filter(|c| c.is_bound()))
        .collect();

    let mut key_fields: Vec<&str> = Vec::new();
    for channel in channels.iter().filter(|c| c.aggregate.is_none()) {
        if !key_fields.contains(&channel.field.as_str()) {
            key_fields.push(&channel.field);
        }
    }

    let column_order: Vec<&String> = rows.first().map(|r| r.keys().collect()).unwrap_or_default();

    let mut reductions: Vec<Reduction> = Vec::new();
    for channel in &channels {
        let Some(aggregate) = channel.aggregate else {
            continue;
        };
        let field = channel.field.as_str();
        if reductions
            .iter()
            .any(|r| r.field == field && r.aggregate == aggregate)
        {
            continue;
        }
        let shared = key_fields.contains(&field)
            || channels
                .iter()
                .any(|c| c.field == field && c.aggregate.is_some_and(|a| a != aggregate));
        let output = if shared {
            free_name(field, aggregate, &column_order, &reductions)
        } else {
            field.to_string()
        };
        reductions.push(Reduction {
            field,
            aggregate,
            output,
        });
    }

    if reductions.is_empty() {
        return Aggregation {
            rows: rows.to_vec(),
            encoding: encoding.clone(),
        };
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Row>> = Vec::new();
    for row in rows {
        let key: Vec<Value> = key_fields
            .iter()
            .map(|field| row.get(*field).cloned().unwrap_or(Value::Null))
            .collect();
        let slot = *index
            .entry(Value::Array(key).to_string())
            .or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
        groups[slot].push(row);
    }

    let output: Vec<Row> = groups
        .iter()
        .map(|members| {
            let mut out = Row::new();
            for name in &column_order {
                if key_fields.contains(&name.as_str()) {
                    let value = members[0].get(name.as_str()).cloned().unwrap_or(Value::Null);
                    out.insert((*name).clone(), value);
                }
                for reduction in reductions.iter().filter(|r| r.field == name.as_str()) {
                    out.insert(
                        reduction.output.clone(),
                        reduce(members, reduction.field, reduction.aggregate),
                    );
                }
            }
            out
        })
        .collect();

    debug!(
        rows = rows.len(),
        groups = output.len(),
        keys = ?key_fields,
        reduced = reductions.len(),
        "Aggregated rows"
    );

    Aggregation {
        rows: output,
        encoding: point_at_reductions(encoding, &reductions),
    }
}

/// Group and reduce rows, returning only the rows
pub fn aggregate_rows(rows: &[Row], encoding: &ChartEncoding) -> Vec<Row> {
    aggregate(rows, encoding).rows
}

/// `{field}_{aggregate}`, suffixed further until it names no column or other output
fn free_name(
    field: &str,
    aggregate: Aggregate,
    columns: &[&String],
    reductions: &[Reduction],
) -> String {
    let base = format!("{field}_{}", aggregate.as_str());
    let taken = |name: &str| {
        columns.iter().any(|c| c.as_str() == name) || reductions.iter().any(|r| r.output == name)
    };
    let mut candidate = base.clone();
    let mut suffix = 0;
    while taken(&candidate) {
        suffix += 1;
        candidate = format!("{base}_{suffix}");
    }
    candidate
}

fn point_at_reductions(encoding: &ChartEncoding, reductions: &[Reduction]) -> ChartEncoding {
    let rewrite = |channel: &ChartChannel| -> ChartChannel {
        let reduction = channel.aggregate.and_then(|aggregate| {
            reductions
                .iter()
                .find(|r| r.field == channel.field && r.aggregate == aggregate)
        });
        match reduction {
            Some(reduction) => ChartChannel {
                field: reduction.output.clone(),
                data_type: Type::Number,
                aggregate: channel.aggregate,
            },
            None => channel.clone(),
        }
    };
    ChartEncoding {
        x: encoding.x.as_ref().map(rewrite),
        y: encoding.y.as_ref().map(rewrite),
        color: encoding.color.as_ref().map(rewrite),
        size: encoding.size.as_ref().map(rewrite),
        shape: encoding.shape.as_ref().map(rewrite),
        text: encoding.text.as_ref().map(rewrite),
        tooltip: encoding.tooltip.iter().map(rewrite).collect(),
    }
}

/// Reduce one field over the rows of a group
fn reduce(rows: &[&Row], field: &str, aggregate: Aggregate) -> Value {
    if aggregate == Aggregate::Count {
        let count = rows
            .iter()
            .filter(|row| row.get(field).is_some_and(|v| !v.is_null()))
            .count();
        return json!(count);
    }

    let numbers: Vec<f64> = rows
        .iter()
        .filter_map(|row| match row.get(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_number(s),
            _ => None,
        })
        .collect();
    if numbers.is_empty() {
        return Value::Null;
    }

    let result = match aggregate {
        Aggregate::Sum => numbers.iter().sum::<f64>(),
        Aggregate::Average => numbers.iter().sum::<f64>() / numbers.len() as f64,
        Aggregate::Min => numbers.iter().copied().fold(f64::INFINITY, f64::min),
        Aggregate::Max => numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Aggregate::Count => numbers.len() as f64,
    };
    json!(result)
}

//! Categorical chart policy
//!
//! Applied to pie rows after post-processing:
//! 1. Sort descending by `value`
//! 2. More than `fallback_threshold` distinct names: signal a fallback chart
//!    type and return the sorted rows unchanged
//! 3. More than `bucket_threshold` distinct names: keep the first
//!    `bucket_threshold - 1` entries and sum the rest into one bucket entry
//! 4. Truncate to `top_n` entries when set

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::config::PolicyOptions;
use crate::charts::ChartType;
use crate::inference::{coerce_to_string, parse_number};
use crate::models::Row;

/// Result of applying the policy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyOutcome {
    pub rows: Vec<Row>,
    /// Chart type the caller should switch to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<ChartType>,
    /// User-facing explanation of the fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Whether the tail was bucketed into one entry
    pub bucketed: bool,
}

impl PolicyOutcome {
    fn unchanged(rows: Vec<Row>) -> Self {
        Self {
            rows,
            fallback: None,
            notice: None,
            bucketed: false,
        }
    }
}

/// Stateless sort/bucket/fallback policy for categorical charts
#[derive(Debug, Clone, Default)]
pub struct CardinalityPolicy {
    options: PolicyOptions,
}

impl CardinalityPolicy {
    pub fn new(options: PolicyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PolicyOptions {
        &self.options
    }

    /// Apply the policy to post-processed rows
    ///
    /// Only pie rows are affected; other chart types pass through unchanged.
    /// Applying the policy to its own output gives the same output.
    pub fn apply(&self, chart_type: ChartType, rows: &[Row]) -> PolicyOutcome {
        if !chart_type.is_categorical() {
            return PolicyOutcome::unchanged(rows.to_vec());
        }

        let mut sorted = rows.to_vec();
        self.sort_descending(&mut sorted);

        let distinct = distinct_names(&sorted);
        if distinct > self.options.fallback_threshold {
            let fallback = self.options.fallback_chart;
            warn!(
                categories = distinct,
                threshold = self.options.fallback_threshold,
                fallback = %fallback,
                "Too many categories for a {} chart",
                chart_type
            );
            return PolicyOutcome {
                rows: sorted,
                fallback: Some(fallback),
                notice: Some(format!(
                    "Too many categories for a {chart_type} chart ({distinct}); switched to a {fallback} chart."
                )),
                bucketed: false,
            };
        }

        let mut bucketed = false;
        if distinct > self.options.bucket_threshold {
            sorted = self.bucket_tail(sorted);
            bucketed = true;
            debug!(
                categories = distinct,
                kept = sorted.len(),
                label = %self.options.other_label,
                "Bucketed category tail"
            );
        }

        if self.options.top_n > 0 {
            sorted.truncate(self.options.top_n);
        }

        PolicyOutcome {
            rows: sorted,
            fallback: None,
            notice: None,
            bucketed,
        }
    }

    /// Stable descending sort on `value`; non-numeric values and the bucket
    /// entry go last
    fn sort_descending(&self, rows: &mut [Row]) {
        rows.sort_by(|a, b| {
            let a_other = self.is_bucket(a);
            let b_other = self.is_bucket(b);
            a_other.cmp(&b_other).then_with(|| {
                match (numeric_value(a), numeric_value(b)) {
                    (Some(a), Some(b)) => b.total_cmp(&a),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            })
        });
    }

    fn is_bucket(&self, row: &Row) -> bool {
        row.get("name").and_then(Value::as_str) == Some(self.options.other_label.as_str())
    }

    fn bucket_tail(&self, mut rows: Vec<Row>) -> Vec<Row> {
        let keep = self.options.bucket_threshold.saturating_sub(1).min(rows.len());
        let tail = rows.split_off(keep);
        let sum: f64 = tail.iter().filter_map(numeric_value).sum();

        let mut bucket = Row::new();
        bucket.insert("name".to_string(), json!(self.options.other_label));
        bucket.insert("value".to_string(), json!(sum));
        rows.push(bucket);
        rows
    }
}

/// Apply the policy with the given options
pub fn apply_policy(chart_type: ChartType, rows: &[Row], options: &PolicyOptions) -> PolicyOutcome {
    CardinalityPolicy::new(options.clone()).apply(chart_type, rows)
}

fn numeric_value(row: &Row) -> Option<f64> {
    match row.get("value")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn distinct_names(rows: &[Row]) -> usize {
    rows.iter()
        .map(|row| coerce_to_string(row.get("name").unwrap_or(&Value::Null)))
        .collect::<HashSet<_>>()
        .len()
}

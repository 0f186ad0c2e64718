//! Aggregation, cardinality policy and series computation tests

use serde_json::{Value, json};
use vizspec_sdk::aggregate::aggregate_rows;
use vizspec_sdk::cardinality::{CardinalityPolicy, PolicyOptions, apply_policy};
use vizspec_sdk::charts::{
    Aggregate, ChannelRole, ChartChannel, ChartConfig, ChartEncoding, ChartType, lookup,
    post_process,
};
use vizspec_sdk::import::build_from_delimited_text;
use vizspec_sdk::models::{Row, Table, Type};
use vizspec_sdk::pipeline::{PipelineError, compute, compute_named};

/// Table with `count` categories whose sales are 1..=count
fn categories(count: usize) -> Table {
    let mut text = String::from("category,sales\n");
    for i in 1..=count {
        text.push_str(&format!("cat{i},{i}\n"));
    }
    build_from_delimited_text(&text).unwrap()
}

fn pie_encoding() -> ChartEncoding {
    ChartEncoding {
        x: Some(ChartChannel::new("category", Type::String)),
        y: Some(ChartChannel::new("sales", Type::Number)),
        ..Default::default()
    }
}

fn pie_rows(count: usize) -> Vec<Row> {
    post_process(ChartType::Pie, categories(count).rows(), &pie_encoding())
}

fn value_of(row: &Row) -> f64 {
    match &row["value"] {
        Value::Number(n) => n.as_f64().unwrap(),
        Value::String(s) => s.parse().unwrap(),
        other => panic!("unexpected value {other}"),
    }
}

mod policy_tests {
    use super::*;

    #[test]
    fn test_twenty_five_categories_fall_back_to_bar() {
        let outcome = apply_policy(ChartType::Pie, &pie_rows(25), &PolicyOptions::default());
        assert_eq!(outcome.fallback, Some(ChartType::Bar));
        assert!(!outcome.bucketed);
        assert_eq!(outcome.rows.len(), 25);
        let values: Vec<f64> = outcome.rows.iter().map(value_of).collect();
        let mut expected = values.clone();
        expected.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(values, expected);
    }

    #[test]
    fn test_fifteen_categories_bucket_into_other() {
        let outcome = apply_policy(ChartType::Pie, &pie_rows(15), &PolicyOptions::default());
        assert_eq!(outcome.rows.len(), 12);
        let top: Vec<f64> = outcome.rows[..11].iter().map(value_of).collect();
        assert_eq!(top, (5..=15).rev().map(|i| i as f64).collect::<Vec<_>>());
        assert_eq!(outcome.rows[11]["name"], json!("Other"));
        assert_eq!(value_of(&outcome.rows[11]), 10.0);
    }

    #[test]
    fn test_twelve_categories_are_only_sorted() {
        let outcome = apply_policy(ChartType::Pie, &pie_rows(12), &PolicyOptions::default());
        assert!(!outcome.bucketed);
        assert_eq!(outcome.rows.len(), 12);
        assert_eq!(value_of(&outcome.rows[0]), 12.0);
        assert_eq!(value_of(&outcome.rows[11]), 1.0);
    }

    #[test]
    fn test_policy_is_idempotent() {
        for options in [
            PolicyOptions::default(),
            PolicyOptions::new().with_top_n(5),
            PolicyOptions::new().with_other_label("Rest"),
        ] {
            let policy = CardinalityPolicy::new(options);
            for count in [15, 25] {
                let once = policy.apply(ChartType::Pie, &pie_rows(count));
                let twice = policy.apply(ChartType::Pie, &once.rows);
                assert_eq!(once.rows, twice.rows);
            }
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let options = PolicyOptions::new()
            .with_bucket_threshold(5)
            .with_fallback_threshold(8)
            .with_fallback_chart(ChartType::Line);
        let bucketed = apply_policy(ChartType::Pie, &pie_rows(7), &options);
        assert_eq!(bucketed.rows.len(), 5);
        let fallback = apply_policy(ChartType::Pie, &pie_rows(9), &options);
        assert_eq!(fallback.fallback, Some(ChartType::Line));
    }
}

mod aggregate_tests {
    use super::*;

    fn regions() -> Table {
        build_from_delimited_text("region,sales\nnorth,10\nsouth,4\nnorth,20\nsouth,\nnorth,30")
            .unwrap()
    }

    fn reduce(aggregate: Aggregate) -> Vec<(Value, Value)> {
        let encoding = ChartEncoding {
            x: Some(ChartChannel::new("region", Type::String)),
            y: Some(ChartChannel::new("sales", Type::Number).with_aggregate(Some(aggregate))),
            ..Default::default()
        };
        aggregate_rows(regions().rows(), &encoding)
            .into_iter()
            .map(|row| (row["region"].clone(), row["sales"].clone()))
            .collect()
    }

    #[test]
    fn test_sum_groups_by_x_in_first_appearance_order() {
        assert_eq!(
            reduce(Aggregate::Sum),
            vec![(json!("north"), json!(60.0)), (json!("south"), json!(4.0))]
        );
    }

    #[test]
    fn test_average_min_max() {
        assert_eq!(reduce(Aggregate::Average)[0].1, json!(20.0));
        assert_eq!(reduce(Aggregate::Min)[0].1, json!(10.0));
        assert_eq!(reduce(Aggregate::Max)[0].1, json!(30.0));
    }

    #[test]
    fn test_count_counts_present_cells() {
        let counts = reduce(Aggregate::Count);
        assert_eq!(counts[0].1, json!(3));
        assert_eq!(counts[1].1, json!(2));
    }
}

mod compute_tests {
    use super::*;

    #[test]
    fn test_pie_series_with_top_n() {
        let options = PolicyOptions::new().with_top_n(3);
        let series = compute(&categories(8), &pie_encoding(), lookup(ChartType::Pie), &options)
            .unwrap();
        assert!(series.ready);
        assert_eq!(series.rows.len(), 3);
        assert_eq!(series.rows[0]["name"], json!("cat8"));
    }

    #[test]
    fn test_fallback_signalled_without_auto_fallback() {
        let series = compute(
            &categories(25),
            &pie_encoding(),
            lookup(ChartType::Pie),
            &PolicyOptions::default(),
        )
        .unwrap();
        assert_eq!(series.chart_type, ChartType::Pie);
        assert_eq!(series.fallback, Some(ChartType::Bar));
        assert_eq!(series.notices.len(), 1);
    }

    #[test]
    fn test_auto_fallback_recomputes_as_bar() {
        let options = PolicyOptions::new().with_auto_fallback(true);
        let series = compute(&categories(25), &pie_encoding(), lookup(ChartType::Pie), &options)
            .unwrap();
        assert_eq!(series.chart_type, ChartType::Bar);
        assert_eq!(series.rows.len(), 25);
        for row in &series.rows {
            assert!(row.contains_key("x") && row.contains_key("y"));
        }
        assert!(series.notices[0].contains("bar"));
    }

    #[test]
    fn test_compute_is_pure() {
        let table = categories(15);
        let options = PolicyOptions::default();
        let first = compute(&table, &pie_encoding(), lookup(ChartType::Pie), &options).unwrap();
        let second = compute(&table, &pie_encoding(), lookup(ChartType::Pie), &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(table, categories(15));
    }

    #[test]
    fn test_aggregated_line_series() {
        let table = build_from_delimited_text(
            "day,sales\n2024-01-02,5\n2024-01-01,1\n2024-01-02,7\n2024-01-01,2",
        )
        .unwrap();
        let encoding = ChartEncoding {
            x: Some(ChartChannel::new("day", Type::Date)),
            y: Some(ChartChannel::new("sales", Type::Number)),
            ..Default::default()
        }
        .with_aggregate(ChannelRole::Y, Some(Aggregate::Sum));
        let series =
            compute_named(&table, &encoding, "line", &PolicyOptions::default()).unwrap();
        let points: Vec<(Value, Value)> = series
            .rows
            .iter()
            .map(|r| (r["x"].clone(), r["y"].clone()))
            .collect();
        assert_eq!(
            points,
            vec![
                (json!("2024-01-01"), json!(3.0)),
                (json!("2024-01-02"), json!(12.0)),
            ]
        );
    }

    #[test]
    fn test_aggregated_size_keeps_plain_y() {
        let table =
            build_from_delimited_text("region,sales,units\nnorth,10,2\nnorth,10,3\nsouth,4,2")
                .unwrap();
        let encoding = ChartEncoding {
            x: Some(ChartChannel::new("region", Type::String)),
            y: Some(ChartChannel::new("sales", Type::Number)),
            size: Some(
                ChartChannel::new("units", Type::Number).with_aggregate(Some(Aggregate::Sum)),
            ),
            ..Default::default()
        };
        let series = compute_named(&table, &encoding, "scatter", &PolicyOptions::default()).unwrap();
        let points: Vec<(Value, Value, Value)> = series
            .rows
            .iter()
            .map(|r| (r["x"].clone(), r["y"].clone(), r["units"].clone()))
            .collect();
        assert_eq!(
            points,
            vec![
                (json!("north"), json!("10"), json!(5.0)),
                (json!("south"), json!("4"), json!(2.0)),
            ]
        );
    }

    #[test]
    fn test_bar_counts_rows_per_category() {
        let table = build_from_delimited_text("region\nnorth\nsouth\nnorth\nnorth\nsouth").unwrap();
        let encoding = ChartEncoding {
            x: Some(ChartChannel::new("region", Type::String)),
            y: Some(
                ChartChannel::new("region", Type::String).with_aggregate(Some(Aggregate::Count)),
            ),
            ..Default::default()
        };
        let series = compute_named(&table, &encoding, "bar", &PolicyOptions::default()).unwrap();
        let bars: Vec<(Value, Value)> = series
            .rows
            .iter()
            .map(|r| (r["x"].clone(), r["y"].clone()))
            .collect();
        assert_eq!(
            bars,
            vec![(json!("north"), json!(3)), (json!("south"), json!(2))]
        );
    }

    #[test]
    fn test_unknown_chart_type_is_distinct_error() {
        let err = compute_named(&categories(3), &pie_encoding(), "radar", &PolicyOptions::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::Chart(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_chart_config_series() {
        let config = ChartConfig::new(ChartType::Pie, pie_encoding(), categories(4)).with_size(640, 480);
        assert_eq!(config.width_or_default(), 640);
        let series = config.series(&PolicyOptions::default()).unwrap();
        assert_eq!(series.rows.len(), 4);
        assert_eq!(series.rows[0]["value"], json!("4"));
    }
}

//! Import and inference tests

use serde_json::{Value, json};
use vizspec_sdk::import::{
    ImportConfig, ImportError, TableBuilder, build_from_delimited_text, build_from_rows,
    dedupe_column_names,
};
use vizspec_sdk::inference::{InferenceConfig, TypeInferencer, infer_type};
use vizspec_sdk::models::{Row, Type};

fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|v| json!(v)).collect()
}

mod inference_tests {
    use super::*;

    #[test]
    fn test_iso_dates() {
        let result = infer_type(&strings(&["2023-01-01", "2023-02-01", "2023-03-01"]));
        assert_eq!(result.data_type, Type::Date);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_numbers() {
        let result = infer_type(&strings(&["1", "2", "3.5"]));
        assert_eq!(result.data_type, Type::Number);
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_categorical_strings() {
        let result = infer_type(&strings(&["a", "b", "a", "c", "a", "b", "d", "a", "c", "b"]));
        assert_eq!(result.data_type, Type::String);
        assert_eq!(result.confidence, 0.7);
        assert!(result.is_categorical());
    }

    #[test]
    fn test_free_text() {
        let values: Vec<Value> = (0..20).map(|i| json!(format!("comment {i}"))).collect();
        let result = infer_type(&values);
        assert_eq!(result.data_type, Type::String);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_all_null_is_zero_confidence_string() {
        let result = infer_type(&[Value::Null, json!(""), Value::Null]);
        assert_eq!(result.data_type, Type::String);
        assert_eq!(result.confidence, 0.0);
        assert!(result.sample_values.is_empty());
    }

    #[test]
    fn test_datetime_column() {
        let result = infer_type(&strings(&["2024-01-01", "2024-01-02T08:30:00Z"]));
        assert_eq!(result.data_type, Type::DateTime);
        assert_eq!(result.confidence, 0.9);

        let config = InferenceConfig::builder().detect_datetime(false).build();
        let result = TypeInferencer::with_config(config)
            .infer(&strings(&["2024-01-01", "2024-01-02T08:30:00Z"]));
        assert_ne!(result.data_type, Type::DateTime);
    }

    #[test]
    fn test_mixed_booleans() {
        let result = infer_type(&[json!("true"), json!(true), json!("false")]);
        assert_eq!(result.data_type, Type::Boolean);
    }

    #[test]
    fn test_confidence_in_range() {
        let inputs = vec![
            strings(&["x"]),
            strings(&["1", "a"]),
            vec![json!(1), json!({"k": "v"})],
            vec![json!([1, 2]), Value::Null],
            strings(&["01/02/2024", "2024-01-01"]),
        ];
        for values in inputs {
            let result = infer_type(&values);
            assert!((0.0..=1.0).contains(&result.confidence), "{values:?}");
        }
    }

    #[test]
    fn test_samples_limited() {
        let values: Vec<Value> = (0..20).map(|i| json!(i)).collect();
        let result = infer_type(&values);
        assert_eq!(result.sample_values.len(), 5);
        assert_eq!(result.sample_values[0], json!(0));
    }
}

mod header_tests {
    use super::*;

    #[test]
    fn test_dedupe_left_to_right() {
        assert_eq!(
            dedupe_column_names(&["a", "a", "b", "a"]),
            vec!["a", "a_1", "b", "a_2"]
        );
    }

    #[test]
    fn test_dedupe_empty_names() {
        let names = dedupe_column_names(&["", "b", ""]);
        assert_eq!(names[1], "b");
        assert_ne!(names[0], names[2]);
        assert!(names.iter().all(|n| !n.is_empty()));
    }
}

mod delimited_text_tests {
    use super::*;

    #[test]
    fn test_single_line_is_format_error() {
        let err = build_from_delimited_text("a,b,c").unwrap_err();
        assert!(matches!(err, ImportError::TableFormat { .. }));
    }

    #[test]
    fn test_header_and_blank_lines_is_format_error() {
        let err = build_from_delimited_text("a,b\n\n   \n").unwrap_err();
        assert!(matches!(err, ImportError::TableFormat { .. }));
    }

    #[test]
    fn test_header_plus_one_row() {
        let table = build_from_delimited_text("name,age\nalice,30").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_names(), vec!["name", "age"]);
        assert_eq!(table.column("age").unwrap().data_type, Type::Number);
        assert_eq!(table.rows()[0]["name"], json!("alice"));
    }

    #[test]
    fn test_duplicate_headers_become_columns() {
        let table = build_from_delimited_text("a,a,b,a\n1,2,3,4").unwrap();
        assert_eq!(table.column_names(), vec!["a", "a_1", "b", "a_2"]);
        assert_eq!(table.rows()[0]["a_2"], json!("4"));
    }

    #[test]
    fn test_rows_keyed_by_every_column() {
        let table = build_from_delimited_text("a,b,c\n1\n1,2,3,4").unwrap();
        for row in table.rows() {
            let keys: Vec<&str> = row.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn test_semicolon_delimiter_and_preview_limit() {
        let mut text = String::from("k;v\n");
        for i in 0..150 {
            text.push_str(&format!("k{i};{i}\n"));
        }
        let builder = TableBuilder::with_config(ImportConfig::upload_preview().with_delimiter(';'));
        let table = builder.build_from_delimited_text(&text).unwrap();
        assert_eq!(table.row_count(), 100);
        assert_eq!(table.column("v").unwrap().data_type, Type::Number);
    }

    #[test]
    fn test_identity_is_stable() {
        let text = "x,y\n1,2\n3,4";
        let first = build_from_delimited_text(text).unwrap();
        let second = build_from_delimited_text(text).unwrap();
        assert_eq!(first.id(), second.id());

        let other = build_from_delimited_text("x,y\n1,2\n3,5").unwrap();
        assert_ne!(first.id(), other.id());
    }
}

mod row_tests {
    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_zero_rows_is_valid_empty_table() {
        let table = build_from_rows(&[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_typed_values_are_inferred() {
        let rows = vec![
            row(&[("city", json!("Berlin")), ("temp", json!(21.5))]),
            row(&[("city", json!("Paris")), ("temp", json!(19))]),
        ];
        let table = build_from_rows(&rows).unwrap();
        assert_eq!(table.column("temp").unwrap().data_type, Type::Number);
        assert_eq!(table.column("city").unwrap().data_type, Type::String);
    }

    #[test]
    fn test_missing_keys_become_null() {
        let rows = vec![
            row(&[("a", json!(1))]),
            row(&[("b", json!(2))]),
        ];
        let table = build_from_rows(&rows).unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.rows()[0]["b"], Value::Null);
        assert_eq!(table.column("a").unwrap().null_count(), 1);
    }
}

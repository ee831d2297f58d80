use serde_json::json;

use strata::chart::{cell_style, to_records, value_keys, QueryResult, Series, MAX_OPACITY};
use strata::model::ChartType;

#[test]
fn heatmap_row_styles_cells_by_percentage() {
    // Row {name:"Jan", M1:73.2, M2:10.0}
    let result = QueryResult {
        x_axis: vec![json!("Jan")],
        series: vec![
            Series::new("M1", vec![Some(73.2)]),
            Series::new("M2", vec![Some(10.0)]),
        ],
    };
    let records = to_records(&result, ChartType::Matrix);
    assert_eq!(value_keys(&records), vec!["M1", "M2"]);

    let m1 = cell_style(records[0].value("M1").unwrap().unwrap());
    assert!((m1.opacity - 0.6222).abs() < 1e-9);
    assert!(m1.light_text);
    assert_eq!(m1.display, "73.2%");

    let m2 = cell_style(records[0].value("M2").unwrap().unwrap());
    assert!((m2.opacity - 0.085).abs() < 1e-9);
    assert!(!m2.light_text);
    assert_eq!(m2.display, "10.0%");
}

#[test]
fn opacity_stays_in_range_and_grows_with_value() {
    let mut previous = -1.0;
    for step in 0..=100 {
        let value = step as f64;
        let style = cell_style(value);
        assert!(style.opacity >= 0.0 && style.opacity <= MAX_OPACITY);
        assert!(style.opacity > previous, "not monotone at {}", value);
        previous = style.opacity;
    }
}

#[test]
fn light_text_exactly_above_fifty() {
    assert!(!cell_style(49.9).light_text);
    assert!(!cell_style(50.0).light_text);
    assert!(cell_style(50.0001).light_text);
}

#[test]
fn value_keys_take_the_union_across_rows() {
    // Divergent row shapes should widen the column set, not lose columns.
    let first = QueryResult {
        x_axis: vec![json!("Jan"), json!("Feb")],
        series: vec![
            Series::new("M1", vec![Some(1.0), Some(2.0)]),
            Series::new("M2", vec![Some(3.0)]),
        ],
    };
    let records = to_records(&first, ChartType::Matrix);

    assert_eq!(value_keys(&records), vec!["M1", "M2"]);
    // The short M2 series zero-fills in its second row.
    assert_eq!(records[1].value("M2"), Some(Some(0.0)));
}

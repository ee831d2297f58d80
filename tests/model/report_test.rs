use strata::chart::QueryResult;
use strata::model::{Category, ChartType, MigrationPlan, ReportSpec};

#[test]
fn report_roundtrips_through_json() {
    let json = r#"{
        "id": "monthly_revenue_report",
        "category": "finance",
        "title": "Monthly Revenue",
        "description": "Paid orders by month",
        "source_table": "Fact_Orders",
        "joins": [
            {"table": "Dim_Plan", "join_type": "LEFT", "on_expression": "Fact_Orders.plan_id = Dim_Plan.id"}
        ],
        "group_by": "pay_time",
        "measure_formula": "SUM(amount)",
        "chart_type": "bar",
        "slices": ["plan_key", "region"]
    }"#;

    let report: ReportSpec = serde_json::from_str(json).unwrap();
    assert_eq!(report.category, Category::Finance);
    assert_eq!(report.chart_type, ChartType::Bar);
    assert_eq!(report.joins.len(), 1);
    assert_eq!(report.slices, vec!["plan_key", "region"]);

    let back = serde_json::to_value(&report).unwrap();
    let again: ReportSpec = serde_json::from_value(back).unwrap();
    assert_eq!(again, report);
}

#[test]
fn stored_config_with_unknown_fields_still_loads() {
    // Old configs carry editor-only fields; they must not break loading.
    let json = r#"{
        "id": "r1",
        "source_table": "Fact_Orders",
        "group_by": "pay_time",
        "measure_formula": "COUNT(*)",
        "measures": [{"column": "amount", "aggregation": "sum"}],
        "x_axis": {"column": "pay_time"},
        "base_where": "amount > 0"
    }"#;

    let report: ReportSpec = serde_json::from_str(json).unwrap();
    assert_eq!(report.id, "r1");
    assert_eq!(report.category, Category::Finance);
}

#[test]
fn migration_plan_truncate_defaults_to_false() {
    let json = r#"{
        "source_table": "orders",
        "target_table": "Fact_Orders",
        "mappings": [{"target_column": "uid", "source_expression": "user_id"}]
    }"#;

    let plan: MigrationPlan = serde_json::from_str(json).unwrap();
    assert!(!plan.truncate_target);
}

#[test]
fn query_result_tolerates_sparse_payloads() {
    // Missing series name, null data points, nothing at all.
    let result: QueryResult = serde_json::from_str(
        r#"{"x_axis": ["Jan"], "series": [{"data": [null]}]}"#,
    )
    .unwrap();
    assert_eq!(result.series[0].name, "");
    assert_eq!(result.series[0].data, vec![None]);

    let empty: QueryResult = serde_json::from_str("{}").unwrap();
    assert!(empty.x_axis.is_empty());
    assert!(empty.series.is_empty());
}

use strata::model::{Column, ColumnType, Join, JoinType, ReportSpec, Schema, Table};
use strata::validation::{validate_report, validate_reports, ValidationError};

fn schema() -> Schema {
    Schema {
        dimensions: vec![Table {
            name: "Dim_Plan".to_string(),
            columns: vec![
                Column::new("id", ColumnType::Integer),
                Column::new("plan_key", ColumnType::Text),
            ],
            description: None,
        }],
        facts: vec![Table {
            name: "Fact_Orders".to_string(),
            columns: vec![
                Column::new("uid", ColumnType::Text),
                Column::new("pay_time", ColumnType::Text),
                Column::new("amount", ColumnType::Real),
                Column::new("plan_key", ColumnType::Text),
            ],
            description: None,
        }],
    }
}

fn report(id: &str) -> ReportSpec {
    ReportSpec {
        id: id.to_string(),
        category: Default::default(),
        title: String::new(),
        description: String::new(),
        source_table: "Fact_Orders".to_string(),
        joins: vec![],
        group_by: "pay_time".to_string(),
        measure_formula: "SUM(amount)".to_string(),
        chart_type: Default::default(),
        slices: vec!["plan_key".to_string()],
        image: None,
    }
}

#[test]
fn a_well_formed_report_passes() {
    assert_eq!(validate_report(&report("ok"), &schema()), Ok(()));
}

#[test]
fn unknown_source_table_is_reported_once() {
    let mut bad = report("r1");
    bad.source_table = "Fact_Missing".to_string();

    let errors = validate_report(&bad, &schema()).unwrap_err();
    // Column checks are skipped when the table itself is unknown.
    assert_eq!(
        errors,
        vec![ValidationError::UnknownTable {
            report: "r1".to_string(),
            table: "Fact_Missing".to_string(),
        }]
    );
}

#[test]
fn unknown_group_by_and_slice_both_surface() {
    let mut bad = report("r1");
    bad.group_by = "missing_col".to_string();
    bad.slices.push("other_missing".to_string());

    let errors = validate_report(&bad, &schema()).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&ValidationError::UnknownColumn {
        report: "r1".to_string(),
        table: "Fact_Orders".to_string(),
        column: "missing_col".to_string(),
        role: "group_by",
    }));
    assert!(errors.contains(&ValidationError::UnknownColumn {
        report: "r1".to_string(),
        table: "Fact_Orders".to_string(),
        column: "other_missing".to_string(),
        role: "slice",
    }));
}

#[test]
fn expression_group_by_skips_the_column_check() {
    let mut spec = report("r1");
    spec.group_by = "DATE_FORMAT(pay_time, '%Y-%m')".to_string();
    assert_eq!(validate_report(&spec, &schema()), Ok(()));
}

#[test]
fn join_tables_must_exist() {
    let mut spec = report("r1");
    spec.joins.push(Join {
        table: "Dim_Plan".to_string(),
        join_type: JoinType::Left,
        on_expression: "Fact_Orders.plan_key = Dim_Plan.plan_key".to_string(),
    });
    assert_eq!(validate_report(&spec, &schema()), Ok(()));

    spec.joins.push(Join {
        table: "Dim_Ghost".to_string(),
        join_type: JoinType::Inner,
        on_expression: "1 = 1".to_string(),
    });
    let errors = validate_report(&spec, &schema()).unwrap_err();
    assert_eq!(
        errors,
        vec![ValidationError::UnknownTable {
            report: "r1".to_string(),
            table: "Dim_Ghost".to_string(),
        }]
    );
}

#[test]
fn duplicate_ids_across_the_set() {
    let reports = vec![report("same"), report("same"), report("other")];

    let errors = validate_reports(&reports, &schema()).unwrap_err();
    assert_eq!(
        errors,
        vec![ValidationError::DuplicateReportId {
            id: "same".to_string(),
        }]
    );
}

#[test]
fn set_validation_aggregates_per_report_errors() {
    let mut broken = report("broken");
    broken.source_table = "Nope".to_string();

    let errors = validate_reports(&[report("ok"), broken], &schema()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ValidationError::UnknownTable { .. }));
}

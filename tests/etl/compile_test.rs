use strata::etl::{auto_map, classify, compile, EtlError, ExprKind, MappingDraft, SyntheticFn};
use strata::model::{Column, ColumnMapping, ColumnType};
use strata::sql::dml;

fn columns(names: &[&str]) -> Vec<Column> {
    names
        .iter()
        .map(|n| Column::new(*n, ColumnType::Text))
        .collect()
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn compile_drops_blanks_and_keeps_target_order() {
    // targets [a,b,c] with {a:"x", b:"", c:"y"} compiles to [(a,x),(c,y)].
    let mappings = vec![
        ColumnMapping::new("a", "x"),
        ColumnMapping::new("b", ""),
        ColumnMapping::new("c", "y"),
    ];

    let plan = compile("src", "dst", &mappings, false).unwrap();
    assert_eq!(plan.mappings.len(), 2);
    assert_eq!(plan.mappings[0], ColumnMapping::new("a", "x"));
    assert_eq!(plan.mappings[1], ColumnMapping::new("c", "y"));
    assert!(!plan.truncate_target);
}

#[test]
fn compile_refuses_an_all_blank_set() {
    let mappings = vec![
        ColumnMapping::new("a", ""),
        ColumnMapping::new("b", "   "),
    ];
    assert_eq!(
        compile("src", "dst", &mappings, false).unwrap_err(),
        EtlError::NoMappings
    );
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mappings = vec![
        ColumnMapping::new("a", " \t"),
        ColumnMapping::new("b", "uid"),
    ];
    let plan = compile("src", "dst", &mappings, false).unwrap();
    assert_eq!(plan.mappings, vec![ColumnMapping::new("b", "uid")]);
}

#[test]
fn auto_map_twice_equals_auto_map_once() {
    let targets = columns(&["uid", "amount", "note"]);
    let sources = strings(&["uid", "note"]);

    let once = auto_map(&targets, &sources);
    let twice = auto_map(&targets, &sources);
    assert_eq!(once, twice);

    // And the matched set is exactly the name intersection.
    assert_eq!(once[0].source_expression, "uid");
    assert_eq!(once[1].source_expression, "");
    assert_eq!(once[2].source_expression, "note");
}

#[test]
fn draft_edit_then_compile_then_render() {
    let targets = columns(&["order_uid", "uid", "amount"]);
    let sources = strings(&["uid", "amount"]);

    let mut draft = MappingDraft::for_target("Fact_Orders", &targets, &sources);
    draft.set("order_uid", "UUID()");
    draft.set("amount", "amount / 100");

    let plan = compile("orders", draft.target_table(), draft.mappings(), false).unwrap();
    assert_eq!(plan.mappings.len(), 3);

    assert_eq!(
        dml::insert_select_sql(&plan, "osaio"),
        "INSERT INTO `Fact_Orders` (`order_uid`, `uid`, `amount`) \
         SELECT UUID(), uid, amount / 100 FROM osaio.`orders`"
    );
}

#[test]
fn classification_covers_all_expression_shapes() {
    let sources = strings(&["uid", "pay_time"]);

    assert_eq!(classify("", &sources), ExprKind::Blank);
    assert_eq!(
        classify("pay_time", &sources),
        ExprKind::ColumnRef("pay_time".to_string())
    );
    assert_eq!(
        classify("NOW()", &sources),
        ExprKind::Synthetic(SyntheticFn::Now)
    );
    assert_eq!(
        classify("DATE_FORMAT(pay_time, '%Y')", &sources),
        ExprKind::SqlFragment("DATE_FORMAT(pay_time, '%Y')".to_string())
    );
}

#[test]
fn truncate_flag_carries_into_the_plan() {
    let mappings = vec![ColumnMapping::new("uid", "uid")];
    let plan = compile("orders", "Fact_Orders", &mappings, true).unwrap();
    assert!(plan.truncate_target);
    assert_eq!(
        dml::truncate_sql(&plan),
        Some("TRUNCATE TABLE `Fact_Orders`".to_string())
    );
}

//! End-to-end validation of order rows against the full GDI order schema.

use edifeed_core::gdi;
use edifeed_validator::{DataRow, DataSet, DataValue, ValidationEngine, ViolationKind};
use pretty_assertions::assert_eq;

fn row(pairs: &[(&str, &str)]) -> DataRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), DataValue::from(*v)))
        .collect()
}

/// A complete, well-formed order line.
fn valid_order_row() -> DataRow {
    row(&[
        ("retailerid", "10001"),
        ("linenumber", "001"),
        ("deliverydate", "20240115"),
        ("company", "01"),
        ("warehouse", "01"),
        ("productcode", "ABC123"),
        ("unitofmeasure", "CW"),
        ("orderquantity", "00012"),
        ("orderprice", "125.50"),
        ("ponumber", "PO-2024-001"),
        ("voidflag", "N"),
    ])
}

fn validate(rows: Vec<DataRow>) -> edifeed_validator::ValidationReport {
    let catalog = gdi::rule_catalog();
    let schema = gdi::order_schema(&catalog).unwrap();
    ValidationEngine::new()
        .validate(&schema, &DataSet::from_rows(rows))
        .unwrap()
}

#[test]
fn valid_order_row_produces_no_violations() {
    let report = validate(vec![valid_order_row()]);
    assert!(report.is_valid(), "unexpected: {:?}", report.violations);
    assert_eq!(report.schema, "orders");
    assert_eq!(report.rows_validated, 1);
}

#[test]
fn missing_required_fields_are_each_reported() {
    let report = validate(vec![row(&[("retailerid", "10001")])]);

    let fields: Vec<&str> = report.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["linenumber", "deliverydate", "company", "warehouse"]
    );
    assert!(report
        .violations
        .iter()
        .all(|v| v.kind == ViolationKind::MissingRequiredField));
}

#[test]
fn line_number_must_be_exactly_three_digits() {
    let mut bad = valid_order_row();
    bad.insert("linenumber".to_string(), DataValue::from("12a4"));

    let report = validate(vec![bad]);
    let kinds: Vec<&ViolationKind> = report.for_field("linenumber").map(|v| &v.kind).collect();
    assert_eq!(kinds.len(), 2);
    assert!(matches!(kinds[0], ViolationKind::Length { min: 3, max: 3 }));
    assert!(matches!(kinds[1], ViolationKind::Pattern { .. }));
}

#[test]
fn delivery_date_before_epoch_fails_range_only() {
    let mut bad = valid_order_row();
    bad.insert("deliverydate".to_string(), DataValue::from("19691231"));

    let report = validate(vec![bad]);
    assert_eq!(report.violations.len(), 1);
    assert!(matches!(
        report.violations[0].kind,
        ViolationKind::Range { .. }
    ));
}

#[test]
fn dashed_date_fails_pattern_and_type() {
    let mut bad = valid_order_row();
    bad.insert("deliverydate".to_string(), DataValue::from("2024-01-15"));

    let report = validate(vec![bad]);
    let kinds: Vec<&ViolationKind> = report.for_field("deliverydate").map(|v| &v.kind).collect();
    assert!(matches!(kinds[0], ViolationKind::Pattern { .. }));
    assert!(matches!(kinds[1], ViolationKind::TypeMismatch { .. }));
}

#[test]
fn unit_of_measure_accepts_only_case_and_bottle() {
    let mut bad = valid_order_row();
    bad.insert("unitofmeasure".to_string(), DataValue::from("EA"));

    let report = validate(vec![bad]);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0].kind,
        ViolationKind::Enumeration {
            allowed: vec!["CW".to_string(), "CB".to_string()],
        }
    );
}

#[test]
fn product_code_requires_the_full_order_line() {
    let mut bad = valid_order_row();
    bad.remove("unitofmeasure");
    bad.remove("orderquantity");
    bad.remove("orderprice");

    let report = validate(vec![bad]);
    assert_eq!(report.violations.len(), 3);
    for (violation, expected) in report
        .violations
        .iter()
        .zip(["unitofmeasure", "orderquantity", "orderprice"])
    {
        assert_eq!(violation.field, expected);
        assert_eq!(
            violation.kind,
            ViolationKind::ConditionalRequirement {
                trigger: "productcode".to_string()
            }
        );
    }
}

#[test]
fn order_line_without_product_code_needs_no_quantities() {
    let mut minimal = valid_order_row();
    minimal.remove("productcode");
    minimal.remove("unitofmeasure");
    minimal.remove("orderquantity");
    minimal.remove("orderprice");

    let report = validate(vec![minimal]);
    assert!(report.is_valid(), "unexpected: {:?}", report.violations);
}

#[test]
fn order_price_overflow_fails_pattern_and_range() {
    let mut bad = valid_order_row();
    bad.insert("orderprice".to_string(), DataValue::from("1000000000.00"));

    let report = validate(vec![bad]);
    let kinds: Vec<&ViolationKind> = report.for_field("orderprice").map(|v| &v.kind).collect();
    assert_eq!(kinds.len(), 2);
    assert!(matches!(kinds[0], ViolationKind::Pattern { .. }));
    assert!(matches!(kinds[1], ViolationKind::Range { .. }));
}

#[test]
fn special_price_flag_is_binary() {
    let mut bad = valid_order_row();
    bad.insert("specialprice".to_string(), DataValue::from("2"));

    let report = validate(vec![bad]);
    assert_eq!(report.violations.len(), 1);
    assert!(matches!(
        report.violations[0].kind,
        ViolationKind::Enumeration { .. }
    ));
}

#[test]
fn violations_report_every_bad_row_in_order() {
    let mut bad_first = valid_order_row();
    bad_first.insert("retailerid".to_string(), DataValue::from("100"));
    let mut bad_last = valid_order_row();
    bad_last.insert("voidflag".to_string(), DataValue::from("X"));

    let report = validate(vec![bad_first, valid_order_row(), bad_last]);
    assert_eq!(report.rows_validated, 3);

    let positions: Vec<(usize, &str)> = report
        .violations
        .iter()
        .map(|v| (v.row, v.field.as_str()))
        .collect();
    assert_eq!(positions, vec![(0, "retailerid"), (2, "voidflag")]);
}

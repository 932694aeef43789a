//! End-to-end validation of invoice rows against the full GDI sales-history
//! schema.

use edifeed_core::gdi;
use edifeed_validator::{DataRow, DataSet, DataValue, ValidationEngine, ViolationKind};
use pretty_assertions::assert_eq;

fn row(pairs: &[(&str, &str)]) -> DataRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), DataValue::from(*v)))
        .collect()
}

/// A complete, well-formed invoice line.
fn valid_invoice_row() -> DataRow {
    row(&[
        ("retailerid", "10001"),
        ("invoicenumber", "123456789"),
        ("invoicedate", "20240115"),
        ("arstatus", "1"),
        ("company", "01"),
        ("warehouse", "01"),
        ("linenumber", "001"),
        ("productcode", "ABC123"),
        ("unitofmeasure", "CB"),
        ("orderquantity", "00024"),
        ("orderprice", "89.990"),
        ("depositamount", "1.20"),
        ("voidflag", "N"),
    ])
}

fn validate(rows: Vec<DataRow>) -> edifeed_validator::ValidationReport {
    let catalog = gdi::rule_catalog();
    let schema = gdi::invoice_schema(&catalog).unwrap();
    ValidationEngine::new()
        .validate(&schema, &DataSet::from_rows(rows))
        .unwrap()
}

#[test]
fn valid_invoice_row_produces_no_violations() {
    let report = validate(vec![valid_invoice_row()]);
    assert!(report.is_valid(), "unexpected: {:?}", report.violations);
    assert_eq!(report.schema, "invoices");
}

#[test]
fn header_fields_are_required() {
    let report = validate(vec![row(&[])]);

    let fields: Vec<&str> = report.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["retailerid", "invoicenumber", "invoicedate"]);
    assert!(report
        .violations
        .iter()
        .all(|v| v.kind == ViolationKind::MissingRequiredField));
}

#[test]
fn invoice_number_must_be_digits() {
    let mut bad = valid_invoice_row();
    bad.insert("invoicenumber".to_string(), DataValue::from("INV-001"));

    let report = validate(vec![bad]);
    assert_eq!(report.violations.len(), 1);
    assert!(matches!(
        report.violations[0].kind,
        ViolationKind::Pattern { .. }
    ));
}

#[test]
fn deposit_amount_boundary_behavior() {
    let at_limit = {
        let mut r = valid_invoice_row();
        r.insert("depositamount".to_string(), DataValue::from("9999999.99"));
        r
    };
    let extra_precision = {
        let mut r = valid_invoice_row();
        r.insert("depositamount".to_string(), DataValue::from("9999999.999"));
        r
    };
    let over_limit = {
        let mut r = valid_invoice_row();
        r.insert("depositamount".to_string(), DataValue::from("10000000.00"));
        r
    };

    let report = validate(vec![at_limit, extra_precision, over_limit]);

    // The inclusive upper bound passes untouched.
    assert_eq!(report.for_row(0).count(), 0);

    // Three fractional digits break the pattern, and the extra precision
    // also pushes the value past the inclusive bound; both rules report.
    let row1: Vec<&ViolationKind> = report.for_row(1).map(|v| &v.kind).collect();
    assert_eq!(row1.len(), 2);
    assert!(matches!(row1[0], ViolationKind::Pattern { .. }));
    assert!(matches!(row1[1], ViolationKind::Range { .. }));

    // One unit over breaks both pattern and range.
    let row2: Vec<&ViolationKind> = report.for_row(2).map(|v| &v.kind).collect();
    assert_eq!(row2.len(), 2);
    assert!(matches!(row2[0], ViolationKind::Pattern { .. }));
    assert!(matches!(row2[1], ViolationKind::Range { .. }));
}

#[test]
fn depletion_allowance_allows_five_decimal_places() {
    let mut fine = valid_invoice_row();
    fine.insert(
        "depletionallowance".to_string(),
        DataValue::from("999999.99999"),
    );
    let mut overflow = valid_invoice_row();
    overflow.insert(
        "depletionallowance".to_string(),
        DataValue::from("1000000.0"),
    );

    let report = validate(vec![fine, overflow]);
    assert_eq!(report.for_row(0).count(), 0);
    let kinds: Vec<&ViolationKind> = report.for_row(1).map(|v| &v.kind).collect();
    assert!(matches!(kinds[0], ViolationKind::Pattern { .. }));
    assert!(matches!(kinds[1], ViolationKind::Range { .. }));
}

#[test]
fn ar_status_accepts_only_open_and_paid_codes() {
    let mut bad = valid_invoice_row();
    bad.insert("arstatus".to_string(), DataValue::from("2"));

    let report = validate(vec![bad]);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0].kind,
        ViolationKind::Enumeration {
            allowed: vec!["1".to_string(), "3".to_string()],
        }
    );
}

#[test]
fn void_flag_is_yes_or_no() {
    let mut bad = valid_invoice_row();
    bad.insert("voidflag".to_string(), DataValue::from("V"));

    let report = validate(vec![bad]);
    assert_eq!(report.violations.len(), 1);
    assert!(matches!(
        report.violations[0].kind,
        ViolationKind::Enumeration { .. }
    ));
}

#[test]
fn product_code_requires_line_detail_on_invoices_too() {
    let mut bad = valid_invoice_row();
    bad.remove("unitofmeasure");
    bad.remove("orderquantity");

    let report = validate(vec![bad]);
    let fields: Vec<&str> = report.violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["unitofmeasure", "orderquantity"]);
    assert!(report.violations.iter().all(|v| matches!(
        v.kind,
        ViolationKind::ConditionalRequirement { .. }
    )));
}

#[test]
fn header_only_invoice_row_is_valid() {
    let report = validate(vec![row(&[
        ("retailerid", "10001"),
        ("invoicenumber", "42"),
        ("invoicedate", "20240115"),
    ])]);
    assert!(report.is_valid(), "unexpected: {:?}", report.violations);
}

#[test]
fn mixed_batch_reports_row_major() {
    let mut bad = valid_invoice_row();
    bad.insert("retailerid".to_string(), DataValue::from("10001X"));
    bad.insert("trucktype".to_string(), DataValue::from("XL"));

    let report = validate(vec![valid_invoice_row(), bad]);
    let positions: Vec<(usize, &str)> = report
        .violations
        .iter()
        .map(|v| (v.row, v.field.as_str()))
        .collect();
    assert_eq!(positions, vec![(1, "retailerid"), (1, "trucktype")]);
}

//! Fixed field catalogs for the GDI target system.
//!
//! Order and invoice/sales-history files uploaded to GDI must conform to a
//! fixed per-field format. This module holds the canonical rule for every
//! field and composes the two record schemas from them. Fields appearing in
//! both record types (e.g. `retailerid`, `warehouse`) share one definition.
//!
//! Each field gets its own named rule rather than one rule per data shape;
//! more verbose, but when GDI revises a single field's format only that
//! definition changes.
//!
//! Known gaps against the GDI field specification:
//! - `orderaction`: the valid value set is undocumented, so the rule is
//!   length-only (1-2 characters) with no enumeration.
//! - `onhandquantity` and `discountlevel1`-`discountlevel4`: source revisions
//!   disagree on the bounds; the permissive variants (1-7 and 1-10) are used
//!   until confirmed against GDI's field specification.

use crate::catalog::RuleCatalog;
use crate::error::Result;
use crate::rules::FieldRule;
use crate::schema::{RecordSchema, SchemaBuilder, ValueType};

/// Digit-only pattern shared by line numbers and quantities.
const DIGITS: &str = r"^\d+$";

/// Rules for a YYYYMMDD date field: 8 digits inside the epoch window.
fn date_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::Pattern {
            regex: r"^\d{8}$".to_string(),
        },
        FieldRule::Range {
            min: 19700101.0,
            max: 20991231.0,
        },
    ]
}

/// Rules for a non-negative decimal amount with bounded precision.
fn amount_rules(int_digits: u8, frac_digits: u8, max: f64) -> Vec<FieldRule> {
    vec![
        FieldRule::Pattern {
            regex: format!(r"^\d{{1,{int_digits}}}(\.\d{{1,{frac_digits}}})?$"),
        },
        FieldRule::Range { min: 0.0, max },
    ]
}

/// Rules for a digit-only field with length bounds.
fn digits_rules(min: usize, max: usize) -> Vec<FieldRule> {
    vec![
        FieldRule::Length { min, max },
        FieldRule::Pattern {
            regex: DIGITS.to_string(),
        },
    ]
}

/// Single-character Y/N flag.
fn yes_no_rules() -> Vec<FieldRule> {
    vec![FieldRule::exact_length(1), FieldRule::one_of(["Y", "N"])]
}

fn try_rule_catalog() -> Result<RuleCatalog> {
    let mut c = RuleCatalog::new();

    // Identity and routing
    c.define("retailerid", vec![FieldRule::exact_length(5)])?;
    c.define("company", vec![FieldRule::Length { min: 1, max: 5 }])?;
    c.define("warehouse", vec![FieldRule::Length { min: 1, max: 5 }])?;
    c.define("loadnumber", vec![FieldRule::exact_length(8)])?;
    c.define("driver", vec![FieldRule::exact_length(5)])?;
    c.define("salesrep", vec![FieldRule::Length { min: 1, max: 5 }])?;
    for helper in ["helper1", "helper2", "helper3", "helper4", "helper5"] {
        c.define(helper, vec![FieldRule::exact_length(5)])?;
    }

    // Line and product
    c.define("linenumber", digits_rules(3, 3))?;
    c.define("productcode", vec![FieldRule::exact_length(6)])?;
    c.define(
        "unitofmeasure",
        vec![FieldRule::exact_length(2), FieldRule::one_of(["CW", "CB"])],
    )?;
    c.define("orderquantity", digits_rules(5, 5))?;
    c.define("outquantity", digits_rules(1, 5))?;
    // Bounds unconfirmed against the GDI field spec; permissive revision used.
    c.define("onhandquantity", digits_rules(1, 7))?;
    c.define("partialcasequantity", digits_rules(1, 2))?;

    // Amounts
    c.define(
        "orderprice",
        amount_rules(9, 3, 999_999_999.999),
    )?;
    c.define("ordercost", amount_rules(7, 2, 9_999_999.99))?;
    c.define("discountamount", amount_rules(7, 2, 9_999_999.99))?;
    c.define("postoffamount", amount_rules(7, 2, 9_999_999.99))?;
    c.define("depositamount", amount_rules(7, 2, 9_999_999.99))?;
    c.define("depletionallowance", amount_rules(6, 5, 999_999.99999))?;

    // Dates (YYYYMMDD)
    for date in ["codedate", "deliverydate", "orderdate", "invoicedate"] {
        c.define(date, date_rules())?;
    }

    // References and comments
    c.define("ponumber", vec![FieldRule::Length { min: 1, max: 15 }])?;
    c.define("ordernumber", vec![FieldRule::Length { min: 1, max: 9 }])?;
    c.define("invoicenumber", digits_rules(1, 15))?;
    c.define(
        "invoicecomments",
        vec![FieldRule::Length { min: 1, max: 560 }],
    )?;
    c.define("reasoncode", vec![FieldRule::exact_length(2)])?;
    c.define("returnreasoncode", vec![FieldRule::exact_length(2)])?;
    c.define("voidreason", vec![FieldRule::Length { min: 1, max: 2 }])?;

    // Discounts
    c.define("discountcode", vec![FieldRule::Length { min: 1, max: 10 }])?;
    c.define("discountgroup", vec![FieldRule::Length { min: 1, max: 10 }])?;
    c.define("discountlevel", vec![FieldRule::exact_length(1)])?;
    for level in [
        "discountlevel1",
        "discountlevel2",
        "discountlevel3",
        "discountlevel4",
    ] {
        // Bounds unconfirmed against the GDI field spec; permissive revision used.
        c.define(level, vec![FieldRule::Length { min: 1, max: 10 }])?;
    }

    // Pricing groups
    c.define("flpgroup", vec![FieldRule::Length { min: 1, max: 5 }])?;
    c.define("pricegroup", vec![FieldRule::Length { min: 1, max: 5 }])?;
    c.define("subpricegroup", vec![FieldRule::Length { min: 1, max: 5 }])?;

    // Flags and modes
    c.define(
        "specialprice",
        vec![FieldRule::exact_length(1), FieldRule::one_of(["0", "1"])],
    )?;
    c.define("voidflag", yes_no_rules())?;
    c.define("ignoredeliverycharge", yes_no_rules())?;
    c.define("performancediscountanswer", yes_no_rules())?;
    c.define(
        "arstatus",
        vec![FieldRule::exact_length(1), FieldRule::one_of(["1", "3"])],
    )?;
    c.define(
        "ordermode",
        vec![
            FieldRule::exact_length(1),
            FieldRule::one_of(["0", "1", "2", "3"]),
        ],
    )?;
    c.define(
        "ordertype",
        vec![FieldRule::exact_length(1), FieldRule::one_of(["S", "T"])],
    )?;
    // Valid values undocumented; length bound only.
    c.define("orderaction", vec![FieldRule::Length { min: 1, max: 2 }])?;
    c.define("invoicetype", vec![FieldRule::exact_length(1)])?;
    c.define("artype", vec![FieldRule::exact_length(1)])?;
    c.define("trucktype", vec![FieldRule::exact_length(1)])?;
    c.define("deposittype", vec![FieldRule::exact_length(1)])?;

    Ok(c)
}

/// Builds the canonical GDI rule catalog.
pub fn rule_catalog() -> RuleCatalog {
    // Definitions are compiled-in literals; a failure here is a bug in this
    // module, not a runtime condition.
    try_rule_catalog().expect("built-in GDI rule catalog is well formed")
}

/// Schema for order files (GDI sequence 85, datatype ORDERS).
///
/// Orders arrive unprocessed at GDI and are routed to the warehouse for
/// picking. `productcode` triggers the conditional requirement on
/// `unitofmeasure`, `orderquantity` and `orderprice`.
pub fn order_schema(catalog: &RuleCatalog) -> Result<RecordSchema> {
    SchemaBuilder::new("orders")
        .optional("loadnumber", ValueType::Text)
        .required("retailerid", ValueType::Text)
        .optional("driver", ValueType::Text)
        .required("linenumber", ValueType::Text)
        .optional("unitofmeasure", ValueType::Text)
        .optional("productcode", ValueType::Text)
        .optional("orderquantity", ValueType::Integer)
        .optional("orderprice", ValueType::Decimal)
        .optional("discountamount", ValueType::Decimal)
        .optional("postoffamount", ValueType::Decimal)
        .optional("depositamount", ValueType::Decimal)
        .optional("specialprice", ValueType::Text)
        .optional("voidflag", ValueType::Text)
        .optional("reasoncode", ValueType::Text)
        .optional("codedate", ValueType::Integer)
        .required("deliverydate", ValueType::Integer)
        .optional("ponumber", ValueType::Text)
        .required("company", ValueType::Text)
        .required("warehouse", ValueType::Text)
        .optional("ordernumber", ValueType::Text)
        .optional("performancediscountanswer", ValueType::Text)
        .optional("discountcode", ValueType::Text)
        .optional("discountgroup", ValueType::Text)
        .optional("discountlevel", ValueType::Text)
        .optional("ignoredeliverycharge", ValueType::Text)
        .optional("salesrep", ValueType::Text)
        .optional("orderdate", ValueType::Integer)
        .optional("invoicecomments", ValueType::Text)
        .optional("orderaction", ValueType::Text)
        .optional("ordertype", ValueType::Text)
        .required_with(
            "productcode",
            ["unitofmeasure", "orderquantity", "orderprice"],
        )
        .build(catalog)
}

/// Schema for invoice/sales-history files (GDI sequence 90, datatype
/// SALESHISTORY).
///
/// Invoice rows post directly to the retailer's account; mistakes are fixed
/// by posting a credit, so exhaustive validation up front matters more here
/// than for orders.
pub fn invoice_schema(catalog: &RuleCatalog) -> Result<RecordSchema> {
    SchemaBuilder::new("invoices")
        .required("retailerid", ValueType::Text)
        .required("invoicenumber", ValueType::Text)
        .required("invoicedate", ValueType::Integer)
        .optional("arstatus", ValueType::Text)
        .optional("ordertype", ValueType::Text)
        .optional("loadnumber", ValueType::Text)
        .optional("driver", ValueType::Text)
        .optional("helper1", ValueType::Text)
        .optional("helper2", ValueType::Text)
        .optional("helper3", ValueType::Text)
        .optional("helper4", ValueType::Text)
        .optional("helper5", ValueType::Text)
        .optional("company", ValueType::Text)
        .optional("warehouse", ValueType::Text)
        .optional("flpgroup", ValueType::Text)
        .optional("pricegroup", ValueType::Text)
        .optional("subpricegroup", ValueType::Text)
        .optional("salesrep", ValueType::Text)
        .optional("voidflag", ValueType::Text)
        .optional("voidreason", ValueType::Text)
        .optional("invoicetype", ValueType::Text)
        .optional("artype", ValueType::Text)
        .optional("trucktype", ValueType::Text)
        .optional("ponumber", ValueType::Text)
        .optional("linenumber", ValueType::Text)
        .optional("productcode", ValueType::Text)
        .optional("unitofmeasure", ValueType::Text)
        .optional("ordermode", ValueType::Text)
        .optional("orderquantity", ValueType::Integer)
        .optional("outquantity", ValueType::Integer)
        .optional("onhandquantity", ValueType::Integer)
        .optional("partialcasequantity", ValueType::Integer)
        .optional("returnreasoncode", ValueType::Text)
        .optional("codedate", ValueType::Integer)
        .optional("orderprice", ValueType::Decimal)
        .optional("ordercost", ValueType::Decimal)
        .optional("depositamount", ValueType::Decimal)
        .optional("deposittype", ValueType::Text)
        .optional("depletionallowance", ValueType::Decimal)
        .optional("postoffamount", ValueType::Decimal)
        .optional("discountamount", ValueType::Decimal)
        .optional("discountlevel1", ValueType::Text)
        .optional("discountlevel2", ValueType::Text)
        .optional("discountlevel3", ValueType::Text)
        .optional("discountlevel4", ValueType::Text)
        .optional("discountlevel", ValueType::Text)
        .optional("specialprice", ValueType::Text)
        .required_with(
            "productcode",
            ["unitofmeasure", "orderquantity", "orderprice"],
        )
        .build(catalog)
}

use serde_json::json;
use std::io::{Cursor, Read};

use super::{generate, generate_bytes, order_sync};

/// Merged ranges of `sheet_name` in A1 notation
fn merged(value: serde_json::Value, sheet_name: &str) -> Vec<String> {
    let mut workbook = generate(value);
    workbook
        .merged_ranges(sheet_name)
        .expect("merged ranges should load")
        .iter()
        .map(|range| range.to_string())
        .collect()
}

/// XML of one worksheet part inside the xlsx archive
fn worksheet_xml(bytes: Vec<u8>, part: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("xlsx should be a zip");
    let mut xml = String::new();
    archive
        .by_name(part)
        .expect("worksheet part should exist")
        .read_to_string(&mut xml)
        .expect("worksheet should be utf-8");
    xml
}

#[test]
fn test_summary_merged_ranges() {
    let ranges = merged(json!({ "ObjectsMap": [order_sync()] }), "Movements to migrate");
    assert_eq!(ranges, vec!["A1:P1", "A4:P4", "F5:H5", "I5:L5"]);
}

#[test]
fn test_detail_merged_ranges_with_empty_filter() {
    let ranges = merged(json!({ "ObjectsMap": [{ "Name": "Plain" }] }), "1 - Plain");

    assert_eq!(
        ranges,
        vec![
            // API Request
            "A1:F1", "A2:F2",
            // Merge
            "A8:F8", "A9:C9", "D9:F9",
            // Filter
            "A14:F14", "A15:C15", "D15:F15", "D16:F16",
            // Field Mapping, directly after the single empty filter row
            "A19:F19", "A20:F20",
        ]
    );
}

#[test]
fn test_field_mapping_merges_follow_filter_rows() {
    // Two filter rows push Field Mapping down by one compared to an empty filter
    let ranges = merged(json!({ "ObjectsMap": [order_sync()] }), "1 - Order Sync");
    assert_eq!(&ranges[ranges.len() - 2..], ["A20:F20", "A21:F21"]);
}

#[test]
fn test_summary_freezes_below_header_rows() {
    let xml = worksheet_xml(
        generate_bytes(json!({ "ObjectsMap": [order_sync()] })),
        "xl/worksheets/sheet1.xml",
    );
    assert!(xml.contains(r#"topLeftCell="A7""#), "{}", xml);
    assert!(xml.contains(r#"state="frozen""#));
}

#[test]
fn test_detail_sheets_are_not_frozen() {
    let xml = worksheet_xml(
        generate_bytes(json!({ "ObjectsMap": [order_sync()] })),
        "xl/worksheets/sheet2.xml",
    );
    assert!(!xml.contains("<pane"));
}

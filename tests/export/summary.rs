use serde_json::json;

use super::{generate, order_sync, sheet};

#[test]
fn test_empty_export_has_only_summary_sheet() {
    let mut workbook = generate(json!({ "ObjectsMap": [] }));
    assert_eq!(workbook.sheets, vec!["Movements to migrate"]);

    let summary = sheet(&mut workbook, "Movements to migrate");
    assert_eq!(summary.cell(1, 1), "Vertify movements to migrate to Digibee");
    assert_eq!(summary.cell(6, 1), "ID");
    assert_eq!(summary.cell(6, 16), "Email Every");
    // Header rows only
    assert_eq!(summary.row_count(), 6);
}

#[test]
fn test_missing_objects_map_behaves_as_empty() {
    let workbook = generate(json!({}));
    assert_eq!(workbook.sheets.len(), 1);
}

#[test]
fn test_summary_header_rows() {
    let mut workbook = generate(json!({ "ObjectsMap": [] }));
    let summary = sheet(&mut workbook, "Movements to migrate");

    assert_eq!(summary.cell(2, 1), "Customer:");
    assert_eq!(summary.cell(2, 2), "?");
    assert_eq!(summary.cell(3, 1), "Key Documents:");
    assert_eq!(summary.cell(3, 2), "?");
    assert_eq!(summary.cell(4, 1), "Vertify");
    assert_eq!(summary.cell(5, 6), "Source System");
    assert_eq!(summary.cell(5, 9), "Target System");

    let headers: Vec<&str> = (1..=16).map(|col| summary.cell(6, col)).collect();
    assert_eq!(
        headers,
        vec![
            "ID",
            "Trigger Type",
            "Interval frequence",
            "Interval days",
            "Movement Name",
            "System",
            "Sandbox",
            "Credentials",
            "System",
            "Sandbox",
            "Credentials",
            "Customization",
            "Notes",
            "No",
            "Email Alert",
            "Email Every",
        ]
    );
}

#[test]
fn test_summary_row_round_trip() {
    let mut workbook = generate(json!({ "ObjectsMap": [order_sync()] }));
    let summary = sheet(&mut workbook, "Movements to migrate");

    assert_eq!(summary.cell(7, 1), "1");
    assert_eq!(summary.cell(7, 2), "Collect & Move? / Collect?");
    assert_eq!(summary.cell(7, 3), "at 00:00 AM");
    assert_eq!(summary.cell(7, 4), "every ?");
    assert_eq!(summary.cell(7, 5), "Order Sync");
    assert_eq!(summary.cell(7, 6), "Shopify");
    assert_eq!(summary.cell(7, 7), "TRUE/FALSE");
    assert_eq!(summary.cell(7, 8), "TRUE/FALSE");
    assert_eq!(summary.cell(7, 9), "NetSuite");
    assert_eq!(summary.cell(7, 10), "TRUE/FALSE");
    assert_eq!(summary.cell(7, 11), "TRUE/FALSE");
    assert_eq!(summary.cell(7, 12), "TRUE/FALSE");
    for col in 13..=16 {
        assert_eq!(summary.cell(7, col), "");
    }
}

#[test]
fn test_summary_rows_keep_input_order_and_defaults() {
    let mut workbook = generate(json!({
        "ObjectsMap": [
            { "Name": "Accounts", "SourceSystemName": "Salesforce" },
            {},
            { "Name": "Contacts", "TargetSystemName": "HubSpot" }
        ]
    }));
    let summary = sheet(&mut workbook, "Movements to migrate");

    assert_eq!(summary.row_count(), 9);
    assert_eq!(summary.cell(7, 5), "Accounts");
    assert_eq!(summary.cell(7, 9), "N/A");
    assert_eq!(summary.cell(8, 1), "2");
    assert_eq!(summary.cell(8, 5), "N/A");
    assert_eq!(summary.cell(8, 6), "N/A");
    assert_eq!(summary.cell(9, 1), "3");
    assert_eq!(summary.cell(9, 5), "Contacts");
    assert_eq!(summary.cell(9, 9), "HubSpot");
}

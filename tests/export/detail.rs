use serde_json::json;

use super::{generate, order_sync, sheet};

#[test]
fn test_one_detail_sheet_per_object_map() {
    let workbook = generate(json!({
        "ObjectsMap": [order_sync(), { "Name": "Customers" }, {}]
    }));

    assert_eq!(
        workbook.sheets,
        vec!["Movements to migrate", "1 - Order Sync", "2 - Customers", "3 - Unknown"]
    );
}

#[test]
fn test_sheet_names_are_sanitized() {
    let workbook = generate(json!({
        "ObjectsMap": [
            { "Name": "Order>>Sync" },
            { "Name": "Billing: [Legacy] A/B?" }
        ]
    }));

    assert_eq!(workbook.sheets[1], "1 - OrdertoSync");
    assert_eq!(workbook.sheets[2], "2 - Billing  (Legacy) A B");
}

#[test]
fn test_trailing_apostrophe_is_dropped_from_sheet_name() {
    let workbook = generate(json!({
        "ObjectsMap": [{ "Name": "Customers'" }, { "Name": "Partners' Orders" }]
    }));

    assert_eq!(workbook.sheets[1], "1 - Customers");
    assert_eq!(workbook.sheets[2], "2 - Partners' Orders");
}

#[test]
fn test_long_names_are_truncated() {
    let name = "Customer Master Data Synchronisation";
    let workbook = generate(json!({ "ObjectsMap": [{ "Name": name }] }));

    let sheet_name = &workbook.sheets[1];
    assert_eq!(sheet_name, "1 - Customer Master Data S...");
    assert!(sheet_name.chars().count() <= 31);
}

#[test]
fn test_api_request_section() {
    let mut workbook = generate(json!({ "ObjectsMap": [order_sync()] }));
    let detail = sheet(&mut workbook, "1 - Order Sync");

    assert_eq!(detail.cell(1, 1), "API Request");
    assert_eq!(detail.cell(2, 1), "MIGRATION SYTEM: VERTIFY");
    assert_eq!(detail.cell(3, 1), "system");
    assert_eq!(detail.cell(3, 3), "path/connection string");
    assert_eq!(detail.cell(3, 6), "notes");
    assert_eq!(detail.cell(4, 1), "Shopify");
    assert_eq!(detail.cell(4, 2), "REST");
    assert_eq!(detail.cell(4, 3), "");
    assert_eq!(detail.cell(5, 1), "NetSuite");
    assert_eq!(detail.cell(5, 2), "REST");
}

#[test]
fn test_merge_section() {
    let mut workbook = generate(json!({ "ObjectsMap": [order_sync()] }));
    let detail = sheet(&mut workbook, "1 - Order Sync");

    assert_eq!(detail.find_row("Merge"), Some(8));
    assert_eq!(detail.cell(9, 1), "Vertify");
    assert_eq!(detail.cell(9, 4), "Digibee");
    assert_eq!(detail.cell(10, 1), "rules");
    assert_eq!(detail.cell(10, 4), "rules");
    assert_eq!(detail.cell(11, 1), "id: src_id -> tgt_id");
    assert_eq!(detail.cell(11, 4), "N/A");
}

#[test]
fn test_merge_disabled_reads_no_merge() {
    let mut obj = order_sync();
    obj["MergeRecord"] = json!(false);

    let mut workbook = generate(json!({ "ObjectsMap": [obj] }));
    let detail = sheet(&mut workbook, "1 - Order Sync");
    assert_eq!(detail.cell(11, 1), "No merge");
}

#[test]
fn test_merge_record_accepts_truthy_values() {
    let mut as_text = order_sync();
    as_text["MergeRecord"] = json!("true");
    let mut as_number = order_sync();
    as_number["MergeRecord"] = json!(1);
    let mut as_zero = order_sync();
    as_zero["MergeRecord"] = json!(0);

    let mut workbook = generate(json!({ "ObjectsMap": [as_text, as_number, as_zero] }));

    assert_eq!(sheet(&mut workbook, "1 - Order Sync").cell(11, 1), "id: src_id -> tgt_id");
    assert_eq!(sheet(&mut workbook, "2 - Order Sync").cell(11, 1), "id: src_id -> tgt_id");
    assert_eq!(sheet(&mut workbook, "3 - Order Sync").cell(11, 1), "No merge");
}

#[test]
fn test_filter_section() {
    let mut workbook = generate(json!({ "ObjectsMap": [order_sync()] }));
    let detail = sheet(&mut workbook, "1 - Order Sync");

    assert_eq!(detail.find_row("Filter"), Some(14));
    assert_eq!(detail.cell(16, 1), "FILTER");
    assert_eq!(detail.cell(17, 1), "path.field");
    assert_eq!(detail.cell(17, 3), "value");
    assert_eq!(detail.cell(17, 4), "path/table/alias");
    assert_eq!(detail.cell(17, 6), "query relation");
    assert_eq!(detail.cell(18, 1), "order.status");
    assert_eq!(detail.cell(18, 2), "Equals");
    assert_eq!(detail.cell(18, 3), "paid");
    assert_eq!(detail.cell(19, 1), "order.total");
    assert_eq!(detail.cell(19, 3), "0");
}

#[test]
fn test_no_filter_row() {
    let mut workbook = generate(json!({ "ObjectsMap": [{ "Name": "Plain" }] }));
    let detail = sheet(&mut workbook, "1 - Plain");

    assert_eq!(detail.cell(18, 1), "No filter");
    // Field Mapping follows directly
    assert_eq!(detail.find_row("Field Mapping"), Some(19));
}

#[test]
fn test_field_mapping_section() {
    let mut workbook = generate(json!({ "ObjectsMap": [order_sync()] }));
    let detail = sheet(&mut workbook, "1 - Order Sync");

    assert_eq!(detail.find_row("Field Mapping"), Some(20));
    assert_eq!(detail.cell(21, 1), "MIGRATION SYTEM: VERTIFY");

    let headers: Vec<&str> = (1..=6).map(|col| detail.cell(22, col)).collect();
    assert_eq!(
        headers,
        vec!["move", "type", "details", "source path.field", "target path.field", "notes"]
    );

    // Only the first transformation is rendered
    assert_eq!(detail.cell(23, 1), "OnAdd");
    assert_eq!(detail.cell(23, 2), "Lookup");
    assert_eq!(detail.cell(23, 3), "Date Format: YYYY-MM-DD");
    assert_eq!(detail.cell(23, 4), "created_at");
    assert_eq!(detail.cell(23, 5), "tranDate");
    assert_eq!(detail.cell(23, 6), "");

    // No transformation: blank details and source, defaults for move and type
    assert_eq!(detail.cell(24, 1), "OnAddUpdate");
    assert_eq!(detail.cell(24, 2), "Map");
    assert_eq!(detail.cell(24, 3), "");
    assert_eq!(detail.cell(24, 4), "");
    assert_eq!(detail.cell(24, 5), "memo");

    assert_eq!(detail.row_count(), 24);
}

#[test]
fn test_rule_types_in_details_column() {
    let props: Vec<_> = [
        json!({ "RuleType": "Value", "Value": "Active" }),
        json!({ "RuleType": "Convert", "ProjectConvertListName": "Countries" }),
        json!({ "RuleType": "Condition" }),
        json!({ "RuleType": "Script", "Value": "x" }),
    ]
    .into_iter()
    .map(|t| json!({ "TargetPropertyName": "f", "PropertiesMapTransformation": [t] }))
    .collect();

    let mut workbook = generate(json!({ "ObjectsMap": [{ "Name": "Rules", "PropertiesMap": props }] }));
    let detail = sheet(&mut workbook, "1 - Rules");

    let first = detail.find_row("Field Mapping").unwrap() + 3;
    assert_eq!(detail.cell(first, 3), "Value: Active");
    assert_eq!(detail.cell(first + 1, 3), "Convert List: Countries");
    assert_eq!(detail.cell(first + 2, 3), "Conditional Logic");
    assert_eq!(detail.cell(first + 3, 3), "");
}

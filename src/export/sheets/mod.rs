//! Worksheet builders for the mapping export

pub mod detail;
pub mod summary;

pub use detail::{
    add_api_request_section, add_field_mapping_section, add_filter_section, add_merge_section,
    create_detail_sheet, merge_rules_text, transformation_details,
};
pub use summary::{SUMMARY_SHEET_NAME, create_summary_sheet};

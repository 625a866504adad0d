//! Counts and preview rows for a mapping export

use serde::Serialize;

use super::MappingExport;

/// Totals shown before a spreadsheet is generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MappingStatistics {
    pub object_map_count: usize,
    pub total_properties: usize,
    pub total_filters: usize,
}

/// One line of the object map preview table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectMapPreview {
    pub id: usize,
    pub name: String,
    pub source: String,
    pub target: String,
    pub properties: usize,
    pub filters: usize,
}

pub fn get_statistics(export: &MappingExport) -> MappingStatistics {
    MappingStatistics {
        object_map_count: export.objects_map.len(),
        total_properties: export.objects_map.iter().map(|o| o.properties_map.len()).sum(),
        total_filters: export.objects_map.iter().map(|o| o.objects_map_filter.len()).sum(),
    }
}

pub fn preview(export: &MappingExport) -> Vec<ObjectMapPreview> {
    export
        .indexed()
        .map(|(id, obj)| ObjectMapPreview {
            id,
            name: obj.name().unwrap_or("N/A").to_string(),
            source: obj.source_system().unwrap_or("N/A").to_string(),
            target: obj.target_system().unwrap_or("N/A").to_string(),
            properties: obj.properties_map.len(),
            filters: obj.objects_map_filter.len(),
        })
        .collect()
}

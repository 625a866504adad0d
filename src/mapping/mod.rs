//! Typed model of a Vertify mapping export
//!
//! The export is a JSON document with a top-level `ObjectsMap` array. Every
//! field below is optional in practice, so the model keeps absent values as
//! `None` (or empty vectors) and the accessors apply the documented defaults.

pub mod statistics;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

use crate::error::{MappingError, Result};

pub use statistics::{MappingStatistics, ObjectMapPreview, get_statistics, preview};

/// Move action used when a property mapping leaves it empty
pub const DEFAULT_MOVE_ACTION: &str = "OnAddUpdate";
/// Mapping type used when a property mapping omits it
pub const DEFAULT_MAPPING_TYPE: &str = "Map";

/// Root of a mapping export
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MappingExport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub objects_map: Vec<ObjectMap>,
}

/// One source-to-target object migration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectMap {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub source_system_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub target_system_name: Option<String>,
    #[serde(default, deserialize_with = "truthy_flag")]
    pub merge_record: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objects_map_merge_field: Vec<MergeField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objects_map_filter: Vec<FilterRule>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties_map: Vec<PropertyMapping>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MergeField {
    #[serde(default, deserialize_with = "scalar_text")]
    pub merge_field: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub source_property_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub target_property_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterRule {
    #[serde(default, deserialize_with = "scalar_text")]
    pub source_property_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub filter_operator: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub value: Option<String>,
}

/// Field-level mapping inside an object map
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyMapping {
    #[serde(default, deserialize_with = "scalar_text")]
    pub move_action: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "scalar_text")]
    pub mapping_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub target_property_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties_map_transformation: Vec<Transformation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transformation {
    #[serde(default, deserialize_with = "scalar_text")]
    pub source_property_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub rule_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub project_convert_list_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub date_format: Option<String>,
}

/// Known transformation rule kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleType {
    Value,
    Convert,
    Condition,
    Date,
    Other(String),
}

impl From<&str> for RuleType {
    fn from(s: &str) -> Self {
        match s {
            "Value" => RuleType::Value,
            "Convert" => RuleType::Convert,
            "Condition" => RuleType::Condition,
            "Date" => RuleType::Date,
            other => RuleType::Other(other.to_string()),
        }
    }
}

impl MappingExport {
    /// Parse raw bytes, keeping syntax errors apart from shape errors
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(MappingError::MalformedJson)?;
        Self::from_value(value)
    }

    /// Convert an already-parsed JSON tree
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(MappingError::InvalidStructure(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value).map_err(|e| MappingError::InvalidStructure(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.objects_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects_map.is_empty()
    }

    /// Object maps paired with their 1-based display index
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &ObjectMap)> {
        self.objects_map.iter().enumerate().map(|(i, obj)| (i + 1, obj))
    }
}

impl FromStr for MappingExport {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl ObjectMap {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source_system(&self) -> Option<&str> {
        self.source_system_name.as_deref()
    }

    pub fn target_system(&self) -> Option<&str> {
        self.target_system_name.as_deref()
    }

    /// Merge fields that actually apply, i.e. only when merging is switched on
    pub fn active_merge_fields(&self) -> &[MergeField] {
        if self.merge_record {
            &self.objects_map_merge_field
        } else {
            &[]
        }
    }
}

impl PropertyMapping {
    pub fn move_action(&self) -> &str {
        match self.move_action.as_deref() {
            Some(action) if !action.is_empty() => action,
            _ => DEFAULT_MOVE_ACTION,
        }
    }

    pub fn mapping_type(&self) -> &str {
        self.mapping_type.as_deref().unwrap_or(DEFAULT_MAPPING_TYPE)
    }

    pub fn target_property(&self) -> &str {
        self.target_property_name.as_deref().unwrap_or_default()
    }

    /// Only the first transformation is ever rendered
    pub fn first_transformation(&self) -> Option<&Transformation> {
        self.properties_map_transformation.first()
    }
}

impl Transformation {
    pub fn rule_type(&self) -> RuleType {
        RuleType::from(self.rule_type.as_deref().unwrap_or_default())
    }

    pub fn source_property(&self) -> &str {
        self.source_property_name.as_deref().unwrap_or_default()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Treat an explicit `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a switch that older exports write as a string or a number
///
/// Zero, `"false"`, `"0"`, `"no"` and empty text are off; any other scalar is on.
fn truthy_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => {
            let s = s.trim().to_ascii_lowercase();
            Ok(!matches!(s.as_str(), "" | "false" | "0" | "no"))
        }
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean, found {}",
            json_kind(&other)
        ))),
    }
}

/// Accept any JSON scalar as display text; exports are not strict about numbers vs strings
fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected text, found {}",
            json_kind(&other)
        ))),
    }
}

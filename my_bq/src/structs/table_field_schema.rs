use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Type {
    #[default]
    Unknown,
    String,
    Integer,
    Int64,
    Float,
    Float64,
    Date,
    Bool,
    Record,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    #[default]
    Nullable,
    Required,
    Repeated,
}

// https://cloud.google.com/bigquery/docs/reference/rest/v2/tables#TableFieldSchema
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableFieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Type,
    #[serde(default)]
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TableFieldSchema>>,
}

impl TableFieldSchema {
    pub fn new(name: impl Into<String>, field_type: Type) -> Self {
        TableFieldSchema {
            name: name.into(),
            field_type,
            ..Default::default()
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::error::BigQueryError;
use crate::structs::field_value::FieldValue;

// https://cloud.google.com/bigquery/docs/reference/rest/v2/jobs/getQueryResults
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(rename = "f", default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldValue>,
}

impl TableRow {
    pub fn of(fields: Vec<FieldValue>) -> Self {
        TableRow { fields }
    }

    pub fn field(&self, index: usize) -> Result<&FieldValue, BigQueryError> {
        self.fields.get(index).ok_or(BigQueryError::NotEnoughFields {
            expected: index + 1,
            found: self.fields.len(),
        })
    }
}

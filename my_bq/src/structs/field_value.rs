use serde::{Deserialize, Serialize};

use crate::error::BigQueryError;
use crate::structs::table_row::TableRow;

/// A single cell of a query result row. The API encodes every scalar as a
/// string under "v"; nested records come back as a row object and repeated
/// fields as an array of cells.
// https://cloud.google.com/bigquery/docs/reference/rest/v2/jobs/getQueryResults
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    #[serde(rename = "v", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Record(TableRow),
    Repeated(Vec<FieldValue>),
}

impl FieldValue {
    pub fn of(value: impl Into<String>) -> Self {
        FieldValue {
            value: Some(Value::String(value.into())),
        }
    }

    pub fn null() -> Self {
        FieldValue { value: None }
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_str(&self) -> Result<&str, BigQueryError> {
        match &self.value {
            Some(Value::String(val)) => Ok(val),
            other => Err(BigQueryError::UnexpectedFieldType(format!(
                "Expected string value, found {:?}",
                other
            ))),
        }
    }

    pub fn as_i64(&self) -> Result<i64, BigQueryError> {
        Ok(self.as_str()?.parse()?)
    }

    pub fn as_f64(&self) -> Result<f64, BigQueryError> {
        Ok(self.as_str()?.parse()?)
    }

    pub fn as_bool(&self) -> Result<bool, BigQueryError> {
        Ok(self.as_str()?.parse()?)
    }

    pub fn as_record(&self) -> Result<&TableRow, BigQueryError> {
        match &self.value {
            Some(Value::Record(row)) => Ok(row),
            other => Err(BigQueryError::UnexpectedFieldType(format!(
                "Expected record value, found {:?}",
                other
            ))),
        }
    }

    pub fn as_repeated(&self) -> Result<&[FieldValue], BigQueryError> {
        match &self.value {
            Some(Value::Repeated(values)) => Ok(values),
            other => Err(BigQueryError::UnexpectedFieldType(format!(
                "Expected repeated value, found {:?}",
                other
            ))),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum BigQueryError {
    #[error("Struct deserialization error due to schema mismatch: {0}")]
    RowSchemaMismatch(String),
    #[error("Unexpected field value type: {0}")]
    UnexpectedFieldType(String),
    #[error("Not enough fields in table row: expected at least {expected}, found {found}")]
    NotEnoughFields { expected: usize, found: usize },
    #[error("Failed to parse integer field value (error: {0})")]
    IntParseError(#[from] std::num::ParseIntError),
    #[error("Failed to parse float field value (error: {0})")]
    FloatParseError(#[from] std::num::ParseFloatError),
    #[error("Failed to parse bool field value (error: {0})")]
    BoolParseError(#[from] std::str::ParseBoolError),
}

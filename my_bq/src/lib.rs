pub mod error;
pub mod structs;

pub use error::BigQueryError;
pub use structs::error_proto::ErrorProto;
pub use structs::field_value::FieldValue;
pub use structs::job_id::JobId;
pub use structs::query_request::QueryRequest;
pub use structs::query_response::QueryResponse;
pub use structs::query_result::{QueryResult, QueryResultsPageFetcher};
pub use structs::table_row::TableRow;
pub use structs::table_schema::TableSchema;

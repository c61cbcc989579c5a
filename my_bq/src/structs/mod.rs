pub mod error_proto;
pub mod field_value;
pub mod job_id;
pub mod query_request;
pub mod query_response;
pub mod query_result;
pub mod table_field_schema;
pub mod table_row;
pub mod table_schema;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::BigQueryError;
use crate::structs::table_row::TableRow;
use crate::structs::table_schema::TableSchema;

/// Capability to fetch the page of results after this one. The actual
/// request, auth and cursor handling live behind the implementor.
pub trait QueryResultsPageFetcher: Send + Sync {
    fn next_page(&self) -> Result<Option<QueryResult>, BigQueryError>;
}

/// One page of rows produced by a query, together with the schema the rows
/// decode against and the cursor of the following page.
// https://cloud.google.com/bigquery/docs/reference/rest/v2/jobs/getQueryResults
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    schema: TableSchema,
    #[serde(default)]
    total_rows: u64,
    #[serde(default)]
    total_bytes_processed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<String>,
    #[serde(skip)]
    page_fetcher: Option<Arc<dyn QueryResultsPageFetcher>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    rows: Vec<TableRow>,
    #[serde(default)]
    cache_hit: bool,
}

impl QueryResult {
    pub fn builder() -> QueryResultBuilder {
        QueryResultBuilder::default()
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    pub fn total_bytes_processed(&self) -> u64 {
        self.total_bytes_processed
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn cache_hit(&self) -> bool {
        self.cache_hit
    }

    pub fn has_next_page(&self) -> bool {
        self.cursor.is_some()
    }

    /// Fetches the next page through the attached capability. Returns
    /// `Ok(None)` when this is the last page or no fetcher is attached.
    pub fn next_page(&self) -> Result<Option<QueryResult>, BigQueryError> {
        match &self.page_fetcher {
            Some(fetcher) => fetcher.next_page(),
            None => Ok(None),
        }
    }
}

// The page fetcher is a capability, not data: it stays out of equality,
// hashing and the debug rendering.
impl PartialEq for QueryResult {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema
            && self.total_rows == other.total_rows
            && self.total_bytes_processed == other.total_bytes_processed
            && self.cursor == other.cursor
            && self.rows == other.rows
            && self.cache_hit == other.cache_hit
    }
}

impl Eq for QueryResult {}

impl fmt::Debug for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryResult")
            .field("schema", &self.schema)
            .field("total_rows", &self.total_rows)
            .field("total_bytes_processed", &self.total_bytes_processed)
            .field("cursor", &self.cursor)
            .field("rows", &self.rows)
            .field("cache_hit", &self.cache_hit)
            .finish()
    }
}

#[derive(Default, Clone)]
pub struct QueryResultBuilder {
    schema: TableSchema,
    total_rows: u64,
    total_bytes_processed: u64,
    cursor: Option<String>,
    page_fetcher: Option<Arc<dyn QueryResultsPageFetcher>>,
    rows: Vec<TableRow>,
    cache_hit: bool,
}

impl QueryResultBuilder {
    pub fn schema(mut self, schema: TableSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn total_rows(mut self, total_rows: u64) -> Self {
        self.total_rows = total_rows;
        self
    }

    pub fn total_bytes_processed(mut self, total_bytes_processed: u64) -> Self {
        self.total_bytes_processed = total_bytes_processed;
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn page_fetcher(mut self, page_fetcher: Arc<dyn QueryResultsPageFetcher>) -> Self {
        self.page_fetcher = Some(page_fetcher);
        self
    }

    pub fn rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn cache_hit(mut self, cache_hit: bool) -> Self {
        self.cache_hit = cache_hit;
        self
    }

    pub fn build(self) -> QueryResult {
        QueryResult {
            schema: self.schema,
            total_rows: self.total_rows,
            total_bytes_processed: self.total_bytes_processed,
            cursor: self.cursor,
            page_fetcher: self.page_fetcher,
            rows: self.rows,
            cache_hit: self.cache_hit,
        }
    }
}

use serde::{Deserialize, Serialize};

// https://cloud.google.com/bigquery/docs/reference/rest/v2/jobs/query
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    // Actual SQL query text
    pub query: String,
    // Changes syntax of SQL query. See https://cloud.google.com/bigquery/docs/reference/legacy-sql for details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_legacy_sql: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl QueryRequest {
    pub fn of(query: impl Into<String>) -> Self {
        QueryRequest {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn builder(query: impl Into<String>) -> QueryRequestBuilder {
        QueryRequestBuilder {
            request: QueryRequest::of(query),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct QueryRequestBuilder {
    request: QueryRequest,
}

impl QueryRequestBuilder {
    pub fn use_legacy_sql(mut self, use_legacy_sql: bool) -> Self {
        self.request.use_legacy_sql = Some(use_legacy_sql);
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.request.max_results = Some(max_results);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.request.dry_run = Some(dry_run);
        self
    }

    pub fn build(self) -> QueryRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_round_trip() {
        let request = QueryRequest::builder("SELECT 1")
            .use_legacy_sql(false)
            .max_results(100)
            .dry_run(true)
            .build();
        assert_eq!(request.query, "SELECT 1");
        assert_eq!(request.use_legacy_sql, Some(false));
        assert_eq!(request.max_results, Some(100));
        assert_eq!(request.dry_run, Some(true));
    }

    #[test]
    fn unset_options_are_omitted_from_wire_shape() {
        let json = serde_json::to_value(QueryRequest::of("SELECT 1")).unwrap();
        assert_eq!(json, serde_json::json!({"query": "SELECT 1"}));
    }
}

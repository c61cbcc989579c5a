use serde::{Deserialize, Serialize};

use crate::structs::error_proto::ErrorProto;
use crate::structs::job_id::JobId;
use crate::structs::query_result::QueryResult;

/// The response to a query call: the identity and completion state of the
/// job that ran it, any in-flight execution errors, and the first page of
/// results once the job completes.
// https://cloud.google.com/bigquery/docs/reference/rest/v2/jobs/query
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<JobId>,
    #[serde(default)]
    job_complete: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    execution_errors: Vec<ErrorProto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<QueryResult>,
}

impl QueryResponse {
    pub fn builder() -> QueryResponseBuilder {
        QueryResponseBuilder::default()
    }

    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    pub fn job_id(&self) -> Option<&JobId> {
        self.job_id.as_ref()
    }

    pub fn job_complete(&self) -> bool {
        self.job_complete
    }

    pub fn execution_errors(&self) -> &[ErrorProto] {
        &self.execution_errors
    }

    pub fn has_errors(&self) -> bool {
        !self.execution_errors.is_empty()
    }

    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }
}

#[derive(Debug, Default, Clone)]
pub struct QueryResponseBuilder {
    response: QueryResponse,
}

impl QueryResponseBuilder {
    pub fn etag(mut self, etag: impl Into<String>) -> Self {
        self.response.etag = Some(etag.into());
        self
    }

    pub fn job_id(mut self, job_id: JobId) -> Self {
        self.response.job_id = Some(job_id);
        self
    }

    pub fn job_complete(mut self, job_complete: bool) -> Self {
        self.response.job_complete = job_complete;
        self
    }

    pub fn execution_errors(mut self, execution_errors: Vec<ErrorProto>) -> Self {
        self.response.execution_errors = execution_errors;
        self
    }

    pub fn result(mut self, result: QueryResult) -> Self {
        self.response.result = Some(result);
        self
    }

    pub fn build(self) -> QueryResponse {
        self.response
    }
}

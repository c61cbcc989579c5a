use serde::{Deserialize, Serialize};

// https://cloud.google.com/bigquery/docs/reference/rest/v2/JobReference
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobId {
    pub project_id: String,
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl JobId {
    pub fn of(project_id: impl Into<String>, job_id: impl Into<String>) -> Self {
        JobId {
            project_id: project_id.into(),
            job_id: job_id.into(),
            location: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_sets_project_and_job() {
        let job_id = JobId::of("project", "job");
        assert_eq!(job_id.project_id, "project");
        assert_eq!(job_id.job_id, "job");
        assert!(job_id.location.is_none());
        assert_eq!(job_id, JobId::of("project", "job"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(JobId::of("project", "job")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"projectId": "project", "jobId": "job"})
        );
    }
}

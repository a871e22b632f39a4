// ABOUTME: The status record persisted to the dashboard repository.
// ABOUTME: One JSON file per (service, environment) at status/<service>/<environment>.json.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deploy::{Deployment, Reported};
use crate::types::DeploymentState;

use super::error::MirrorError;

/// Top-level directory of status files in the dashboard branch.
pub const STATUS_DIR: &str = "status";

/// The dashboard file body.
///
/// Field order is the serialized key order and is part of the file format
/// dashboard readers depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub service: String,
    pub environment: String,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub version: String,
    pub status: DeploymentState,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<String>,
    pub repo: String,
    pub owner: String,
}

impl Deployment<Reported> {
    /// The dashboard record for this deployment at `timestamp`.
    pub fn status_record(&self, timestamp: DateTime<Utc>) -> StatusRecord {
        StatusRecord::from_deployment(self, timestamp)
    }
}

impl StatusRecord {
    /// Snapshot a reported deployment at `timestamp`.
    pub fn from_deployment(deployment: &Deployment<Reported>, timestamp: DateTime<Utc>) -> Self {
        let config = deployment.config();
        Self {
            service: config.service.clone(),
            environment: config.environment.clone(),
            sha: config.context.sha.clone(),
            git_ref: config.context.git_ref.clone(),
            version: config.version.clone(),
            status: config.state,
            timestamp,
            description: Some(deployment.status_description()),
            environment_url: config.environment_url.clone(),
            repo: config.context.repository.name().to_string(),
            owner: config.context.repository.owner().to_string(),
        }
    }

    /// Storage key of this record.
    pub fn path(&self) -> Result<String, MirrorError> {
        status_path(&self.service, &self.environment)
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn commit_message(&self) -> String {
        format!(
            "Update {}/{} status: {} ({})",
            self.service, self.environment, self.version, self.status
        )
    }
}

/// Path of the status file for a (service, environment) pair.
///
/// Each value must be a single path segment so that a pair maps to exactly
/// one file.
pub fn status_path(service: &str, environment: &str) -> Result<String, MirrorError> {
    check_segment("service", service)?;
    check_segment("environment", environment)?;
    Ok(format!("{}/{}/{}.json", STATUS_DIR, service, environment))
}

fn check_segment(field: &'static str, value: &str) -> Result<(), MirrorError> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(MirrorError::InvalidPath {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> StatusRecord {
        StatusRecord {
            service: "api".to_string(),
            environment: "staging".to_string(),
            sha: "0123456789abcdef0123456789abcdef01234567".to_string(),
            git_ref: "refs/heads/main".to_string(),
            version: "0123456".to_string(),
            status: DeploymentState::Success,
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 12, 30, 0).unwrap(),
            description: Some("api@0123456 deployed to staging".to_string()),
            environment_url: None,
            repo: "api".to_string(),
            owner: "acme".to_string(),
        }
    }

    #[test]
    fn path_is_keyed_by_service_and_environment() {
        assert_eq!(
            status_path("api", "staging").unwrap(),
            "status/api/staging.json"
        );
    }

    #[test]
    fn path_rejects_nested_or_empty_segments() {
        assert!(status_path("", "prod").is_err());
        assert!(status_path("api", "prod/eu").is_err());
        assert!(status_path("..", "prod").is_err());
        assert!(status_path("api", ".").is_err());
    }

    #[test]
    fn json_has_stable_key_order_and_indent() {
        let json = record().to_json().unwrap();
        let expected = r#"{
  "service": "api",
  "environment": "staging",
  "sha": "0123456789abcdef0123456789abcdef01234567",
  "ref": "refs/heads/main",
  "version": "0123456",
  "status": "success",
  "timestamp": "2026-10-19T12:30:00.000Z",
  "description": "api@0123456 deployed to staging",
  "repo": "api",
  "owner": "acme"
}
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn environment_url_is_written_when_present() {
        let mut rec = record();
        rec.environment_url = Some("https://staging.example.com".to_string());
        let json = rec.to_json().unwrap();
        assert!(json.contains("\"environment_url\": \"https://staging.example.com\""));
    }

    #[test]
    fn reads_back_what_it_writes() {
        let rec = record();
        let parsed: StatusRecord = serde_json::from_str(&rec.to_json().unwrap()).unwrap();
        assert_eq!(parsed, rec);
    }

    #[test]
    fn commit_message_names_service_environment_and_version() {
        assert_eq!(
            record().commit_message(),
            "Update api/staging status: 0123456 (success)"
        );
    }
}

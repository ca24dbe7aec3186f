use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, Labels};
use super::{Meta, SearchResponse};

/// SSH public key stored in the project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SshKeyDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    pub name: String,
    /// MD5 fingerprint of the public key.
    pub fingerprint: String,
    pub public_key: String,
    #[serde(default)]
    pub labels: Labels,
    pub created: Option<DateTime<Utc>>,
}

impl_identifiable!(SshKeyDetail);

/// Body of `POST /v1/ssh_keys`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreateSshKeyRequest {
    pub name: String,
    pub public_key: String,
    #[serde(skip_serializing_if = "Labels::is_empty", default)]
    pub labels: Labels,
}

impl CreateSshKeyRequest {
    pub fn new(name: &str, public_key: &str) -> Self {
        Self {
            name: name.to_string(),
            public_key: public_key.to_string(),
            labels: Labels::new(),
        }
    }

    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }
}

/// Response of `POST /v1/ssh_keys`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateSshKeyResponse {
    pub ssh_key: SshKeyDetail,
}

/// Response of `GET /v1/ssh_keys`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetSshKeysBySelectorResponse {
    pub ssh_keys: Vec<SshKeyDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetSshKeysBySelectorResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

//! Actions: asynchronous operations started by mutating requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, ResourceRef};
use super::{ErrorDetail, Meta, SearchResponse};

/// Progress record of an asynchronous operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    /// Operation name, e.g. `create_server` or `stop_server`.
    pub command: String,
    /// `running`, `success` or `error`.
    pub status: String,
    /// Completion percentage, 0 to 100.
    pub progress: i32,
    pub started: Option<DateTime<Utc>>,
    /// `None` while the action is still running.
    pub finished: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resources: Vec<ResourceRef>,
    /// Set when `status` is `error`.
    pub error: Option<ErrorDetail>,
}

impl ActionDetail {
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

impl_identifiable!(ActionDetail);

/// Response of endpoints returning one action, e.g. `DELETE /v1/servers/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionResponse {
    pub action: ActionDetail,
}

/// Response of `GET /v1/actions`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetActionsResponse {
    pub actions: Vec<ActionDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetActionsResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

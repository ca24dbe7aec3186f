//! Image types: snapshots, backups, and system images.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, Labels};
use super::{Meta, SearchResponse};

/// Image that servers can be created from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    /// `system`, `app`, `snapshot` or `backup`.
    #[serde(rename = "type", default = "default_image_type")]
    pub image_type: String,
    /// `available`, `creating` or `unavailable`.
    #[serde(default = "default_image_status")]
    pub status: String,
    /// Unique identifier for system images; `None` for snapshots.
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub os_flavor: Option<String>,
    pub architecture: Option<String>,
    #[serde(default)]
    pub labels: Labels,
}

fn default_image_type() -> String {
    "snapshot".to_string()
}

fn default_image_status() -> String {
    "available".to_string()
}

impl_identifiable!(ImageDetail);

/// Response of `GET /v1/images`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetImagesBySelectorResponse {
    pub images: Vec<ImageDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetImagesBySelectorResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Response of `GET /v1/images/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetImageByIdResponse {
    pub image: ImageDetail,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, Labels, ResourceId};
use super::{LocationDetail, Meta, SearchResponse};

/// Block storage volume.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VolumeDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    pub name: String,
    /// Size in GB.
    pub size: i64,
    /// ID of the server the volume is attached to, `None` when detached.
    pub server: Option<ResourceId>,
    pub location: Option<LocationDetail>,
    /// Device path on the server, e.g. `/dev/disk/by-id/scsi-0HC_Volume_4711`.
    pub linux_device: Option<String>,
    /// `creating` or `available`.
    pub status: String,
    /// Filesystem the volume was formatted with, if any.
    pub format: Option<String>,
    #[serde(default)]
    pub labels: Labels,
    pub created: Option<DateTime<Utc>>,
}

impl_identifiable!(VolumeDetail);

/// Response of `GET /v1/volumes`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetVolumesResponse {
    pub volumes: Vec<VolumeDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetVolumesResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Response of `GET /v1/volumes/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetVolumeByIdResponse {
    pub volume: VolumeDetail,
}

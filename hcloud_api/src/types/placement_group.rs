use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, Labels, ResourceId};
use super::{Meta, SearchResponse};

/// Group of servers the scheduler places according to a strategy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlacementGroupDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    pub name: String,
    /// Placement strategy; currently only `spread`.
    #[serde(rename = "type")]
    pub group_type: String,
    /// IDs of member servers.
    #[serde(default)]
    pub servers: Vec<ResourceId>,
    #[serde(default)]
    pub labels: Labels,
    pub created: Option<DateTime<Utc>>,
}

impl_identifiable!(PlacementGroupDetail);

/// Response of `GET /v1/placement_groups`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetPlacementGroupsResponse {
    pub placement_groups: Vec<PlacementGroupDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetPlacementGroupsResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Response of `GET /v1/placement_groups/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetPlacementGroupByIdResponse {
    pub placement_group: PlacementGroupDetail,
}

//! Private network types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, Labels, ResourceId};
use super::{Meta, SearchResponse};

/// Private network servers can be attached to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,
    pub name: String,
    /// IPv4 prefix of the whole network, e.g. `10.0.0.0/16`.
    pub ip_range: String,
    #[serde(default)]
    pub subnets: Vec<SubnetDetail>,
    /// IDs of servers attached to this network.
    #[serde(default)]
    pub servers: Vec<ResourceId>,
    #[serde(default)]
    pub labels: Labels,
    pub created: Option<DateTime<Utc>>,
}

/// Subnet carved out of a [`NetworkDetail`] IP range.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubnetDetail {
    /// `cloud`, `server` or `vswitch`.
    #[serde(rename = "type")]
    pub subnet_type: String,
    pub ip_range: Option<String>,
    pub network_zone: String,
    pub gateway: Option<String>,
}

impl_identifiable!(NetworkDetail);

/// Response of `GET /v1/networks`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetNetworksBySelectorResponse {
    pub networks: Vec<NetworkDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetNetworksBySelectorResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Response of `GET /v1/networks/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetNetworkByIdResponse {
    pub network: NetworkDetail,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, Labels, ResourceId};
use super::{DatacenterDetail, Meta, SearchResponse};

/// Reverse DNS entry for one IP address.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DnsPtr {
    pub ip: String,
    pub dns_ptr: String,
}

/// Primary IP that can be assigned to a server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PrimaryIpDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,

    /// ID of the resource the Primary IP is assigned to, `None` if it is not assigned at all.
    pub assignee_id: Option<ResourceId>,

    /// Resource type the Primary IP can be assigned to.
    pub assignee_type: String,

    /// Delete this Primary IP when the resource it is assigned to is deleted.
    #[serde(default)]
    pub auto_delete: bool,

    /// Whether the IP is blocked.
    #[serde(default)]
    pub blocked: bool,

    pub created: Option<DateTime<Utc>>,

    /// Datacenter this Primary IP is located at.
    pub datacenter: Option<DatacenterDetail>,

    #[serde(default)]
    pub dns_ptr: Vec<DnsPtr>,

    /// IP address (IPv4) or network (IPv6).
    pub ip: String,

    #[serde(default)]
    pub labels: Labels,

    /// Unique per project.
    pub name: String,

    /// `ipv4` or `ipv6`.
    #[serde(rename = "type")]
    pub ip_type: String,
}

impl_identifiable!(PrimaryIpDetail);

/// Response of `GET /v1/primary_ips`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetAllPrimaryIpsResponse {
    pub primary_ips: Vec<PrimaryIpDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetAllPrimaryIpsResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

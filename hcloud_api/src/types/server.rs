//! Server types and the request/response bodies of the `/v1/servers` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{impl_identifiable, IdentifiableResource, Labels, ResourceId};
use super::{
    ActionDetail, DatacenterDetail, DnsPtr, ImageDetail, Meta, PlacementGroupDetail,
    SearchResponse, ServerType,
};

/// Virtual server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerDetail {
    #[serde(flatten)]
    pub resource: IdentifiableResource,

    /// Unique per project, a valid hostname.
    pub name: String,

    /// `running`, `initializing`, `starting`, `stopping`, `off`, `deleting`,
    /// `migrating`, `rebuilding` or `unknown`.
    pub status: String,

    pub created: DateTime<Utc>,

    #[serde(default)]
    pub public_net: Option<PublicNet>,

    #[serde(default)]
    pub private_net: Vec<PrivateNet>,

    #[serde(default)]
    pub server_type: Option<ServerType>,

    #[serde(default)]
    pub datacenter: Option<DatacenterDetail>,

    /// Image the server was created from. `None` if that image was deleted.
    #[serde(default)]
    pub image: Option<ImageDetail>,

    #[serde(default)]
    pub labels: Labels,

    #[serde(default)]
    pub placement_group: Option<PlacementGroupDetail>,

    /// IDs of attached volumes.
    #[serde(default)]
    pub volumes: Vec<ResourceId>,
}

impl ServerDetail {
    /// Public IPv4 address, if the server has one.
    pub fn public_ipv4(&self) -> Option<&str> {
        self.public_net
            .as_ref()
            .and_then(|net| net.ipv4.as_ref())
            .map(|ipv4| ipv4.ip.as_str())
    }
}

impl_identifiable!(ServerDetail);

/// Public network configuration of a server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PublicNet {
    pub ipv4: Option<Ipv4Detail>,
    pub ipv6: Option<Ipv6Detail>,
    #[serde(default)]
    pub firewalls: Vec<AppliedFirewall>,
}

/// Public IPv4 address of a server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ipv4Detail {
    /// ID of the backing Primary IP.
    pub id: Option<ResourceId>,
    pub ip: String,
    #[serde(default)]
    pub blocked: bool,
    pub dns_ptr: Option<String>,
}

/// Public IPv6 network of a server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ipv6Detail {
    pub id: Option<ResourceId>,
    pub ip: String,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub dns_ptr: Vec<DnsPtr>,
}

/// Firewall applied to a server's public interface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppliedFirewall {
    pub id: ResourceId,
    /// `applied` or `pending`.
    pub status: String,
}

/// Attachment of a server to a private network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PrivateNet {
    pub network: ResourceId,
    pub ip: String,
    #[serde(default)]
    pub alias_ips: Vec<String>,
    pub mac_address: Option<String>,
}

/// Public network options when creating a server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PublicNetRequest {
    pub enable_ipv4: bool,
    pub enable_ipv6: bool,
    /// ID of an existing IPv4 Primary IP to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<ResourceId>,
    /// ID of an existing IPv6 Primary IP to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<ResourceId>,
}

/// Reference to a firewall in [`CreateServerRequest`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FirewallRef {
    pub firewall: ResourceId,
}

/// Body of `POST /v1/servers`. Unset optional fields are left out of the JSON body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreateServerRequest {
    pub name: String,
    /// Server type ID or name.
    pub server_type: String,
    /// Image ID or name.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Mutually exclusive with `location`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    /// SSH key IDs or names.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ssh_keys: Vec<String>,
    #[serde(skip_serializing_if = "Labels::is_empty", default)]
    pub labels: Labels,
    /// Network IDs to attach the server to.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub networks: Vec<ResourceId>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub firewalls: Vec<FirewallRef>,
    /// Volume IDs to attach.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub volumes: Vec<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<ResourceId>,
    /// Cloud-init user data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_after_create: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automount: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_net: Option<PublicNetRequest>,
}

impl CreateServerRequest {
    pub fn new(name: &str, server_type: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            server_type: server_type.to_string(),
            image: image.to_string(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_datacenter(mut self, datacenter: &str) -> Self {
        self.datacenter = Some(datacenter.to_string());
        self
    }

    pub fn with_ssh_key(mut self, ssh_key: &str) -> Self {
        self.ssh_keys.push(ssh_key.to_string());
        self
    }

    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_network(mut self, network_id: ResourceId) -> Self {
        self.networks.push(network_id);
        self
    }

    pub fn with_firewall(mut self, firewall_id: ResourceId) -> Self {
        self.firewalls.push(FirewallRef {
            firewall: firewall_id,
        });
        self
    }

    pub fn with_volume(mut self, volume_id: ResourceId) -> Self {
        self.volumes.push(volume_id);
        self
    }

    pub fn with_placement_group(mut self, placement_group_id: ResourceId) -> Self {
        self.placement_group = Some(placement_group_id);
        self
    }

    pub fn with_user_data(mut self, user_data: &str) -> Self {
        self.user_data = Some(user_data.to_string());
        self
    }

    pub fn with_start_after_create(mut self, start: bool) -> Self {
        self.start_after_create = Some(start);
        self
    }

    pub fn with_public_net(mut self, public_net: PublicNetRequest) -> Self {
        self.public_net = Some(public_net);
        self
    }
}

/// Response of `POST /v1/servers`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateServerResponse {
    pub server: ServerDetail,
    pub action: ActionDetail,
    #[serde(default)]
    pub next_actions: Vec<ActionDetail>,
    /// Only set when no SSH key was given.
    pub root_password: Option<String>,
}

/// Response of `GET /v1/servers/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetServerByIdResponse {
    pub server: ServerDetail,
}

/// Response of `GET /v1/servers`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetServersBySelectorResponse {
    pub servers: Vec<ServerDetail>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl SearchResponse for GetServersBySelectorResponse {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}
